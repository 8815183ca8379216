//! Structured error signaling for the request pipeline

pub mod detail;
pub mod entry;
pub mod exception;
pub mod response;
pub mod text;

pub use detail::Detail;
pub use entry::{
    build_error_entry, default_error_builder, entries_from_field_error, ErrorBuilder, ErrorEntry,
    FieldError,
};
pub use exception::ApiError;
pub use text::Text;
