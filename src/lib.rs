// Library exports
pub mod config;
pub mod errors;

pub use config::ErrorConfig;
pub use errors::{ApiError, Detail, ErrorEntry, FieldError, Text};
