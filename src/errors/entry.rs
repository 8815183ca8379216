use serde_json::{json, Value};

use super::text::Text;
use crate::config::ErrorConfig;

/// Wire-level representation of one leaf validation failure, as produced by
/// the configured error builder.
pub type ErrorEntry = Value;

/// Converts one `(message, error_code)` pair into its wire shape.
pub type ErrorBuilder = fn(message: String, error_code: Option<String>) -> ErrorEntry;

/// Default builder: the literal pair, with a `null` code when absent.
pub fn default_error_builder(message: String, error_code: Option<String>) -> ErrorEntry {
    json!([message, error_code])
}

/// Build one entry for a single message via the configured builder.
///
/// # Panics
///
/// When `require_error_codes` is enabled and no `error_code` is given. That
/// is a contract violation in the calling code, not a request-time failure.
pub fn build_error_entry(
    config: &ErrorConfig,
    message: impl Into<Text>,
    error_code: Option<&str>,
) -> ErrorEntry {
    if config.require_error_codes {
        assert!(
            error_code.is_some(),
            "an `error_code` is required for single errors when `require_error_codes` is enabled"
        );
    }
    (config.error_builder)(message.into().resolve(), error_code.map(str::to_owned))
}

/// A field-level validation failure reported by an input-checking layer:
/// one classifier code shared by one or more messages.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub code: Option<String>,
    pub messages: Vec<Text>,
}

impl FieldError {
    pub fn new(code: Option<&str>, messages: Vec<Text>) -> Self {
        Self {
            code: code.map(str::to_owned),
            messages,
        }
    }
}

/// One entry per message, all sharing the field's classifier code
/// ("invalid" when the field did not set one).
pub fn entries_from_field_error(config: &ErrorConfig, field_error: &FieldError) -> Vec<ErrorEntry> {
    let code = field_error.code.as_deref().unwrap_or("invalid");
    field_error
        .messages
        .iter()
        .map(|message| build_error_entry(config, message.clone(), Some(code)))
        .collect()
}
