use anyhow::{Context, Result};
use std::env;
use std::fmt;

use crate::errors::entry::{default_error_builder, ErrorBuilder};

/// Process-wide configuration for the error model.
///
/// Built once at startup and never mutated afterwards; it is `Copy`, so
/// request handlers can share it freely without coordination.
#[derive(Clone, Copy)]
pub struct ErrorConfig {
    /// Converts each leaf `(message, error_code)` pair into its wire shape.
    pub error_builder: ErrorBuilder,
    /// Require every leaf validation error to carry a classifier code.
    pub require_error_codes: bool,
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self {
            error_builder: default_error_builder,
            require_error_codes: false,
        }
    }
}

impl fmt::Debug for ErrorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorConfig")
            .field("require_error_codes", &self.require_error_codes)
            .finish_non_exhaustive()
    }
}

impl ErrorConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(ErrorConfig {
            require_error_codes: env::var("REQUIRE_ERROR_CODES")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .context("REQUIRE_ERROR_CODES must be a boolean")?,
            ..Self::default()
        })
    }
}
