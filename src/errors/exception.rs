use std::io;

use thiserror::Error;

use super::detail::Detail;
use super::entry::build_error_entry;
use super::text::Text;
use crate::config::ErrorConfig;

/// Request-fatal error conditions raised inside the handling pipeline.
///
/// Each variant fixes an HTTP status code and carries a human-readable
/// detail; the boundary layer reads both to emit the wire response. An
/// instance is built where the failure is detected, propagated up and
/// consumed exactly once, never mutated or reused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Catch-all server fault.
    #[error("{detail}")]
    Server { detail: String },

    /// Structured validation failure; `detail` is always a list or mapping
    /// of nested entries, never a bare string.
    #[error("{detail}")]
    Validation {
        detail: Detail,
        error_code: Option<String>,
    },

    /// Malformed request body.
    #[error("{detail}")]
    Parse { detail: String },

    /// Credentials were provided but rejected.
    #[error("{detail}")]
    AuthenticationFailed { detail: String },

    /// No credentials were provided.
    #[error("{detail}")]
    NotAuthenticated { detail: String },

    #[error("{detail}")]
    PermissionDenied { detail: String },

    #[error("{detail}")]
    NotFound { detail: String },

    #[error("{detail}")]
    MethodNotAllowed { detail: String },

    #[error("{detail}")]
    NotAcceptable {
        detail: String,
        available_renderers: Option<Vec<String>>,
    },

    #[error("{detail}")]
    UnsupportedMediaType { detail: String },

    #[error("{detail}")]
    Throttled { detail: String, wait: Option<u64> },
}

fn resolve_or(detail: Option<Text>, default: &str) -> String {
    match detail {
        Some(text) => text.resolve(),
        None => default.to_owned(),
    }
}

impl ApiError {
    pub fn server(detail: Option<Text>) -> Self {
        Self::Server {
            detail: resolve_or(detail, "A server error occurred."),
        }
    }

    /// Coerce `detail` into the uniform nested representation.
    ///
    /// A single message is wrapped as a one-element list holding the entry
    /// built from `(detail, error_code)`; this is the only path where
    /// `error_code` is attached to a leaf. A compound detail keeps its
    /// container shape, list order and key association recursively while
    /// every deferred leaf is forced to a concrete string.
    ///
    /// # Panics
    ///
    /// When `require_error_codes` is enabled and a compound detail is passed
    /// together with an `error_code`. The check applies to this call only,
    /// never to nested leaves.
    pub fn validation(
        config: &ErrorConfig,
        detail: impl Into<Detail>,
        error_code: Option<&str>,
    ) -> Self {
        let detail = detail.into();
        let detail = if detail.is_compound() {
            if config.require_error_codes {
                assert!(
                    error_code.is_none(),
                    "the `error_code` argument must not be set for compound errors when \
                     `require_error_codes` is enabled"
                );
            }
            detail.resolve()
        } else {
            let entry = match detail {
                Detail::Message(text) => build_error_entry(config, text, error_code),
                Detail::Entry(entry) => entry,
                compound => unreachable!("compound detail handled above: {compound:?}"),
            };
            Detail::List(vec![Detail::Entry(entry)])
        };

        Self::Validation {
            detail,
            error_code: error_code.map(str::to_owned),
        }
    }

    pub fn parse_error(detail: Option<Text>) -> Self {
        Self::Parse {
            detail: resolve_or(detail, "Malformed request."),
        }
    }

    pub fn authentication_failed(detail: Option<Text>) -> Self {
        Self::AuthenticationFailed {
            detail: resolve_or(detail, "Incorrect authentication credentials."),
        }
    }

    pub fn not_authenticated(detail: Option<Text>) -> Self {
        Self::NotAuthenticated {
            detail: resolve_or(detail, "Authentication credentials were not provided."),
        }
    }

    pub fn permission_denied(detail: Option<Text>) -> Self {
        Self::PermissionDenied {
            detail: resolve_or(detail, "You do not have permission to perform this action."),
        }
    }

    pub fn not_found(detail: Option<Text>) -> Self {
        Self::NotFound {
            detail: resolve_or(detail, "Not found."),
        }
    }

    /// The rejected method fills the default template unless an explicit
    /// detail overrides it entirely.
    pub fn method_not_allowed(method: &str, detail: Option<Text>) -> Self {
        Self::MethodNotAllowed {
            detail: match detail {
                Some(text) => text.resolve(),
                None => format!("Method \"{method}\" not allowed."),
            },
        }
    }

    pub fn not_acceptable(detail: Option<Text>, available_renderers: Option<Vec<String>>) -> Self {
        Self::NotAcceptable {
            detail: resolve_or(detail, "Could not satisfy the request Accept header."),
            available_renderers,
        }
    }

    pub fn unsupported_media_type(media_type: &str, detail: Option<Text>) -> Self {
        Self::UnsupportedMediaType {
            detail: match detail {
                Some(text) => text.resolve(),
                None => format!("Unsupported media type \"{media_type}\" in request."),
            },
        }
    }

    /// `wait` is rounded up to whole seconds and, when present, appended to
    /// the message as an availability hint, pluralized by the rounded value.
    pub fn throttled(wait: Option<f64>, detail: Option<Text>) -> Self {
        let mut message = resolve_or(detail, "Request was throttled.");
        let wait = wait.map(|seconds| seconds.ceil() as u64);
        if let Some(wait) = wait {
            let unit = if wait == 1 { "second" } else { "seconds" };
            message.push_str(&format!(" Expected available in {wait} {unit}."));
        }
        Self::Throttled {
            detail: message,
            wait,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Server { .. } => 500,
            Self::Validation { .. } => 400,
            Self::Parse { .. } => 400,
            Self::AuthenticationFailed { .. } => 401,
            Self::NotAuthenticated { .. } => 401,
            Self::PermissionDenied { .. } => 403,
            Self::NotFound { .. } => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::NotAcceptable { .. } => 406,
            Self::UnsupportedMediaType { .. } => 415,
            Self::Throttled { .. } => 429,
        }
    }

    /// JSON-serializable detail payload for the response body.
    pub fn detail_value(&self) -> serde_json::Value {
        match self {
            Self::Validation { detail, .. } => {
                serde_json::to_value(detail).unwrap_or(serde_json::Value::Null)
            }
            Self::Server { detail }
            | Self::Parse { detail }
            | Self::AuthenticationFailed { detail }
            | Self::NotAuthenticated { detail }
            | Self::PermissionDenied { detail }
            | Self::NotFound { detail }
            | Self::MethodNotAllowed { detail }
            | Self::NotAcceptable { detail, .. }
            | Self::UnsupportedMediaType { detail }
            | Self::Throttled { detail, .. } => serde_json::Value::String(detail.clone()),
        }
    }
}

// Host-platform not-found and permission-denied signals map onto their HTTP
// counterparts at the boundary; anything else is a generic server fault.
impl From<io::Error> for ApiError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::not_found(None),
            io::ErrorKind::PermissionDenied => Self::permission_denied(None),
            _ => Self::server(None),
        }
    }
}
