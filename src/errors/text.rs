use std::fmt;
use std::sync::Arc;

/// A message whose final string may not be known until it is read.
///
/// Translation catalogs hand out placeholders that only render once the
/// active locale is picked, so error details can hold either a plain string
/// or a deferred producer. `resolve` forces the concrete string; nothing
/// deferred is allowed to leave the error model unresolved.
#[derive(Clone)]
pub enum Text {
    Plain(String),
    Deferred(Arc<dyn Fn() -> String + Send + Sync>),
}

impl Text {
    pub fn deferred<F>(producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(producer))
    }

    /// Force the message into a concrete string.
    pub fn resolve(&self) -> String {
        match self {
            Self::Plain(message) => message.clone(),
            Self::Deferred(producer) => producer(),
        }
    }
}

impl From<&str> for Text {
    fn from(message: &str) -> Self {
        Self::Plain(message.to_owned())
    }
}

impl From<String> for Text {
    fn from(message: String) -> Self {
        Self::Plain(message)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(message) => f.debug_tuple("Plain").field(message).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

// Deferred producers compare by what they would render.
impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.resolve() == other.resolve()
    }
}

impl Eq for Text {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_resolves_to_itself() {
        let text = Text::from("Not found.");
        assert_eq!(text.resolve(), "Not found.");
    }

    #[test]
    fn test_deferred_resolves_lazily() {
        let text = Text::deferred(|| format!("value {} is invalid", 42));
        assert_eq!(text.resolve(), "value 42 is invalid");
    }

    #[test]
    fn test_deferred_compares_by_rendered_string() {
        let deferred = Text::deferred(|| "same".to_string());
        assert_eq!(deferred, Text::from("same"));
    }
}
