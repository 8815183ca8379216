use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

use super::entry::ErrorEntry;
use super::text::Text;

/// Nested validation detail: a single message, or an arbitrarily nested
/// structure of lists, tuples and field mappings with messages at the leaves.
///
/// Mappings are backed by a plain pair list so key association and insertion
/// order survive normalization and serialization unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    /// One leaf message, possibly still deferred.
    Message(Text),
    /// One wire-ready entry produced by the configured error builder.
    Entry(ErrorEntry),
    List(Vec<Detail>),
    /// Fixed-width grouping, kept distinct from `List` through normalization.
    Tuple(Vec<Detail>),
    Map(Vec<(String, Detail)>),
}

impl Detail {
    /// Lists, tuples and mappings; everything a single message is not.
    pub fn is_compound(&self) -> bool {
        matches!(self, Self::List(_) | Self::Tuple(_) | Self::Map(_))
    }

    /// Force every deferred leaf into a concrete string, preserving the
    /// container shape exactly: lists stay lists, tuples stay tuples,
    /// mappings keep their key order.
    pub fn resolve(self) -> Detail {
        match self {
            Self::Message(text) => Self::Message(Text::Plain(text.resolve())),
            Self::Entry(entry) => Self::Entry(entry),
            Self::List(items) => Self::List(items.into_iter().map(Detail::resolve).collect()),
            Self::Tuple(items) => Self::Tuple(items.into_iter().map(Detail::resolve).collect()),
            Self::Map(fields) => Self::Map(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, value.resolve()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Detail {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Message(text) => serializer.serialize_str(&text.resolve()),
            Self::Entry(entry) => entry.serialize(serializer),
            Self::List(items) | Self::Tuple(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl From<&str> for Detail {
    fn from(message: &str) -> Self {
        Self::Message(Text::from(message))
    }
}

impl From<String> for Detail {
    fn from(message: String) -> Self {
        Self::Message(Text::from(message))
    }
}

impl From<Text> for Detail {
    fn from(text: Text) -> Self {
        Self::Message(text)
    }
}

impl From<Vec<Detail>> for Detail {
    fn from(items: Vec<Detail>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<(String, Detail)>> for Detail {
    fn from(fields: Vec<(String, Detail)>) -> Self {
        Self::Map(fields)
    }
}
