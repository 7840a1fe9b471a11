//! Web API argument mapping

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A single argument value.
///
/// The Web API accepts strings and integers; both are rendered as text on
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// A string argument.
    Text(String),
    /// An integer argument.
    Integer(i64),
}

impl ArgValue {
    /// Returns the string value, if this is a text argument.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Integer(_) => None,
        }
    }

    /// Returns the integer value, if this is an integer argument.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Text(_) => None,
            Self::Integer(value) => Some(*value),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for ArgValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Integer(value) => serializer.serialize_i64(*value),
        }
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for ArgValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

/// Ordered, key-unique argument mapping sent with a Web API call.
///
/// Absent optional values are never stored, so nothing is ever sent as a
/// literal `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    entries: Vec<(&'static str, ArgValue)>,
}

impl Args {
    /// Creates an empty argument mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an argument, returning the mapping for chaining.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<ArgValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds an argument only when a value is present.
    #[must_use]
    pub fn with_opt<V: Into<ArgValue>>(mut self, key: &'static str, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Sets an argument. An existing value for `key` is replaced in place.
    pub fn insert(&mut self, key: &'static str, value: impl Into<ArgValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Sets an argument when `value` is `Some`; does nothing otherwise.
    pub fn insert_opt<V: Into<ArgValue>>(&mut self, key: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Gets an argument by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Returns an iterator over key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ArgValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Returns the number of arguments.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no arguments.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Args {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_keeps_order() {
        let args = Args::new()
            .with("count", 100u32)
            .with("page", 1u32)
            .with("cursor", "abc");

        assert_eq!(args.keys().collect::<Vec<_>>(), vec!["count", "page", "cursor"]);
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut args = Args::new().with("channel", "C1").with("timestamp", "1.0");
        args.insert("channel", "C2");

        assert_eq!(args.len(), 2);
        assert_eq!(args.get("channel"), Some(&ArgValue::Text("C2".to_string())));
        assert_eq!(args.keys().next(), Some("channel"));
    }

    #[test]
    fn test_absent_optional_is_omitted() {
        let args = Args::new()
            .with("count", 100u32)
            .with_opt::<String>("cursor", None);

        assert!(!args.contains_key("cursor"));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_value_accessors() {
        let text = ArgValue::from("F1");
        let number = ArgValue::from(50u32);

        assert_eq!(text.as_text(), Some("F1"));
        assert_eq!(text.as_integer(), None);
        assert_eq!(number.as_integer(), Some(50));
        assert_eq!(number.to_string(), "50");
    }

    #[test]
    fn test_serializes_as_json_object() {
        let args = Args::new().with("count", 50u32).with("cursor", "abc");
        let json = serde_json::to_value(&args).unwrap();

        assert_eq!(json, serde_json::json!({"count": 50, "cursor": "abc"}));
    }
}
