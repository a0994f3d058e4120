//! FEEL contexts - insertion ordered key/value maps

use crate::value::FeelValue;
use indexmap::IndexMap;
use std::fmt;

/// FEEL context
///
/// Entries keep insertion order. Equality compares the key/value sets and
/// ignores order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeelContext {
    entries: IndexMap<String, FeelValue>,
}

impl FeelContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from entries; a repeated key keeps the last value
    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, FeelValue)>) -> Self {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Get an entry value
    pub fn get(&self, key: &str) -> Option<&FeelValue> {
        self.entries.get(key)
    }

    /// Add or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, value: FeelValue) {
        self.entries.insert(key.into(), value);
    }

    /// Builder-style [`Self::insert`]
    pub fn with(mut self, key: impl Into<String>, value: FeelValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FeelValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl fmt::Display for FeelContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: ")?;
            value.fmt_nested(f)?;
        }
        f.write_str("}")
    }
}
