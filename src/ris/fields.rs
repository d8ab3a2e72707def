//! The rendered RIS field bag.

use std::collections::BTreeMap;

use serde::Serialize;

/// A rendered RIS request: wire tags mapped to their string values.
///
/// Produced by the typed builders; each tag is set exactly once per
/// submission. Serializes directly as the form body of a RIS POST.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fields(BTreeMap<String, String>);

impl Fields {
    /// Creates an empty field bag.
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets a wire tag.
    pub(crate) fn set<K: Into<String>, V: Into<String>>(&mut self, tag: K, value: V) {
        drop(self.0.insert(tag.into(), value.into()));
    }

    /// Returns the value of a wire tag, if set.
    #[inline]
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.0.get(tag).map(String::as_str)
    }

    /// Number of tags set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no tag is set.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(tag, value)` pairs in tag order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
