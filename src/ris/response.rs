//! Parsed RIS response payload.

use std::collections::BTreeMap;

/// A parsed RIS response.
///
/// RIS answers with a flat `KEY=VALUE` line format; this type keeps the
/// full key-value map and exposes typed accessors over the handful of
/// keys the adapter cares about. It is read-only once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RisResponse {
    /// All response keys in wire order-insensitive form.
    fields: BTreeMap<String, String>,
}

impl RisResponse {
    /// Parses a `KEY=VALUE` response body.
    ///
    /// Lines without an `=` separator are ignored; a key's last
    /// occurrence wins.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let mut fields = BTreeMap::new();
        for line in body.lines() {
            if let Some((key, value)) = line.split_once('=') {
                drop(fields.insert(key.trim().to_owned(), value.to_owned()));
            }
        }
        Self { fields }
    }

    /// Returns a raw response value by key.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Vendor error messages (`ERROR_COUNT` / `ERROR_n`), in wire order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.indexed("ERROR_COUNT", "ERROR_")
    }

    /// Vendor warning messages (`WARNING_COUNT` / `WARNING_n`), in wire
    /// order.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.indexed("WARNING_COUNT", "WARNING_")
    }

    /// Collects `{prefix}{0..count}` values for a counted key group.
    fn indexed(&self, count_key: &str, prefix: &str) -> Vec<String> {
        let count = self
            .get(count_key)
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);
        (0..count)
            .filter_map(|i| self.get(&format!("{prefix}{i}")))
            .map(str::to_owned)
            .collect()
    }

    /// The vendor's risk score (`SCOR`), passed through unclamped.
    ///
    /// Missing or unparsable scores read as `0`.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.get("SCOR")
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0)
    }

    /// The vendor-assigned transaction identifier (`TRAN`).
    #[inline]
    #[must_use]
    pub fn transaction_id(&self) -> &str {
        self.get("TRAN").unwrap_or_default()
    }

    /// The full response as a key-value map.
    #[inline]
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}
