//! Typed builder for RIS mode-X updates.

use super::fields::Fields;
use super::{ExecuteError, RIS_VERSION};
use crate::config::Config;

/// Typed builder for a mode-X update against an already-scored
/// transaction.
///
/// Updates carry no order payload; they bind a session and the vendor's
/// transaction identifier to report a final outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    /// Session identifier (`SESS`).
    session_id: Option<String>,
    /// Vendor transaction identifier (`TRAN`).
    transaction_id: Option<String>,
    /// Whether the merchant acknowledges review (`MACK`).
    mack: bool,
}

impl Update {
    /// Creates an empty update.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session identifier.
    #[inline]
    #[must_use]
    pub fn session_id<T: Into<String>>(mut self, id: T) -> Self {
        self.session_id = Some(id.into());
        self
    }

    /// Sets the vendor transaction identifier.
    #[inline]
    #[must_use]
    pub fn transaction_id<T: Into<String>>(mut self, id: T) -> Self {
        self.transaction_id = Some(id.into());
        self
    }

    /// Sets the merchant-acknowledgement flag.
    #[inline]
    #[must_use]
    pub const fn mack(mut self, mack: bool) -> Self {
        self.mack = mack;
        self
    }

    /// Renders the wire field bag for this update.
    ///
    /// # Errors
    ///
    /// Returns a validation-kind [`ExecuteError`] if the merchant id,
    /// session id, or transaction id is missing.
    pub fn to_fields(&self, config: &Config) -> Result<Fields, ExecuteError> {
        if config.merchant_id().is_empty() {
            return Err(ExecuteError::validation(
                "Required field [MERC] missing for mode [X]",
            ));
        }
        let session_id = self
            .session_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ExecuteError::validation("Required field [SESS] missing for mode [X]")
            })?;
        let transaction_id = self
            .transaction_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ExecuteError::validation("Required field [TRAN] missing for mode [X]")
            })?;

        let mut fields = Fields::new();
        fields.set("MERC", config.merchant_id());
        fields.set("VERS", RIS_VERSION);
        fields.set("PENC", "KHASH");
        fields.set("MODE", "X");
        fields.set("SESS", session_id);
        fields.set("TRAN", transaction_id);
        fields.set("MACK", if self.mack { "Y" } else { "N" });
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigOverlay};
    use crate::ris::ExecuteErrorKind;

    fn test_config() -> Config {
        Config::builder()
            .layer(ConfigOverlay {
                merchant_id: Some("MERCHANT_ID".to_owned()),
                ..ConfigOverlay::default()
            })
            .build()
    }

    #[test]
    fn renders_exactly_the_update_tags() {
        let fields = Update::new()
            .session_id("SESSION_ID")
            .transaction_id("1234")
            .mack(true)
            .to_fields(&test_config())
            .unwrap();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields.get("MERC"), Some("MERCHANT_ID"));
        assert_eq!(fields.get("VERS"), Some("0695"));
        assert_eq!(fields.get("PENC"), Some("KHASH"));
        assert_eq!(fields.get("MODE"), Some("X"));
        assert_eq!(fields.get("SESS"), Some("SESSION_ID"));
        assert_eq!(fields.get("TRAN"), Some("1234"));
        assert_eq!(fields.get("MACK"), Some("Y"));
    }

    #[test]
    fn missing_transaction_id_fails_validation() {
        let err = Update::new()
            .session_id("SESSION_ID")
            .to_fields(&test_config())
            .unwrap_err();
        assert_eq!(err.kind(), ExecuteErrorKind::Validation);
        assert!(err.to_string().contains("[TRAN]"));
    }

    #[test]
    fn missing_session_fails_validation() {
        let err = Update::new()
            .transaction_id("1234")
            .to_fields(&test_config())
            .unwrap_err();
        assert!(err.to_string().contains("[SESS]"));
    }
}
