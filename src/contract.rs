//! The generic anti-fraud facade contract.
//!
//! Every backend plugs in behind [`FraudService`] and surfaces vendor
//! results through [`FraudResponse`]. This crate provides the Kount RIS
//! implementation of both.

use serde::Serialize;

use crate::error::Result;
use crate::models::FraudRequest;

/// Page type a tracking snippet is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PageType {
    /// Any page without a more specific type.
    All,
    /// A product detail page.
    Product,
    /// The cart page.
    Cart,
    /// The checkout page.
    Checkout,
}

/// Severity of a [`Message`] attached to a fraud-check response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    /// The vendor reported an error.
    Error,
    /// The vendor reported a warning.
    Warning,
}

/// A single diagnostic message extracted from a vendor response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Severity of the message.
    pub kind: MessageKind,
    /// Fixed 3-letter code (`ERR` for errors, `WAR` for warnings).
    pub code: &'static str,
    /// The vendor's original message text.
    pub text: String,
}

impl Message {
    /// Creates an error message with the fixed `ERR` code.
    #[inline]
    #[must_use]
    pub fn error<T: Into<String>>(text: T) -> Self {
        Self {
            kind: MessageKind::Error,
            code: "ERR",
            text: text.into(),
        }
    }

    /// Creates a warning message with the fixed `WAR` code.
    #[inline]
    #[must_use]
    pub fn warning<T: Into<String>>(text: T) -> Self {
        Self {
            kind: MessageKind::Warning,
            code: "WAR",
            text: text.into(),
        }
    }
}

/// Generic view over a vendor's fraud-check response.
pub trait FraudResponse: core::fmt::Debug {
    /// Percent score in the generic direction (higher is safer territory
    /// per the facade's convention; each backend converts from its native
    /// direction).
    fn score(&self) -> i64;

    /// Whether the result is still pending an asynchronous decision.
    fn is_pending(&self) -> bool;

    /// Whether the vendor guarantees the transaction against chargebacks.
    fn is_guaranteed(&self) -> bool;

    /// The vendor's raw response serialized as a compact JSON object.
    fn raw_response(&self) -> String;

    /// The vendor-assigned request identifier, as a string.
    fn request_uid(&self) -> String;

    /// All diagnostic messages, errors first, then warnings, each group in
    /// the vendor's original order.
    fn messages(&self) -> Vec<Message>;
}

/// Operations every anti-fraud backend provides to the facade.
pub trait FraudService: core::fmt::Debug + Send + Sync {
    /// Concrete response type produced by this backend.
    type Response: FraudResponse;

    /// Returns the front-end tracking snippet for the given page type, or
    /// an empty string when the backend collects nothing on that page.
    fn tracking_code(&self, page: PageType) -> String;

    /// Submits the request for scoring with approve intent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Request`] if the vendor rejects the request
    /// or the call fails.
    fn validate_request(&self, request: &FraudRequest) -> Result<Self::Response>;

    /// Reports a final outcome against an already-scored request.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Request`] if the vendor rejects the request
    /// or the call fails.
    fn update_request(&self, request: &FraudRequest) -> Result<Self::Response>;

    /// Returns a human-facing URL to the vendor's detail page for the
    /// given request.
    fn external_link(&self, request_uid: &str) -> String;

    /// Reports a refused transaction to the vendor for its records.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Request`] if the vendor rejects the request
    /// or the call fails; the audit call is not failure-isolated.
    fn log_refused_request(&self, request: &FraudRequest) -> Result<()>;

    /// Cancels a previously submitted request, where the vendor supports it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Request`] if the cancellation call fails.
    fn cancel_request(&self, request_uid: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_has_fixed_code() {
        let msg = Message::error("field missing");
        assert_eq!(msg.kind, MessageKind::Error);
        assert_eq!(msg.code, "ERR");
        assert_eq!(msg.text, "field missing");
    }

    #[test]
    fn warning_message_has_fixed_code() {
        let msg = Message::warning("unusual velocity");
        assert_eq!(msg.kind, MessageKind::Warning);
        assert_eq!(msg.code, "WAR");
        assert_eq!(msg.text, "unusual velocity");
    }

    #[test]
    fn message_kind_serializes_camel_case() {
        let json = serde_json::to_string(&MessageKind::Warning).unwrap();
        assert_eq!(json, r#""warning""#);
    }
}
