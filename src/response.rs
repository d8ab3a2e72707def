//! Generic view over a RIS response.

use crate::contract::{FraudResponse, Message};
use crate::ris::RisResponse;

/// [`FraudResponse`] implementation backed by a parsed RIS response.
///
/// RIS scores run 0–100 with higher meaning riskier; the facade's
/// convention is the opposite direction, so the score is inverted here.
/// RIS is synchronous and offers no chargeback guarantee, so the
/// pending and guaranteed flags are constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KountResponse {
    /// The vendor response this view reads from.
    ris: RisResponse,
}

impl KountResponse {
    /// Wraps a parsed RIS response.
    #[inline]
    #[must_use]
    pub const fn new(ris: RisResponse) -> Self {
        Self { ris }
    }

    /// The underlying vendor response.
    #[inline]
    #[must_use]
    pub const fn ris(&self) -> &RisResponse {
        &self.ris
    }
}

impl FraudResponse for KountResponse {
    #[inline]
    fn score(&self) -> i64 {
        100 - self.ris.score()
    }

    #[inline]
    fn is_pending(&self) -> bool {
        false
    }

    #[inline]
    fn is_guaranteed(&self) -> bool {
        false
    }

    fn raw_response(&self) -> String {
        serde_json::to_string(self.ris.as_map()).unwrap_or_default()
    }

    #[inline]
    fn request_uid(&self) -> String {
        self.ris.transaction_id().to_owned()
    }

    fn messages(&self) -> Vec<Message> {
        let errors = self.ris.errors().into_iter().map(Message::error);
        let warnings = self.ris.warnings().into_iter().map(Message::warning);
        errors.chain(warnings).collect()
    }
}
