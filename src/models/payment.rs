//! Payment instrument model.

use serde::{Deserialize, Serialize};

/// The card-like payment instrument used for the transaction.
///
/// Only truncated card data is carried: the BIN (first six digits) and
/// the last four digits. Full PANs never enter the facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Last four digits of the card number, if known.
    pub last4: Option<String>,
    /// Bank identification number (first six digits), if known.
    pub bin: Option<String>,
    /// Raw AVS result code from the payment processor (empty if absent).
    pub avs: String,
    /// Raw CVV result code from the payment processor (empty if absent).
    pub cvv: String,
}
