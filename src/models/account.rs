//! Buyer account model.

use serde::{Deserialize, Serialize};

/// The buyer's account with the merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Merchant-side account identifier.
    pub id: String,
    /// Account email address.
    pub email: String,
}
