//! Purchase and cart line-item models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single cart line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Merchant-defined product category.
    pub category: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Display name.
    pub name: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price in minor currency units.
    pub price: i64,
}

/// The order being checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Merchant order identifier.
    pub id: String,
    /// Order creation time.
    pub created_at: DateTime<Utc>,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Order total in minor currency units.
    pub total: i64,
    /// Cart contents, possibly empty.
    pub products: Vec<Product>,
}
