//! The aggregate fraud-check request.

use serde::{Deserialize, Serialize};

use super::{Account, Address, Payment, Purchase, Session};

/// Everything a backend may need to score one transaction.
///
/// The `uid` starts out unset; once a backend has scored the request the
/// facade records the vendor-assigned identifier here so later calls
/// (updates, cancellations) can reference the same vendor-side record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudRequest {
    /// Browser session data.
    pub session: Session,
    /// Payment instrument data.
    pub payment: Payment,
    /// Order data.
    pub purchase: Purchase,
    /// Buyer account data.
    pub account: Account,
    /// Billing address.
    pub billing_address: Address,
    /// Shipping address.
    pub shipping_address: Address,
    /// Vendor-assigned request identifier from a previous scoring call.
    pub uid: Option<String>,
}

impl FraudRequest {
    /// Records the vendor-assigned request identifier.
    #[inline]
    pub fn set_uid<T: Into<String>>(&mut self, uid: T) {
        self.uid = Some(uid.into());
    }
}

/// Builds the fully-populated request used across the crate's tests.
#[cfg(test)]
pub(crate) fn test_request() -> FraudRequest {
    use chrono::TimeZone as _;

    use super::Product;

    FraudRequest {
        session: Session {
            id: "SESSION_ID".to_owned(),
            ip: "1.2.3.4".to_owned(),
        },
        payment: Payment {
            last4: Some("9000".to_owned()),
            bin: Some("457173".to_owned()),
            avs: "Y".to_owned(),
            cvv: "M".to_owned(),
        },
        purchase: Purchase {
            id: "1".to_owned(),
            created_at: chrono::Utc
                .timestamp_opt(1_504_354_332, 0)
                .single()
                .unwrap_or_default(),
            currency_code: "CAD".to_owned(),
            total: 56025,
            products: vec![
                Product {
                    category: "Category1".to_owned(),
                    sku: "SKU1".to_owned(),
                    name: "Product number 1".to_owned(),
                    quantity: 1,
                    price: 6025,
                },
                Product {
                    category: "Category2".to_owned(),
                    sku: "SKU2".to_owned(),
                    name: "Product number 2".to_owned(),
                    quantity: 2,
                    price: 25000,
                },
            ],
        },
        account: Account {
            id: "ACCOUNT_ID".to_owned(),
            email: "test@example.com".to_owned(),
        },
        billing_address: Address {
            street_address: "1 billing street".to_owned(),
            unit: "1A".to_owned(),
            city: "Billing Town".to_owned(),
            state: "Billing State".to_owned(),
            postal_code: "54321".to_owned(),
            country_code: "CA".to_owned(),
            full_name: "John Billing".to_owned(),
            phone: String::new(),
        },
        shipping_address: Address {
            street_address: "1 shipping street".to_owned(),
            unit: "25".to_owned(),
            city: "Shipping Town".to_owned(),
            state: "Shipping State".to_owned(),
            postal_code: "12345".to_owned(),
            country_code: "US".to_owned(),
            full_name: "John Shipping".to_owned(),
            phone: "1234567891".to_owned(),
        },
        uid: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_starts_unset() {
        let request = test_request();
        assert!(request.uid.is_none());
    }

    #[test]
    fn set_uid_records_identifier() {
        let mut request = test_request();
        request.set_uid("1234");
        assert_eq!(request.uid.as_deref(), Some("1234"));
    }

    #[test]
    fn serde_roundtrip() {
        let request = test_request();
        let json = serde_json::to_string(&request).unwrap();
        let back: FraudRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
