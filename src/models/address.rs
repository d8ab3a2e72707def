//! Postal address model, used for both billing and shipping.

use serde::{Deserialize, Serialize};

/// A postal address with contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street address line.
    pub street_address: String,
    /// Apartment, suite, or unit.
    pub unit: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal or ZIP code.
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// Recipient full name.
    pub full_name: String,
    /// Contact phone number.
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address_is_empty() {
        let address = Address::default();
        assert!(address.street_address.is_empty());
        assert!(address.country_code.is_empty());
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let address = Address {
            street_address: "1 billing street".to_owned(),
            postal_code: "54321".to_owned(),
            ..Address::default()
        };
        let json = serde_json::to_string(&address).unwrap();
        assert!(json.contains(r#""streetAddress":"1 billing street""#));
        assert!(json.contains(r#""postalCode":"54321""#));
    }
}
