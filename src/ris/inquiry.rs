//! Typed builder for RIS mode-Q inquiries.

use super::fields::Fields;
use super::{ExecuteError, RIS_VERSION};
use crate::config::Config;

/// SDK identifier sent with every request.
const SDK_NAME: &str = "RUST";

/// SDK version string sent with every request.
const SDK_VERSION: &str = concat!("Sdk-Ris-Rust-", env!("CARGO_PKG_VERSION"));

/// Auth intent reported to the vendor with an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// The merchant intends to approve the transaction.
    Approve,
    /// The transaction was declined; the inquiry is an audit record.
    Decline,
}

impl Auth {
    /// The wire value of the `AUTH` tag.
    const fn wire(self) -> &'static str {
        match self {
            Self::Approve => "A",
            Self::Decline => "D",
        }
    }
}

/// One cart line item, in the vendor's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// Product category.
    pub category: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Product description.
    pub name: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price in minor currency units.
    pub price: i64,
}

/// Address lines in the vendor's shape, used for billing and shipping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFields {
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
}

/// Payment token representation chosen by the available card data.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PaymentToken {
    /// BIN and last four digits, masked in between (`PENC=MASK`).
    Masked {
        /// Bank identification number (first six digits).
        bin: String,
        /// Last four digits.
        last4: String,
    },
    /// Only the last four digits, sent unhashed (`PENC` empty).
    Bare {
        /// Last four digits.
        last4: String,
    },
}

/// Typed builder for a mode-Q scoring inquiry.
///
/// Setters accumulate typed values; [`Inquiry::to_fields`] renders the
/// wire field bag and checks required-field presence, so an incomplete
/// inquiry fails at submission time rather than half-way through a
/// network exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    /// Auth intent (`AUTH`).
    auth: Auth,
    /// Whether the merchant acknowledges review (`MACK`).
    mack: bool,
    /// Website identifier (`SITE`).
    website: Option<String>,
    /// Session identifier (`SESS`).
    session_id: Option<String>,
    /// Client IP address (`IPAD`).
    ip_address: Option<String>,
    /// Payment token, if any card data is available.
    payment: Option<PaymentToken>,
    /// Street-address verification result (`AVST`).
    avst: Option<char>,
    /// Postal-code verification result (`AVSZ`).
    avsz: Option<char>,
    /// CVV verification result (`CVVR`).
    cvvr: Option<char>,
    /// Merchant order identifier (`ORDR`).
    order_number: Option<String>,
    /// Order creation time as epoch seconds (`EPOC`).
    epoch: Option<i64>,
    /// ISO 4217 currency code (`CURR`).
    currency: Option<String>,
    /// Order total in minor units (`TOTL`).
    total: Option<i64>,
    /// Cart line items (`PROD_*[i]`).
    cart: Vec<CartItem>,
    /// Merchant-side account identifier (`UNIQ`).
    unique: Option<String>,
    /// Account email (`EMAL`).
    email: Option<String>,
    /// Shipping email (`S2EM`).
    shipping_email: Option<String>,
    /// Billing address (`B2*`).
    billing: Option<AddressFields>,
    /// Billing full name (`NAME`).
    name: Option<String>,
    /// Shipping address (`S2*`).
    shipping: Option<AddressFields>,
    /// Shipping full name (`S2NM`).
    shipping_name: Option<String>,
    /// Shipping phone number (`S2PN`).
    shipping_phone: Option<String>,
}

impl Inquiry {
    /// Creates an empty inquiry with the given auth intent.
    #[must_use]
    pub const fn new(auth: Auth) -> Self {
        Self {
            auth,
            mack: false,
            website: None,
            session_id: None,
            ip_address: None,
            payment: None,
            avst: None,
            avsz: None,
            cvvr: None,
            order_number: None,
            epoch: None,
            currency: None,
            total: None,
            cart: Vec::new(),
            unique: None,
            email: None,
            shipping_email: None,
            billing: None,
            name: None,
            shipping: None,
            shipping_name: None,
            shipping_phone: None,
        }
    }

    /// Sets the merchant-acknowledgement flag.
    #[inline]
    #[must_use]
    pub const fn mack(mut self, mack: bool) -> Self {
        self.mack = mack;
        self
    }

    /// Sets the website identifier.
    #[inline]
    #[must_use]
    pub fn website<T: Into<String>>(mut self, website: T) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Sets the session identifier.
    #[inline]
    #[must_use]
    pub fn session_id<T: Into<String>>(mut self, id: T) -> Self {
        self.session_id = Some(id.into());
        self
    }

    /// Sets the client IP address.
    #[inline]
    #[must_use]
    pub fn ip_address<T: Into<String>>(mut self, ip: T) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    /// Sets a masked payment token from BIN and last four digits.
    ///
    /// Renders as `PTOK = {bin}XXXXXX{last4}` with `PENC=MASK`.
    #[inline]
    #[must_use]
    pub fn payment_masked<B: Into<String>, L: Into<String>>(mut self, bin: B, last4: L) -> Self {
        self.payment = Some(PaymentToken::Masked {
            bin: bin.into(),
            last4: last4.into(),
        });
        self
    }

    /// Sets a bare last-four payment token with hashing disabled.
    #[inline]
    #[must_use]
    pub fn payment_last4<T: Into<String>>(mut self, last4: T) -> Self {
        self.payment = Some(PaymentToken::Bare {
            last4: last4.into(),
        });
        self
    }

    /// Sets the street-address verification result.
    #[inline]
    #[must_use]
    pub const fn avst(mut self, result: char) -> Self {
        self.avst = Some(result);
        self
    }

    /// Sets the postal-code verification result.
    #[inline]
    #[must_use]
    pub const fn avsz(mut self, result: char) -> Self {
        self.avsz = Some(result);
        self
    }

    /// Sets the CVV verification result.
    #[inline]
    #[must_use]
    pub const fn cvvr(mut self, result: char) -> Self {
        self.cvvr = Some(result);
        self
    }

    /// Sets the merchant order identifier.
    #[inline]
    #[must_use]
    pub fn order_number<T: Into<String>>(mut self, order: T) -> Self {
        self.order_number = Some(order.into());
        self
    }

    /// Sets the order creation time as epoch seconds.
    #[inline]
    #[must_use]
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = Some(epoch);
        self
    }

    /// Sets the ISO 4217 currency code.
    #[inline]
    #[must_use]
    pub fn currency<T: Into<String>>(mut self, currency: T) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the order total in minor currency units.
    #[inline]
    #[must_use]
    pub const fn total(mut self, total: i64) -> Self {
        self.total = Some(total);
        self
    }

    /// Replaces the cart line items.
    #[inline]
    #[must_use]
    pub fn cart(mut self, items: Vec<CartItem>) -> Self {
        self.cart = items;
        self
    }

    /// Sets the merchant-side account identifier.
    #[inline]
    #[must_use]
    pub fn unique<T: Into<String>>(mut self, id: T) -> Self {
        self.unique = Some(id.into());
        self
    }

    /// Sets the account email address.
    #[inline]
    #[must_use]
    pub fn email<T: Into<String>>(mut self, email: T) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the shipping email address.
    #[inline]
    #[must_use]
    pub fn shipping_email<T: Into<String>>(mut self, email: T) -> Self {
        self.shipping_email = Some(email.into());
        self
    }

    /// Sets the billing address.
    #[inline]
    #[must_use]
    pub fn billing_address(mut self, address: AddressFields) -> Self {
        self.billing = Some(address);
        self
    }

    /// Sets the billing full name.
    #[inline]
    #[must_use]
    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the shipping address.
    #[inline]
    #[must_use]
    pub fn shipping_address(mut self, address: AddressFields) -> Self {
        self.shipping = Some(address);
        self
    }

    /// Sets the shipping full name.
    #[inline]
    #[must_use]
    pub fn shipping_name<T: Into<String>>(mut self, name: T) -> Self {
        self.shipping_name = Some(name.into());
        self
    }

    /// Sets the shipping phone number.
    #[inline]
    #[must_use]
    pub fn shipping_phone<T: Into<String>>(mut self, phone: T) -> Self {
        self.shipping_phone = Some(phone.into());
        self
    }

    /// Renders the wire field bag for this inquiry.
    ///
    /// # Errors
    ///
    /// Returns a validation-kind [`ExecuteError`] if a required field
    /// (merchant id, session id) is missing.
    pub fn to_fields(&self, config: &Config) -> Result<Fields, ExecuteError> {
        if config.merchant_id().is_empty() {
            return Err(ExecuteError::validation(
                "Required field [MERC] missing for mode [Q]",
            ));
        }
        let session_id = self
            .session_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ExecuteError::validation("Required field [SESS] missing for mode [Q]")
            })?;

        let mut fields = Fields::new();
        fields.set("MERC", config.merchant_id());
        fields.set("VERS", RIS_VERSION);
        fields.set("SDK", SDK_NAME);
        fields.set("SDK_VERSION", SDK_VERSION);
        fields.set("MODE", "Q");
        fields.set("MACK", if self.mack { "Y" } else { "N" });
        fields.set("AUTH", self.auth.wire());
        fields.set("SESS", session_id);

        if let Some(website) = &self.website {
            fields.set("SITE", website);
        }
        if let Some(ip) = &self.ip_address {
            fields.set("IPAD", ip);
        }

        match &self.payment {
            Some(PaymentToken::Masked { bin, last4 }) => {
                fields.set("PENC", "MASK");
                fields.set("PTOK", format!("{bin}XXXXXX{last4}"));
                fields.set("PTYP", "CARD");
                fields.set("LAST4", last4);
            }
            Some(PaymentToken::Bare { last4 }) => {
                fields.set("PENC", "");
                fields.set("PTOK", last4);
                fields.set("PTYP", "CARD");
                fields.set("LAST4", last4);
            }
            None => fields.set("PENC", "KHASH"),
        }

        if let Some(avst) = self.avst {
            fields.set("AVST", avst.to_string());
        }
        if let Some(avsz) = self.avsz {
            fields.set("AVSZ", avsz.to_string());
        }
        if let Some(cvvr) = self.cvvr {
            fields.set("CVVR", cvvr.to_string());
        }

        if let Some(order) = &self.order_number {
            fields.set("ORDR", order);
        }
        if let Some(epoch) = self.epoch {
            fields.set("EPOC", epoch.to_string());
        }
        if let Some(currency) = &self.currency {
            fields.set("CURR", currency);
        }
        if let Some(total) = self.total {
            fields.set("TOTL", total.to_string());
        }

        for (index, item) in self.cart.iter().enumerate() {
            fields.set(format!("PROD_TYPE[{index}]"), &item.category);
            fields.set(format!("PROD_ITEM[{index}]"), &item.sku);
            fields.set(format!("PROD_DESC[{index}]"), &item.name);
            fields.set(format!("PROD_QUANT[{index}]"), item.quantity.to_string());
            fields.set(format!("PROD_PRICE[{index}]"), item.price.to_string());
        }

        if let Some(unique) = &self.unique {
            fields.set("UNIQ", unique);
        }
        if let Some(email) = &self.email {
            fields.set("EMAL", email);
        }
        if let Some(email) = &self.shipping_email {
            fields.set("S2EM", email);
        }

        if let Some(billing) = &self.billing {
            fields.set("B2A1", &billing.street_address);
            fields.set("B2A2", &billing.unit);
            fields.set("B2CI", &billing.city);
            fields.set("B2ST", &billing.state);
            fields.set("B2PC", &billing.postal_code);
            fields.set("B2CC", &billing.country_code);
        }
        if let Some(name) = &self.name {
            fields.set("NAME", name);
        }

        if let Some(shipping) = &self.shipping {
            fields.set("S2A1", &shipping.street_address);
            fields.set("S2A2", &shipping.unit);
            fields.set("S2CI", &shipping.city);
            fields.set("S2ST", &shipping.state);
            fields.set("S2PC", &shipping.postal_code);
            fields.set("S2CC", &shipping.country_code);
        }
        if let Some(name) = &self.shipping_name {
            fields.set("S2NM", name);
        }
        if let Some(phone) = &self.shipping_phone {
            fields.set("S2PN", phone);
        }

        Ok(fields)
    }
}
