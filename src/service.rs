//! The Kount RIS implementation of the facade contract.

use crate::config::Config;
use crate::contract::{FraudService, PageType};
use crate::error::Result;
use crate::models::FraudRequest;
use crate::response::KountResponse;
use crate::ris::inquiry::{AddressFields, Auth, CartItem};
use crate::ris::{Executor, Inquiry, RisClient, Update};
use crate::score::{avs_to_avst, avs_to_avsz, cvv_to_cvvr};

/// Data-collector host for the vendor's test environment.
const SANDBOX_COLLECTOR: &str = "sandbox02.kaxsdc.com";

/// Data-collector host for production.
const PRODUCTION_COLLECTOR: &str = "prod01.kaxsdc.com";

/// Kount RIS backend for the anti-fraud facade.
///
/// Holds the resolved configuration and the execution seam; both are
/// read-only after construction, so a single instance can serve any
/// number of sequential calls. Each call builds a fresh vendor request
/// and discards it after use.
#[derive(Debug)]
pub struct KountService {
    /// Resolved configuration.
    config: Config,
    /// Execution seam; [`RisClient`] in production, a stand-in in tests.
    executor: Box<dyn Executor>,
}

impl KountService {
    /// Creates a service backed by the real [`RisClient`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Request`] if the HTTP client cannot be
    /// constructed.
    #[inline]
    pub fn new(config: Config) -> Result<Self> {
        let client = RisClient::new(&config)?;
        Ok(Self::with_executor(config, Box::new(client)))
    }

    /// Creates a service with an injected execution seam.
    #[inline]
    #[must_use]
    pub fn with_executor(config: Config, executor: Box<dyn Executor>) -> Self {
        Self { config, executor }
    }

    /// The resolved configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the inquiry for a request and submits it with the given
    /// auth intent.
    #[tracing::instrument(skip_all, fields(order = %request.purchase.id))]
    fn submit(&self, request: &FraudRequest, auth: Auth) -> Result<KountResponse> {
        let payment = &request.payment;
        let purchase = &request.purchase;
        let billing = &request.billing_address;
        let shipping = &request.shipping_address;

        let mut inquiry = Inquiry::new(auth)
            .mack(true)
            .website(self.config.website())
            .session_id(request.session.id.as_str())
            .ip_address(request.session.ip.as_str());

        if let Some(last4) = payment.last4.as_deref().filter(|v| !v.is_empty()) {
            inquiry = match payment.bin.as_deref().filter(|v| !v.is_empty()) {
                Some(bin) => inquiry.payment_masked(bin, last4),
                None => inquiry.payment_last4(last4),
            };
        }
        inquiry = inquiry
            .avst(avs_to_avst(&payment.avs))
            .avsz(avs_to_avsz(&payment.avs))
            .cvvr(cvv_to_cvvr(&payment.cvv));

        inquiry = inquiry
            .order_number(purchase.id.as_str())
            .epoch(purchase.created_at.timestamp())
            .currency(purchase.currency_code.as_str())
            .total(purchase.total);
        let cart: Vec<CartItem> = purchase
            .products
            .iter()
            .map(|product| CartItem {
                category: product.category.clone(),
                sku: product.sku.clone(),
                name: product.name.clone(),
                quantity: product.quantity,
                price: product.price,
            })
            .collect();
        if !cart.is_empty() {
            inquiry = inquiry.cart(cart);
        }

        inquiry = inquiry
            .unique(request.account.id.as_str())
            .email(request.account.email.as_str())
            .shipping_email(request.account.email.as_str());

        inquiry = inquiry
            .billing_address(AddressFields {
                street_address: billing.street_address.clone(),
                unit: billing.unit.clone(),
                city: billing.city.clone(),
                state: billing.state.clone(),
                postal_code: billing.postal_code.clone(),
                country_code: billing.country_code.clone(),
            })
            .name(billing.full_name.as_str())
            .shipping_address(AddressFields {
                street_address: shipping.street_address.clone(),
                unit: shipping.unit.clone(),
                city: shipping.city.clone(),
                state: shipping.state.clone(),
                postal_code: shipping.postal_code.clone(),
                country_code: shipping.country_code.clone(),
            })
            .shipping_name(shipping.full_name.as_str())
            .shipping_phone(shipping.phone.as_str());

        let fields = inquiry.to_fields(&self.config)?;
        tracing::debug!(field_count = fields.len(), "submitting inquiry");
        let ris = self.executor.execute(&fields)?;
        Ok(KountResponse::new(ris))
    }
}

impl FraudService for KountService {
    type Response = KountResponse;

    fn tracking_code(&self, page: PageType) -> String {
        if page != PageType::Checkout {
            return String::new();
        }
        let collector = if self.config.testing() {
            SANDBOX_COLLECTOR
        } else {
            PRODUCTION_COLLECTOR
        };
        let merchant_id = self.config.merchant_id();
        format!(
            "trackingCodes.push(function (sid) {{\n    \
             var script = document.createElement('script');\n    \
             script.setAttribute('src', 'https://{collector}/collect/sdk?m={merchant_id}&s=' + sid);\n    \
             var img = document.createElement('img');\n    \
             img.setAttribute('src', 'https://{collector}/logo.gif?m={merchant_id}&s=' + sid);\n\n    \
             document.body.appendChild(script);\n    \
             document.body.appendChild(img);\n\
             }});"
        )
    }

    #[inline]
    fn validate_request(&self, request: &FraudRequest) -> Result<KountResponse> {
        self.submit(request, Auth::Approve)
    }

    #[tracing::instrument(skip_all)]
    fn update_request(&self, request: &FraudRequest) -> Result<KountResponse> {
        let fields = Update::new()
            .session_id(request.session.id.as_str())
            .transaction_id(request.uid.clone().unwrap_or_default())
            .mack(true)
            .to_fields(&self.config)?;
        tracing::debug!("submitting update");
        let ris = self.executor.execute(&fields)?;
        Ok(KountResponse::new(ris))
    }

    fn external_link(&self, request_uid: &str) -> String {
        self.config
            .transaction_url()
            .replacen("%s", request_uid, 1)
    }

    fn log_refused_request(&self, request: &FraudRequest) -> Result<()> {
        // Fire-and-forget audit call; the response is discarded but any
        // failure still reaches the caller.
        drop(self.submit(request, Auth::Decline)?);
        Ok(())
    }

    #[inline]
    fn cancel_request(&self, _request_uid: &str) -> Result<()> {
        // RIS offers no cancellation call.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::fmt;

    use super::*;
    use crate::config::ConfigOverlay;
    use crate::contract::{FraudResponse as _, MessageKind};
    use crate::error::Error;
    use crate::models::test_request;
    use crate::ris::{ExecuteError, Fields, RisResponse};

    /// Closure-backed stand-in for the execution seam.
    struct FakeExecutor<F>(F);

    impl<F> fmt::Debug for FakeExecutor<F> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("FakeExecutor")
        }
    }

    impl<F> Executor for FakeExecutor<F>
    where
        F: Fn(&Fields) -> core::result::Result<RisResponse, ExecuteError> + Send + Sync,
    {
        fn execute(&self, fields: &Fields) -> core::result::Result<RisResponse, ExecuteError> {
            (self.0)(fields)
        }
    }

    fn test_config() -> Config {
        Config::builder()
            .layer(ConfigOverlay {
                testing: Some(true),
                merchant_id: Some("MERCHANT_ID".to_owned()),
                ..ConfigOverlay::default()
            })
            .build()
    }

    fn service_with<F>(fake: F) -> KountService
    where
        F: Fn(&Fields) -> core::result::Result<RisResponse, ExecuteError> + Send + Sync + 'static,
    {
        KountService::with_executor(test_config(), Box::new(FakeExecutor(fake)))
    }

    /// The full wire rendering of [`test_request`] with approve intent.
    fn expected_fields() -> Fields {
        let mut fields = Fields::new();
        fields.set("MERC", "MERCHANT_ID");
        fields.set("VERS", "0695");
        fields.set("SDK", "RUST");
        fields.set(
            "SDK_VERSION",
            concat!("Sdk-Ris-Rust-", env!("CARGO_PKG_VERSION")),
        );
        fields.set("PENC", "MASK");
        fields.set("MODE", "Q");
        fields.set("CURR", "CAD");
        fields.set("MACK", "Y");
        fields.set("SITE", "DEFAULT");
        fields.set("SESS", "SESSION_ID");
        fields.set("IPAD", "1.2.3.4");
        fields.set("LAST4", "9000");
        fields.set("PTOK", "457173XXXXXX9000");
        fields.set("PTYP", "CARD");
        fields.set("AVST", "M");
        fields.set("AVSZ", "M");
        fields.set("CVVR", "M");
        fields.set("ORDR", "1");
        fields.set("EPOC", "1504354332");
        fields.set("TOTL", "56025");
        fields.set("UNIQ", "ACCOUNT_ID");
        fields.set("EMAL", "test@example.com");
        fields.set("S2EM", "test@example.com");
        fields.set("B2A1", "1 billing street");
        fields.set("B2A2", "1A");
        fields.set("B2CI", "Billing Town");
        fields.set("B2ST", "Billing State");
        fields.set("B2PC", "54321");
        fields.set("B2CC", "CA");
        fields.set("S2A1", "1 shipping street");
        fields.set("S2A2", "25");
        fields.set("S2CI", "Shipping Town");
        fields.set("S2ST", "Shipping State");
        fields.set("S2PC", "12345");
        fields.set("S2CC", "US");
        fields.set("S2NM", "John Shipping");
        fields.set("S2PN", "1234567891");
        fields.set("NAME", "John Billing");
        fields.set("AUTH", "A");
        fields.set("PROD_TYPE[0]", "Category1");
        fields.set("PROD_ITEM[0]", "SKU1");
        fields.set("PROD_DESC[0]", "Product number 1");
        fields.set("PROD_QUANT[0]", "1");
        fields.set("PROD_PRICE[0]", "6025");
        fields.set("PROD_TYPE[1]", "Category2");
        fields.set("PROD_ITEM[1]", "SKU2");
        fields.set("PROD_DESC[1]", "Product number 2");
        fields.set("PROD_QUANT[1]", "2");
        fields.set("PROD_PRICE[1]", "25000");
        fields
    }

    #[test]
    fn tracking_code_sandbox_host_when_testing() {
        let service = service_with(|_| Ok(RisResponse::default()));
        let code = service.tracking_code(PageType::Checkout);
        assert!(code.contains("'https://sandbox02.kaxsdc.com/collect/sdk?m=MERCHANT_ID&s=' + sid"));
        assert!(code.contains("'https://sandbox02.kaxsdc.com/logo.gif?m=MERCHANT_ID&s=' + sid"));
    }

    #[test]
    fn tracking_code_production_host_when_not_testing() {
        let config = Config::builder()
            .layer(ConfigOverlay {
                testing: Some(false),
                merchant_id: Some("MERCHANT_ID".to_owned()),
                ..ConfigOverlay::default()
            })
            .build();
        let service =
            KountService::with_executor(config, Box::new(FakeExecutor(|_: &Fields| {
                Ok(RisResponse::default())
            })));
        let code = service.tracking_code(PageType::Checkout);
        assert!(code.contains("'https://prod01.kaxsdc.com/collect/sdk?m=MERCHANT_ID&s=' + sid"));
    }

    #[test]
    fn tracking_code_empty_off_checkout() {
        let service = service_with(|_| Ok(RisResponse::default()));
        assert_eq!(service.tracking_code(PageType::All), "");
        assert_eq!(service.tracking_code(PageType::Cart), "");
    }

    #[test]
    fn validate_request_maps_the_complete_request() {
        let service = service_with(|fields| {
            assert_eq!(fields, &expected_fields());
            Ok(RisResponse::default())
        });
        let response = service.validate_request(&test_request());
        assert!(response.is_ok());
    }

    #[test]
    fn validate_request_without_bin_sends_bare_last4() {
        let service = service_with(|fields| {
            let mut expected = expected_fields();
            expected.set("PENC", "");
            expected.set("PTOK", "9000");
            assert_eq!(fields, &expected);
            Ok(RisResponse::default())
        });
        let mut request = test_request();
        request.payment.bin = None;
        assert!(service.validate_request(&request).is_ok());
    }

    #[test]
    fn validate_request_without_last4_sends_no_payment_fields() {
        let service = service_with(|fields| {
            assert_eq!(fields.get("PTOK"), None);
            assert_eq!(fields.get("PTYP"), None);
            assert_eq!(fields.get("LAST4"), None);
            assert_eq!(fields.get("PENC"), Some("KHASH"));
            // Verification results are still translated and sent.
            assert_eq!(fields.get("AVST"), Some("M"));
            assert_eq!(fields.get("AVSZ"), Some("M"));
            assert_eq!(fields.get("CVVR"), Some("M"));
            Ok(RisResponse::default())
        });
        let mut request = test_request();
        request.payment.last4 = None;
        request.payment.bin = None;
        assert!(service.validate_request(&request).is_ok());
    }

    #[test]
    fn validate_request_with_empty_cart_sends_no_product_fields() {
        let service = service_with(|fields| {
            assert_eq!(fields.get("PROD_TYPE[0]"), None);
            Ok(RisResponse::default())
        });
        let mut request = test_request();
        request.purchase.products.clear();
        assert!(service.validate_request(&request).is_ok());
    }

    #[test]
    fn vendor_validation_failure_surfaces_as_request_error() {
        let service = service_with(|_| {
            Err(ExecuteError::validation(
                "Required field [dummy] missing for mode [D]",
            ))
        });
        let err = service.validate_request(&test_request()).unwrap_err();
        let Error::Request { message } = err;
        assert_eq!(message, "Required field [dummy] missing for mode [D]");
    }

    #[test]
    fn vendor_transport_failure_surfaces_as_request_error() {
        let service =
            service_with(|_| Err(ExecuteError::transport("Could not resolve host: dummy.com")));
        let err = service.validate_request(&test_request()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Request: Could not resolve host: dummy.com"
        );
    }

    #[test]
    fn response_parsing_end_to_end() {
        let service = service_with(|_| {
            Ok(RisResponse::parse(
                "SCOR=55\nTRAN=6587\nSTATUS=GOOD\nERROR_COUNT=2\nERROR_0=error1\nERROR_1=error2\nWARNING_COUNT=2\nWARNING_0=warning1\nWARNING_1=warning2\n",
            ))
        });
        let response = service.validate_request(&test_request()).unwrap();
        assert_eq!(response.score(), 45);
        assert!(!response.is_pending());
        assert!(!response.is_guaranteed());
        assert_eq!(response.request_uid(), "6587");
        assert!(response.raw_response().contains(r#""STATUS":"GOOD""#));
        let messages = response.messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages.first().map(|m| m.kind), Some(MessageKind::Error));
        assert_eq!(messages.last().map(|m| m.kind), Some(MessageKind::Warning));
    }

    #[test]
    fn update_request_maps_exactly_the_update_tags() {
        let service = service_with(|fields| {
            let mut expected = Fields::new();
            expected.set("MERC", "MERCHANT_ID");
            expected.set("VERS", "0695");
            expected.set("PENC", "KHASH");
            expected.set("MODE", "X");
            expected.set("SESS", "SESSION_ID");
            expected.set("TRAN", "1234");
            expected.set("MACK", "Y");
            assert_eq!(fields, &expected);
            Ok(RisResponse::default())
        });
        let mut request = test_request();
        request.set_uid("1234");
        assert!(service.update_request(&request).is_ok());
    }

    #[test]
    fn update_request_without_uid_fails_validation() {
        let service = service_with(|_| Ok(RisResponse::default()));
        let err = service.update_request(&test_request()).unwrap_err();
        assert!(err.to_string().contains("[TRAN]"));
    }

    #[test]
    fn external_link_substitutes_the_uid() {
        let service = service_with(|_| Ok(RisResponse::default()));
        assert_eq!(
            service.external_link("TEST"),
            "https://awc.test.kount.net/workflow/detail.html?id=TEST"
        );
    }

    #[test]
    fn log_refused_request_sends_decline_intent() {
        let service = service_with(|fields| {
            let mut expected = expected_fields();
            expected.set("AUTH", "D");
            assert_eq!(fields, &expected);
            Ok(RisResponse::default())
        });
        assert!(service.log_refused_request(&test_request()).is_ok());
    }

    #[test]
    fn log_refused_request_propagates_failures() {
        let service = service_with(|_| Err(ExecuteError::transport("timeout")));
        let err = service.log_refused_request(&test_request()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Request: timeout");
    }

    #[test]
    fn cancel_request_is_a_no_op() {
        let service = service_with(|_| Err(ExecuteError::transport("must not be called")));
        assert!(service.cancel_request("TEST").is_ok());
    }
}
