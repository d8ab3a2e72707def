//! Backend configuration: defaults, environment settings, caller overrides.
//!
//! Configuration is assembled from overlays applied in order — hard-coded
//! defaults first, then the environment-supplied vendor settings, then any
//! caller-supplied overrides — with later layers winning key by key. The
//! resolved [`Config`] is immutable for the lifetime of the service.

use secrecy::SecretString;

/// Website identifier sent when the caller configures none.
const DEFAULT_WEBSITE: &str = "DEFAULT";

/// Test-environment transaction detail URL template (`%s` = request uid).
const DEFAULT_TEST_TRANSACTION_URL: &str = "https://awc.test.kount.net/workflow/detail.html?id=%s";

/// Production transaction detail URL template (`%s` = request uid).
const DEFAULT_TRANSACTION_URL: &str = "https://awc.kount.net/workflow/detail.html?id=%s";

/// RIS endpoint used when `testing` is set and no URL is configured.
const SANDBOX_URL: &str = "https://risk.test.kount.net";

/// RIS endpoint used when no URL is configured.
const PRODUCTION_URL: &str = "https://risk.kount.net";

/// A partial configuration layer; unset keys fall through to earlier layers.
#[derive(Debug, Default)]
pub struct ConfigOverlay {
    /// Whether to target the vendor's test environment.
    pub testing: Option<bool>,
    /// Website identifier registered with the vendor.
    pub website: Option<String>,
    /// Test-environment transaction detail URL template.
    pub test_transaction_url: Option<String>,
    /// Production transaction detail URL template.
    pub transaction_url: Option<String>,
    /// Merchant identifier issued by the vendor.
    pub merchant_id: Option<String>,
    /// API key issued by the vendor.
    pub api_key: Option<SecretString>,
    /// RIS endpoint base URL.
    pub url: Option<String>,
}

impl ConfigOverlay {
    /// Reads vendor settings from `KOUNT_*` environment variables.
    ///
    /// Recognized variables: `KOUNT_TESTING` (`1`/`true`),
    /// `KOUNT_WEBSITE`, `KOUNT_MERCHANT_ID`, `KOUNT_API_KEY`, `KOUNT_URL`.
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds an overlay from an arbitrary variable lookup.
    fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Self {
        Self {
            testing: var("KOUNT_TESTING").map(|v| v == "1" || v.eq_ignore_ascii_case("true")),
            website: var("KOUNT_WEBSITE"),
            test_transaction_url: None,
            transaction_url: None,
            merchant_id: var("KOUNT_MERCHANT_ID"),
            api_key: var("KOUNT_API_KEY").map(SecretString::from),
            url: var("KOUNT_URL"),
        }
    }
}

/// Builder applying [`ConfigOverlay`] layers over the defaults.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    /// Overlays in application order.
    layers: Vec<ConfigOverlay>,
}

impl ConfigBuilder {
    /// Applies an overlay on top of everything added so far.
    #[inline]
    #[must_use]
    pub fn layer(mut self, overlay: ConfigOverlay) -> Self {
        self.layers.push(overlay);
        self
    }

    /// Resolves the final configuration.
    ///
    /// If no layer supplies a RIS endpoint URL (or only empty ones), the
    /// endpoint is derived from the `testing` flag.
    #[must_use]
    pub fn build(self) -> Config {
        let mut testing = false;
        let mut website = DEFAULT_WEBSITE.to_owned();
        let mut test_transaction_url = DEFAULT_TEST_TRANSACTION_URL.to_owned();
        let mut transaction_url = DEFAULT_TRANSACTION_URL.to_owned();
        let mut merchant_id = String::new();
        let mut api_key = SecretString::from(String::new());
        let mut url = None;

        for overlay in self.layers {
            if let Some(value) = overlay.testing {
                testing = value;
            }
            if let Some(value) = overlay.website {
                website = value;
            }
            if let Some(value) = overlay.test_transaction_url {
                test_transaction_url = value;
            }
            if let Some(value) = overlay.transaction_url {
                transaction_url = value;
            }
            if let Some(value) = overlay.merchant_id {
                merchant_id = value;
            }
            if let Some(value) = overlay.api_key {
                api_key = value;
            }
            // An empty URL counts as unset so the endpoint derivation below
            // still applies.
            if let Some(value) = overlay.url
                && !value.is_empty()
            {
                url = Some(value);
            }
        }

        let url = url.unwrap_or_else(|| {
            if testing {
                SANDBOX_URL.to_owned()
            } else {
                PRODUCTION_URL.to_owned()
            }
        });

        Config {
            testing,
            website,
            test_transaction_url,
            transaction_url,
            merchant_id,
            api_key,
            url,
        }
    }
}

/// Resolved, immutable backend configuration.
#[derive(Debug)]
pub struct Config {
    /// Whether the vendor's test environment is targeted.
    testing: bool,
    /// Website identifier registered with the vendor.
    website: String,
    /// Test-environment transaction detail URL template.
    test_transaction_url: String,
    /// Production transaction detail URL template.
    transaction_url: String,
    /// Merchant identifier issued by the vendor.
    merchant_id: String,
    /// API key issued by the vendor.
    api_key: SecretString,
    /// RIS endpoint base URL.
    url: String,
}

impl Config {
    /// Creates a builder starting from the hard-coded defaults.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Whether the vendor's test environment is targeted.
    #[inline]
    #[must_use]
    pub const fn testing(&self) -> bool {
        self.testing
    }

    /// Website identifier registered with the vendor.
    #[inline]
    #[must_use]
    pub fn website(&self) -> &str {
        &self.website
    }

    /// The transaction detail URL template for the active environment.
    #[inline]
    #[must_use]
    pub fn transaction_url(&self) -> &str {
        if self.testing {
            &self.test_transaction_url
        } else {
            &self.transaction_url
        }
    }

    /// Merchant identifier issued by the vendor.
    #[inline]
    #[must_use]
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    /// API key issued by the vendor.
    #[inline]
    #[must_use]
    pub const fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// RIS endpoint base URL.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
