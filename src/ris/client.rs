//! Blocking HTTP executor for the RIS endpoint.

use secrecy::{ExposeSecret as _, SecretString};

use super::fields::Fields;
use super::response::RisResponse;
use super::{ExecuteError, Executor};
use crate::config::Config;

/// Header carrying the vendor-issued API key.
const API_KEY_HEADER: &str = "X-Kount-Api-Key";

/// Header carrying the merchant identifier.
const MERCHANT_HEADER: &str = "X-Kount-Merc-Id";

/// The real execution seam: posts the rendered field bag to the
/// configured RIS endpoint as an `application/x-www-form-urlencoded`
/// body and parses the `KEY=VALUE` response.
///
/// One blocking round-trip per call; timeouts and retries are left to
/// the HTTP stack and the caller respectively.
#[derive(Debug)]
pub struct RisClient {
    /// Underlying HTTP client.
    http: reqwest::blocking::Client,
    /// RIS endpoint URL.
    url: String,
    /// Merchant identifier sent in the auth headers.
    merchant_id: String,
    /// API key sent in the auth headers.
    api_key: SecretString,
}

impl RisClient {
    /// Creates a client bound to the configured endpoint and credentials.
    ///
    /// # Errors
    ///
    /// Returns a transport-kind [`ExecuteError`] if the HTTP client
    /// cannot be constructed.
    #[tracing::instrument(skip_all)]
    pub fn new(config: &Config) -> Result<Self, ExecuteError> {
        tracing::debug!(url = %config.url(), "building RIS client");
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|err| ExecuteError::transport(err.to_string()))?;
        Ok(Self {
            http,
            url: config.url().to_owned(),
            merchant_id: config.merchant_id().to_owned(),
            api_key: config.api_key().clone(),
        })
    }
}

impl Executor for RisClient {
    #[tracing::instrument(skip_all, fields(url = %self.url))]
    fn execute(&self, fields: &Fields) -> Result<RisResponse, ExecuteError> {
        tracing::trace!(field_count = fields.len(), "sending RIS request");
        let response = self
            .http
            .post(&self.url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header(MERCHANT_HEADER, &self.merchant_id)
            .form(fields)
            .send()
            .map_err(|err| ExecuteError::transport(err.to_string()))?;

        let status = response.status();
        tracing::debug!(status = %status, "received RIS response");
        let body = response
            .text()
            .map_err(|err| ExecuteError::transport(err.to_string()))?;
        if !status.is_success() {
            return Err(ExecuteError::transport(format!(
                "RIS endpoint returned {status}: {body}"
            )));
        }
        Ok(RisResponse::parse(&body))
    }
}
