//! Wrapper for the SMS API.

use serde_json::json;
use tracing::info;

use crate::client::ExternalApiClient;
use crate::credential::Credential;
use crate::error::ApiClientError;

pub struct SmsApi {
    client: ExternalApiClient,
}

impl SmsApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiClientError> {
        Ok(Self {
            client: ExternalApiClient::new(base_url)?,
        })
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, ApiClientError> {
        Ok(Self {
            client: ExternalApiClient::with_timeout(base_url, timeout)?,
        })
    }

    /// Send an SMS message.
    ///
    /// Failures surface as errors like every other operation; there is no
    /// error-payload passthrough on non-2xx responses.
    pub async fn send_sms(
        &self,
        credential: &Credential,
        to: &str,
        message: &str,
    ) -> Result<String, ApiClientError> {
        info!("Sending SMS to: {}", to);

        let body = json!({ "to": to, "message": message });
        self.client
            .post("/v1/sms/send", Some(credential), &body)
            .await
    }
}
