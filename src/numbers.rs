//! Wrapper for the MyNumbers API.
//!
//! Number inventory and reservation.

use serde_json::json;
use tracing::info;

use crate::client::ExternalApiClient;
use crate::credential::Credential;
use crate::error::ApiClientError;

pub struct MyNumbersApi {
    client: ExternalApiClient,
}

impl MyNumbersApi {
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

    /// List available numbers, optionally filtered by country code.
    ///
    /// A `None` or empty country code omits the query parameter entirely;
    /// the request path carries no `?country_code=`.
    pub async fn numbers(
        &self,
        credential: &Credential,
        country_code: Option<&str>,
    ) -> Result<String, ApiClientError> {
        let country = country_code.filter(|c| !c.is_empty());
        info!(
            "Getting available numbers for country: {}",
            country.unwrap_or("any")
        );

        let query: Vec<(&str, &str)> = match country {
            Some(code) => vec![("country_code", code)],
            None => Vec::new(),
        };

        self.client
            .get("/v1/numbers", Some(credential), &query)
            .await
    }

    /// Reserve a specific number.
    pub async fn reserve_number(
        &self,
        credential: &Credential,
        phone_number: &str,
    ) -> Result<String, ApiClientError> {
        info!("Reserving number: {}", phone_number);

        let body = json!({ "phone_number": phone_number });
        self.client
            .post("/v1/numbers/reserve", Some(credential), &body)
            .await
    }
}
