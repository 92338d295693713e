//! Wrapper for the Connect API.
//!
//! Provides authentication (OAuth2 client credentials), token validation,
//! and service status.

use serde_json::json;
use tracing::info;

use crate::client::ExternalApiClient;
use crate::credential::Credential;
use crate::error::ApiClientError;
use crate::types::AuthenticationResponse;

pub struct ConnectApi {
    client: ExternalApiClient,
}

impl ConnectApi {
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

    /// Authenticate with the client-credentials grant.
    ///
    /// On a 2xx response the `access_token` field is extracted from the JSON
    /// body; a body without it fails with [`ApiClientError::Parse`].
    pub async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Credential, ApiClientError> {
        info!("Authenticating with Connect API for client: {}", client_id);

        let body = json!({
            "client_id": client_id,
            "client_secret": client_secret,
            "grant_type": "client_credentials",
        });

        let response = self.client.post("/oauth/token", None, &body).await?;
        let auth: AuthenticationResponse = serde_json::from_str(&response)
            .map_err(|e| ApiClientError::Parse(e.to_string()))?;

        info!("Authentication successful for client: {}", client_id);
        Ok(Credential::new(auth.access_token))
    }

    /// Get the status of the Connect API. No auth header is sent.
    pub async fn status(&self) -> Result<String, ApiClientError> {
        self.client.get("/status", None, &[]).await
    }

    /// Validate an access token against the vendor's validation endpoint.
    pub async fn validate_token(
        &self,
        credential: &Credential,
    ) -> Result<String, ApiClientError> {
        self.client.get("/oauth/validate", Some(credential), &[]).await
    }
}
