use serde::Deserialize;

/// Token response from the Connect API `/oauth/token` endpoint.
///
/// Only `access_token` is required; the remaining fields are optional
/// passthrough metadata the vendor may include.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticationResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}
