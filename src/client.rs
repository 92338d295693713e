use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use tracing::debug;

use crate::credential::Credential;
use crate::error::ApiClientError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to one API base URL.
///
/// Each operation builds a single request, executes it, and normalizes the
/// outcome: 2xx responses return the raw body string (an empty body is `""`,
/// not an error), non-2xx responses fail with [`ApiClientError::Api`]
/// carrying the status and body verbatim, and network failures fail with
/// [`ApiClientError::Transport`]. There are no retries and no caching.
///
/// The client holds no mutable state beyond the immutable base URL, so a
/// clone can be used freely from concurrent tasks; each call is one
/// independent awaited exchange.
#[derive(Clone)]
pub struct ExternalApiClient {
    base_url: String,
    http: Client,
}

impl ExternalApiClient {
    /// Create a client with the default 30-second timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiClientError> {
        let http = Client::builder().timeout(timeout).build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET request.
    ///
    /// The bearer header is added only when a credential is given, and the
    /// query string is omitted entirely when `query` is empty.
    pub async fn get(
        &self,
        path: &str,
        token: Option<&Credential>,
        query: &[(&str, &str)],
    ) -> Result<String, ApiClientError> {
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(request, token).await
    }

    /// Issue a POST request with a JSON body.
    pub async fn post(
        &self,
        path: &str,
        token: Option<&Credential>,
        body: &serde_json::Value,
    ) -> Result<String, ApiClientError> {
        let request = self.http.post(self.url(path)).json(body);
        self.execute(request, token).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(
        &self,
        mut request: RequestBuilder,
        token: Option<&Credential>,
    ) -> Result<String, ApiClientError> {
        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("API request failed: {} {}", status, body);
            return Err(ApiClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> ExternalApiClient {
        ExternalApiClient::new(server.base_url()).unwrap()
    }

    #[tokio::test]
    async fn test_get_returns_body_unchanged() {
        let server = MockServer::start();
        let raw = r#"{"numbers":[{"phone_number":"+3225551234"}],  "count": 1}"#;
        let _m = server.mock(|when, then| {
            when.method(GET).path("/v1/numbers");
            then.status(200)
                .header("content-type", "application/json")
                .body(raw);
        });

        let body = client(&server).get("/v1/numbers", None, &[]).await.unwrap();
        assert_eq!(body, raw);
    }

    #[tokio::test]
    async fn test_get_empty_body_is_ok() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/status");
            then.status(204);
        });

        let body = client(&server).get("/status", None, &[]).await.unwrap();
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn test_non_2xx_surfaces_status_and_body() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/v1/numbers");
            then.status(403).body(r#"{"error":"forbidden"}"#);
        });

        let err = client(&server)
            .get("/v1/numbers", None, &[])
            .await
            .unwrap_err();
        match err {
            ApiClientError::Api { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, r#"{"error":"forbidden"}"#);
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/numbers/reserve")
                .header("content-type", "application/json")
                .json_body(json!({"phone_number": "+3225551234"}));
            then.status(200).body(r#"{"status":"reserved"}"#);
        });

        let body = client(&server)
            .post(
                "/v1/numbers/reserve",
                None,
                &json!({"phone_number": "+3225551234"}),
            )
            .await
            .unwrap();
        mock.assert();
        assert_eq!(body, r#"{"status":"reserved"}"#);
    }

    #[tokio::test]
    async fn test_bearer_header_sent_when_token_given() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/oauth/validate")
                .header("authorization", "Bearer abc123");
            then.status(200).body(r#"{"valid":true}"#);
        });

        let cred = Credential::new("abc123");
        client(&server)
            .get("/oauth/validate", Some(&cred), &[])
            .await
            .unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Port 9 (discard) should refuse connections on localhost.
        let client = ExternalApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.get("/status", None, &[]).await.unwrap_err();
        assert!(matches!(err, ApiClientError::Transport(_)));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_normalized() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/status");
            then.status(200).body("{}");
        });

        let client = ExternalApiClient::new(format!("{}/", server.base_url())).unwrap();
        client.get("/status", None, &[]).await.unwrap();
        mock.assert();
    }
}
