use thiserror::Error;

/// Errors surfaced by API client operations.
///
/// Nothing is retried or recovered internally; every failure reaches the
/// immediate caller intact.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Network or IO failure before a response was obtained
    /// (connection refused, timeout, malformed HTTP exchange).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status. Status code and response
    /// body are kept verbatim for caller inspection.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// A 2xx response whose body is missing an expected field
    /// (only the authentication response is parsed).
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ApiClientError {
    /// Status code of a non-2xx response, if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
