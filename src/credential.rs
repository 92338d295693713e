//! API credential types.
//!
//! Defines the bearer credential obtained from the Connect API.

use std::fmt;

/// Opaque bearer token returned by a successful authentication.
///
/// The token's internal structure is never inspected; its lifetime is
/// caller-managed (no refresh or expiry tracking).
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, as placed in the `Authorization: Bearer` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// Redacted so tokens cannot leak through debug logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let cred = Credential::new("super-secret-token");
        let debug = format!("{:?}", cred);
        assert!(!debug.contains("super-secret-token"));
        assert_eq!(debug, "Credential(<redacted>)");
    }

    #[test]
    fn test_as_str_roundtrip() {
        let cred = Credential::from("abc123".to_string());
        assert_eq!(cred.as_str(), "abc123");
    }
}
