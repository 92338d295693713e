//! Explicit configuration for the vendor API endpoints.
//!
//! All configuration is carried by value and passed to the wrappers at
//! construction; there is no process-wide implicit state.

use std::env;
use std::time::Duration;

use crate::connect::ConnectApi;
use crate::error::ApiClientError;
use crate::numbers::MyNumbersApi;
use crate::sms::SmsApi;

const DEFAULT_CONNECT_URL: &str = "https://connect-api.bics.com";
const DEFAULT_MYNUMBERS_URL: &str = "https://mynumbers-api.bics.com";
const DEFAULT_SMS_URL: &str = "https://sms-api.bics.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URLs and timeout for the vendor APIs.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub connect_url: String,
    pub mynumbers_url: String,
    pub sms_url: String,
    pub timeout: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            connect_url: DEFAULT_CONNECT_URL.to_string(),
            mynumbers_url: DEFAULT_MYNUMBERS_URL.to_string(),
            sms_url: DEFAULT_SMS_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AgentConfig {
    /// Read overrides from the environment, falling back to the vendor
    /// production defaults.
    ///
    /// Recognized variables: `CONNECT_API_URL`, `MYNUMBERS_API_URL`,
    /// `SMS_API_URL`, `API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            connect_url: env::var("CONNECT_API_URL").unwrap_or(defaults.connect_url),
            mynumbers_url: env::var("MYNUMBERS_API_URL").unwrap_or(defaults.mynumbers_url),
            sms_url: env::var("SMS_API_URL").unwrap_or(defaults.sms_url),
            timeout: env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    pub fn connect(&self) -> Result<ConnectApi, ApiClientError> {
        ConnectApi::with_timeout(&self.connect_url, self.timeout)
    }

    pub fn mynumbers(&self) -> Result<MyNumbersApi, ApiClientError> {
        MyNumbersApi::with_timeout(&self.mynumbers_url, self.timeout)
    }

    pub fn sms(&self) -> Result<SmsApi, ApiClientError> {
        SmsApi::with_timeout(&self.sms_url, self.timeout)
    }
}
