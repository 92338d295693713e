pub mod client;
pub mod config;
pub mod connect;
pub mod credential;
pub mod error;
pub mod numbers;
pub mod sms;
pub mod types;

pub use client::ExternalApiClient;
pub use config::AgentConfig;
pub use connect::ConnectApi;
pub use credential::Credential;
pub use error::ApiClientError;
pub use numbers::MyNumbersApi;
pub use sms::SmsApi;
pub use types::AuthenticationResponse;
