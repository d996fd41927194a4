//! Webhook endpoint configuration for the inbound provider.
//!
//! The demo never listens for HTTP traffic; this module covers the surface
//! the setup screen actually has: building the inbound URL string,
//! validating the configuration form and (de)serializing it. Where the
//! resulting bytes go is the embedding application's decision.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path the provider should deliver inbound payloads to.
pub const INBOUND_PATH: &str = "/api/postmark/webhook";

/// Build the inbound webhook URL for the given origin.
#[must_use]
pub fn inbound_url(origin: &str) -> String {
    format!("{}{INBOUND_PATH}", origin.trim_end_matches('/'))
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Server API token and webhook URL must not be empty")]
    MissingField,
    #[error("A JSON (de)serialization error occurred: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Validated provider webhook configuration.
pub struct WebhookConfig {
    server_token: SecretString,
    url: String,
}

impl WebhookConfig {
    /// Create a configuration from the setup form fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if either field is empty or
    /// whitespace-only.
    pub fn new(server_token: SecretString, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if server_token.expose_secret().trim().is_empty() || url.trim().is_empty() {
            return Err(Error::MissingField);
        }

        Ok(Self { server_token, url })
    }

    /// The provider server API token.
    #[must_use]
    pub fn server_token(&self) -> &SecretString {
        &self.server_token
    }

    /// The URL the provider delivers to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Serialize the configuration to JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization failed.
    pub fn store(&self) -> Result<String> {
        let json = ConfigJSON {
            server_token: self.server_token.expose_secret().clone(),
            url: self.url.clone(),
        };
        Ok(serde_json::to_string(&json)?)
    }

    /// Deserialize a configuration previously produced by [`store`](Self::store).
    ///
    /// # Errors
    ///
    /// Returns error if the data is not valid JSON or fails validation.
    pub fn load(data: &[u8]) -> Result<Self> {
        let json = serde_json::from_slice::<ConfigJSON>(data)?;
        Self::new(SecretString::new(json.server_token), json.url)
    }
}

#[derive(Deserialize, Serialize)]
struct ConfigJSON {
    server_token: String,
    url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_url_joins_origin_and_path() {
        assert_eq!(
            inbound_url("https://yourapp.com"),
            "https://yourapp.com/api/postmark/webhook"
        );
        assert_eq!(
            inbound_url("https://yourapp.com/"),
            "https://yourapp.com/api/postmark/webhook"
        );
    }

    #[test]
    fn empty_fields_are_rejected() {
        let result = WebhookConfig::new(SecretString::new("  ".to_string()), "https://x.test");
        assert!(matches!(result, Err(Error::MissingField)));

        let result = WebhookConfig::new(SecretString::new("token".to_string()), "");
        assert!(matches!(result, Err(Error::MissingField)));
    }

    #[test]
    fn config_store_and_load() {
        let config = WebhookConfig::new(
            SecretString::new("pm-server-token".to_string()),
            "https://your-domain.com/webhook",
        )
        .unwrap();

        let data = config.store().unwrap();
        let loaded = WebhookConfig::load(data.as_bytes()).unwrap();

        assert_eq!(loaded.url(), "https://your-domain.com/webhook");
        assert_eq!(loaded.server_token().expose_secret(), "pm-server-token");
    }

    #[test]
    fn load_rejects_garbage() {
        assert!(matches!(
            WebhookConfig::load(b"not json"),
            Err(Error::Json(_))
        ));
    }
}
