use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client configuration for the checkout-session endpoint.
pub struct PaymentsClient {
    pub client: Client,
    pub endpoint_url: String,
    pub api_key: Option<String>,
}

impl PaymentsClient {
    pub fn new(endpoint_url: String, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    /// Builds the authorization header value, when a key is configured.
    pub fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| format!("Bearer {}", key))
    }
}
