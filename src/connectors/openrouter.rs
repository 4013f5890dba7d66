use reqwest::{header, Client};
use serde::Serialize;

use crate::config::AdapterConfig;
use crate::connectors::AdapterError;

/// Thin client over OpenRouter's chat-completions endpoint. Both adapters
/// own one of these with their own credential, model and timeout.
pub struct OpenRouterClient {
    client: Client,
    config: AdapterConfig,
}

impl OpenRouterClient {
    pub fn new(config: AdapterConfig) -> Result<Self, AdapterError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AdapterError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn api_key(&self) -> Result<&str, AdapterError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(AdapterError::ConfigurationMissing("OPENROUTER_API_KEY"))
    }

    /// One POST, one outcome. Returns the decoded body on 2xx; classifies
    /// everything else without retrying.
    pub async fn post_chat<T: Serialize + ?Sized>(
        &self,
        body: &T,
    ) -> Result<serde_json::Value, AdapterError> {
        // Credential check happens before any socket is opened.
        let key = self.api_key()?;

        let resp = self
            .client
            .post(self.config.chat_completions_url())
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(key)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await?;
            // Keep the decoded JSON error payload when there is one,
            // otherwise carry the raw text.
            let body = match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(v) => v.to_string(),
                Err(_) => text,
            };
            return Err(AdapterError::Upstream { status: status.as_u16(), body });
        }

        Ok(resp.json().await?)
    }
}
