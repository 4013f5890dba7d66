use crate::config::AdapterConfig;
use crate::connectors::openrouter::OpenRouterClient;
use crate::connectors::{extract, AdapterError};
use crate::core::entities::{ChatMessage, CompletionRequest, NormalizedResult};

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 700;

/// Builds a persona-plus-message conversation, sends it upstream once and
/// normalizes whatever comes back.
pub struct TextAdapter {
    client: OpenRouterClient,
}

impl TextAdapter {
    pub fn new(config: AdapterConfig) -> Result<Self, AdapterError> {
        Ok(Self { client: OpenRouterClient::new(config)? })
    }

    pub async fn complete(
        &self,
        user_message: &str,
        persona: Option<&str>,
    ) -> Result<NormalizedResult, AdapterError> {
        let user_message = user_message.trim();
        if user_message.is_empty() {
            return Err(AdapterError::InvalidInput("no message provided".into()));
        }

        let mut messages = Vec::with_capacity(2);
        if let Some(persona) = persona.map(str::trim).filter(|p| !p.is_empty()) {
            messages.push(ChatMessage::system(persona));
        }
        messages.push(ChatMessage::user(user_message));

        let request = CompletionRequest {
            model: self.client.model().to_string(),
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        };

        let body = self.client.post_chat(&request).await?;
        Ok(NormalizedResult::Text(extract::extract_text(&body)))
    }
}
