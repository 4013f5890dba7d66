use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Wire body for a text completion call. Built fresh per request and
/// discarded once the upstream call returns.
#[derive(Clone, Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

/// Wire body for an image generation call. OpenRouter reuses the
/// chat-completions envelope; the `modalities` hint is what elicits an
/// image instead of text.
#[derive(Clone, Debug, Serialize)]
pub struct ImageRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub modalities: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ImageConfig {
    pub aspect_ratio: String,
}

/// The one stable shape the adapters hand back to the HTTP layer.
/// Failures travel alongside as `Result::Err(AdapterError)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NormalizedResult {
    /// Assistant completion text.
    Text(String),
    /// Image as a base64 data URI, passed through verbatim.
    Image(String),
}

impl NormalizedResult {
    pub fn into_payload(self) -> String {
        match self {
            NormalizedResult::Text(s) | NormalizedResult::Image(s) => s,
        }
    }
}
