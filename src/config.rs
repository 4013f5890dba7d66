use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_TEXT_MODEL: &str = "openrouter/auto";
pub const DEFAULT_IMAGE_MODEL: &str = "google/gemini-2.5-flash-image-preview";

const TEXT_TIMEOUT: Duration = Duration::from_secs(60);
// Image generation is slower than text; give it more headroom.
const IMAGE_TIMEOUT: Duration = Duration::from_secs(120);

/// Per-adapter upstream configuration. Loaded once in `main` and injected
/// into the adapter that owns it; nothing reads the environment after
/// startup.
#[derive(Clone, Debug)]
pub struct AdapterConfig {
    /// OpenRouter API base (the `/chat/completions` path is appended).
    pub base_url: String,
    /// Bearer credential. `None` is legal at startup; each call then fails
    /// with a configuration error rather than a silent fallback.
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl AdapterConfig {
    pub fn text_from_env() -> Self {
        Self {
            base_url: base_url_from_env(),
            api_key: key_from_env("OPENROUTER_TEXT_API_KEY"),
            model: std::env::var("MEDULLA_TEXT_MODEL")
                .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
            timeout: TEXT_TIMEOUT,
        }
    }

    pub fn image_from_env() -> Self {
        Self {
            base_url: base_url_from_env(),
            api_key: key_from_env("OPENROUTER_IMAGE_API_KEY"),
            model: std::env::var("MEDULLA_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
            timeout: IMAGE_TIMEOUT,
        }
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn base_url_from_env() -> String {
    std::env::var("OPENROUTER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Adapter-specific key with a shared `OPENROUTER_API_KEY` fallback, so a
/// single-account deployment needs only one variable.
fn key_from_env(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
        .filter(|k| !k.trim().is_empty())
}
