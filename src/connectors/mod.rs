use thiserror::Error;

pub mod extract;
pub mod image;
pub mod openrouter;
pub mod text;

pub use image::ImageAdapter;
pub use text::TextAdapter;

/// Everything that can go wrong between the HTTP layer and the upstream
/// provider. Each request yields exactly one of these or a
/// `NormalizedResult`; nothing propagates as a panic.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("invalid_input: {0}")]
    InvalidInput(String),
    #[error("configuration_missing: {0} not set")]
    ConfigurationMissing(&'static str),
    #[error("upstream_error {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("upstream_timeout")]
    Timeout,
    #[error("transport_error: {0}")]
    Transport(String),
    #[error("unexpected_response_shape")]
    UnexpectedShape,
    #[error("no_image_returned")]
    NoImage,
}

impl AdapterError {
    /// Concise message for the browser. Upstream bodies and transport causes
    /// stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AdapterError::InvalidInput(msg) => msg.clone(),
            AdapterError::ConfigurationMissing(var) => {
                format!("server is missing its API credential ({var})")
            }
            AdapterError::Upstream { status, .. } => {
                format!("upstream provider returned status {status}")
            }
            AdapterError::Timeout => "upstream request timed out".to_string(),
            AdapterError::Transport(_) => "could not reach upstream provider".to_string(),
            AdapterError::UnexpectedShape => {
                "upstream response had an unexpected shape".to_string()
            }
            AdapterError::NoImage => "the model returned no image".to_string(),
        }
    }
}

impl From<reqwest::Error> for AdapterError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AdapterError::Timeout
        } else {
            AdapterError::Transport(e.to_string())
        }
    }
}

impl axum::response::IntoResponse for AdapterError {
    fn into_response(self) -> axum::response::Response {
        use axum::{http::StatusCode, Json};
        let code = match &self {
            AdapterError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(error = %self, "request failed");
        let body = serde_json::json!({ "error": self.public_message() });
        (code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn invalid_input_maps_to_400_everything_else_to_500() {
        let resp = AdapterError::InvalidInput("no message provided".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        for err in [
            AdapterError::ConfigurationMissing("OPENROUTER_API_KEY"),
            AdapterError::Upstream { status: 403, body: "{}".into() },
            AdapterError::Timeout,
            AdapterError::Transport("connection refused".into()),
            AdapterError::UnexpectedShape,
            AdapterError::NoImage,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn public_message_hides_upstream_body() {
        let err = AdapterError::Upstream {
            status: 502,
            body: r#"{"secret":"internal detail"}"#.into(),
        };
        let msg = err.public_message();
        assert!(msg.contains("502"));
        assert!(!msg.contains("internal detail"));
    }
}
