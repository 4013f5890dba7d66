use crate::config::AdapterConfig;
use crate::connectors::openrouter::OpenRouterClient;
use crate::connectors::{extract, AdapterError};
use crate::core::entities::{ChatMessage, ImageConfig, ImageRequest, NormalizedResult};

/// Sends a single-prompt request with an image output-modality hint and
/// pulls the first returned image out of the response. The data URI is not
/// decoded or re-encoded here.
pub struct ImageAdapter {
    client: OpenRouterClient,
}

impl ImageAdapter {
    pub fn new(config: AdapterConfig) -> Result<Self, AdapterError> {
        Ok(Self { client: OpenRouterClient::new(config)? })
    }

    pub async fn generate(
        &self,
        prompt: &str,
        aspect_ratio: Option<&str>,
    ) -> Result<NormalizedResult, AdapterError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AdapterError::InvalidInput("no prompt provided".into()));
        }

        let request = ImageRequest {
            model: self.client.model().to_string(),
            messages: vec![ChatMessage::user(prompt)],
            // Upstream only emits images when both modalities are listed.
            modalities: vec!["image", "text"],
            image_config: aspect_ratio
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(|a| ImageConfig { aspect_ratio: a.to_string() }),
        };

        let body = self.client.post_chat(&request).await?;
        extract::extract_image(&body).map(NormalizedResult::Image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{extract::State, routing::post, Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Stub that records the request body it receives and replies with a
    /// canned response.
    async fn spawn_upstream(
        status: StatusCode,
        body: serde_json::Value,
    ) -> (String, Arc<Mutex<Vec<serde_json::Value>>>) {
        let received: Arc<Mutex<Vec<serde_json::Value>>> = Arc::default();
        let record = Arc::clone(&received);
        let app = Router::new()
            .route(
                "/chat/completions",
                post(
                    move |State(record): State<Arc<Mutex<Vec<serde_json::Value>>>>,
                          Json(req): Json<serde_json::Value>| {
                        let body = body.clone();
                        async move {
                            record.lock().unwrap().push(req);
                            (status, Json(body))
                        }
                    },
                ),
            )
            .with_state(record);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        (format!("http://{addr}"), received)
    }

    fn config(base_url: String) -> AdapterConfig {
        AdapterConfig {
            base_url,
            api_key: Some("test-key".into()),
            model: "google/gemini-2.5-flash-image-preview".into(),
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn data_uri_is_returned_verbatim() {
        let body = json!({
            "choices": [{
                "message": {
                    "images": [{ "image_url": { "url": "data:image/png;base64,AAAA" } }]
                }
            }]
        });
        let (base, _) = spawn_upstream(StatusCode::OK, body).await;

        let adapter = ImageAdapter::new(config(base)).unwrap();
        let result = adapter.generate("a red fox", None).await.unwrap();
        assert_eq!(result, NormalizedResult::Image("data:image/png;base64,AAAA".into()));
    }

    #[tokio::test]
    async fn aspect_ratio_lands_in_nested_image_config() {
        let body = json!({
            "choices": [{
                "message": { "images": [{ "image_url": { "url": "data:image/png;base64,BBBB" } }] }
            }]
        });
        let (base, received) = spawn_upstream(StatusCode::OK, body).await;

        let adapter = ImageAdapter::new(config(base)).unwrap();
        adapter.generate("a red fox", Some("16:9")).await.unwrap();

        let sent = received.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["image_config"]["aspect_ratio"], "16:9");
        assert_eq!(sent[0]["modalities"], json!(["image", "text"]));
        assert_eq!(sent[0]["messages"][0]["content"], "a red fox");
    }

    #[tokio::test]
    async fn omitted_aspect_ratio_sends_no_image_config() {
        let body = json!({
            "choices": [{
                "message": { "images": [{ "image_url": { "url": "data:image/png;base64,CCCC" } }] }
            }]
        });
        let (base, received) = spawn_upstream(StatusCode::OK, body).await;

        let adapter = ImageAdapter::new(config(base)).unwrap();
        adapter.generate("a red fox", None).await.unwrap();

        let sent = received.lock().unwrap();
        assert!(sent[0].get("image_config").is_none());
    }

    #[tokio::test]
    async fn empty_images_array_is_no_image() {
        let body = json!({ "choices": [{ "message": { "images": [] } }] });
        let (base, _) = spawn_upstream(StatusCode::OK, body).await;

        let adapter = ImageAdapter::new(config(base)).unwrap();
        let err = adapter.generate("a red fox", None).await.unwrap_err();
        assert!(matches!(err, AdapterError::NoImage));
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_without_a_call() {
        let (base, received) = spawn_upstream(StatusCode::OK, json!({})).await;

        let adapter = ImageAdapter::new(config(base)).unwrap();
        let err = adapter.generate("  ", Some("1:1")).await.unwrap_err();

        assert!(matches!(err, AdapterError::InvalidInput(_)));
        assert!(received.lock().unwrap().is_empty());
    }
}
