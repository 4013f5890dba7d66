use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::connectors::AdapterError;
use crate::routing::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReply {
    /// Base64 data URI, exactly as the provider returned it.
    pub image: String,
}

pub async fn generate(
    State(app): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateReply>, AdapterError> {
    let result = app
        .image()
        .generate(&req.prompt, req.aspect_ratio.as_deref())
        .await?;
    Ok(Json(GenerateReply { image: result.into_payload() }))
}
