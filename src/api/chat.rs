use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::connectors::AdapterError;
use crate::routing::AppState;

/// System prompt applied when the caller does not supply a persona.
pub const DEFAULT_PERSONA: &str =
    "You are Medulla AI, a helpful, honest, and friendly assistant. Answer simply and clearly.";

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub persona: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskReply {
    pub reply: String,
}

pub async fn ask(
    State(app): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskReply>, AdapterError> {
    let persona = req.persona.as_deref().unwrap_or(DEFAULT_PERSONA);
    let result = app.text().complete(&req.message, Some(persona)).await?;
    Ok(Json(AskReply { reply: result.into_payload() }))
}
