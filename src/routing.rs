use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::api;
use crate::config::AdapterConfig;
use crate::connectors::{AdapterError, ImageAdapter, TextAdapter};

/// Both adapters, each with its own credential and timeout. Cloned per
/// request by axum; the adapters themselves hold no mutable state.
#[derive(Clone)]
pub struct AppState {
    text: Arc<TextAdapter>,
    image: Arc<ImageAdapter>,
}

impl AppState {
    pub fn new(text_cfg: AdapterConfig, image_cfg: AdapterConfig) -> Result<Self, AdapterError> {
        Ok(Self {
            text: Arc::new(TextAdapter::new(text_cfg)?),
            image: Arc::new(ImageAdapter::new(image_cfg)?),
        })
    }

    pub fn text(&self) -> &TextAdapter {
        &self.text
    }

    pub fn image(&self) -> &ImageAdapter {
        &self.image
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::pages::index))
        .route("/imagine", get(api::pages::imagine))
        .route("/ask", post(api::chat::ask))
        .route("/generate-image", post(api::image::generate))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(state)
}
