mod api;
mod config;
mod connectors;
mod core;
mod observability;
mod routing;

use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing();

    let text_cfg = config::AdapterConfig::text_from_env();
    let image_cfg = config::AdapterConfig::image_from_env();
    if text_cfg.api_key.is_none() && image_cfg.api_key.is_none() {
        tracing::warn!(
            "no OpenRouter credential configured; requests will fail until OPENROUTER_API_KEY is set"
        );
    }
    tracing::info!(
        text_model = %text_cfg.model,
        image_model = %image_cfg.model,
        "adapters configured"
    );

    let state = routing::AppState::new(text_cfg, image_cfg)?;
    let app = routing::router(state).layer(tower_http::trace::TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Medulla gateway listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
