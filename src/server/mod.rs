pub mod handlers;
pub mod types;

use crate::{Result, chat::ChatController, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(controller: Arc<ChatController>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/app.js", get(handlers::app_js))
        .route("/style.css", get(handlers::style_css))
        .route("/api/chat", post(handlers::chat))
        .with_state(handlers::AppState { controller })
}

pub async fn run(config: Config) -> Result<()> {
    if config.api.key_is_placeholder() {
        warn!("API key not configured; submissions will be rejected until config.yaml has a real key");
    }

    let controller = Arc::new(ChatController::new(&config));

    let app = router(controller).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
