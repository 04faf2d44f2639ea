use super::types::{ChatRequest, ChatResponse};
use crate::chat::{ChatController, SubmitOutcome};
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Json},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ChatController>,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    info!("Received chat submission ({} bytes)", request.message.len());

    let outcome = state.controller.submit(&request.message).await;
    if outcome == SubmitOutcome::Ignored {
        info!("Ignoring empty submission");
    }

    Json(ChatResponse {
        messages: outcome.into_fragments(),
    })
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_str!("../../assets/app.js"),
    )
}

pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../assets/style.css"),
    )
}
