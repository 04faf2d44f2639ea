use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Pre-rendered bubble fragments for the page to append in order. Empty when
/// the submission was a no-op.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub messages: Vec<String>,
}
