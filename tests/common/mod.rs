use async_trait::async_trait;
use gemchat::{Error, Result, llm::TextGenerator};
use std::sync::{Arc, Mutex};

/// Canned generator for tests that exercise the submission flow without the
/// HTTP layer. Records every message it receives.
pub struct StubGenerator {
    reply: Option<String>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, message: &str) -> Result<String> {
        self.requests.lock().unwrap().push(message.to_string());
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(Error::api(Some("stubbed failure".to_string()))),
        }
    }
}
