use super::types::{ApiErrorBody, GenerateRequest, GenerateResponse};
use crate::{Error, Result, config::ApiConfig};
use async_trait::async_trait;
use tracing::{debug, warn};

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, message: &str) -> Result<String>;
}

/// Client for the generative-language `generateContent` endpoint. One POST
/// per message, the key as a query parameter; no retry, no streaming.
pub struct GeminiClient {
    http: reqwest::Client,
    url: String,
    key: String,
}

impl GeminiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.url,
            key: config.key,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, message: &str) -> Result<String> {
        let request = GenerateRequest::from_text(message);

        debug!("Sending generate request to {}", self.url);

        let response = self
            .http
            .post(&self.url)
            .query(&[("key", self.key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Generate request failed with status {}", status);
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .map(|detail| detail.message);
            return Err(Error::api(message));
        }

        let body: GenerateResponse = response.json().await?;

        debug!("Received response with {} candidates", body.candidates.len());

        body.into_text().ok_or(Error::NoResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_takes_endpoint_and_key_from_config() {
        let client = GeminiClient::new(ApiConfig {
            key: "test-api-key".to_string(),
            url: "https://example.com/v1beta/models/gemini-pro:generateContent".to_string(),
        });

        assert_eq!(client.key, "test-api-key");
        assert!(client.url.ends_with(":generateContent"));
    }
}
