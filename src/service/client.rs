use std::time::Duration;

use async_trait::async_trait;

use super::error::TransportError;
use super::models::{ChatRequest, ChatResponse, HealthStatus};
use crate::core::AppConfig;

/// Anything that can answer a user message with a tutor reply. The
/// conversation controller only talks to the service through this
/// trait so tests can swap in a fake.
#[async_trait]
pub trait TutorService {
    async fn chat(&self, message: &str) -> Result<String, TransportError>;
}

/// Talks to the Tutoring Service over HTTP, one request per call.
#[derive(Clone, Debug)]
pub struct HttpTutorService {
    api_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpTutorService {
    pub fn new(api_url: &str, timeout: Duration) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api_url, config.request_timeout)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the service's own health report from `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        let url = format!("{}/health", self.api_url);
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TutorService for HttpTutorService {
    async fn chat(&self, message: &str) -> Result<String, TransportError> {
        let url = format!("{}/chat", self.api_url);
        tracing::debug!("POST {} ({} bytes)", url, message.len());

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&ChatRequest::new(message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let ChatResponse { reply } =
            serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))?;

        Ok(reply)
    }
}
