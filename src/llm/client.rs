use super::types::*;
use crate::{Error, Result, config::OllamaConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends one chat request and returns the generated text.
    async fn chat(&self, request: &ChatRequest) -> Result<String>;
}

pub struct OllamaClient {
    client: reqwest::Client,
    chat_url: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            chat_url: config.chat_url(),
            timeout: config.timeout(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let response = self
            .client
            .post(&self.chat_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!("Ollama returned {status}: {body}")));
        }

        Ok(response.json::<ChatResponse>().await?)
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn chat(&self, request: &ChatRequest) -> Result<String> {
        debug!("Ollama payload: {}", serde_json::to_string(request)?);

        let response = tokio::time::timeout(self.timeout, self.send(request))
            .await
            .map_err(|_| Error::Timeout {
                elapsed: self.timeout,
            })??;

        let message = response.message.ok_or(Error::InvalidResponse)?;

        debug!("Received chat response from {}", self.chat_url);

        Ok(message.and_then(|m| m.content).unwrap_or_default())
    }
}
