use super::{
    cleaner::clean,
    prompt::{SYSTEM_PROMPT, build_user_prompt},
    types::{ReviewRequest, ReviewResponse},
};
use crate::{
    config::{Config, ReviewConfig},
    llm::{ChatRequest, InferenceClient, OllamaClient},
};
use std::sync::Arc;
use tracing::{error, info};

pub const PLAINTEXT_LANGUAGE: &str = "plaintext";
pub const PLAINTEXT_MESSAGE: &str = "Please write code into a Programming Language";
pub const EMPTY_REVIEW_MESSAGE: &str = "No review generated.";

/// Runs the validate, prompt, infer, clean pipeline for a single request.
pub struct ReviewService {
    client: Arc<dyn InferenceClient>,
    model: String,
    limits: ReviewConfig,
}

impl ReviewService {
    pub fn new(
        client: Arc<dyn InferenceClient>,
        model: impl Into<String>,
        limits: ReviewConfig,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            limits,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = Arc::new(OllamaClient::new(&config.ollama));
        Self::new(client, config.ollama.model.clone(), config.review)
    }

    pub fn build_request(&self, request: &ReviewRequest) -> ChatRequest {
        ChatRequest::new(
            self.model.as_str(),
            SYSTEM_PROMPT,
            build_user_prompt(request, self.limits.max_code_length),
            self.limits.num_predict,
        )
    }

    /// Never fails: every fault is reported inside the returned review text.
    pub async fn review(&self, request: &ReviewRequest) -> ReviewResponse {
        if request.language == PLAINTEXT_LANGUAGE {
            return ReviewResponse::new(PLAINTEXT_MESSAGE);
        }

        let chat_request = self.build_request(request);
        info!(
            language = %request.language,
            code_length = request.code.chars().count(),
            "Sending review request"
        );

        match self.client.chat(&chat_request).await {
            Ok(content) => {
                let review = clean(&content);
                info!(review_length = review.len(), "Review completed successfully");
                if review.is_empty() {
                    ReviewResponse::new(EMPTY_REVIEW_MESSAGE)
                } else {
                    ReviewResponse::new(review)
                }
            }
            Err(e) => {
                error!(error = %e, timeout = e.is_timeout(), "Review failed");
                ReviewResponse::backend_error(e)
            }
        }
    }
}
