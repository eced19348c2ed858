use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReviewResponse {
    pub review: String,
}

impl ReviewRequest {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
        }
    }
}

impl ReviewResponse {
    pub fn new(review: impl Into<String>) -> Self {
        Self {
            review: review.into(),
        }
    }

    /// Envelope for failures talking to the inference backend.
    pub fn backend_error(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Backend Error: {cause}"))
    }

    /// Envelope for faults outside the review pipeline.
    pub fn error(cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Error: {cause}"))
    }
}
