use async_trait::async_trait;
use code_review_api::{
    Error, Result,
    llm::{ChatRequest, InferenceClient},
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Reply {
    Content(String),
    Error(String),
    Panic(String),
}

/// Mock inference client that records every request it receives
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    pub requests: Arc<Mutex<Vec<ChatRequest>>>,
    reply: Reply,
}

impl MockInferenceClient {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self::with_reply(Reply::Content(content.into()))
    }

    pub fn with_error(error: impl Into<String>) -> Self {
        Self::with_reply(Reply::Error(error.into()))
    }

    pub fn panicking(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Panic(message.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply,
        }
    }

    pub fn get_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn chat(&self, request: &ChatRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.reply {
            Reply::Content(content) => Ok(content.clone()),
            Reply::Error(error) => Err(Error::llm(error.clone())),
            Reply::Panic(message) => panic!("{}", message),
        }
    }
}
