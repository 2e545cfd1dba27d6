//! In-memory collaborators that record every call.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::llm::GenerationClient;
use crate::search::{SearchClient, SearchResult};

pub struct FakeSearch {
    outcome: Result<Vec<SearchResult>, (u16, String)>,
    queries: Mutex<Vec<(String, usize)>>,
}

impl FakeSearch {
    pub fn returning(results: Vec<SearchResult>) -> Self {
        FakeSearch {
            outcome: Ok(results),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        FakeSearch {
            outcome: Err((status, message.to_string())),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchClient for FakeSearch {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>, ProviderError> {
        self.queries.lock().unwrap().push((query.to_string(), max_results));
        match &self.outcome {
            Ok(results) => Ok(results.clone()),
            Err((status, message)) => Err(ProviderError::Status {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

pub struct FakeGenerator {
    outcome: Result<String, (u16, String)>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        FakeGenerator {
            outcome: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        FakeGenerator {
            outcome: Err((status, message.to_string())),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// `(model, prompt)` pairs in call order.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for FakeGenerator {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push((model.to_string(), prompt.to_string()));
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err((status, message)) => Err(ProviderError::Status {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
