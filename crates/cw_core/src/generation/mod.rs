//! Text-generation seam
//!
//! The natural-language step that turns a scenario into candidate rows is an
//! external service. It is modelled as the [`TextGenerator`] trait so the
//! rest of the pipeline stays pure and testable.

mod prompt;
mod service;

pub use prompt::{ScenarioPrompt, SYSTEM_PROMPT};
pub use service::CodeWindowService;

use serde::Serialize;
use serde_json::json;

use crate::error::GenerationError;

/// One chat-style completion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system: String,
    pub user: String,
}

impl GenerationRequest {
    /// Chat-completions request body for OpenAI-compatible endpoints
    pub fn to_chat_body(&self) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": self.system },
                { "role": "user", "content": self.user },
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }
}

/// External text generator. Implementations do their own transport; one call, no retries.
pub trait TextGenerator: Send + Sync {
    fn complete(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

impl<G: TextGenerator + ?Sized> TextGenerator for &G {
    fn complete(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        (**self).complete(request)
    }
}

impl<G: TextGenerator + ?Sized> TextGenerator for Box<G> {
    fn complete(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        (**self).complete(request)
    }
}

/// Returns a payload produced out of band (a saved reply, a fixture).
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    payload: String,
}

impl StaticGenerator {
    pub fn new(payload: impl Into<String>) -> Self {
        Self { payload: payload.into() }
    }
}

impl TextGenerator for StaticGenerator {
    fn complete(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Ok(self.payload.clone())
    }
}
