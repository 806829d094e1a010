//! Error types for the generators
//!
//! None of these reach callers of the `generate_*` operations: every failure
//! on the AI path is logged and answered with the local fallback. They are
//! public so the lower-level building blocks can be used on their own.

use thiserror::Error;

/// Errors that can occur on the AI path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Backend reported itself unavailable (no usable key)
    #[error("AI backend unavailable")]
    Unavailable,

    /// Backend call failed
    #[error("LLM error: {0}")]
    Llm(String),

    /// Backend call exceeded the configured timeout
    #[error("Generation timeout")]
    Timeout,

    /// Caller cancelled the request
    #[error("Generation cancelled")]
    Cancelled,

    /// Backend returned only whitespace
    #[error("Empty response from LLM")]
    EmptyResponse,

    /// Response could not be turned into the expected shape
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for GeneratorError {
    fn from(e: serde_json::Error) -> Self {
        GeneratorError::JsonParse(e.to_string())
    }
}
