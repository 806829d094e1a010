//! Notewise LLM Provider Layer
//!
//! Text-generation backends implementing the `TextGenerator` trait from
//! `notewise-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Generative Language API over HTTPS
//!
//! # Examples
//!
//! ```
//! use notewise_llm::MockProvider;
//! use notewise_domain::TextGenerator;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! assert!(provider.is_available());
//! assert_eq!(provider.call_count(), 0);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod gemini;
pub mod retry;

use notewise_domain::{GenerationOptions, TextGenerator};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use config::{is_usable_api_key, ClientConfig};
pub use gemini::GeminiProvider;
pub use retry::{with_token_limit_retry, TOKEN_LIMIT_DECREMENT, TOKEN_LIMIT_FLOOR};

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// No usable API key is configured; no request was made
    #[error("LLM provider is not configured")]
    Unconfigured,

    /// Network failure, timeout or non-2xx HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not JSON or lacked the candidate text
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Requested output length exceeds the model maximum
    #[error("Token limit exceeded: {0}")]
    TokenLimitExceeded(String),
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
/// Responses can be keyed by a fragment of the prompt; the first registered
/// fragment contained in the prompt wins.
///
/// # Examples
///
/// ```
/// use notewise_llm::{LlmError, MockProvider};
/// use notewise_domain::TextGenerator;
///
/// let mut provider = MockProvider::new("Fixed response");
/// provider.add_response("keywords", "alpha, beta");
/// provider.add_error("quiz", LlmError::Transport("offline".into()));
///
/// assert!(provider.is_available());
/// assert!(!MockProvider::unavailable().is_available());
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    available: bool,
    default_response: Result<String, LlmError>,
    responses: Arc<Mutex<Vec<(String, Result<String, LlmError>)>>>,
    recorded: Arc<Mutex<Vec<GenerationOptions>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            available: true,
            default_response: Ok(response.into()),
            responses: Arc::new(Mutex::new(Vec::new())),
            recorded: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a provider that fails every call with `error`
    pub fn failing(error: LlmError) -> Self {
        Self {
            default_response: Err(error),
            ..Self::new("")
        }
    }

    /// Create a provider that reports itself as unconfigured
    pub fn unavailable() -> Self {
        Self {
            available: false,
            default_response: Err(LlmError::Unconfigured),
            ..Self::new("")
        }
    }

    /// Add a specific response for prompts containing `fragment`
    pub fn add_response(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).push((fragment.into(), Ok(response.into())));
    }

    /// Configure to return an error for prompts containing `fragment`
    pub fn add_error(&mut self, fragment: impl Into<String>, error: LlmError) {
        lock(&self.responses).push((fragment.into(), Err(error)));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count and recorded options
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
        lock(&self.recorded).clear();
    }

    /// Generation options received so far, in call order
    pub fn recorded_options(&self) -> Vec<GenerationOptions> {
        lock(&self.recorded).clone()
    }

    fn respond(&self, prompt: &str, options: GenerationOptions) -> Result<String, LlmError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        lock(&self.recorded).push(options);

        let responses = lock(&self.responses);
        let scripted = responses
            .iter()
            .find(|(fragment, _)| prompt.contains(fragment.as_str()))
            .map(|(_, response)| response.clone());

        scripted
            .unwrap_or_else(|| self.default_response.clone())
            .map(|text| text.trim().to_string())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl TextGenerator for MockProvider {
    type Error = LlmError;

    fn is_available(&self) -> bool {
        self.available
    }

    async fn generate(&self, prompt: &str, options: GenerationOptions) -> Result<String, LlmError> {
        self.respond(prompt, options)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> GenerationOptions {
        GenerationOptions::new(0.5, 1000)
    }

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt", options()).await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate("say hello", options()).await.unwrap(), "world");
        assert_eq!(provider.generate("foo!", options()).await.unwrap(), "bar");
        assert_eq!(
            provider.generate("unknown", options()).await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate("prompt1", options()).await.unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.generate("prompt2", options()).await.unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
        assert!(provider.recorded_options().is_empty());
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt", LlmError::Transport("boom".to_string()));

        let result = provider.generate("a bad prompt", options()).await;
        assert!(matches!(result, Err(LlmError::Transport(_))));
    }

    #[tokio::test]
    async fn test_mock_provider_failing() {
        let provider = MockProvider::failing(LlmError::MalformedResponse("x".to_string()));
        assert!(provider.is_available());
        let result = provider.generate("anything", options()).await;
        assert!(matches!(result, Err(LlmError::MalformedResponse(_))));
    }

    #[test]
    fn test_mock_provider_unavailable() {
        let provider = MockProvider::unavailable();
        assert!(!provider.is_available());
    }

    #[tokio::test]
    async fn test_mock_provider_records_options() {
        let provider = MockProvider::new("ok");
        provider
            .generate("p", GenerationOptions::new(0.2, 300))
            .await
            .unwrap();
        assert_eq!(provider.recorded_options(), vec![GenerationOptions::new(0.2, 300)]);
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test", options()).await.unwrap();

        // Both should share the same call count due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
