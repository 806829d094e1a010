//! Gemini Provider Implementation
//!
//! Provides integration with Google's Generative Language API
//! (`models/{model}:generateContent`).
//!
//! # Features
//!
//! - Async HTTP communication via a reused `reqwest::Client`
//! - API-key sanity check before any network traffic
//! - One retry with a smaller budget when the token limit is exceeded
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use notewise_llm::{ClientConfig, GeminiProvider};
//! use notewise_domain::{GenerationOptions, TextGenerator};
//!
//! # async fn example() -> Result<(), notewise_llm::LlmError> {
//! let provider = GeminiProvider::new(ClientConfig::with_api_key("AIza..."))?;
//! if provider.is_available() {
//!     let text = provider.complete("Say hello", GenerationOptions::new(0.2, 600)).await?;
//!     println!("{}", text);
//! }
//! # Ok(())
//! # }
//! ```

use crate::config::ClientConfig;
use crate::retry::with_token_limit_retry;
use crate::LlmError;
use notewise_domain::{GenerationOptions, TextGenerator};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Nucleus-sampling probability mass sent with every request
pub const TOP_P: f32 = 0.9;

/// Top-k sampling cutoff sent with every request
pub const TOP_K: u32 = 40;

/// Gemini API provider
pub struct GeminiProvider {
    config: ClientConfig,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    top_p: f32,
    top_k: u32,
}

/// Response from the generateContent API
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Generate text, retrying once on a token-limit rejection
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No usable API key is configured ([`LlmError::Unconfigured`], no request sent)
    /// - The request fails or returns a non-2xx status ([`LlmError::Transport`])
    /// - The body has no candidate text ([`LlmError::MalformedResponse`])
    /// - The token limit is still exceeded after the retry
    pub async fn complete(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, LlmError> {
        if !self.config.has_usable_key() {
            return Err(LlmError::Unconfigured);
        }

        with_token_limit_retry(options, |opts| self.send(prompt, opts)).await
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Issue exactly one request
    async fn send(&self, prompt: &str, options: GenerationOptions) -> Result<String, LlmError> {
        let api_key = self.config.api_key().ok_or(LlmError::Unconfigured)?;

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_tokens,
                top_p: TOP_P,
                top_k: TOP_K,
            },
        };

        debug!(
            "Sending generateContent request: model={}, prompt_len={}, max_tokens={}",
            self.config.model,
            prompt.len(),
            options.max_tokens
        );

        let response = self
            .client
            .post(self.url())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Transport(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) => classify_api_error(envelope.error.message, Some(status)),
                Err(_) => LlmError::Transport(format!("HTTP {}: {}", status, text)),
            });
        }

        parse_candidate_text(&text)
    }
}

impl TextGenerator for GeminiProvider {
    type Error = LlmError;

    fn is_available(&self) -> bool {
        self.config.has_usable_key()
    }

    async fn generate(&self, prompt: &str, options: GenerationOptions) -> Result<String, LlmError> {
        self.complete(prompt, options).await
    }
}

/// A message naming both "maximum" and "token" is the token-limit signal
fn is_token_limit_message(message: &str) -> bool {
    let lowered = message.to_lowercase();
    lowered.contains("maximum") && lowered.contains("token")
}

fn classify_api_error(message: String, status: Option<reqwest::StatusCode>) -> LlmError {
    if is_token_limit_message(&message) {
        return LlmError::TokenLimitExceeded(message);
    }
    match status {
        Some(status) => LlmError::Transport(format!("HTTP {}: {}", status, message)),
        None => LlmError::MalformedResponse(format!("API error: {}", message)),
    }
}

/// Extract `candidates[0].content.parts[0].text` from a success body
fn parse_candidate_text(body: &str) -> Result<String, LlmError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

    if let Some(error) = parsed.error {
        return Err(classify_api_error(error.message, None));
    }

    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| LlmError::MalformedResponse("Missing candidate text".to_string()))?;

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "AIzaSyTestKey-0123456789abcdef";
    const MODEL_PATH: &str = "/models/test-model:generateContent";

    fn provider_for(server: &MockServer) -> GeminiProvider {
        let config = ClientConfig {
            api_key: Some(KEY.to_string()),
            endpoint: server.uri(),
            model: "test-model".to_string(),
            timeout_secs: 5,
        };
        GeminiProvider::new(config).unwrap()
    }

    fn success_body(text: &str) -> serde_json::Value {
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ], "role": "model" } }
            ]
        })
    }

    #[test]
    fn test_parse_candidate_text_trims() {
        let body = success_body("  hello world \n").to_string();
        assert_eq!(parse_candidate_text(&body).unwrap(), "hello world");
    }

    #[test]
    fn test_parse_candidate_text_missing_field() {
        let body = json!({ "candidates": [] }).to_string();
        assert!(matches!(
            parse_candidate_text(&body),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_candidate_text_not_json() {
        assert!(matches!(
            parse_candidate_text("<html>oops</html>"),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_token_limit_detection() {
        assert!(is_token_limit_message(
            "The requested max_output_tokens exceeds the MAXIMUM TOKEN limit"
        ));
        assert!(!is_token_limit_message("maximum retries reached"));
        assert!(!is_token_limit_message("invalid token"));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = ClientConfig {
            api_key: Some("your_api_key_here".to_string()),
            endpoint: server.uri(),
            ..ClientConfig::default()
        };
        let provider = GeminiProvider::new(config).unwrap();

        assert!(!provider.is_available());
        let result = provider.complete("hi", GenerationOptions::default()).await;
        assert_eq!(result, Err(LlmError::Unconfigured));
    }

    #[tokio::test]
    async fn test_request_shape_and_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(query_param("key", KEY))
            .and(body_partial_json(json!({
                "contents": [ { "parts": [ { "text": "Summarize this" } ] } ],
                "generationConfig": { "maxOutputTokens": 1200, "topP": 0.9, "topK": 40 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("A summary.")))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let text = provider
            .complete("Summarize this", GenerationOptions::new(0.3, 1200))
            .await
            .unwrap();
        assert_eq!(text, "A summary.");
    }

    #[tokio::test]
    async fn test_padded_key_is_sent_trimmed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(query_param("key", KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            api_key: Some(format!("{KEY}\n")),
            endpoint: server.uri(),
            model: "test-model".to_string(),
            timeout_secs: 5,
        };
        let provider = GeminiProvider::new(config).unwrap();

        assert!(provider.is_available());
        let text = provider
            .complete("hi", GenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn test_token_limit_retry_on_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(body_partial_json(json!({ "generationConfig": { "maxOutputTokens": 1000 } })))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": 400, "message": "max_output_tokens exceeds the maximum token limit of 800" }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(body_partial_json(json!({ "generationConfig": { "maxOutputTokens": 800 } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("retried")))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let text = provider
            .complete("prompt", GenerationOptions::new(0.7, 1000))
            .await
            .unwrap();
        assert_eq!(text, "retried");
    }

    #[tokio::test]
    async fn test_http_error_is_transport_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let result = provider.complete("prompt", GenerationOptions::new(0.7, 2000)).await;
        assert!(matches!(result, Err(LlmError::Transport(_))));
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let result = provider.complete("prompt", GenerationOptions::default()).await;
        assert!(matches!(result, Err(LlmError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport() {
        let config = ClientConfig {
            api_key: Some(KEY.to_string()),
            endpoint: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..ClientConfig::default()
        };
        let provider = GeminiProvider::new(config).unwrap();
        let result = provider.complete("prompt", GenerationOptions::default()).await;
        assert!(matches!(result, Err(LlmError::Transport(_))));
    }
}
