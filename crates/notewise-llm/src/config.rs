//! Client configuration for the generative text API
//!
//! The configuration is an explicit value handed to the provider constructor.
//! Nothing in this crate reads process environment variables; callers decide
//! where the API key comes from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model name
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default timeout for a single HTTP request (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum length of a key that is taken seriously
pub const MIN_API_KEY_LENGTH: usize = 20;

/// Template values that ship in example env files and must never count as a key
const PLACEHOLDER_KEYS: &[&str] = &[
    "your_api_key_here",
    "your-api-key-here",
    "your_gemini_api_key",
    "your_gemini_api_key_here",
    "your-gemini-api-key",
    "gemini_api_key",
    "api_key_here",
    "insert_your_api_key_here",
    "replace_with_your_api_key",
    "dummy_api_key_for_testing",
    "changeme",
    "placeholder",
];

/// Configuration for [`GeminiProvider`](crate::GeminiProvider)
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key sent as the `key` query parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the API (without the `/models/...` suffix)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name used in the request path
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Default configuration with the given key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured key with surrounding whitespace removed
    ///
    /// Keys pasted into config or env files often carry a trailing newline;
    /// this is the exact value sent on the wire.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Whether the configured key looks like a real key
    pub fn has_usable_key(&self) -> bool {
        is_usable_api_key(self.api_key())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Check whether `key` is present, not a known placeholder, and long enough
///
/// ```
/// use notewise_llm::is_usable_api_key;
///
/// assert!(!is_usable_api_key(None));
/// assert!(!is_usable_api_key(Some("your_api_key_here")));
/// assert!(!is_usable_api_key(Some("short-key")));
/// assert!(is_usable_api_key(Some("AIzaSyD-4f3k3yV4lu3-Th4tIsL0ng")));
/// ```
pub fn is_usable_api_key(key: Option<&str>) -> bool {
    let Some(key) = key.map(str::trim) else {
        return false;
    };
    if key.is_empty() {
        return false;
    }

    let lowered = key.to_lowercase();
    if PLACEHOLDER_KEYS.contains(&lowered.as_str()) {
        return false;
    }

    key.chars().count() >= MIN_API_KEY_LENGTH
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
