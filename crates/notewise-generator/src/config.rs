//! Configuration for the generators

use notewise_domain::{GenerationOptions, SummaryLength};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration shared by the summary, quiz and keyword generators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum time for a single backend call (seconds)
    pub request_timeout_secs: u64,

    /// Input characters embedded in a prompt; longer notes are cut
    pub max_text_length: usize,

    /// Keyword count used when the caller gives none
    pub default_keyword_count: usize,

    /// Question count used when the caller gives none
    pub default_question_count: usize,

    /// Sampling temperature for summaries
    pub summary_temperature: f32,

    /// Output budget for short summaries
    pub summary_short_tokens: u32,

    /// Output budget for medium summaries
    pub summary_medium_tokens: u32,

    /// Output budget for long summaries
    pub summary_long_tokens: u32,

    /// Sampling temperature for quizzes
    pub quiz_temperature: f32,

    /// Output budget for quizzes
    pub quiz_max_tokens: u32,

    /// Sampling temperature for keyword extraction
    pub keyword_temperature: f32,

    /// Output budget for keyword extraction
    pub keyword_max_tokens: u32,
}

impl GeneratorConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Backend options for a summary of the given (resolved) length
    pub fn summary_options(&self, length: SummaryLength) -> GenerationOptions {
        let max_tokens = match length {
            SummaryLength::Short => self.summary_short_tokens,
            SummaryLength::Long => self.summary_long_tokens,
            SummaryLength::Medium | SummaryLength::Auto => self.summary_medium_tokens,
        };
        GenerationOptions::new(self.summary_temperature, max_tokens)
    }

    /// Backend options for quiz generation
    pub fn quiz_options(&self) -> GenerationOptions {
        GenerationOptions::new(self.quiz_temperature, self.quiz_max_tokens)
    }

    /// Backend options for keyword extraction
    pub fn keyword_options(&self) -> GenerationOptions {
        GenerationOptions::new(self.keyword_temperature, self.keyword_max_tokens)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        for (name, temperature) in [
            ("summary_temperature", self.summary_temperature),
            ("quiz_temperature", self.quiz_temperature),
            ("keyword_temperature", self.keyword_temperature),
        ] {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(format!("{} must be between 0.0 and 2.0", name));
            }
        }
        for (name, tokens) in [
            ("summary_short_tokens", self.summary_short_tokens),
            ("summary_medium_tokens", self.summary_medium_tokens),
            ("summary_long_tokens", self.summary_long_tokens),
            ("quiz_max_tokens", self.quiz_max_tokens),
            ("keyword_max_tokens", self.keyword_max_tokens),
        ] {
            if tokens == 0 {
                return Err(format!("{} must be greater than 0", name));
            }
        }
        if self.summary_short_tokens > self.summary_medium_tokens
            || self.summary_medium_tokens > self.summary_long_tokens
        {
            return Err("summary token budgets must grow from short to long".to_string());
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 60,
            max_text_length: 30_000,
            default_keyword_count: 10,
            default_question_count: 5,
            summary_temperature: 0.3,
            summary_short_tokens: 600,
            summary_medium_tokens: 1200,
            summary_long_tokens: 2000,
            quiz_temperature: 0.7,
            quiz_max_tokens: 3000,
            keyword_temperature: 0.2,
            keyword_max_tokens: 600,
        }
    }
}

impl GeneratorConfig {
    /// Concise preset: small budgets and a short timeout
    pub fn concise() -> Self {
        Self {
            request_timeout_secs: 30,
            max_text_length: 12_000,
            default_keyword_count: 5,
            default_question_count: 3,
            summary_short_tokens: 400,
            summary_medium_tokens: 800,
            summary_long_tokens: 1200,
            quiz_max_tokens: 1800,
            keyword_max_tokens: 300,
            ..Self::default()
        }
    }

    /// Thorough preset: larger budgets and a generous timeout
    pub fn thorough() -> Self {
        Self {
            request_timeout_secs: 180,
            max_text_length: 80_000,
            default_keyword_count: 15,
            default_question_count: 10,
            summary_short_tokens: 800,
            summary_medium_tokens: 1600,
            summary_long_tokens: 3000,
            quiz_max_tokens: 4000,
            keyword_max_tokens: 800,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
