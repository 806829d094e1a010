//! Keyword extraction with a term-frequency fallback

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::invoker::Invoker;
use crate::parser;
use crate::prompt::KeywordPromptBuilder;
use crate::text::{self, MIN_TERM_LENGTH};
use crate::types::Generated;
use notewise_domain::TextGenerator;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Produces keyword lists through the AI backend, falling back to ranking
pub struct KeywordExtractor<L> {
    invoker: Invoker<L>,
    config: GeneratorConfig,
}

impl<L: TextGenerator> KeywordExtractor<L> {
    /// Create an extractor over a shared backend
    pub fn new(llm: Arc<L>, config: GeneratorConfig) -> Self {
        Self {
            invoker: Invoker::new(llm, config.request_timeout()),
            config,
        }
    }

    /// Abort in-flight backend calls when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.invoker.set_cancellation(token);
        self
    }

    /// Extract up to `count` keywords from `text`, most relevant first
    pub async fn extract_keywords(&self, text: &str, count: usize) -> Generated<Vec<String>> {
        if text.trim().is_empty() || count == 0 {
            return Generated::skipped(Vec::new());
        }

        match self.try_ai(text, count).await {
            Ok(keywords) if !keywords.is_empty() => {
                info!(keywords = keywords.len(), "Extracted keywords with AI backend");
                Generated::ai(keywords)
            }
            Ok(_) => {
                warn!("AI keyword response had no entries, using fallback");
                Generated::fallback(fallback_keywords(text, count))
            }
            Err(e) => {
                warn!("AI keyword extraction failed, using fallback: {}", e);
                Generated::fallback(fallback_keywords(text, count))
            }
        }
    }

    async fn try_ai(&self, text: &str, count: usize) -> Result<Vec<String>, GeneratorError> {
        let prompt = KeywordPromptBuilder::new(text, count)
            .with_max_text_length(self.config.max_text_length)
            .build();
        let response = self
            .invoker
            .invoke(&prompt, self.config.keyword_options())
            .await?;
        Ok(parser::parse_keyword_response(&response, count))
    }
}

/// Top `count` terms by frequency, ties in first-seen order
pub fn fallback_keywords(text: &str, count: usize) -> Vec<String> {
    text::top_terms(text, MIN_TERM_LENGTH, count)
}
