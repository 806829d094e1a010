//! One entry point over the three generators sharing a backend

use crate::analysis::{self, ContentAnalysis};
use crate::config::GeneratorConfig;
use crate::keywords::KeywordExtractor;
use crate::quiz::QuizGenerator;
use crate::summary::SummaryGenerator;
use crate::types::{Generated, QuizOptions, QuizResult};
use notewise_domain::{SummaryFormat, SummaryLength, TextGenerator};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Summary, quiz and keyword generation over a single backend
pub struct ContentGenerator<L> {
    summaries: SummaryGenerator<L>,
    quizzes: QuizGenerator<L>,
    keywords: KeywordExtractor<L>,
    config: GeneratorConfig,
}

impl<L: TextGenerator> ContentGenerator<L> {
    /// Create a generator owning `llm`
    pub fn new(llm: L, config: GeneratorConfig) -> Self {
        Self::from_shared(Arc::new(llm), config)
    }

    /// Create a generator over a backend shared with other components
    pub fn from_shared(llm: Arc<L>, config: GeneratorConfig) -> Self {
        Self {
            summaries: SummaryGenerator::new(Arc::clone(&llm), config.clone()),
            quizzes: QuizGenerator::new(Arc::clone(&llm), config.clone()),
            keywords: KeywordExtractor::new(llm, config.clone()),
            config,
        }
    }

    /// Abort in-flight backend calls of every capability when `token` is cancelled
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self {
            summaries: self.summaries.with_cancellation(token.clone()),
            quizzes: self.quizzes.with_cancellation(token.clone()),
            keywords: self.keywords.with_cancellation(token),
            config: self.config,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// See [`SummaryGenerator::generate_summary`]
    pub async fn generate_summary(
        &self,
        text: &str,
        length: SummaryLength,
        format: SummaryFormat,
    ) -> Generated<String> {
        self.summaries.generate_summary(text, length, format).await
    }

    /// See [`QuizGenerator::generate_quiz`]
    pub async fn generate_quiz(&self, text: &str, options: &QuizOptions) -> Generated<QuizResult> {
        self.quizzes.generate_quiz(text, options).await
    }

    /// See [`KeywordExtractor::extract_keywords`]
    pub async fn extract_keywords(&self, text: &str, count: usize) -> Generated<Vec<String>> {
        self.keywords.extract_keywords(text, count).await
    }

    /// Keywords using the configured default count
    pub async fn extract_default_keywords(&self, text: &str) -> Generated<Vec<String>> {
        self.extract_keywords(text, self.config.default_keyword_count)
            .await
    }

    /// Structural analysis; never calls the backend
    pub fn analyze(&self, text: &str) -> ContentAnalysis {
        analysis::analyze(text)
    }
}
