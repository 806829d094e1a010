//! Summary generation with an extractive fallback

use crate::analysis;
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::invoker::Invoker;
use crate::prompt::SummaryPromptBuilder;
use crate::text::{self, MIN_TERM_LENGTH};
use crate::types::Generated;
use notewise_domain::{SummaryFormat, SummaryLength, TextGenerator};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Anchor sentences must be longer than this many characters
const ANCHOR_MIN_CHARS: usize = 20;

/// Supporting sentences must be longer than this many characters
const SUPPORT_MIN_CHARS: usize = 15;

/// Terms kept from the frequency ranking
const RANKED_TERM_LIMIT: usize = 10;

const BULLET: &str = "• ";

/// Produces summaries through the AI backend, falling back to extraction
pub struct SummaryGenerator<L> {
    invoker: Invoker<L>,
    config: GeneratorConfig,
}

impl<L: TextGenerator> SummaryGenerator<L> {
    /// Create a generator over a shared backend
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

    /// Summarize `text`
    ///
    /// Never fails: if the backend is unavailable or its call fails the
    /// extractive fallback is returned. Blank input yields an empty string.
    pub async fn generate_summary(
        &self,
        text: &str,
        length: SummaryLength,
        format: SummaryFormat,
    ) -> Generated<String> {
        if text.trim().is_empty() {
            return Generated::skipped(String::new());
        }

        let length = resolve_length(text, length);
        match self.try_ai(text, length, format).await {
            Ok(summary) => {
                info!(length = length.as_str(), "Generated summary with AI backend");
                Generated::ai(summary)
            }
            Err(e) => {
                warn!("AI summary failed, using fallback: {}", e);
                Generated::fallback(fallback_summary(text, length, format))
            }
        }
    }

    async fn try_ai(
        &self,
        text: &str,
        length: SummaryLength,
        format: SummaryFormat,
    ) -> Result<String, GeneratorError> {
        let prompt = SummaryPromptBuilder::new(text, length, format)
            .with_max_text_length(self.config.max_text_length)
            .build();
        self.invoker
            .invoke(&prompt, self.config.summary_options(length))
            .await
    }
}

/// Resolve `Auto` from word and sentence counts; other lengths pass through
pub fn resolve_length(text: &str, length: SummaryLength) -> SummaryLength {
    if length != SummaryLength::Auto {
        return length;
    }

    let words = text::word_count(text);
    let sentences = text::sentence_count(text);
    if words < 50 || sentences < 3 {
        SummaryLength::Short
    } else if words < 500 || sentences < 10 {
        SummaryLength::Medium
    } else {
        SummaryLength::Long
    }
}

/// Extractive summary built from the text alone
///
/// Deterministic: the same input always produces the same output.
pub fn fallback_summary(text: &str, length: SummaryLength, format: SummaryFormat) -> String {
    let length = resolve_length(text, length);
    let sentences = text::sentences(text);
    let terms = text::top_terms(text, MIN_TERM_LENGTH, RANKED_TERM_LIMIT);

    let Some(anchor_idx) = sentences
        .iter()
        .position(|s| s.chars().count() > ANCHOR_MIN_CHARS)
    else {
        return render(&[generic_clause(&terms)], format);
    };

    let anchor = &sentences[anchor_idx];
    let mut supporting = sentences[anchor_idx + 1..]
        .iter()
        .filter(|s| s.chars().count() > SUPPORT_MIN_CHARS && *s != anchor)
        .cloned();

    let mut clauses = vec![anchor.clone()];
    match length {
        SummaryLength::Short | SummaryLength::Auto => {
            if let Some(top) = terms.first() {
                clauses.push(format!("The central concept is {}.", top));
            }
        }
        SummaryLength::Medium => {
            clauses.extend(supporting.next());
            if !terms.is_empty() {
                let key = &terms[..terms.len().min(3)];
                clauses.push(format!("Key concepts include {}.", text::join_terms(key)));
            }
            clauses.push(format!(
                "This content is {}.",
                analysis::detect_content_type(text).label()
            ));
        }
        SummaryLength::Long => {
            clauses.extend(supporting.take(2));
            if !terms.is_empty() {
                clauses.push(concepts_clause(&terms));
            }
            clauses.push(structure_clause(text));
            if analysis::mentions_practical_use(text) {
                clauses.push("The material also points to practical applications of these ideas.".to_string());
            }
        }
    }

    render(&clauses, format)
}

fn concepts_clause(terms: &[String]) -> String {
    const SHOWN: usize = 5;
    if terms.len() <= SHOWN {
        return format!("Main concepts covered: {}.", text::join_terms(terms));
    }

    let rest = terms.len() - SHOWN;
    let noun = if rest == 1 { "concept" } else { "concepts" };
    format!(
        "Main concepts covered: {} and {} more {}.",
        terms[..SHOWN].join(", "),
        rest,
        noun
    )
}

fn structure_clause(text: &str) -> String {
    let hints = analysis::structural_hints(text);
    if hints.is_empty() {
        return "The material is presented as continuous prose.".to_string();
    }
    let described: Vec<&str> = hints.iter().map(|h| h.description()).collect();
    format!("Structurally, the material features {}.", text::join_terms(&described))
}

fn generic_clause(terms: &[String]) -> String {
    if terms.is_empty() {
        return "This note is too short to summarize.".to_string();
    }
    let top = &terms[..terms.len().min(3)];
    format!("This note covers {}.", text::join_terms(top))
}

fn render(clauses: &[String], format: SummaryFormat) -> String {
    match format {
        SummaryFormat::Paragraph => clauses.join(" "),
        SummaryFormat::BulletPoints => clauses
            .iter()
            .map(|c| format!("{BULLET}{c}"))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
