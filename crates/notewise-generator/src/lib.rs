//! Notewise Generator
//!
//! Turns study notes into summaries, quizzes and keyword lists.
//!
//! # Overview
//!
//! Every capability has two implementations. The AI path builds a prompt,
//! calls a [`TextGenerator`](notewise_domain::TextGenerator) backend and
//! parses its answer. The fallback path is a pure, deterministic algorithm
//! over the text itself. Any failure on the AI path (backend unavailable,
//! transport error, timeout, cancellation, unparseable output) silently
//! switches to the fallback, so callers always receive a usable value. The
//! [`Generated::source`] tag records which path produced it.
//!
//! ```text
//! text ─┬─> prompt ─> backend ─> parser ─┬─> Generated<T>
//!       └──────────> fallback ───────────┘
//! ```
//!
//! Blank input short-circuits to an empty result without touching the
//! backend.
//!
//! # Example Usage
//!
//! ```no_run
//! use notewise_domain::{SummaryFormat, SummaryLength};
//! use notewise_generator::{ContentGenerator, GeneratorConfig, QuizOptions};
//! use notewise_llm::MockProvider;
//!
//! # async fn example() {
//! let generator = ContentGenerator::new(MockProvider::unavailable(), GeneratorConfig::default());
//!
//! let notes = "Photosynthesis converts light energy into chemical energy.";
//! let summary = generator
//!     .generate_summary(notes, SummaryLength::Auto, SummaryFormat::Paragraph)
//!     .await;
//! println!("{} ({})", summary.content, summary.source);
//!
//! let quiz = generator.generate_quiz(notes, &QuizOptions::with_count(3)).await;
//! assert_eq!(quiz.content.questions.len(), 3);
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod invoker;
mod keywords;
mod parser;
mod prompt;
mod quiz;
mod quiz_templates;
mod summary;
mod types;

pub mod analysis;
pub mod text;

#[cfg(test)]
mod tests;

pub use analysis::{ContentAnalysis, ContentType, StructuralHint};
pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use generator::ContentGenerator;
pub use keywords::{fallback_keywords, KeywordExtractor};
pub use parser::{parse_keyword_response, parse_quiz_response};
pub use prompt::{KeywordPromptBuilder, QuizPromptBuilder, SummaryPromptBuilder};
pub use quiz::{fallback_quiz, key_terms, QuizGenerator};
pub use summary::{fallback_summary, resolve_length, SummaryGenerator};
pub use types::{option_label, Generated, Question, QuizOptions, QuizResult, DEFAULT_NOTE_TITLE};
