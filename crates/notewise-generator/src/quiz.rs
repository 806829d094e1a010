//! Quiz generation with a template fallback

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::invoker::Invoker;
use crate::parser;
use crate::prompt::QuizPromptBuilder;
use crate::quiz_templates::{
    ChoiceTemplate, StatementTemplate, GENERIC_CHOICES, GENERIC_STATEMENTS, TERM_CHOICES,
    TERM_STATEMENTS,
};
use crate::text;
use crate::types::{Generated, Question, QuizOptions, QuizResult};
use notewise_domain::{QuizType, TextGenerator};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Fallback key terms must be longer than this many characters
const KEY_TERM_MIN_EXCLUSIVE: usize = 3;

/// Upper bound on fallback key terms
const MAX_KEY_TERMS: usize = 10;

const TRUE_FALSE_ANSWERS: [&str; 2] = ["True", "False"];

/// Produces quizzes through the AI backend, falling back to templates
pub struct QuizGenerator<L> {
    invoker: Invoker<L>,
    config: GeneratorConfig,
}

impl<L: TextGenerator> QuizGenerator<L> {
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

    /// Generate a quiz about `text`
    ///
    /// Never fails. Blank input or a zero question count yields an empty
    /// quiz without calling the backend.
    pub async fn generate_quiz(&self, text: &str, options: &QuizOptions) -> Generated<QuizResult> {
        if text.trim().is_empty() || options.question_count == 0 {
            return Generated::skipped(QuizResult::empty());
        }

        match self.try_ai(text, options).await {
            Ok(quiz) => {
                if quiz.len() != options.question_count {
                    warn!(
                        "AI quiz has {} questions, {} were requested",
                        quiz.len(),
                        options.question_count
                    );
                }
                info!(
                    questions = quiz.len(),
                    quiz_type = options.quiz_type.as_str(),
                    "Generated quiz with AI backend"
                );
                Generated::ai(quiz)
            }
            Err(e) => {
                warn!("AI quiz failed, using fallback: {}", e);
                Generated::fallback(fallback_quiz(text, options))
            }
        }
    }

    async fn try_ai(&self, text: &str, options: &QuizOptions) -> Result<QuizResult, GeneratorError> {
        let prompt = QuizPromptBuilder::new(text, options)
            .with_max_text_length(self.config.max_text_length)
            .build();
        let response = self
            .invoker
            .invoke(&prompt, self.config.quiz_options())
            .await?;
        parser::parse_quiz_response(&response)
    }
}

/// Key terms for fallback questions
///
/// Lowercase words longer than three characters, stop words removed,
/// deduplicated in first-seen order.
pub fn key_terms(text: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for word in text::words(text) {
        if word.chars().count() <= KEY_TERM_MIN_EXCLUSIVE
            || text::is_stop_word(&word)
            || terms.contains(&word)
        {
            continue;
        }
        terms.push(word);
        if terms.len() == MAX_KEY_TERMS {
            break;
        }
    }
    terms
}

/// Template quiz with exactly `question_count` questions
///
/// Deterministic. Multiple-choice questions always have `A` as the answer.
pub fn fallback_quiz(text: &str, options: &QuizOptions) -> QuizResult {
    let terms = key_terms(text);
    let questions = (0..options.question_count)
        .map(|i| {
            let term = (!terms.is_empty()).then(|| terms[i % terms.len()].as_str());
            if is_true_false_slot(options.quiz_type, i) {
                statement_question(i, term)
            } else {
                choice_question(i, term)
            }
        })
        .collect();

    QuizResult { questions }
}

fn is_true_false_slot(quiz_type: QuizType, index: usize) -> bool {
    match quiz_type {
        QuizType::MultipleChoice => false,
        QuizType::TrueFalse => true,
        QuizType::Mixed => index % 3 == 2,
    }
}

fn choice_question(index: usize, term: Option<&str>) -> Question {
    let bank: &[ChoiceTemplate] = if term.is_some() { TERM_CHOICES } else { GENERIC_CHOICES };
    let template = &bank[index % bank.len()];
    Question::labelled(fill(template.question, term), &template.answers, 0)
}

fn statement_question(index: usize, term: Option<&str>) -> Question {
    let bank: &[StatementTemplate] = if term.is_some() {
        TERM_STATEMENTS
    } else {
        GENERIC_STATEMENTS
    };
    let template = &bank[index % bank.len()];
    let correct = if template.is_true { 0 } else { 1 };
    Question::labelled(fill(template.statement, term), &TRUE_FALSE_ANSWERS, correct)
}

/// Substitute `term` and capitalize the first letter
fn fill(template: &str, term: Option<&str>) -> String {
    let filled = match term {
        Some(term) => template.replace("{term}", term),
        None => template.to_string(),
    };
    let mut chars = filled.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => filled,
    }
}
