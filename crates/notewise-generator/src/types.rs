//! Request and response types for generation

use notewise_domain::{Difficulty, GenerationSource, QuizType};
use serde::{Deserialize, Serialize};

/// Title used in quiz prompts when the caller gives none
pub const DEFAULT_NOTE_TITLE: &str = "Study Notes";

/// A generated value together with where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    /// The generated value
    pub content: T,

    /// AI backend, local fallback, or skipped for empty input
    pub source: GenerationSource,
}

impl<T> Generated<T> {
    /// Value produced by the AI backend
    pub fn ai(content: T) -> Self {
        Self {
            content,
            source: GenerationSource::Ai,
        }
    }

    /// Value produced by the local fallback
    pub fn fallback(content: T) -> Self {
        Self {
            content,
            source: GenerationSource::Fallback,
        }
    }

    /// Value returned without generating anything
    pub fn skipped(content: T) -> Self {
        Self {
            content,
            source: GenerationSource::Skipped,
        }
    }
}

/// Options for quiz generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOptions {
    /// Question style tier
    pub difficulty: Difficulty,

    /// Number of questions requested
    pub question_count: usize,

    /// Question type mix
    pub quiz_type: QuizType,

    /// Title of the note the quiz is about
    pub note_title: Option<String>,
}

impl QuizOptions {
    /// Options with the given count and defaults elsewhere
    pub fn with_count(question_count: usize) -> Self {
        Self {
            question_count,
            ..Self::default()
        }
    }

    /// Title to mention in prompts
    pub fn title(&self) -> &str {
        self.note_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_NOTE_TITLE)
    }
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            question_count: 5,
            quiz_type: QuizType::MultipleChoice,
            note_title: None,
        }
    }
}

/// A single quiz question
///
/// Options are rendered with their label, e.g. `"A) Paris"`; `correct_answer`
/// holds the bare label (`"A"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question or true/false statement
    pub question: String,

    /// Labelled answer options
    pub options: Vec<String>,

    /// Label of the correct option
    pub correct_answer: String,

    /// Optional explanation supplied by the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// Build a question from unlabelled options, labelling them `A)`, `B)`, ...
    pub fn labelled(
        question: impl Into<String>,
        answers: &[&str],
        correct_index: usize,
    ) -> Self {
        let options = answers
            .iter()
            .enumerate()
            .map(|(idx, answer)| format!("{}) {}", option_label(idx), answer))
            .collect();

        Self {
            question: question.into(),
            options,
            correct_answer: option_label(correct_index).to_string(),
            explanation: None,
        }
    }

    /// Whether this is a two-option true/false item
    pub fn is_true_false(&self) -> bool {
        self.options.len() == 2
    }

    /// Labels parsed from the options, in order
    pub fn labels(&self) -> Vec<Option<char>> {
        self.options.iter().map(|o| parse_label(o)).collect()
    }

    /// Validate that the question is well formed
    ///
    /// The correct answer must name exactly one option label.
    pub fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("question is empty".to_string());
        }
        if self.options.len() < 2 {
            return Err(format!("expected at least 2 options, got {}", self.options.len()));
        }

        let mut answer = self.correct_answer.trim().chars();
        let (Some(label), None) = (answer.next(), answer.next()) else {
            return Err(format!(
                "correct_answer '{}' is not a single label",
                self.correct_answer
            ));
        };

        let matches = self
            .labels()
            .into_iter()
            .filter(|l| *l == Some(label.to_ascii_uppercase()))
            .count();
        if matches != 1 {
            return Err(format!(
                "correct_answer '{}' matches {} options",
                self.correct_answer, matches
            ));
        }
        Ok(())
    }
}

/// A set of quiz questions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Questions in presentation order
    pub questions: Vec<Question>,
}

impl QuizResult {
    /// An empty quiz
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the quiz has no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Label for the option at `index` (`0 -> 'A'`)
pub fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Leading `X)` or `X.` label of an option, uppercased
fn parse_label(option: &str) -> Option<char> {
    let mut chars = option.trim_start().chars();
    let label = chars.next()?.to_ascii_uppercase();
    match (label.is_ascii_uppercase(), chars.next()) {
        (true, Some(')' | '.')) => Some(label),
        _ => None,
    }
}
