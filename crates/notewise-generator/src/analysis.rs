//! Content structure analysis
//!
//! Cheap heuristics describing what kind of text a note is. The result only
//! enriches prompts and the fallback summary; it is never persisted.

use crate::text;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Broad category of a text, detected from marker phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Step-by-step procedures and methodologies
    Process,
    /// Concepts, principles and theories
    Theoretical,
    /// Comparisons and contrasts
    Comparative,
    /// Worked examples and applications
    Practical,
    /// Problems and their solutions
    ProblemSolution,
    /// Nothing more specific matched
    General,
}

impl ContentType {
    /// Get the content type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Process => "process",
            ContentType::Theoretical => "theoretical",
            ContentType::Comparative => "comparative",
            ContentType::Practical => "practical",
            ContentType::ProblemSolution => "problem_solution",
            ContentType::General => "general",
        }
    }

    /// Human-readable label used in prompts and summaries
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Process => "a process or methodology",
            ContentType::Theoretical => "conceptual or theoretical material",
            ContentType::Comparative => "a comparative analysis",
            ContentType::Practical => "practical, example-driven material",
            ContentType::ProblemSolution => "a problem and its solution",
            ContentType::General => "general informational content",
        }
    }
}

/// Structural feature of a text worth mentioning to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralHint {
    /// More than one paragraph
    MultiParagraph,
    /// Bulleted or numbered list lines
    Lists,
    /// Words flagging importance ("important", "key", ...)
    Emphasis,
    /// Reasoning connectors ("therefore", "because", ...)
    LogicalConnectors,
}

impl StructuralHint {
    /// Short description used in prompts and summaries
    pub fn description(&self) -> &'static str {
        match self {
            StructuralHint::MultiParagraph => "multiple paragraphs",
            StructuralHint::Lists => "lists or enumerations",
            StructuralHint::Emphasis => "emphasized key points",
            StructuralHint::LogicalConnectors => "cause-and-effect reasoning",
        }
    }
}

/// Derived description of an input text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentAnalysis {
    /// Whitespace-delimited words
    pub word_count: usize,
    /// `.`/`!`/`?` runs
    pub sentence_count: usize,
    /// Blank-line separated blocks
    pub paragraph_count: usize,
    /// First matching category
    pub content_type: ContentType,
    /// Structural features present, in fixed order
    pub hints: Vec<StructuralHint>,
    /// Capitalized two-word phrases, deduplicated
    pub technical_terms: Vec<String>,
    /// Words from the action-verb vocabulary, deduplicated
    pub action_words: Vec<String>,
}

/// Upper bound on reported technical terms
pub const MAX_TECHNICAL_TERMS: usize = 10;

/// A content type and the markers that select it
struct ContentRule {
    content_type: ContentType,
    matcher: Regex,
}

impl ContentRule {
    fn new(content_type: ContentType, markers: &[&str]) -> Self {
        let alternatives: Vec<String> = markers.iter().map(|m| regex::escape(m)).collect();
        let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
        Self {
            content_type,
            matcher: Regex::new(&pattern).expect("content markers form a valid pattern"),
        }
    }
}

/// Evaluated in order; the first match wins
static CONTENT_RULES: LazyLock<Vec<ContentRule>> = LazyLock::new(|| {
    vec![
        ContentRule::new(
            ContentType::Process,
            &[
                "step", "steps", "process", "procedure", "method", "methodology", "stage",
                "phase", "first", "next", "finally", "workflow",
            ],
        ),
        ContentRule::new(
            ContentType::Theoretical,
            &[
                "theory", "theories", "concept", "concepts", "principle", "principles",
                "hypothesis", "framework", "definition", "defined as", "theorem",
            ],
        ),
        ContentRule::new(
            ContentType::Comparative,
            &[
                "compared to", "compared with", "versus", "vs", "in contrast", "whereas",
                "unlike", "difference between", "differences", "similarities",
            ],
        ),
        ContentRule::new(
            ContentType::Practical,
            &[
                "for example", "for instance", "example", "examples", "case study",
                "in practice", "application", "applications", "applied",
            ],
        ),
        ContentRule::new(
            ContentType::ProblemSolution,
            &[
                "problem", "problems", "solution", "solutions", "solve", "solved", "issue",
                "challenge", "resolve", "fix",
            ],
        ),
    ]
});

static LIST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:[-*•]|\d+[.)])\s+\S").expect("list pattern is valid")
});

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:important|key|essential|critical|crucial|significant|note|remember)\b")
        .expect("emphasis pattern is valid")
});

static CONNECTORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:therefore|thus|hence|because|consequently|however|furthermore|moreover|as a result)\b",
    )
    .expect("connector pattern is valid")
});

static CAPITALIZED_BIGRAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b").expect("bigram pattern is valid")
});

const ACTION_WORDS: &[&str] = &[
    "analyze", "apply", "build", "calculate", "classify", "compare", "compute", "configure",
    "construct", "create", "define", "demonstrate", "derive", "describe", "design", "determine",
    "develop", "evaluate", "examine", "explain", "identify", "implement", "interpret",
    "measure", "model", "optimize", "predict", "prove", "solve", "test", "transform", "validate",
];

/// Words signalling that a text discusses real-world use
pub(crate) const PRACTICAL_INDICATORS: &[&str] = &[
    "apply", "applied", "application", "applications", "practice", "practical", "real-world",
    "example", "examples", "implement", "implementation", "use", "used", "using",
];

/// Analyze `text`
pub fn analyze(text: &str) -> ContentAnalysis {
    ContentAnalysis {
        word_count: text::word_count(text),
        sentence_count: text::sentence_count(text),
        paragraph_count: text::paragraphs(text).len(),
        content_type: detect_content_type(text),
        hints: structural_hints(text),
        technical_terms: technical_terms(text),
        action_words: action_words(text),
    }
}

/// First content type whose markers appear in `text`
pub fn detect_content_type(text: &str) -> ContentType {
    CONTENT_RULES
        .iter()
        .find(|rule| rule.matcher.is_match(text))
        .map(|rule| rule.content_type)
        .unwrap_or(ContentType::General)
}

/// Structural features present in `text`
pub fn structural_hints(text: &str) -> Vec<StructuralHint> {
    let checks = [
        (StructuralHint::MultiParagraph, text::paragraphs(text).len() > 1),
        (StructuralHint::Lists, LIST_LINE.is_match(text)),
        (StructuralHint::Emphasis, EMPHASIS.is_match(text)),
        (StructuralHint::LogicalConnectors, CONNECTORS.is_match(text)),
    ];
    checks
        .into_iter()
        .filter_map(|(hint, present)| present.then_some(hint))
        .collect()
}

/// Capitalized bigrams such as "Machine Learning", first-seen order
pub fn technical_terms(text: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for m in CAPITALIZED_BIGRAM.find_iter(text) {
        let term = m.as_str().to_string();
        if !terms.contains(&term) {
            terms.push(term);
        }
        if terms.len() == MAX_TECHNICAL_TERMS {
            break;
        }
    }
    terms
}

/// Action verbs from the fixed vocabulary, first-seen order
pub fn action_words(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for word in text::words(text) {
        if ACTION_WORDS.contains(&word.as_str()) && !found.contains(&word) {
            found.push(word);
        }
    }
    found
}

/// Whether `text` mentions practical use
pub(crate) fn mentions_practical_use(text: &str) -> bool {
    text::words(text)
        .iter()
        .any(|word| PRACTICAL_INDICATORS.contains(&word.as_str()))
}
