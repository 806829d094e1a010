//! Tokenization and term ranking shared by the analyzer and every fallback

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Minimum length of a term considered by keyword and summary ranking
pub const MIN_TERM_LENGTH: usize = 3;

const STOP_WORD_LIST: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "etc",
    "even", "every", "few", "for", "from", "further", "get", "gets", "had", "has", "have",
    "having", "he", "her", "here", "hers", "him", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "itself", "just", "many", "may", "me", "might", "more", "most",
    "much", "must", "my", "no", "nor", "not", "now", "of", "off", "on", "once", "one", "only",
    "or", "other", "our", "ours", "out", "over", "own", "same", "shall", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "upon", "us",
    "very", "via", "was", "we", "well", "were", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{L}[\p{L}\p{N}]*(?:['’-][\p{L}\p{N}]+)*").expect("word pattern is valid")
});

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence-end pattern is valid"));

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]*").expect("sentence pattern is valid"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("paragraph pattern is valid"));

/// Whether `word` (already lowercase) is in the fixed stop-word set
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Lowercase word tokens in document order
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whitespace-delimited word count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of `.`, `!` or `?` runs
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_END.find_iter(text).count()
}

/// Sentences with their terminating punctuation, trimmed, empty ones dropped
pub fn sentences(text: &str) -> Vec<String> {
    SENTENCE
        .find_iter(text)
        .map(|m| collapse_whitespace(m.as_str()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Non-blank paragraphs separated by empty lines
pub fn paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Rank non-stop-word terms of at least `min_length` chars by frequency
///
/// Ties keep first-occurrence order.
pub fn rank_terms(text: &str, min_length: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for word in words(text) {
        if word.chars().count() < min_length || is_stop_word(&word) {
            continue;
        }
        let count = counts.entry(word.clone()).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|word| {
            let count = counts.get(&word).copied().unwrap_or(0);
            (word, count)
        })
        .collect();
    // stable sort keeps first-seen order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Top `limit` ranked terms, without counts
pub fn top_terms(text: &str, min_length: usize, limit: usize) -> Vec<String> {
    rank_terms(text, min_length)
        .into_iter()
        .take(limit)
        .map(|(word, _)| word)
        .collect()
}

/// Join terms as natural-language list: `a`, `a and b`, `a, b and c`
pub fn join_terms<S: AsRef<str>>(terms: &[S]) -> String {
    match terms {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Cut `text` to at most `max_chars` characters on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
