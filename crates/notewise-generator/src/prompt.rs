//! Prompt construction for summaries, quizzes and keywords
//!
//! Wording lives in the constants at the bottom of this file. The builders
//! only decide which template applies and fill in the placeholders.

use crate::analysis::{self, ContentAnalysis};
use crate::text;
use crate::types::QuizOptions;
use notewise_domain::{Difficulty, QuizType, SummaryFormat, SummaryLength};

/// Builds summary prompts
pub struct SummaryPromptBuilder<'a> {
    text: &'a str,
    length: SummaryLength,
    format: SummaryFormat,
    max_text_length: usize,
}

impl<'a> SummaryPromptBuilder<'a> {
    /// Create a builder; `length` should already be resolved from `Auto`
    pub fn new(text: &'a str, length: SummaryLength, format: SummaryFormat) -> Self {
        Self {
            text,
            length,
            format,
            max_text_length: usize::MAX,
        }
    }

    /// Cut the embedded note to `max_chars` characters
    pub fn with_max_text_length(mut self, max_chars: usize) -> Self {
        self.max_text_length = max_chars;
        self
    }

    /// Build the complete summary prompt
    pub fn build(&self) -> String {
        let analysis = analysis::analyze(self.text);
        let mut prompt = String::new();

        prompt.push_str(SUMMARY_INSTRUCTIONS);
        prompt.push_str("\n\n");
        prompt.push_str(summary_length_instruction(self.length));
        prompt.push('\n');
        prompt.push_str(summary_format_instruction(self.format));
        prompt.push_str("\n\n");

        prompt.push_str(&analysis_block(&analysis));
        prompt.push('\n');

        push_note(&mut prompt, self.text, self.max_text_length);
        prompt.push_str(SUMMARY_REMINDER);
        prompt
    }
}

/// Builds quiz prompts
pub struct QuizPromptBuilder<'a> {
    text: &'a str,
    options: &'a QuizOptions,
    max_text_length: usize,
}

impl<'a> QuizPromptBuilder<'a> {
    /// Create a builder
    pub fn new(text: &'a str, options: &'a QuizOptions) -> Self {
        Self {
            text,
            options,
            max_text_length: usize::MAX,
        }
    }

    /// Cut the embedded note to `max_chars` characters
    pub fn with_max_text_length(mut self, max_chars: usize) -> Self {
        self.max_text_length = max_chars;
        self
    }

    /// Build the complete quiz prompt
    pub fn build(&self) -> String {
        let count = self.options.question_count;
        let mut prompt = String::new();

        prompt.push_str(
            &QUIZ_INSTRUCTIONS
                .replace("{difficulty}", self.options.difficulty.as_str())
                .replace("{count}", &count.to_string())
                .replace("{title}", self.options.title()),
        );
        prompt.push_str("\n\n");

        prompt.push_str(difficulty_instruction(self.options.difficulty));
        prompt.push_str("\n\n");
        prompt.push_str(&quiz_type_instruction(self.options.quiz_type, count));
        prompt.push_str("\n\n");

        push_note(&mut prompt, self.text, self.max_text_length);
        prompt.push_str(QUIZ_FORMAT_REMINDER);
        prompt
    }
}

/// Builds keyword extraction prompts
pub struct KeywordPromptBuilder<'a> {
    text: &'a str,
    count: usize,
    max_text_length: usize,
}

impl<'a> KeywordPromptBuilder<'a> {
    /// Create a builder
    pub fn new(text: &'a str, count: usize) -> Self {
        Self {
            text,
            count,
            max_text_length: usize::MAX,
        }
    }

    /// Cut the embedded note to `max_chars` characters
    pub fn with_max_text_length(mut self, max_chars: usize) -> Self {
        self.max_text_length = max_chars;
        self
    }

    /// Build the complete keyword prompt
    pub fn build(&self) -> String {
        let mut prompt = KEYWORD_INSTRUCTIONS.replace("{count}", &self.count.to_string());
        prompt.push_str("\n\n");
        push_note(&mut prompt, self.text, self.max_text_length);
        prompt.push_str(KEYWORD_REMINDER);
        prompt
    }
}

/// Instruction for the requested summary length
pub fn summary_length_instruction(length: SummaryLength) -> &'static str {
    match length {
        SummaryLength::Short => SHORT_SUMMARY,
        SummaryLength::Medium | SummaryLength::Auto => MEDIUM_SUMMARY,
        SummaryLength::Long => LONG_SUMMARY,
    }
}

/// Instruction for the requested summary format
pub fn summary_format_instruction(format: SummaryFormat) -> &'static str {
    match format {
        SummaryFormat::Paragraph => PARAGRAPH_FORMAT,
        SummaryFormat::BulletPoints => BULLET_FORMAT,
    }
}

/// Question-style template for a difficulty tier
pub fn difficulty_instruction(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => EASY_QUESTIONS,
        Difficulty::Medium => MEDIUM_QUESTIONS,
        Difficulty::Hard => HARD_QUESTIONS,
    }
}

/// Question-type wording with the per-type counts filled in
pub fn quiz_type_instruction(quiz_type: QuizType, count: usize) -> String {
    let (multiple_choice, true_false) = quiz_type.allocation(count);
    let template = match quiz_type {
        QuizType::MultipleChoice => MULTIPLE_CHOICE_TYPE,
        QuizType::TrueFalse => TRUE_FALSE_TYPE,
        QuizType::Mixed => MIXED_TYPE,
    };
    template
        .replace("{count}", &count.to_string())
        .replace("{mc}", &multiple_choice.to_string())
        .replace("{tf}", &true_false.to_string())
}

fn analysis_block(analysis: &ContentAnalysis) -> String {
    let hints: Vec<&str> = analysis.hints.iter().map(|h| h.description()).collect();
    let mut block = String::from("Content analysis:\n");
    block.push_str(&format!("- Type: {}\n", analysis.content_type.label()));
    block.push_str(&format!(
        "- Size: {} words, {} sentences, {} paragraphs\n",
        analysis.word_count, analysis.sentence_count, analysis.paragraph_count
    ));
    if !hints.is_empty() {
        block.push_str(&format!("- Structure: {}\n", text::join_terms(&hints)));
    }
    if !analysis.technical_terms.is_empty() {
        block.push_str(&format!(
            "- Technical terms to keep: {}\n",
            analysis.technical_terms.join(", ")
        ));
    }
    if !analysis.action_words.is_empty() {
        block.push_str(&format!(
            "- Actions described: {}\n",
            analysis.action_words.join(", ")
        ));
    }
    block
}

fn push_note(prompt: &mut String, note: &str, max_chars: usize) {
    prompt.push_str("Notes:\n---\n");
    prompt.push_str(text::truncate_chars(note.trim(), max_chars));
    prompt.push_str("\n---\n\n");
}

const SUMMARY_INSTRUCTIONS: &str = "You are a study assistant. Summarize the student's notes below \
so they can review the material quickly. Keep the original terminology and do not add facts \
that are not in the notes.";

const SHORT_SUMMARY: &str = "Length: write a brief summary of 2-3 sentences covering only the central idea.";

const MEDIUM_SUMMARY: &str = "Length: write a summary of one or two paragraphs covering the main ideas and how they relate.";

const LONG_SUMMARY: &str = "Length: write a detailed summary covering every major idea, the supporting details, \
and any practical applications mentioned.";

const PARAGRAPH_FORMAT: &str = "Format: continuous prose paragraphs.";

const BULLET_FORMAT: &str = "Format: a bulleted list, one idea per bullet, each bullet starting with \"• \".";

const SUMMARY_REMINDER: &str = "Return only the summary, without a title or preamble.";

const QUIZ_INSTRUCTIONS: &str = "Create a quiz of {difficulty} difficulty with exactly {count} \
questions about the notes titled \"{title}\".";

const EASY_QUESTIONS: &str = "Style: test recall. Ask about definitions, names and facts stated \
directly in the notes. Keep wording simple and distractors clearly wrong.";

const MEDIUM_QUESTIONS: &str = "Style: test understanding of relationships. Ask how concepts \
connect, why something happens, and what follows from what. Distractors should be plausible.";

const HARD_QUESTIONS: &str = "Style: test analysis and synthesis. Ask the student to apply ideas \
to new situations, compare alternatives, or infer consequences not stated outright. \
Distractors should reflect common misconceptions.";

const MULTIPLE_CHOICE_TYPE: &str = "All {count} questions must be multiple-choice with exactly four \
options labelled \"A) \", \"B) \", \"C) \" and \"D) \".";

const TRUE_FALSE_TYPE: &str = "All {count} questions must be true/false statements with exactly two \
options: \"A) True\" and \"B) False\".";

const MIXED_TYPE: &str = "Write {mc} multiple-choice questions with four options labelled \"A) \" to \
\"D) \", and {tf} true/false statements with the options \"A) True\" and \"B) False\".";

const QUIZ_FORMAT_REMINDER: &str = r#"Respond with JSON only, in exactly this shape:
{"questions": [{"question": "...", "options": ["A) ...", "B) ...", "C) ...", "D) ..."], "correct_answer": "A", "explanation": "..."}]}
"correct_answer" must be the single letter of the correct option."#;

const KEYWORD_INSTRUCTIONS: &str = "Extract the {count} most important keywords or key phrases \
from the notes below, most important first.";

const KEYWORD_REMINDER: &str = "Return them as a single comma-separated list with no numbering, \
quotes or extra text.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_contains_note_and_choices() {
        let prompt = SummaryPromptBuilder::new(
            "First, boil water. Then add the pasta.",
            SummaryLength::Short,
            SummaryFormat::BulletPoints,
        )
        .build();

        assert!(prompt.contains("Summarize"));
        assert!(prompt.contains(SHORT_SUMMARY));
        assert!(prompt.contains(BULLET_FORMAT));
        assert!(prompt.contains("a process or methodology"));
        assert!(prompt.contains("First, boil water. Then add the pasta."));
    }

    #[test]
    fn test_summary_prompt_truncates_note() {
        let text = "word ".repeat(100);
        let prompt = SummaryPromptBuilder::new(&text, SummaryLength::Long, SummaryFormat::Paragraph)
            .with_max_text_length(20)
            .build();
        assert!(prompt.contains("---\nword word word word \n---"));
    }

    #[test]
    fn test_difficulty_selects_template() {
        assert_eq!(difficulty_instruction(Difficulty::Easy), EASY_QUESTIONS);
        assert_eq!(difficulty_instruction(Difficulty::Medium), MEDIUM_QUESTIONS);
        assert_eq!(difficulty_instruction(Difficulty::Hard), HARD_QUESTIONS);
    }

    #[test]
    fn test_mixed_allocation_wording() {
        let wording = quiz_type_instruction(QuizType::Mixed, 5);
        assert!(wording.starts_with("Write 3 multiple-choice questions"));
        assert!(wording.contains("and 2 true/false statements"));
    }

    #[test]
    fn test_quiz_prompt() {
        let options = QuizOptions {
            difficulty: Difficulty::Hard,
            question_count: 4,
            quiz_type: QuizType::TrueFalse,
            note_title: Some("Thermodynamics".to_string()),
        };
        let prompt = QuizPromptBuilder::new("Heat flows from hot to cold.", &options).build();

        assert!(prompt.contains("Create a quiz of hard difficulty with exactly 4 questions"));
        assert!(prompt.contains("\"Thermodynamics\""));
        assert!(prompt.contains(HARD_QUESTIONS));
        assert!(prompt.contains("All 4 questions must be true/false"));
        assert!(prompt.contains("\"questions\""));
    }

    #[test]
    fn test_keyword_prompt() {
        let prompt = KeywordPromptBuilder::new("Rust ownership rules.", 7).build();
        assert!(prompt.contains("Extract the 7 most important keywords"));
        assert!(prompt.contains("comma-separated"));
        assert!(prompt.contains("Rust ownership rules."));
    }
}
