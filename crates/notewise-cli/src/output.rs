//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::{Color, Colorize};
use notewise_domain::GenerationSource;
use notewise_generator::{ContentAnalysis, Generated, QuizResult};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a summary.
    pub fn summary(&self, summary: &Generated<String>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "source": summary.source.as_str(),
                "summary": summary.content,
            }))?),
            OutputFormat::Text | OutputFormat::Table => Ok(summary.content.clone()),
        }
    }

    /// Format a quiz; `show_answers` only affects text output.
    pub fn quiz(&self, quiz: &Generated<QuizResult>, show_answers: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "source": quiz.source.as_str(),
                "questions": quiz.content.questions,
            }))?),
            OutputFormat::Table => Ok(self.quiz_table(&quiz.content)),
            OutputFormat::Text => Ok(self.quiz_text(&quiz.content, show_answers)),
        }
    }

    /// Format a keyword list.
    pub fn keywords(&self, keywords: &Generated<Vec<String>>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "source": keywords.source.as_str(),
                "keywords": keywords.content,
            }))?),
            OutputFormat::Table => {
                if keywords.content.is_empty() {
                    return Ok(self.colorize("No keywords found.", Color::Yellow));
                }
                let mut builder = Builder::default();
                builder.push_record(["Rank", "Keyword"]);
                for (idx, keyword) in keywords.content.iter().enumerate() {
                    builder.push_record([(idx + 1).to_string(), keyword.clone()]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Text => Ok(keywords.content.join(", ")),
        }
    }

    /// Format a content analysis.
    pub fn analysis(&self, analysis: &ContentAnalysis) -> Result<String> {
        let hints: Vec<&str> = analysis.hints.iter().map(|h| h.description()).collect();
        let rows = [
            ("Words", analysis.word_count.to_string()),
            ("Sentences", analysis.sentence_count.to_string()),
            ("Paragraphs", analysis.paragraph_count.to_string()),
            ("Content type", analysis.content_type.label().to_string()),
            ("Structure", or_none(hints.join(", "))),
            ("Technical terms", or_none(analysis.technical_terms.join(", "))),
            ("Action words", or_none(analysis.action_words.join(", "))),
        ];

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Property", "Value"]);
                for (name, value) in rows {
                    builder.push_record([name.to_string(), value]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Text => Ok(rows
                .iter()
                .map(|(name, value)| format!("{}: {}", self.colorize(name, Color::Cyan), value))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Status line describing which path produced a result.
    pub fn source_status(&self, source: GenerationSource) -> String {
        match source {
            GenerationSource::Ai => self.success("Generated by the AI backend"),
            GenerationSource::Fallback => {
                self.warning("AI backend unavailable or failed; used the local fallback")
            }
            GenerationSource::Skipped => self.info("Input was empty; nothing to generate"),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), Color::Green)
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), Color::Blue)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    fn quiz_text(&self, quiz: &QuizResult, show_answers: bool) -> String {
        if quiz.is_empty() {
            return self.colorize("No questions generated.", Color::Yellow);
        }

        let mut out = Vec::new();
        for (idx, question) in quiz.questions.iter().enumerate() {
            let heading = format!("{}. {}", idx + 1, question.question);
            out.push(self.colorize(&heading, Color::Cyan));
            for option in &question.options {
                out.push(format!("   {}", option));
            }
            if show_answers {
                out.push(format!("   Answer: {}", question.correct_answer));
                if let Some(explanation) = &question.explanation {
                    out.push(format!("   {}", explanation));
                }
            }
            out.push(String::new());
        }
        out.join("\n").trim_end().to_string()
    }

    fn quiz_table(&self, quiz: &QuizResult) -> String {
        if quiz.is_empty() {
            return self.colorize("No questions generated.", Color::Yellow);
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Question", "Options", "Answer"]);
        for (idx, question) in quiz.questions.iter().enumerate() {
            builder.push_record([
                (idx + 1).to_string(),
                question.question.clone(),
                question.options.join("\n"),
                question.correct_answer.clone(),
            ]);
        }
        self.render(builder)
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: Color) -> String {
        if self.color_enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn or_none(value: String) -> String {
    if value.is_empty() {
        "none".to_string()
    } else {
        value
    }
}
