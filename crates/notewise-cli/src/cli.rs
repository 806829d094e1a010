//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use notewise_domain::{Difficulty, QuizType, SummaryFormat, SummaryLength};
use std::path::PathBuf;

/// Notewise - Summaries, quizzes and keywords from your study notes.
#[derive(Debug, Parser)]
#[command(name = "notewise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API key for the generative backend
    #[arg(long, env = "NOTEWISE_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Skip the AI backend and use local fallbacks only
    #[arg(long, global = true)]
    pub offline: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Plain text (default)
    Text,
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a note
    Summarize(SummarizeArgs),

    /// Generate a quiz from a note
    Quiz(QuizArgs),

    /// Extract keywords from a note
    Keywords(KeywordsArgs),

    /// Show the structural analysis of a note
    Analyze(InputArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

impl Command {
    /// Note source of a generating command; `None` for `config`.
    pub fn input(&self) -> Option<&InputArgs> {
        match self {
            Command::Summarize(args) => Some(&args.input),
            Command::Quiz(args) => Some(&args.input),
            Command::Keywords(args) => Some(&args.input),
            Command::Analyze(input) => Some(input),
            Command::Config(_) => None,
        }
    }
}

/// Where to read the note from.
#[derive(Debug, Clone, Parser)]
pub struct InputArgs {
    /// Note file; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,
}

/// Arguments for the summarize command.
#[derive(Debug, Parser)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Summary length
    #[arg(short, long, value_enum, default_value = "auto")]
    pub length: LengthArg,

    /// Paragraph prose or bullet points
    #[arg(short, long, value_enum, default_value = "paragraph")]
    pub style: StyleArg,
}

/// Arguments for the quiz command.
#[derive(Debug, Parser)]
pub struct QuizArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of questions (defaults to the configured count)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Question difficulty
    #[arg(short, long, value_enum, default_value = "medium")]
    pub difficulty: DifficultyArg,

    /// Question types
    #[arg(short = 't', long = "type", value_enum, default_value = "multiple-choice")]
    pub quiz_type: QuizTypeArg,

    /// Note title mentioned in the prompt
    #[arg(long)]
    pub title: Option<String>,

    /// Include the answer key in text output
    #[arg(long)]
    pub answers: bool,
}

/// Arguments for the keywords command.
#[derive(Debug, Parser)]
pub struct KeywordsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of keywords (defaults to the configured count)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a configuration file
    Init {
        /// Generator preset to start from
        #[arg(short, long, value_enum, default_value = "default")]
        preset: PresetArg,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

/// Summary length argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LengthArg {
    /// Two or three sentences
    Short,
    /// One or two paragraphs
    Medium,
    /// Detailed coverage
    Long,
    /// Chosen from the note's size
    Auto,
}

/// Summary style argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StyleArg {
    /// Continuous prose
    Paragraph,
    /// One idea per bullet
    Bullets,
}

/// Difficulty argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DifficultyArg {
    /// Recall questions
    Easy,
    /// Relationship questions
    Medium,
    /// Analysis and synthesis questions
    Hard,
}

/// Quiz type argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum QuizTypeArg {
    /// Four options per question
    MultipleChoice,
    /// True/false statements
    TrueFalse,
    /// Mostly multiple-choice with some true/false
    Mixed,
}

/// Generator preset argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Balanced defaults
    Default,
    /// Small budgets, short timeout
    Concise,
    /// Large budgets, generous timeout
    Thorough,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<LengthArg> for SummaryLength {
    fn from(length: LengthArg) -> Self {
        match length {
            LengthArg::Short => SummaryLength::Short,
            LengthArg::Medium => SummaryLength::Medium,
            LengthArg::Long => SummaryLength::Long,
            LengthArg::Auto => SummaryLength::Auto,
        }
    }
}

impl From<StyleArg> for SummaryFormat {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Paragraph => SummaryFormat::Paragraph,
            StyleArg::Bullets => SummaryFormat::BulletPoints,
        }
    }
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

impl From<QuizTypeArg> for QuizType {
    fn from(quiz_type: QuizTypeArg) -> Self {
        match quiz_type {
            QuizTypeArg::MultipleChoice => QuizType::MultipleChoice,
            QuizTypeArg::TrueFalse => QuizType::TrueFalse,
            QuizTypeArg::Mixed => QuizType::Mixed,
        }
    }
}
