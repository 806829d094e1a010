//! Quiz command implementation.

use crate::cli::QuizArgs;
use crate::error::Result;
use crate::output::Formatter;
use notewise_domain::TextGenerator;
use notewise_generator::{ContentGenerator, QuizOptions};

/// Execute the quiz command.
pub async fn execute_quiz<L: TextGenerator>(
    args: QuizArgs,
    text: &str,
    generator: &ContentGenerator<L>,
    formatter: &Formatter,
) -> Result<()> {
    let options = QuizOptions {
        difficulty: args.difficulty.into(),
        question_count: args
            .count
            .unwrap_or(generator.config().default_question_count),
        quiz_type: args.quiz_type.into(),
        note_title: args.title.or_else(|| note_title(&args.input)),
    };

    let quiz = generator.generate_quiz(text, &options).await;

    eprintln!("{}", formatter.source_status(quiz.source));
    println!("{}", formatter.quiz(&quiz, args.answers)?);
    Ok(())
}

/// File stem of the note, used as a title when none is given.
fn note_title(input: &crate::cli::InputArgs) -> Option<String> {
    input
        .file
        .as_deref()
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .filter(|s| *s != "-")
        .map(|s| s.replace(['_', '-'], " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InputArgs;
    use std::path::PathBuf;

    #[test]
    fn test_note_title_from_file_stem() {
        let input = InputArgs {
            file: Some(PathBuf::from("notes/cell_biology-week1.md")),
        };
        assert_eq!(note_title(&input).as_deref(), Some("cell biology week1"));
        assert!(note_title(&InputArgs { file: None }).is_none());
        assert!(note_title(&InputArgs { file: Some(PathBuf::from("-")) }).is_none());
    }
}
