//! Summarize command implementation.

use crate::cli::SummarizeArgs;
use crate::error::Result;
use crate::output::Formatter;
use notewise_domain::TextGenerator;
use notewise_generator::ContentGenerator;

/// Execute the summarize command.
pub async fn execute_summarize<L: TextGenerator>(
    args: SummarizeArgs,
    text: &str,
    generator: &ContentGenerator<L>,
    formatter: &Formatter,
) -> Result<()> {
    let summary = generator
        .generate_summary(text, args.length.into(), args.style.into())
        .await;

    eprintln!("{}", formatter.source_status(summary.source));
    println!("{}", formatter.summary(&summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use crate::config::OutputFormat;
    use clap::Parser;
    use notewise_generator::GeneratorConfig;
    use notewise_llm::MockProvider;

    #[tokio::test]
    async fn test_summarize_stdin_note_uses_supplied_text() {
        let Command::Summarize(args) = Cli::parse_from(["notewise", "summarize"]).command else {
            panic!("Expected Summarize command");
        };
        assert!(args.input.file.is_none());

        let provider = MockProvider::new("Cells copy themselves by mitosis.");
        let generator = ContentGenerator::new(provider.clone(), GeneratorConfig::default());
        let formatter = Formatter::new(OutputFormat::Text, false);

        execute_summarize(args, "Cells divide by mitosis.", &generator, &formatter)
            .await
            .unwrap();
        assert_eq!(provider.call_count(), 1);
    }
}
