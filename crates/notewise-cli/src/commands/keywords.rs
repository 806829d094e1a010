//! Keywords command implementation.

use crate::cli::KeywordsArgs;
use crate::error::Result;
use crate::output::Formatter;
use notewise_domain::TextGenerator;
use notewise_generator::ContentGenerator;

/// Execute the keywords command.
pub async fn execute_keywords<L: TextGenerator>(
    args: KeywordsArgs,
    text: &str,
    generator: &ContentGenerator<L>,
    formatter: &Formatter,
) -> Result<()> {
    let keywords = match args.count {
        Some(count) => generator.extract_keywords(text, count).await,
        None => generator.extract_default_keywords(text).await,
    };

    eprintln!("{}", formatter.source_status(keywords.source));
    println!("{}", formatter.keywords(&keywords)?);
    Ok(())
}
