//! Analyze command implementation.

use crate::error::Result;
use crate::output::Formatter;
use notewise_generator::analysis;

/// Execute the analyze command; never contacts the backend.
pub fn execute_analyze(text: &str, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.analysis(&analysis::analyze(text))?);
    Ok(())
}
