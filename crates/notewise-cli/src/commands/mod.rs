//! Command implementations.

pub mod analyze;
pub mod config;
pub mod keywords;
pub mod quiz;
pub mod summarize;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::keywords::execute_keywords;
pub use self::quiz::execute_quiz;
pub use self::summarize::execute_summarize;

use crate::cli::InputArgs;
use crate::error::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read the note from the given file, or stdin when absent or "-".
pub fn read_input(args: &InputArgs) -> Result<String> {
    match args.file.as_deref() {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, "Cells divide by mitosis.").unwrap();

        let text = read_input(&InputArgs { file: Some(path) }).unwrap();
        assert_eq!(text, "Cells divide by mitosis.");
    }

    #[test]
    fn test_read_input_missing_file() {
        let args = InputArgs {
            file: Some(PathBuf::from("/definitely/not/here.md")),
        };
        assert!(read_input(&args).is_err());
    }
}
