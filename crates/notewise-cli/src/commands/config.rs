//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs, PresetArg};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use notewise_generator::GeneratorConfig;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let shown = config.redacted();
            if formatter.format() == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                println!("{}", shown.to_toml()?);
            }
            if !config.client.has_usable_key() {
                eprintln!(
                    "{}",
                    formatter.warning("No usable API key; generation will use local fallbacks")
                );
            }
        }
        ConfigAction::Init { preset, force } => {
            if path.exists() && !force {
                return Err(CliError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            let fresh = Config {
                generator: preset_config(preset),
                ..Config::default()
            };
            fresh.save_to(path)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote {}", path.display()))
            );
        }
        ConfigAction::Path => println!("{}", path.display()),
    }
    Ok(())
}

fn preset_config(preset: PresetArg) -> GeneratorConfig {
    match preset {
        PresetArg::Default => GeneratorConfig::default(),
        PresetArg::Concise => GeneratorConfig::concise(),
        PresetArg::Thorough => GeneratorConfig::thorough(),
    }
}
