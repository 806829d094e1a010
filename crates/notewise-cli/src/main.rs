//! Notewise CLI - Study-note summaries, quizzes and keywords.

use clap::Parser;
use notewise_cli::commands;
use notewise_cli::{Cli, Command, Config, Formatter};
use notewise_generator::ContentGenerator;
use notewise_llm::GeminiProvider;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> notewise_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let command = match cli.command {
        Command::Config(args) => {
            return commands::execute_config(args, &config, &config_path, &formatter);
        }
        other => other,
    };

    // Read the whole note before Ctrl-C is taken over below, so an interrupt
    // at the stdin prompt still ends the process
    let text = match command.input() {
        Some(input) => commands::read_input(input)?,
        None => String::new(),
    };
    if matches!(command, Command::Analyze(_)) {
        return commands::execute_analyze(&text, &formatter);
    }

    if cli.offline {
        config.client.api_key = None;
    } else if let Some(key) = cli.api_key {
        config.client.api_key = Some(key);
    }
    config.validate()?;

    if !cli.offline && !config.client.has_usable_key() {
        warn!("No usable API key configured, falling back to local generation");
    }
    debug!(model = %config.client.model, "Using generative backend");

    let provider = GeminiProvider::new(config.client.clone())?;
    let cancel = CancellationToken::new();
    let generator = ContentGenerator::new(provider, config.generator.clone())
        .with_cancellation(cancel.clone());

    // Ctrl-C abandons the backend call and prints the fallback instead
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    match command {
        Command::Summarize(args) => {
            commands::execute_summarize(args, &text, &generator, &formatter).await?;
        }
        Command::Quiz(args) => {
            commands::execute_quiz(args, &text, &generator, &formatter).await?;
        }
        Command::Keywords(args) => {
            commands::execute_keywords(args, &text, &generator, &formatter).await?;
        }
        Command::Config(_) | Command::Analyze(_) => unreachable!("handled above"),
    }

    Ok(())
}

/// Log to stderr; `NOTEWISE_LOG` sets the filter, `-v` forces debug.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("NOTEWISE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
