//! Wingskills - pluggable LLM tool skills for voice assistants
//!
//! Main entry point for the wingskills CLI.

mod cli;
mod commands;

use std::path::PathBuf;

use clap::Parser;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};

/// Get the .wingskills directory path.
fn wingskills_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".wingskills"))
        .unwrap_or_else(|| PathBuf::from(".wingskills"))
}

/// Initialize tracing with console and file output.
///
/// Log files are written to ~/.wingskills/logs/ with daily rotation.
fn init_tracing(debug_mode: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = wingskills_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("wingskills")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keeps the file writer flushing until exit.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let default_level = if debug_mode { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = commands::load_config(&cli.config, cli.debug)?;
    init_tracing(config.settings.debug_mode)?;

    match cli.command {
        Commands::Tools { format } => commands::handle_tools(&config, format).await,
        Commands::Call { tool, params } => commands::handle_call(&config, &tool, &params).await,
        Commands::Check => commands::handle_check(&config).await,
    }
}
