//! Neon Nexus console entry point

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use nexus::assistant::Assistant;
use nexus::cli::Cli;
use nexus::config::Config;
use nexus::console::{self, Console};
use nexus::prompts::PromptLoader;
use nexus::state::DomainStore;

fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nexus")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Write to log file, the terminal belongs to the console
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("nexus.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(
        "Nexus loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let assistant =
        Assistant::from_config(&config.llm, PromptLoader::new(cwd)).context("Failed to create LLM client")?;
    let store = DomainStore::seeded_as(&config.console.user);
    let theme = cli.theme.unwrap_or(config.console.theme);

    console::run(Console::new(store, assistant, theme)).await
}
