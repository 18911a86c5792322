//! MailTriage - email classification client
//!
//! Main entry point for the command-line application.

use clap::Parser;
use mailtriage_app::utils::logging::init_tracing;
use mailtriage_app::{cli, AppContext, Cli};
use mailtriage_infra::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration from the environment
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = config::load(cli.config.clone())?;
    cli.apply_overrides(&mut config);
    config::validate(&config)?;

    init_tracing(&config.logging);
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(err) => tracing::debug!(error = %err, "No .env loaded"),
    }

    let ctx = AppContext::new(config)?;
    let mut stdout = std::io::stdout();
    cli::run(&ctx, cli.command, &mut stdout).await
}
