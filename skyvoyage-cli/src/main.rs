use anyhow::Context;
use clap::Parser;
use skyvoyage_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod render;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyvoyage_cli=info,skyvoyage_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();

    let config = Config::load().context("failed to load configuration")?;
    tracing::debug!("Loaded configuration: {:?}", config);

    cli.run(&config)
}
