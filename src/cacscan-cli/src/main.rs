mod cli;
mod commands;
mod config;
mod export;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cacscan=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Decode { raw, json } => {
            commands::decode::handle(&raw, json)?;
        }

        Commands::Scan { log, output } => {
            commands::scan::interactive(log, output.as_deref())?;
        }

        Commands::Batch { input, output } => {
            commands::scan::batch(&input, output.as_deref())?;
        }

        Commands::Configure { log, show } => {
            commands::configure::handle(log, show)?;
        }
    }

    Ok(())
}
