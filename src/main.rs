use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::{commands::Command, ctx_data::CtxData, settings::Settings};

mod commands;
mod ctx_data;
mod db;
mod deoida;
mod dictionary;
mod models;
mod schema;
mod settings;

pub type Result<T> = anyhow::Result<T>;

/// Wendet super komplexes De-Oidering an.
#[derive(Debug, Parser)]
#[command(name = "deoida", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Additional configuration file
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Database url, overrides the configured one
    #[arg(long, global = true)]
    database: Option<String>,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, mut settings: Settings) -> Result<String> {
    if let Some(url) = cli.database {
        settings.database.url = url;
    }

    debug!("Using database {}", settings.database.url);
    let db = db::connect(&settings.database)?;
    let ctx = CtxData::new(db);

    info!("Running command `{}`", cli.command.name());
    cli.command.run(&ctx).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::new(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&settings.log_level);

    match run(cli, settings).await {
        Ok(response) => {
            println!("{response}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
