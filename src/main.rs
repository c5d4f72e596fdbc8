//! ct-upload - upload a CSV export of users and devices to CleverTap
//!
//! # Usage
//!
//! ```bash
//! # Defaults plus CT_ACCOUNT_ID / CT_PASSCODE from the environment or .env
//! ct-upload
//!
//! ct-upload --config config/uploader.yaml --input profiles.csv --batch-size 50
//! ```

use anyhow::Context;
use clap::Parser;
use ct_uploader::config::{Config, PacingStrategy};
use ct_uploader::utils::logging::init_logging;
use ct_uploader::{BatchUploader, CsvSource};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Upload a CSV of user/device records as CleverTap profiles and push tokens
#[derive(Parser, Debug)]
#[command(name = "ct-upload")]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "CT_CONFIG")]
    config: Option<PathBuf>,

    /// CSV file to upload
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Records per upload chunk
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Pacing strategy between chunks (modulo, rate_limited, none)
    #[arg(long)]
    pacing: Option<PacingStrategy>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.uploader.input.path = input.clone();
        }
        if let Some(batch_size) = self.batch_size {
            config.uploader.batch.batch_size = batch_size;
        }
        if let Some(pacing) = self.pacing {
            config.uploader.batch.pacing.strategy = pacing;
        }
        if let Some(level) = &self.log_level {
            config.uploader.logging.level = level.clone();
        }
        if self.json_logs {
            config.uploader.logging.json = true;
        }
    }
}

async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::default(),
    };
    config.apply_env()?;
    cli.apply(&mut config);
    Ok(config)
}

async fn run(config: Config) -> anyhow::Result<()> {
    config.validate()?;
    info!("Configuration: {:#?}", config);

    let source = CsvSource::open(config.input())
        .with_context(|| format!("failed to open input {:?}", config.input().path))?;
    let uploader = BatchUploader::from_config(&config.uploader)?;

    let summary = uploader.run(source).await?;

    info!(
        "Uploaded {} rows in {} chunks ({} non-2xx responses)",
        summary.rows,
        summary.chunks.len(),
        summary.http_failures()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display (not Debug) keeps the message on one readable line
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
