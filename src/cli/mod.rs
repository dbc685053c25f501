use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{Config, Credentials};
use crate::pipeline;
use crate::snapshot::WriteOutcome;

#[derive(Parser)]
#[command(name = "release-snapshot")]
#[command(version = "0.1")]
#[command(about = "Append today's Spotify new releases to a local CSV snapshot")]
pub struct Cli {
    /// Path to the config TOML file (defaults apply when absent)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the snapshot CSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the number of releases to request
    #[arg(short, long)]
    pub limit: Option<u32>,
}

/// Entrypoint for CLI
pub fn run() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let mut cfg = Config::load_or_default(&cli.config).unwrap();
    if let Some(output) = cli.output {
        cfg.output.path = output;
    }
    if let Some(limit) = cli.limit {
        cfg.spotify.limit = limit;
    }

    let creds = match Credentials::from_env() {
        Ok(creds) => creds,
        Err(e) => {
            log::error!("missing credentials: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Starting Spotify release snapshot...");

    match pipeline::run(&cfg, &creds) {
        Ok(outcome) => {
            log::info!("run stamped {}", outcome.snapshot_date);
            let path = cfg.output.path.display();
            match outcome.written {
                WriteOutcome::Empty => println!("No new releases found."),
                WriteOutcome::Created(n) => {
                    println!("Created {path} and saved {n} new releases.")
                }
                WriteOutcome::Appended(n) => println!("Appended {n} new releases to {path}"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("run failed: {e}");
            ExitCode::FAILURE
        }
    }
}
