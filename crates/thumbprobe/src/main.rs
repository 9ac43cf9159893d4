use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, usage};
use crate::config::{Mode, RunConfig};
use crate::driver::{BatchDriver, RunOutcome};
use crate::ui::tracker::LogWriter;

mod cli;
mod config;
mod discover;
mod driver;
mod manifest;
mod ui;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = RunConfig::from_args(&args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(|| LogWriter)
        .init();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: RunConfig) -> anyhow::Result<()> {
    match &config.mode {
        Mode::Directory { .. } => {
            println!("Searching {} for zip files", config.search_root().display())
        }
        Mode::Manifest { manifest } => println!("Parsing {} for zip files", manifest.display()),
    }

    match BatchDriver::new(config).run()? {
        RunOutcome::NoArchives => {
            println!("No zip files found");
            println!("{}", usage());
        }
        RunOutcome::Completed(summary) => println!("\n{summary}"),
    }
    Ok(())
}
