// src/main.rs

use anyhow::Result;
use clap::Parser;
use codecat::cli::Cli;
use codecat::config::ConfigBuilder;
use codecat::errors::Error;
#[cfg(feature = "progress")]
use codecat::progress::IndicatifProgress;
use codecat::progress::ProgressReporter;
use codecat::signal::setup_signal_handler;
use std::sync::Arc;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::debug!("Starting codecat v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    // Show a progress bar only when stderr is a TTY.
    let progress: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    let config = ConfigBuilder::from_cli(cli).build()?;
    let token = setup_signal_handler()?;

    match codecat::run(&config, &token, progress) {
        Ok(report) => {
            for skip in report
                .scan
                .skipped
                .iter()
                .chain(report.combine.iter().flat_map(|c| c.skipped.iter()))
            {
                eprintln!(
                    "codecat: skipped '{}' ({})",
                    skip.path.display(),
                    skip.reason
                );
            }
            if report.is_cancelled() {
                eprintln!("\nOperation cancelled.");
                std::process::exit(130);
            }
            if let Some(combined) = &report.combine {
                eprintln!(
                    "Combined {} files ({} characters).",
                    combined.files_written, combined.total_characters
                );
            }
        }
        Err(Error::NoFilesFound) => {
            eprintln!("codecat: no files matched the selection criteria.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
