mod analyze;
mod cli;
mod config;
mod error;
mod fetch;
mod logging;
mod report;
mod types;

use crate::error::MonitorError;
use crate::fetch::FetchClient;
use crate::types::repository::RepoSlug;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const FETCH_FAILURE: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const RUNTIME_FAILURE: i32 = 5;
}

fn run(cli: &cli::Cli) -> Result<(), MonitorError> {
    let slug = RepoSlug::parse(&cli.repository)?;

    let mut loaded = config::load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut loaded);
    loaded.validate()?;

    tracing::info!(repository = %slug, "analyzing repository");
    let client = FetchClient::http(loaded.fetch_config())?;
    let fetched = client.fetch(&slug)?;

    let generated_at = Utc::now();
    let analysis = analyze::analyze(&fetched.record, generated_at);
    let health = report::assemble(&fetched.record, &analysis, &fetched.meta, generated_at);

    let output_format = match cli.format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Json => report::OutputFormat::Json,
    };
    let rendered = report::render(&health, output_format)?;
    if !cli.quiet {
        println!("{}", rendered.trim_end());
    }

    if !cli.no_file {
        let path = cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(loaded.output_file()));
        report::json::write_report(&health, &path)?;
        if !cli.quiet {
            eprintln!("report saved to {}", path.display());
        }
    }

    tracing::info!(
        health_score = health.health_score,
        "repository analysis completed"
    );
    Ok(())
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => std::process::exit(exit_code::SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
