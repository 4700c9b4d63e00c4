use crate::types::config::{ApiConfig, FetchSettings, MonitorConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "repohealth",
    version,
    about = "Repository health monitor: fetches repository metadata and scores its health"
)]
pub struct Cli {
    /// Repository in format owner/repo (e.g. nodejs/node)
    pub repository: String,

    /// Output file for the JSON report [default: repo_health_report.json]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds [default: 10]
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Number of retries for failed requests [default: 3]
    #[arg(short, long)]
    pub retries: Option<u32>,

    /// Skip saving the JSON report; console output only
    #[arg(long, conflicts_with = "output")]
    pub no_file: bool,

    /// Console output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Config file to use instead of ./repohealth.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API base URL [default: https://api.github.com]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

impl Cli {
    /// Command-line flags form the last configuration layer.
    pub fn apply_overrides(&self, cfg: &mut MonitorConfig) {
        if let Some(base_url) = &self.base_url {
            cfg.api.get_or_insert_with(ApiConfig::default).base_url = Some(base_url.clone());
        }
        if self.timeout.is_some() || self.retries.is_some() {
            let fetch = cfg.fetch.get_or_insert_with(FetchSettings::default);
            if let Some(timeout) = self.timeout {
                fetch.timeout_secs = Some(timeout);
            }
            if let Some(retries) = self.retries {
                fetch.max_retries = Some(retries);
            }
        }
    }
}
