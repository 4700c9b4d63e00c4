use crate::error::{MonitorError, Result};
use crate::types::report::HealthReport;
use std::fs;
use std::path::Path;

pub fn to_json(report: &HealthReport) -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Writes the pretty-printed report, creating parent directories as needed.
pub fn write_report(report: &HealthReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(MonitorError::Io)?;
    }
    let mut json = to_json(report)?;
    json.push('\n');
    fs::write(path, json).map_err(MonitorError::Io)?;
    tracing::info!(path = %path.display(), "report saved");
    Ok(())
}
