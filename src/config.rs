use crate::error::{MonitorError, Result};
use crate::types::config::MonitorConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "repohealth.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repohealth/config.toml";

/// Loads the global config layer, then either `explicit` or `./repohealth.toml`.
///
/// An explicitly requested file must exist; the implicit layers are optional.
pub fn load_config(explicit: Option<&Path>) -> Result<MonitorConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(MonitorError::ConfigParse(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            load_config_with_global(path, global.as_deref())
        }
        None => load_config_with_global(Path::new(DEFAULT_CONFIG_FILE), global.as_deref()),
    }
}

pub(crate) fn load_config_with_global(
    local_path: &Path,
    global_path: Option<&Path>,
) -> Result<MonitorConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, local_path)?;

    let cfg: MonitorConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| MonitorError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| MonitorError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| MonitorError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
