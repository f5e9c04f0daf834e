use crate::error::{Result, ScoreError};
use crate::types::config::ScoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "entry-score.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".entry-score/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/entry-score/config.toml";

/// Loads the merged config for `root`. An explicit file must exist; the
/// implicit layers are skipped when absent.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ScoreConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<ScoreConfig> {
    let project_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ScoreError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => root.join(DEFAULT_CONFIG_FILE),
    };

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ScoreConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::info!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
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
