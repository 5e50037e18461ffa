use anyhow::{Context, Result};
use std::{env, path::PathBuf};

pub const CONFIG_FILE: &str = ".dvcs-check.toml";

/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "DVCS_CHECK_CONFIG";

/// Load config file content
///
/// Searches in order:
/// 1. The path in `DVCS_CHECK_CONFIG` (an unreadable path is an error)
/// 2. `.dvcs-check.toml` in the current working directory
/// 3. `.dvcs-check.toml` in the home directory
///
/// Returns `Ok(None)` when no file was found.
pub fn load_config_file() -> Result<Option<String>> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        let path = PathBuf::from(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        return Ok(Some(content));
    }

    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Ok(Some(content));
    }

    if let Some(home_config) = get_home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Ok(Some(content));
        }
    }

    Ok(None)
}

/// Returns ~/.dvcs-check.toml if HOME is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
