//! Settings parser for leafscan/config.toml

use std::path::{Path, PathBuf};

use leafscan_core::prelude::*;

use super::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const LEAFSCAN_DIR: &str = "leafscan";

/// Path of the user config file.
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(LEAFSCAN_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the default location.
///
/// A missing file silently yields defaults; a file that fails to parse is a
/// `ConfigInvalid` error so typos do not vanish into default behavior.
pub fn load() -> Result<Settings> {
    load_from(&config_path())
}

/// Load settings from an explicit path (used by tests).
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&contents)
        .map_err(|e| Error::config_invalid(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), "loaded configuration");
    Ok(settings)
}
