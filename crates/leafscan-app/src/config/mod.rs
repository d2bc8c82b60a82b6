//! User configuration: types and loading.

mod settings;

pub use settings::{config_path, load, load_from};

use serde::{Deserialize, Serialize};

use crate::analyzer::DEFAULT_LATENCY_MS;

/// Top-level settings, read from `<config_dir>/leafscan/config.toml`.
///
/// Every field has a default so a missing file or a partial file both work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub analysis: AnalysisSettings,
    pub ui: UiSettings,
}

/// Settings for the analysis dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Simulated inference latency for the stub backend, in milliseconds.
    pub latency_ms: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Use unicode icons in badges and banners.
    pub icons: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { icons: true }
    }
}
