pub mod schema;

pub use schema::{ConfigOverrides, IndicatorConfig, Position};

use indicator_core::{IndicatorError, Result};
use std::path::{Path, PathBuf};

/// Load option overrides from a TOML file.  Returns empty overrides if the
/// file doesn't exist so the indicator always falls back to its defaults.
pub fn load(path: impl AsRef<Path>) -> Result<ConfigOverrides> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ConfigOverrides::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| IndicatorError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| IndicatorError::Config(format!("TOML parse error: {e}")))
}

/// Parse an options object written the way a page script would pass it,
/// e.g. `{ "color": "red", "where": "header" }`.
pub fn from_json(raw: &str) -> Result<ConfigOverrides> {
    serde_json::from_str(raw).map_err(|e| IndicatorError::Config(format!("JSON parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("scroll-indicator").join("indicator.toml")
}
