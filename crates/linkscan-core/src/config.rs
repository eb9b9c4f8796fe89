use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Global linkscan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan configuration
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names to skip in addition to the built-in defaults
    pub exclude: Vec<String>,
}

/// Directory names skipped on every scan. Callers extend this set,
/// never replace it.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    "build",
    "dist",
    "__pycache__",
    ".pytest_cache",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { exclude: vec![] }
    }
}

impl Config {
    /// Load config from default locations (in order of precedence):
    /// 1. $PWD/.linkscan.toml
    /// 2. $XDG_CONFIG_HOME/linkscan/config.toml
    /// 3. ~/.config/linkscan/config.toml
    /// 4. Built-in defaults
    pub fn load() -> Self {
        // Try project-level config
        if let Ok(content) = std::fs::read_to_string(".linkscan.toml") {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }

        // Try user-level config
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("linkscan").join("config.toml");
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Load config from a specific file
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The full exclusion set: built-in defaults plus config-file additions
    /// plus any extra names from the caller.
    pub fn exclusion_set<I, S>(&self, extra: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: BTreeSet<String> =
            DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
        set.extend(self.scan.exclude.iter().cloned());
        set.extend(extra.into_iter().map(Into::into));
        set
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
