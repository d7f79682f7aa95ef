use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_ISSUES: i64 = -1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_DIR: &str = ".issues";
const CONFIG_FILE: &str = "config.yml";

/// One layer of settings. Every key is optional so layers can be stacked.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct FileConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl FileConfig {
    /// Reads the YAML file at `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        confy::load_path(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the first config file found under `~/.issues` or `./.issues`.
    /// No file at all yields an empty layer.
    pub fn discover() -> Result<Self, ConfigError> {
        match search_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_DIR).join(CONFIG_FILE));
    }
    paths.push(Path::new(".").join(CONFIG_DIR).join(CONFIG_FILE));
    paths
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub repo: String,
    /// Negative means no limit.
    pub issues: i64,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: String::new(),
            issues: DEFAULT_ISSUES,
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Stacks `overrides` (flags and environment) over `file`, then defaults.
    pub fn resolve(overrides: &FileConfig, file: &FileConfig) -> Self {
        let defaults = Self::default();
        let api_key = overrides
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| file.api_key.clone().filter(|k| !k.trim().is_empty()));

        Self {
            repo: overrides
                .repo
                .clone()
                .or_else(|| file.repo.clone())
                .unwrap_or(defaults.repo),
            issues: overrides.issues.or(file.issues).unwrap_or(defaults.issues),
            api_key,
            timeout: overrides
                .timeout
                .or(file.timeout)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}
