use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::models::{Config, FileConfig};

/// List the issues of a GitHub repository as a table.
///
/// Settings come from flags, then `ISSUES_*` environment variables, then
/// `config.yml` in `~/.issues` or `./.issues`.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Repository to fetch issues from (URL or owner/repo)
    #[arg(short, long, env = "ISSUES_REPO")]
    pub repo: Option<String>,

    /// Maximum number of issues to show; negative shows all [default: -1]
    #[arg(short = 'n', long, env = "ISSUES_ISSUES", allow_negative_numbers = true)]
    pub issues: Option<i64>,

    /// GitHub personal access token
    #[arg(short = 'k', long, env = "ISSUES_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds [default: 30]
    #[arg(long, env = "ISSUES_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Config file to use instead of searching the default locations
    #[arg(long, env = "ISSUES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, action)]
    pub verbose: bool,
}

impl Args {
    /// Flags and environment as one settings layer.
    pub fn overrides(&self) -> FileConfig {
        FileConfig {
            repo: self.repo.clone(),
            issues: self.issues,
            api_key: self.api_key.clone(),
            timeout: self.timeout,
        }
    }

    /// Loads the config file and stacks the command line over it.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::discover()?,
        };
        Ok(Config::resolve(&self.overrides(), &file))
    }
}

/// One-line usage, shown when no repository was given.
pub fn usage() -> String {
    Args::command().render_usage().to_string()
}
