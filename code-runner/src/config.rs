use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Error;

/// Engine configuration
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ceiling for the build stage, independent of the per-request run timeout
    pub build_timeout_ms: u64,
    /// Where sources and artifacts are materialized; the system temp dir if unset
    pub temp_dir: Option<PathBuf>,
    /// Executions allowed in flight at once through the service
    pub max_concurrent_executions: usize,
    /// Compiler whose directory is added to `PATH` for child processes
    pub native_compiler: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_timeout_ms: 30_000,
            temp_dir: None,
            max_concurrent_executions: 10,
            native_compiler: "g++".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        contents.parse()
    }

    pub fn build_timeout(&self) -> Duration {
        Duration::from_millis(self.build_timeout_ms)
    }

    pub fn temp_root(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        if config.max_concurrent_executions == 0 {
            return Err(Error::Config(
                "max_concurrent_executions must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}
