use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Timing knobs for the icon cache, persisted as icons.toml when an
/// embedder wants to override the defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Budget for one batched store read before every queued lookup is
    /// failed as a miss.
    #[serde(default = "default_store_read_timeout_ms")]
    pub store_read_timeout_ms: u64,
    /// Quiet period that has to pass without new chunk arrivals before
    /// fetched records are flushed to the store.
    #[serde(default = "default_flush_quiet_ms")]
    pub flush_quiet_ms: u64,
    /// Per-request bound on chunk fetches; 0 leaves them unbounded.
    #[serde(default)]
    pub fetch_timeout_ms: u64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            store_read_timeout_ms: default_store_read_timeout_ms(),
            flush_quiet_ms: default_flush_quiet_ms(),
            fetch_timeout_ms: 0,
        }
    }
}

impl Tunables {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("icons.toml")
    }

    /// Loads tunables from a TOML file. Returns defaults if the file
    /// doesn't exist.
    pub fn load(path: &Path) -> Result<Self, TunablesError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let tunables = toml::from_str(&content)?;
        Ok(tunables)
    }

    /// Saves tunables to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), TunablesError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates values and returns the list of validation errors.
    /// Returns an empty vec if everything is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.store_read_timeout_ms == 0 {
            errors.push("store_read_timeout_ms must be at least 1".to_string());
        }

        errors
    }

    pub fn store_read_timeout(&self) -> Duration {
        Duration::from_millis(self.store_read_timeout_ms)
    }

    pub fn flush_quiet_period(&self) -> Duration {
        Duration::from_millis(self.flush_quiet_ms)
    }

    /// `None` when chunk fetches carry no timeout of their own.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        (self.fetch_timeout_ms > 0).then(|| Duration::from_millis(self.fetch_timeout_ms))
    }
}

fn default_store_read_timeout_ms() -> u64 {
    1000
}

fn default_flush_quiet_ms() -> u64 {
    2000
}

/// Errors that can occur when loading or saving tunables.
#[derive(Debug, Error)]
pub enum TunablesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
