use super::Tunables;
use std::path::PathBuf;

/// Core configuration for IconResolver initialization.
#[derive(Clone)]
pub struct Config {
    pub base_path: PathBuf,
    /// Base URL the chunk files are served under.
    pub endpoint: String,
    pub tunables: Tunables,
}

impl Config {
    pub fn new(base_path: PathBuf, endpoint: impl Into<String>) -> Self {
        Self {
            base_path,
            endpoint: endpoint.into(),
            tunables: Tunables::default(),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("icons.redb")
    }
}
