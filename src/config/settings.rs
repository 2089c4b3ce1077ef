//! Settings sections of the config file

use serde::{Deserialize, Serialize};

use crate::activity::DEFAULT_MAX_ENTRIES;
use crate::backend::DEFAULT_BACKEND_URL;
use crate::progress::AccessPolicy;

/// Which backend implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// The puzzle API over HTTP
    #[default]
    Http,
    /// Built-in demo puzzles, no network
    Local,
}

/// Challenge backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default)]
    pub kind: BackendKind,

    /// Base URL of the puzzle API (only used by the http backend)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_read_timeout_secs() -> u64 {
    30
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

/// Progression rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProgressionSettings {
    /// Gating rule for challenges
    #[serde(default)]
    pub access_policy: AccessPolicy,
}

/// Activity feed settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySettings {
    /// Entries kept before the oldest are dropped
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

impl Default for ActivitySettings {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}
