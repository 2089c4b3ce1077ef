//! Configuration loading and management

mod io;
mod settings;

pub use settings::{ActivitySettings, BackendKind, BackendSettings, ProgressionSettings};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::activity::ActivityLog;
use crate::backend::{ChallengeBackend, HttpBackend, LocalBackend};
use crate::catalog::Catalog;
use crate::progress::ProgressTracker;
use crate::session::GameSession;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Challenge backend
    #[serde(default)]
    pub backend: BackendSettings,

    /// Progression rules
    #[serde(default)]
    pub progression: ProgressionSettings,

    /// Activity feed
    #[serde(default)]
    pub activity: ActivitySettings,
}

impl Config {
    /// Backend described by the `[backend]` section
    pub fn build_backend(&self) -> Box<dyn ChallengeBackend> {
        match self.backend.kind {
            BackendKind::Http => Box::new(HttpBackend::with_timeouts(
                self.backend.base_url.clone(),
                Duration::from_secs(self.backend.connect_timeout_secs),
                Duration::from_secs(self.backend.read_timeout_secs),
            )),
            BackendKind::Local => Box::new(LocalBackend::demo()),
        }
    }

    /// Fresh session using the configured backend, policy and builtin catalog
    pub fn new_session(&self) -> GameSession {
        let backend = self.build_backend();
        info!(
            "Starting session with {} backend ({:?})",
            backend.name(),
            self.progression.access_policy
        );

        GameSession::new(
            ProgressTracker::with_policy(self.progression.access_policy),
            backend,
            Catalog::builtin(),
        )
        .with_activity_log(ActivityLog::with_capacity(self.activity.max_entries))
    }
}
