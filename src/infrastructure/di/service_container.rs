//! Service container for dependency injection
//!
//! Wires the decision engine and the history service to settings and I/O.

use std::sync::Arc;

use crate::application::services::HistoryService;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::DecisionEngine;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding the engine and application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Engine over the shipped questionnaire
    pub engine: DecisionEngine,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> ApplicationResult<Self> {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> ApplicationResult<Self> {
        let settings = Arc::new(settings);
        let engine = DecisionEngine::new()?;

        Ok(Self {
            settings,
            fs,
            engine,
        })
    }

    /// History service bound to the configured file and cap; loads on creation.
    pub fn history(&self) -> ApplicationResult<HistoryService> {
        HistoryService::load(
            Arc::clone(&self.fs),
            self.settings.history_file(),
            self.settings.max_sessions,
        )
    }
}
