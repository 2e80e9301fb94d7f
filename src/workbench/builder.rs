//! Builder for configuring workbench instances

use std::sync::Arc;
use std::time::Duration;

use super::Workbench;
use crate::client::{HttpPredictionClient, PredictionBackend};
use crate::notify::{Notifier, TracingNotifier};

/// Main entry point for creating workbench instances.
pub struct Pneumoscope;

impl Pneumoscope {
    /// Create a new builder for configuring the workbench.
    pub fn builder() -> WorkbenchBuilder {
        WorkbenchBuilder::new()
    }
}

/// Builder for configuring workbench instances.
pub struct WorkbenchBuilder {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    backend: Option<Arc<dyn PredictionBackend>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl WorkbenchBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout_secs: None,
            backend: None,
            notifier: None,
        }
    }

    /// Point the workbench at a classification service
    /// (default: `http://localhost:8000`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout for the HTTP client (seconds).
    pub fn timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Substitute a custom backend (e.g. a test double).
    ///
    /// Takes precedence over `base_url`/`timeout`.
    pub fn backend(mut self, backend: Arc<dyn PredictionBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Substitute a custom notification sink (default: logs via `tracing`).
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the workbench.
    pub fn build(self) -> Workbench {
        let backend = self.backend.unwrap_or_else(|| {
            let base_url = self
                .base_url
                .unwrap_or_else(|| crate::client::DEFAULT_BASE_URL.to_string());
            let client = match self.timeout_secs {
                Some(secs) => {
                    HttpPredictionClient::with_timeout(base_url, Duration::from_secs(secs))
                }
                None => HttpPredictionClient::with_base_url(base_url),
            };
            Arc::new(client)
        });

        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(TracingNotifier));

        Workbench::new(backend, notifier)
    }
}

impl Default for WorkbenchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
