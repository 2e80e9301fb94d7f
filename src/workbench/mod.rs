//! Workbench wiring: one backend, one notifier, three flows.

mod builder;

use std::sync::Arc;

use crate::client::PredictionBackend;
use crate::controller::{BatchController, MetricsController, SinglePredictionController};
use crate::notify::Notifier;

pub use builder::{Pneumoscope, WorkbenchBuilder};

/// Shared wiring for the workbench flows.
///
/// Hands out independent controllers that share one backend client and one
/// notification sink. Each controller owns its own state; the workbench
/// itself is stateless and cheap to keep around.
pub struct Workbench {
    backend: Arc<dyn PredictionBackend>,
    notifier: Arc<dyn Notifier>,
}

impl Workbench {
    pub(crate) fn new(backend: Arc<dyn PredictionBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self { backend, notifier }
    }

    /// Controller for the multi-image batch flow.
    pub fn batch(&self) -> BatchController {
        BatchController::new(self.backend.clone(), self.notifier.clone())
    }

    /// Controller for the single-image flow.
    pub fn single(&self) -> SinglePredictionController {
        SinglePredictionController::new(self.backend.clone(), self.notifier.clone())
    }

    /// Controller for the metrics flow.
    pub fn metrics(&self) -> MetricsController {
        MetricsController::new(self.backend.clone())
    }
}
