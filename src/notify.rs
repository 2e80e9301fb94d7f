//! User-notification capability.
//!
//! Controllers report user-facing events through an injected [`Notifier`]
//! rather than an ambient global channel, so a UI can surface them as toasts
//! and tests can assert on them with a recording double.

use crate::types::Label;

/// A user-facing event emitted by a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// N images were accepted into the batch queue.
    FilesAdded(usize),
    /// A selection or drop contained no image-type files.
    NoValidImages,
    /// Predict was requested with no image selected.
    NoFileSelected,
    /// The single-image analysis finished with this classification.
    AnalysisComplete(Label),
    /// The single-image analysis failed (transport or rejected image).
    AnalysisFailed,
    /// A batch run finished over N items.
    BatchComplete(usize),
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Default notifier: forwards notices to `tracing`.
///
/// Failures log at `warn`, everything else at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::FilesAdded(count) => {
                tracing::info!(count, "added images to batch");
            }
            Notice::NoValidImages => {
                tracing::warn!("no valid images in selection");
            }
            Notice::NoFileSelected => {
                tracing::warn!("predict requested with no image selected");
            }
            Notice::AnalysisComplete(label) => {
                tracing::info!(%label, "analysis complete");
            }
            Notice::AnalysisFailed => {
                tracing::warn!("analysis failed");
            }
            Notice::BatchComplete(count) => {
                tracing::info!(count, "batch processing complete");
            }
        }
    }
}
