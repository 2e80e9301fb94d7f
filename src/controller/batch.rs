//! Batch-processing controller.
//!
//! Drives the multi-image workflow: ordered intake, strictly sequential
//! classification (one request in flight), per-item terminal states, and a
//! CSV projection of completed results.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::PredictionBackend;
use crate::export::{self, CsvExport};
use crate::notify::{Notice, Notifier};
use crate::types::{BatchItem, Classification, ImageFile, ItemStatus};
use crate::{PneumoscopeError, Result, telemetry};

/// Generic per-item failure message; the cause is logged, not surfaced.
const ITEM_FAILURE_MESSAGE: &str = "Failed to process";

/// One queued image paired with its lifecycle record.
///
/// A single sequence of pairs keeps file and result aligned by construction;
/// removal can never let the two drift apart.
#[derive(Debug, Clone)]
struct BatchEntry {
    image: ImageFile,
    item: BatchItem,
}

/// Controller for the batch flow.
///
/// Per-item state machine: `Pending → Processing → {Completed | Error}`.
/// While a run is in progress the queue is frozen: `add_files`,
/// `remove_item`, and `clear_all` return [`PneumoscopeError::BatchInProgress`].
pub struct BatchController {
    backend: Arc<dyn PredictionBackend>,
    notifier: Arc<dyn Notifier>,
    entries: Vec<BatchEntry>,
    current_index: usize,
    processing: bool,
}

impl BatchController {
    pub fn new(backend: Arc<dyn PredictionBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            entries: Vec::new(),
            current_index: 0,
            processing: false,
        }
    }

    // ========================================================================
    // Intake
    // ========================================================================

    /// Append image-type files to the queue as `Pending` items.
    ///
    /// Non-image files are dropped silently from the accepted set; if nothing
    /// survives the filter, the caller is notified and nothing is appended.
    /// Returns the number of accepted files.
    pub fn add_files(&mut self, files: Vec<ImageFile>) -> Result<usize> {
        if self.processing {
            return Err(PneumoscopeError::BatchInProgress);
        }

        let accepted: Vec<ImageFile> = files.into_iter().filter(|f| f.is_image()).collect();
        if accepted.is_empty() {
            self.notifier.notify(Notice::NoValidImages);
            return Ok(0);
        }

        let count = accepted.len();
        for image in accepted {
            let item = BatchItem::pending(image.name.clone());
            self.entries.push(BatchEntry { image, item });
        }

        debug!(count, total = self.entries.len(), "queued images for batch");
        self.notifier.notify(Notice::FilesAdded(count));
        Ok(count)
    }

    /// Remove the paired entry at `index`.
    pub fn remove_item(&mut self, index: usize) -> Result<()> {
        if self.processing {
            return Err(PneumoscopeError::BatchInProgress);
        }
        if index >= self.entries.len() {
            return Err(PneumoscopeError::InvalidInput(format!(
                "no batch item at index {}",
                index
            )));
        }
        self.entries.remove(index);
        Ok(())
    }

    /// Empty the queue and reset the progress cursor.
    pub fn clear_all(&mut self) -> Result<()> {
        if self.processing {
            return Err(PneumoscopeError::BatchInProgress);
        }
        self.entries.clear();
        self.current_index = 0;
        Ok(())
    }

    // ========================================================================
    // Run
    // ========================================================================

    /// Process every queued item in submission order.
    ///
    /// Exactly one request is in flight at a time. A per-item failure marks
    /// that item `Error` and the run continues; nothing aborts the batch.
    /// Re-running reprocesses all items, including completed ones.
    pub async fn run_batch(&mut self) -> Result<()> {
        if self.processing {
            return Err(PneumoscopeError::BatchInProgress);
        }
        if self.entries.is_empty() {
            return Ok(());
        }

        self.processing = true;

        for index in 0..self.entries.len() {
            // Cursor moves before the request so progress reads "working on item i".
            self.current_index = index;
            self.entries[index].item.begin();

            let outcome = self.backend.classify(&self.entries[index].image).await;
            let entry = &mut self.entries[index];
            match outcome {
                Ok(result) => {
                    entry.item.complete(&result);
                    Self::record_item(true);
                }
                Err(error) => {
                    warn!(file = %entry.item.file_name, %error, "batch item failed");
                    entry.item.fail(ITEM_FAILURE_MESSAGE);
                    Self::record_item(false);
                }
            }
        }

        self.processing = false;
        self.notifier.notify(Notice::BatchComplete(self.entries.len()));
        Ok(())
    }

    // ========================================================================
    // Projections
    // ========================================================================

    /// CSV artifact over the currently completed items, named with today's
    /// date.
    pub fn export_completed(&self) -> CsvExport {
        let date = chrono::Local::now().date_naive();
        CsvExport {
            file_name: export::file_name(date),
            contents: export::render(self.items()),
        }
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = &BatchItem> {
        self.entries.iter().map(|entry| &entry.item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Index of the item currently (or most recently) in flight.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn completed_count(&self) -> usize {
        self.count_status(ItemStatus::Completed)
    }

    pub fn error_count(&self) -> usize {
        self.count_status(ItemStatus::Error)
    }

    pub fn normal_count(&self) -> usize {
        self.count_class(Classification::Normal)
    }

    pub fn pneumonia_count(&self) -> usize {
        self.count_class(Classification::Pneumonia)
    }

    /// Completed fraction in [0, 1], for progress rendering.
    pub fn progress(&self) -> f32 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.completed_count() as f32 / self.entries.len() as f32
    }

    fn count_status(&self, status: ItemStatus) -> usize {
        self.items().filter(|item| item.status == status).count()
    }

    fn count_class(&self, class: Classification) -> usize {
        self.items()
            .filter(|item| item.classification == class)
            .count()
    }

    fn record_item(ok: bool) {
        let status = if ok { "ok" } else { "error" };
        metrics::counter!(telemetry::BATCH_ITEMS_TOTAL, "status" => status).increment(1);
    }
}
