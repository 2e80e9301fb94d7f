//! Single-image prediction controller.

use std::sync::Arc;

use tracing::warn;

use crate::client::PredictionBackend;
use crate::notify::{Notice, Notifier};
use crate::types::{ImageFile, PredictionResult, Preview};
use crate::{PneumoscopeError, Result};

/// Controller for the single-image flow.
///
/// Holds at most one selected image, one preview resource, and one result.
/// The preview is an owned handle, so it is released on every path that
/// discards it: replacement in [`select_file`](Self::select_file),
/// [`reset`](Self::reset), and controller teardown.
pub struct SinglePredictionController {
    backend: Arc<dyn PredictionBackend>,
    notifier: Arc<dyn Notifier>,
    selected: Option<ImageFile>,
    preview: Option<Preview>,
    result: Option<PredictionResult>,
    loading: bool,
}

impl SinglePredictionController {
    pub fn new(backend: Arc<dyn PredictionBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            selected: None,
            preview: None,
            result: None,
            loading: false,
        }
    }

    /// Select an image, replacing any prior selection, preview, and result.
    pub fn select_file(&mut self, file: ImageFile) -> Result<()> {
        if !file.is_image() {
            self.notifier.notify(Notice::NoValidImages);
            return Err(PneumoscopeError::InvalidInput(format!(
                "not an image: {}",
                file.content_type
            )));
        }

        self.preview = Some(Preview::of(&file));
        self.selected = Some(file);
        self.result = None;
        Ok(())
    }

    /// Classify the selected image.
    ///
    /// Fails fast with a notification when nothing is selected. On any
    /// failure (transport, non-2xx, or a rejected image) the result slot
    /// stays cleared and the user is notified.
    pub async fn predict(&mut self) -> Result<()> {
        let Some(image) = self.selected.clone() else {
            self.notifier.notify(Notice::NoFileSelected);
            return Err(PneumoscopeError::NoFileSelected);
        };

        self.loading = true;
        self.result = None;

        let outcome = self.backend.classify(&image).await;
        self.loading = false;

        match outcome {
            Ok(result) => {
                self.notifier
                    .notify(Notice::AnalysisComplete(result.predicted_class));
                self.result = Some(result);
                Ok(())
            }
            Err(error) => {
                warn!(file = %image.name, %error, "prediction failed");
                self.notifier.notify(Notice::AnalysisFailed);
                Err(error)
            }
        }
    }

    /// Clear file, preview, and result.
    pub fn reset(&mut self) {
        self.selected = None;
        // Dropping the handle releases the preview resource.
        self.preview = None;
        self.result = None;
    }

    pub fn selected_file(&self) -> Option<&ImageFile> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
