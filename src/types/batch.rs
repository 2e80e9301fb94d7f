//! Batch item lifecycle types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::prediction::{ClassProbabilities, Label, PredictionResult};

/// Classification slot of a batch item.
///
/// `Unclassified` until the item's request completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Classification {
    #[default]
    Unclassified,
    Normal,
    Pneumonia,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Unclassified => "Unclassified",
            Classification::Normal => "Normal",
            Classification::Pneumonia => "Pneumonia",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Label> for Classification {
    fn from(label: Label) -> Self {
        match label {
            Label::Normal => Classification::Normal,
            Label::Pneumonia => Classification::Pneumonia,
        }
    }
}

/// Lifecycle state of one batch item.
///
/// `Pending → Processing → {Completed | Error}`; the last two are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Error,
}

impl ItemStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ItemStatus::Completed | ItemStatus::Error)
    }
}

/// One file's classification lifecycle in the batch workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub file_name: String,
    pub classification: Classification,
    pub confidence: f32,
    pub probabilities: ClassProbabilities,
    pub status: ItemStatus,
    pub error: Option<String>,
}

impl BatchItem {
    /// Fresh item for a newly accepted file.
    pub fn pending(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            classification: Classification::default(),
            confidence: 0.0,
            probabilities: ClassProbabilities::default(),
            status: ItemStatus::Pending,
            error: None,
        }
    }

    /// Mark the item as the one currently in flight.
    pub(crate) fn begin(&mut self) {
        self.status = ItemStatus::Processing;
        self.error = None;
    }

    pub(crate) fn complete(&mut self, result: &PredictionResult) {
        self.classification = result.predicted_class.into();
        self.confidence = result.predicted_confidence;
        self.probabilities = result.class_probabilities;
        self.status = ItemStatus::Completed;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.status = ItemStatus::Error;
        self.error = Some(message.into());
    }
}
