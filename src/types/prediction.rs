//! Classification result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification label returned by the backend for a readable image.
///
/// The backend's sentinel `"error"` class never reaches this type; the
/// client maps it to `PneumoscopeError::PredictionRejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Normal,
    Pneumonia,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Normal => "Normal",
            Label::Pneumonia => "Pneumonia",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-class probability pair for the binary classifier.
///
/// `normal + pneumonia ≈ 1` is a contract of the upstream predictor, not
/// enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassProbabilities {
    #[serde(rename = "Normal")]
    pub normal: f32,
    #[serde(rename = "Pneumonia")]
    pub pneumonia: f32,
}

/// Result of one classification request.
///
/// Transient: produced by the backend, consumed to update a batch item or
/// the single-prediction result slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_class: Label,
    pub predicted_confidence: f32,
    pub class_probabilities: ClassProbabilities,
}
