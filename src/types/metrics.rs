//! Aggregate model-performance metrics.
//!
//! These mirror the `GET /metrics` document field-for-field. The ROC curve
//! and confusion matrix are opaque plot data supplied by the backend; the
//! workbench renders them, it does not compute them.

use serde::{Deserialize, Serialize};

/// 2×2 count table of predicted vs. actual binary outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_negative: u64,
    pub false_positive: u64,
    pub false_negative: u64,
    pub true_positive: u64,
}

impl ConfusionMatrix {
    /// Total evaluated samples.
    pub fn total(&self) -> u64 {
        self.true_negative + self.false_positive + self.false_negative + self.true_positive
    }

    /// One cell as a share of the total, formatted to one decimal place.
    ///
    /// `percentage(827)` over a total of 1800 yields `"45.9"`.
    pub fn percentage(&self, cell: u64) -> String {
        let total = self.total();
        if total == 0 {
            return "0.0".to_string();
        }
        format!("{:.1}", cell as f64 / total as f64 * 100.0)
    }
}

/// Paired false-positive-rate/true-positive-rate sequences across thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub thresholds: Vec<f64>,
}

impl RocCurve {
    /// The three sequences are index-aligned; equal length is the invariant.
    pub fn is_aligned(&self) -> bool {
        self.fpr.len() == self.tpr.len() && self.tpr.len() == self.thresholds.len()
    }

    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fpr.is_empty()
    }
}

/// Aggregate performance document served by `GET /metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub specificity: f64,
    pub auc: f64,
    pub confusion_matrix: ConfusionMatrix,
    pub roc_curve: RocCurve,
}

/// Where a metrics report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsSource {
    /// Parsed from a live `GET /metrics` response.
    Backend,
    /// Generated locally after a fetch failure; demo convenience only.
    Synthetic,
}

/// Metrics plus provenance, as held by the metrics controller.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    pub metrics: ModelMetrics,
    pub source: MetricsSource,
}

impl MetricsReport {
    pub fn is_synthetic(&self) -> bool {
        self.source == MetricsSource::Synthetic
    }
}
