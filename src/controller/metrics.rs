//! Metrics page controller.
//!
//! Fetches the aggregate performance document and falls back to a synthetic
//! dataset when the backend cannot supply one, so a metrics page always has
//! something to render.

use std::sync::Arc;

use rand::Rng;
use tracing::warn;

use crate::client::PredictionBackend;
use crate::telemetry;
use crate::types::{ConfusionMatrix, MetricsReport, MetricsSource, ModelMetrics, RocCurve};

/// Segments in the synthetic ROC curve (51 points including both endpoints).
const SYNTHETIC_ROC_SEGMENTS: usize = 50;

/// Controller for the metrics flow.
pub struct MetricsController {
    backend: Arc<dyn PredictionBackend>,
    report: Option<MetricsReport>,
    loading: bool,
}

impl MetricsController {
    pub fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        Self {
            backend,
            report: None,
            loading: false,
        }
    }

    /// Fetch metrics from the backend, falling back to synthetic data.
    ///
    /// Any failure (transport error, non-2xx, malformed payload, or a
    /// misaligned ROC curve) yields a report tagged
    /// [`MetricsSource::Synthetic`]; live data is tagged
    /// [`MetricsSource::Backend`].
    pub async fn load_metrics(&mut self) -> &MetricsReport {
        self.loading = true;
        let fetched = self.backend.fetch_metrics().await;
        self.loading = false;

        let report = match fetched {
            Ok(metrics) if metrics.roc_curve.is_aligned() => MetricsReport {
                metrics,
                source: MetricsSource::Backend,
            },
            Ok(_) => {
                warn!("backend metrics have misaligned ROC sequences, using synthetic data");
                Self::fallback()
            }
            Err(error) => {
                warn!(%error, "metrics fetch failed, using synthetic data");
                Self::fallback()
            }
        };

        self.report.insert(report)
    }

    pub fn report(&self) -> Option<&MetricsReport> {
        self.report.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn fallback() -> MetricsReport {
        metrics::counter!(telemetry::METRICS_FALLBACKS_TOTAL).increment(1);
        MetricsReport {
            metrics: synthetic_metrics(),
            source: MetricsSource::Synthetic,
        }
    }
}

/// Synthetic metrics dataset for when the backend is unreachable.
///
/// Fixed plausible scalars and confusion matrix, plus a procedurally
/// generated roughly-monotonic ROC curve. Demo convenience only; the
/// `Synthetic` tag keeps it distinguishable from backend data.
fn synthetic_metrics() -> ModelMetrics {
    let mut rng = rand::thread_rng();

    let mut fpr = Vec::with_capacity(SYNTHETIC_ROC_SEGMENTS + 1);
    let mut tpr = Vec::with_capacity(SYNTHETIC_ROC_SEGMENTS + 1);
    let mut thresholds = Vec::with_capacity(SYNTHETIC_ROC_SEGMENTS + 1);
    for i in 0..=SYNTHETIC_ROC_SEGMENTS {
        let t = i as f64 / SYNTHETIC_ROC_SEGMENTS as f64;
        fpr.push(t);
        tpr.push((t * 1.3 + rng.gen_range(0.0..0.1)).min(1.0));
        thresholds.push(1.0 - t);
    }

    ModelMetrics {
        accuracy: 0.9234,
        precision: 0.8956,
        recall: 0.9123,
        f1_score: 0.9038,
        specificity: 0.9345,
        auc: 0.9567,
        confusion_matrix: ConfusionMatrix {
            true_negative: 842,
            false_positive: 58,
            false_negative: 73,
            true_positive: 827,
        },
        roc_curve: RocCurve {
            fpr,
            tpr,
            thresholds,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_roc_sequences_stay_aligned() {
        let metrics = synthetic_metrics();
        assert!(metrics.roc_curve.is_aligned());
        assert_eq!(metrics.roc_curve.len(), SYNTHETIC_ROC_SEGMENTS + 1);
    }

    #[test]
    fn synthetic_probabilities_stay_in_range() {
        let metrics = synthetic_metrics();
        for value in [
            metrics.accuracy,
            metrics.precision,
            metrics.recall,
            metrics.f1_score,
            metrics.specificity,
            metrics.auc,
        ] {
            assert!((0.0..=1.0).contains(&value));
        }
        for value in metrics
            .roc_curve
            .fpr
            .iter()
            .chain(metrics.roc_curve.tpr.iter())
        {
            assert!((0.0..=1.0).contains(value));
        }
    }

    #[test]
    fn synthetic_fpr_is_monotonic() {
        let metrics = synthetic_metrics();
        let fpr = &metrics.roc_curve.fpr;
        assert!(fpr.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(fpr.first().copied(), Some(0.0));
        assert_eq!(fpr.last().copied(), Some(1.0));
    }
}
