//! Public types for the Pneumoscope API.

mod batch;
mod health;
mod image;
mod metrics;
mod prediction;

pub use batch::{BatchItem, Classification, ItemStatus};
pub use health::HealthStatus;
pub use image::{ImageFile, Preview};
pub use metrics::{ConfusionMatrix, MetricsReport, MetricsSource, ModelMetrics, RocCurve};
pub use prediction::{ClassProbabilities, Label, PredictionResult};
