//! Prediction backend clients.
//!
//! The [`PredictionBackend`] trait is the seam between controllers and the
//! network: the HTTP implementation speaks the backend's wire contract, and
//! tests substitute doubles.

mod http;

use async_trait::async_trait;

use crate::Result;
use crate::types::{ImageFile, ModelMetrics, PredictionResult};

pub use http::HttpPredictionClient;
pub(crate) use http::DEFAULT_BASE_URL;

/// Client for the remote classification service.
///
/// Implementations own their transport concerns (timeouts, encoding); the
/// controllers only see typed results.
#[async_trait]
pub trait PredictionBackend: Send + Sync {
    /// Backend name for logging/debugging.
    fn name(&self) -> &str;

    /// Classify one image.
    ///
    /// Non-2xx responses and the backend's sentinel `"error"` classification
    /// both surface as errors.
    async fn classify(&self, image: &ImageFile) -> Result<PredictionResult>;

    /// Fetch the aggregate model-performance metrics document.
    async fn fetch_metrics(&self) -> Result<ModelMetrics>;
}
