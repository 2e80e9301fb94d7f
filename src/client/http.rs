//! HTTP client for the pneumonia classification service.
//!
//! Speaks the backend's wire contract: multipart `POST /predict`, JSON
//! `GET /metrics`, and the `GET /health` liveness probe.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::instrument;

use super::PredictionBackend;
use crate::types::{
    ClassProbabilities, HealthStatus, ImageFile, Label, ModelMetrics, PredictionResult,
};
use crate::{PneumoscopeError, Result, telemetry};

/// Default base URL of the classification service.
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default per-request timeout. A hung request would otherwise stall a batch
/// item in `Processing` indefinitely.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the classification service HTTP API.
#[derive(Clone)]
pub struct HttpPredictionClient {
    http: Client,
    base_url: String,
}

impl HttpPredictionClient {
    /// Create a client against the default local backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Classify one image via `POST /predict`.
    ///
    /// The image travels as the single multipart part `file`, carrying the
    /// original filename and MIME type.
    #[instrument(skip(self, image), fields(operation = "classify", file = %image.name))]
    pub async fn classify(&self, image: &ImageFile) -> Result<PredictionResult> {
        let start = Instant::now();
        let result = self.classify_inner(image).await;
        Self::record_request("classify", start, result.is_ok());
        result
    }

    async fn classify_inner(&self, image: &ImageFile) -> Result<PredictionResult> {
        let url = format!("{}/predict", self.base_url);

        let part = Part::bytes(image.bytes.clone())
            .file_name(image.name.clone())
            .mime_str(&image.content_type)
            .map_err(|e| PneumoscopeError::InvalidInput(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PneumoscopeError::Http(e.to_string()))?;

        Self::handle_response_errors(&response)?;

        let raw: PredictResponse = response
            .json()
            .await
            .map_err(|e| PneumoscopeError::Http(e.to_string()))?;

        raw.into_result()
    }

    /// Fetch the aggregate metrics document via `GET /metrics`.
    #[instrument(skip(self), fields(operation = "fetch_metrics"))]
    pub async fn fetch_metrics(&self) -> Result<ModelMetrics> {
        let start = Instant::now();
        let result = self.fetch_metrics_inner().await;
        Self::record_request("fetch_metrics", start, result.is_ok());
        result
    }

    async fn fetch_metrics_inner(&self) -> Result<ModelMetrics> {
        let url = format!("{}/metrics", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PneumoscopeError::Http(e.to_string()))?;

        Self::handle_response_errors(&response)?;

        response
            .json()
            .await
            .map_err(|e| PneumoscopeError::Http(e.to_string()))
    }

    /// Probe backend liveness via `GET /health`.
    #[instrument(skip(self), fields(operation = "health"))]
    pub async fn health(&self) -> Result<HealthStatus> {
        let start = Instant::now();
        let result = self.health_inner().await;
        Self::record_request("health", start, result.is_ok());
        result
    }

    async fn health_inner(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PneumoscopeError::Http(e.to_string()))?;

        Self::handle_response_errors(&response)?;

        response
            .json()
            .await
            .map_err(|e| PneumoscopeError::Http(e.to_string()))
    }

    /// Check response status and map to appropriate error.
    fn handle_response_errors(response: &reqwest::Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        Err(PneumoscopeError::Api {
            status: status.as_u16(),
            message: format!("classification service error: {}", status),
        })
    }

    fn record_request(operation: &'static str, start: Instant, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        let elapsed = start.elapsed().as_secs_f64();
        metrics::counter!(telemetry::REQUESTS_TOTAL,
            "operation" => operation,
            "status" => status,
        )
        .increment(1);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
            "operation" => operation,
        )
        .record(elapsed);
    }
}

impl Default for HttpPredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of `POST /predict`.
///
/// `predicted_class` stays a string here because the backend reports
/// unreadable images as the sentinel class `"error"` with probabilities
/// `{"error": 1.0}`, which only resolves to a typed result after the
/// sentinel check.
#[derive(Deserialize)]
struct PredictResponse {
    predicted_class: String,
    predicted_confidence: f32,
    #[serde(default)]
    class_probabilities: HashMap<String, f32>,
}

impl PredictResponse {
    fn into_result(self) -> Result<PredictionResult> {
        let predicted_class = match self.predicted_class.as_str() {
            "Normal" => Label::Normal,
            "Pneumonia" => Label::Pneumonia,
            "error" => return Err(PneumoscopeError::PredictionRejected),
            other => {
                return Err(PneumoscopeError::Data(format!(
                    "unknown classification: {}",
                    other
                )));
            }
        };

        let class_probabilities = ClassProbabilities {
            normal: self.class_probabilities.get("Normal").copied().unwrap_or(0.0),
            pneumonia: self
                .class_probabilities
                .get("Pneumonia")
                .copied()
                .unwrap_or(0.0),
        };

        Ok(PredictionResult {
            predicted_class,
            predicted_confidence: self.predicted_confidence,
            class_probabilities,
        })
    }
}

// ============================================================================
// Provider Trait Implementation
// ============================================================================

#[async_trait]
impl PredictionBackend for HttpPredictionClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn classify(&self, image: &ImageFile) -> Result<PredictionResult> {
        // Delegate to the existing method
        HttpPredictionClient::classify(self, image).await
    }

    async fn fetch_metrics(&self) -> Result<ModelMetrics> {
        // Delegate to the existing method
        HttpPredictionClient::fetch_metrics(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(class: &str, confidence: f32, probs: &[(&str, f32)]) -> PredictResponse {
        PredictResponse {
            predicted_class: class.to_string(),
            predicted_confidence: confidence,
            class_probabilities: probs
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    #[test]
    fn wire_response_maps_to_typed_result() {
        let result = raw("Pneumonia", 0.87, &[("Normal", 0.13), ("Pneumonia", 0.87)])
            .into_result()
            .unwrap();
        assert_eq!(result.predicted_class, Label::Pneumonia);
        assert!((result.class_probabilities.normal - 0.13).abs() < 1e-6);
        assert!((result.class_probabilities.pneumonia - 0.87).abs() < 1e-6);
    }

    #[test]
    fn sentinel_class_is_rejected() {
        let result = raw("error", 0.0, &[("error", 1.0)]).into_result();
        assert!(matches!(result, Err(PneumoscopeError::PredictionRejected)));
    }

    #[test]
    fn unknown_class_is_a_data_error() {
        let result = raw("Tuberculosis", 0.9, &[]).into_result();
        assert!(matches!(result, Err(PneumoscopeError::Data(_))));
    }

    #[test]
    fn missing_probabilities_default_to_zero() {
        let result = raw("Normal", 0.6, &[]).into_result().unwrap();
        assert_eq!(result.class_probabilities.normal, 0.0);
        assert_eq!(result.class_probabilities.pneumonia, 0.0);
    }
}
