//! Telemetry metric name constants.
//!
//! Centralised metric names for pneumoscope operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `pneumoscope_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation` — backend call invoked ("classify" | "fetch_metrics" | "health")
//! - `status` — outcome: "ok" or "error"

/// Total requests issued to the prediction backend.
///
/// Labels: `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "pneumoscope_requests_total";

/// Request duration in seconds.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "pneumoscope_request_duration_seconds";

/// Total batch items that reached a terminal state.
///
/// Labels: `status` ("ok" | "error").
pub const BATCH_ITEMS_TOTAL: &str = "pneumoscope_batch_items_total";

/// Total metrics loads that fell back to the synthetic dataset.
pub const METRICS_FALLBACKS_TOTAL: &str = "pneumoscope_metrics_fallbacks_total";
