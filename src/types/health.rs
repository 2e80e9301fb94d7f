//! Backend liveness report.

use serde::Deserialize;

/// Response of the backend's `GET /health` probe.
///
/// The backend reports additional model-shape fields; unknown fields are
/// ignored so the probe stays compatible across backend versions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
    #[serde(default)]
    pub load_time_sec: f64,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok" && self.model_loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_parses_with_extra_fields() {
        let json = r#"{
            "status": "ok",
            "model_loaded": true,
            "model_path": "/models/pneumonia.h5",
            "load_time_sec": 2.41,
            "num_outputs": 1
        }"#;
        let health: HealthStatus = serde_json::from_str(json).unwrap();
        assert!(health.is_ok());
        assert!((health.load_time_sec - 2.41).abs() < 1e-9);
    }

    #[test]
    fn unloaded_model_is_not_ok() {
        let json = r#"{"status": "ok", "model_loaded": false}"#;
        let health: HealthStatus = serde_json::from_str(json).unwrap();
        assert!(!health.is_ok());
    }
}
