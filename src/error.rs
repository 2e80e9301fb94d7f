//! Pneumoscope error types

/// Pneumoscope error types
#[derive(Debug, thiserror::Error)]
pub enum PneumoscopeError {
    // Transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Backend answered 200 but flagged the image as unreadable with its
    /// sentinel `"error"` classification. Treated like a failed request.
    #[error("backend could not classify the image")]
    PredictionRejected,

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("data error: {0}")]
    Data(String),

    // Validation errors
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no image selected")]
    NoFileSelected,

    /// The batch queue is mid-run; mutating the sequence would desynchronize
    /// the progress cursor.
    #[error("batch is currently processing")]
    BatchInProgress,
}

/// Result type alias for Pneumoscope operations
pub type Result<T> = std::result::Result<T, PneumoscopeError>;
