//! Pneumoscope - client workbench for a chest X-ray classification service
//!
//! This crate provides the state, orchestration, and wire-contract layer of
//! a pneumonia-detection dashboard, decoupled from any particular UI. A
//! [`PredictionBackend`] trait abstracts the remote classification service,
//! and three controllers drive the flows a frontend renders: single-image
//! prediction, sequential batch processing with CSV export, and aggregate
//! model-performance metrics with a synthetic demo fallback.
//!
//! # Single-image Example
//!
//! ```rust,no_run
//! use pneumoscope::{ImageFile, Pneumoscope};
//!
//! #[tokio::main]
//! async fn main() -> pneumoscope::Result<()> {
//!     let workbench = Pneumoscope::builder()
//!         .base_url("http://localhost:8000")
//!         .build();
//!
//!     let mut single = workbench.single();
//!     single.select_file(ImageFile::new(
//!         "chest.png",
//!         "image/png",
//!         std::fs::read("chest.png").expect("readable image"),
//!     ))?;
//!     single.predict().await?;
//!
//!     if let Some(result) = single.result() {
//!         println!(
//!             "{} ({:.2}%)",
//!             result.predicted_class,
//!             result.predicted_confidence * 100.0
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Batch Example
//!
//! ```rust,no_run
//! use pneumoscope::{ImageFile, Pneumoscope};
//!
//! #[tokio::main]
//! async fn main() -> pneumoscope::Result<()> {
//!     let workbench = Pneumoscope::builder().build();
//!
//!     let mut batch = workbench.batch();
//!     batch.add_files(vec![
//!         ImageFile::new("a.png", "image/png", vec![/* ... */]),
//!         ImageFile::new("b.png", "image/png", vec![/* ... */]),
//!     ])?;
//!     batch.run_batch().await?;
//!
//!     let export = batch.export_completed();
//!     println!("{}: {} rows", export.file_name, export.contents.lines().count() - 1);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod controller;
pub mod error;
pub mod export;
pub mod notify;
pub mod telemetry;
pub mod types;
mod workbench;

// Re-export main types at crate root
pub use client::{HttpPredictionClient, PredictionBackend};
pub use controller::{BatchController, MetricsController, SinglePredictionController};
pub use error::{PneumoscopeError, Result};
pub use export::CsvExport;
pub use notify::{Notice, Notifier, TracingNotifier};
pub use workbench::{Pneumoscope, Workbench, WorkbenchBuilder};

// Re-export all types
pub use types::{
    BatchItem, ClassProbabilities, Classification, ConfusionMatrix, HealthStatus, ImageFile,
    ItemStatus, Label, MetricsReport, MetricsSource, ModelMetrics, PredictionResult, Preview,
    RocCurve,
};
