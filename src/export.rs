//! CSV export of completed batch results.
//!
//! A read-only projection: only items in `Completed` state produce rows.
//! The artifact is returned to the caller; saving it is the UI's job.

use chrono::NaiveDate;

use crate::types::{BatchItem, ItemStatus};

/// Header row of the export.
pub const CSV_HEADER: &str =
    "File Name,Prediction,Confidence,Normal Probability,Pneumonia Probability";

/// A rendered export artifact, ready to be saved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
}

/// Export filename for a given date: `batch_results_<YYYY-MM-DD>.csv`.
pub fn file_name(date: NaiveDate) -> String {
    format!("batch_results_{}.csv", date.format("%Y-%m-%d"))
}

/// Render the completed items among `items` to CSV.
pub fn render<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a BatchItem>,
{
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(
        items
            .into_iter()
            .filter(|item| item.status == ItemStatus::Completed)
            .map(row),
    );
    lines.join("\n")
}

fn row(item: &BatchItem) -> String {
    format!(
        "{},{},{:.2}%,{:.2}%,{:.2}%",
        item.file_name,
        item.classification,
        item.confidence * 100.0,
        item.probabilities.normal * 100.0,
        item.probabilities.pneumonia * 100.0,
    )
}
