//! Error types for export operations.

use thiserror::Error;

/// Errors raised by the export renderers.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was requested for an empty meeting list.
    #[error("אין מפגשים לייצוא")]
    NoMeetings,

    /// PDF assembly failed.
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}
