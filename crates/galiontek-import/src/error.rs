//! Error types for spreadsheet import.

use thiserror::Error;

/// Errors raised for a whole import batch.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The workbook could not be opened or read.
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook has no worksheet at all.
    #[error("הקובץ אינו מכיל גיליון")]
    NoSheet,

    /// Every row was dropped by validation.
    #[error("לא נמצאו מפגשים תקינים בקובץ")]
    NoValidRows,
}

/// Why a single row was dropped from the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowError {
    /// Fewer cells than the expected date/start/end columns.
    #[error("שורה חסרה עמודות")]
    TooShort,
    /// The date cell could not be parsed.
    #[error("תאריך לא תקין")]
    BadDate,
    /// The start-time cell was not a valid `HH:MM` value.
    #[error("שעת התחלה לא תקינה")]
    BadStartTime,
    /// The end-time cell was not a valid `HH:MM` value.
    #[error("שעת סיום לא תקינה")]
    BadEndTime,
    /// The end time was not strictly after the start time.
    #[error("משך המפגש אינו חיובי")]
    NonPositiveDuration,
}
