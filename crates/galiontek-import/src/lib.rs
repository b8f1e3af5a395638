//! Spreadsheet meeting import.
//!
//! Reads the first worksheet of an xlsx workbook into validated
//! [`ImportedMeeting`] rows. Validation happens here at the boundary
//! (parse-don't-validate): rows that fail the clock or duration rules are
//! dropped with a warning and never reach the aggregator; a batch with no
//! surviving rows rejects outright.

pub mod error;
pub mod spreadsheet;

pub use error::{ImportError, RowError};
pub use spreadsheet::{ImportedMeeting, parse_row, read_workbook};
