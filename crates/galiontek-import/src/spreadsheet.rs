//! Workbook walking and per-row parsing.
//!
//! Expected layout: first sheet, columns `date` (a `DD/MM/YYYY` string or a
//! native date cell), `start_time`, `end_time` (`HH:MM` strings or native
//! time cells), optional `topic`. A header row is tolerated.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveTime};
use galiontek_core::units;
use tracing::{debug, warn};

use crate::error::{ImportError, RowError};

/// A validated meeting row, ready to be persisted under an order.
///
/// Carries only what the spreadsheet provides; id and order are assigned by
/// the caller. Unit counts are deliberately absent — they are derived from
/// `duration_minutes` at read time, never imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedMeeting {
    /// Meeting date.
    pub date: NaiveDate,
    /// Start of the meeting.
    pub start_time: NaiveTime,
    /// End of the meeting, strictly later than the start.
    pub end_time: NaiveTime,
    /// Derived elapsed minutes, always positive.
    pub duration_minutes: u32,
    /// Optional topic text.
    pub topic: Option<String>,
}

/// Reads and validates the first worksheet of the workbook at `path`.
///
/// Invalid rows are dropped with a warning; the batch continues with the
/// remaining valid rows.
///
/// # Errors
///
/// Fails if the workbook cannot be read, has no sheet, or if no row
/// survives validation.
pub fn read_workbook(path: &Path) -> Result<Vec<ImportedMeeting>, ImportError> {
    let mut workbook = open_workbook_auto(path)?;
    let range: Range<Data> = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoSheet)??;

    debug!(path = %path.display(), rows = range.height(), "parsing workbook");
    parse_rows(range.rows())
}

/// Validates an iterator of raw rows into a meeting batch.
pub fn parse_rows<'a>(
    rows: impl Iterator<Item = &'a [Data]>,
) -> Result<Vec<ImportedMeeting>, ImportError> {
    let mut valid = Vec::new();

    for (index, row) in rows.enumerate() {
        match parse_row(row) {
            Ok(meeting) => valid.push(meeting),
            // A leading column-title row is expected; skip it quietly. A
            // first row that does carry a date is data and gets the same
            // warning as any other dropped row.
            Err(_) if index == 0 && looks_like_header(row) => continue,
            Err(reason) => {
                warn!(row = index + 1, %reason, "dropping invalid spreadsheet row");
            }
        }
    }

    if valid.is_empty() {
        return Err(ImportError::NoValidRows);
    }
    Ok(valid)
}

/// Parses one raw row into a validated meeting.
pub fn parse_row(row: &[Data]) -> Result<ImportedMeeting, RowError> {
    let date = cell_date(row.first().ok_or(RowError::TooShort)?).ok_or(RowError::BadDate)?;
    let start_time =
        cell_time(row.get(1).ok_or(RowError::TooShort)?).ok_or(RowError::BadStartTime)?;
    let end_time = cell_time(row.get(2).ok_or(RowError::TooShort)?).ok_or(RowError::BadEndTime)?;

    let duration_minutes =
        units::duration_between(start_time, end_time).ok_or(RowError::NonPositiveDuration)?;

    Ok(ImportedMeeting {
        date,
        start_time,
        end_time,
        duration_minutes,
        topic: row.get(3).and_then(cell_text),
    })
}

/// Whether a row reads as column titles: its first cell is text that does
/// not parse as a date.
fn looks_like_header(row: &[Data]) -> bool {
    match row.first() {
        Some(cell @ Data::String(_)) => cell_date(cell).is_none(),
        _ => false,
    }
}

/// Extracts a date from a cell: `DD/MM/YYYY` text or a native date value.
fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::String(s) => NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok(),
        Data::DateTime(dt) => dt.as_datetime().map(|d| d.date()),
        Data::DateTimeIso(s) => NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok(),
        _ => None,
    }
}

/// Extracts a time of day: `HH:MM` text, a native time value, or an Excel
/// day-fraction float.
fn cell_time(cell: &Data) -> Option<NaiveTime> {
    match cell {
        Data::String(s) => units::parse_clock(s),
        Data::DateTime(dt) => dt.as_datetime().map(|d| d.time()),
        Data::Float(f) if (0.0..1.0).contains(f) => {
            let minutes = (f * 24.0 * 60.0).round() as u32;
            NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
        }
        _ => None,
    }
}

/// Extracts optional topic text; blank cells count as absent.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    }
}
