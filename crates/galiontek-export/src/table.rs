//! Shared row and summary text for all export formats.
//!
//! This is the single source of truth for per-meeting display text. Every
//! renderer formats meetings through [`rows`] and the summary band through
//! [`summary_lines`], which is what guarantees that the numbers embedded in
//! the PDF, the WhatsApp message and the email body agree to the last digit.

use galiontek_core::aggregate::MeetingSummary;
use galiontek_core::hebrew;
use galiontek_core::meeting::Meeting;
use galiontek_core::order::OrderRef;
use galiontek_core::units::UnitMode;
use galiontek_core::{completion_status, summarize};

/// Column titles, listed in RTL reading order.
pub const COLUMN_TITLES: [&str; 6] = ["תאריך", "יום", "שעות", "משך (שעות)", "יחידות", "נושא"];

/// Placeholder for a meeting without a topic.
pub const MISSING_TOPIC: &str = "-";

/// One meeting, fully formatted for tabular display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// `DD/MM/YYYY`.
    pub date: String,
    /// Hebrew weekday name.
    pub weekday: String,
    /// `HH:MM-HH:MM`.
    pub time_range: String,
    /// Duration in hours, two decimals.
    pub hours: String,
    /// Units under the active mode, two decimals.
    pub units: String,
    /// Topic, or [`MISSING_TOPIC`].
    pub topic: String,
}

/// Formats a numeric total the way every export renders it.
pub fn format_number(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats meetings into display rows, preserving the given order.
pub fn rows(meetings: &[Meeting], mode: UnitMode) -> Vec<TableRow> {
    meetings
        .iter()
        .map(|m| TableRow {
            date: hebrew::format_date(m.date),
            weekday: m.weekday_name().to_string(),
            time_range: m.time_range(),
            hours: format_number(m.hours()),
            units: format_number(m.units(mode)),
            topic: m
                .topic
                .clone()
                .unwrap_or_else(|| MISSING_TOPIC.to_string()),
        })
        .collect()
}

/// The document/message title for an order.
pub fn export_title(order: &OrderRef) -> String {
    format!("סיכום מפגשים - {}", order.display_title())
}

/// Builds the summary band shared by all renderers.
///
/// Lines: meeting count, total hours, total units under the active mode,
/// and — when the order carries an agreed amount — the completion message.
pub fn summary_lines(order: &OrderRef, summary: &MeetingSummary) -> Vec<String> {
    let mut lines = vec![
        format!("מספר מפגשים: {}", summary.total_meetings),
        format!("סך שעות: {}", format_number(summary.total_hours)),
        format!(
            "סך {}: {}",
            summary.unit_mode.label(),
            format_number(summary.total_units)
        ),
    ];

    if let Some(agreed) = order.agreed_hours {
        let status = completion_status(summary, agreed);
        lines.push(status.message(summary.unit_mode));
    }

    lines
}

/// Convenience wrapper: summarize and build the band in one call.
pub fn summarize_for_export(
    order: &OrderRef,
    meetings: &[Meeting],
    mode: UnitMode,
) -> (MeetingSummary, Vec<String>) {
    let summary = summarize(meetings, mode);
    let lines = summary_lines(order, &summary);
    (summary, lines)
}

/// Escapes text for embedding in the email HTML body.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_meetings() -> Vec<Meeting> {
        vec![
            Meeting::new(
                "m-1",
                "o-1",
                date(2025, 3, 2),
                "09:00",
                "10:30",
                Some("אלגברה לינארית".to_string()),
            )
            .unwrap(),
            Meeting::new("m-2", "o-1", date(2025, 3, 7), "14:00", "14:45", None).unwrap(),
        ]
    }

    #[test]
    fn rows_preserve_order_and_format() {
        let rows = rows(&sample_meetings(), UnitMode::TeachingUnit);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].date, "02/03/2025");
        assert_eq!(rows[0].weekday, "ראשון");
        assert_eq!(rows[0].time_range, "09:00-10:30");
        assert_eq!(rows[0].hours, "1.50");
        assert_eq!(rows[0].units, "2.00");
        assert_eq!(rows[0].topic, "אלגברה לינארית");

        // 2025-03-07 is a Friday; missing topic renders as a dash.
        assert_eq!(rows[1].weekday, "שישי");
        assert_eq!(rows[1].units, "1.00");
        assert_eq!(rows[1].topic, "-");
    }

    #[test]
    fn summary_band_without_agreed_hours() {
        let order = OrderRef::new("o-1");
        let (_, lines) =
            summarize_for_export(&order, &sample_meetings(), UnitMode::TeachingUnit);

        assert_eq!(
            lines,
            vec![
                "מספר מפגשים: 2".to_string(),
                "סך שעות: 2.25".to_string(),
                "סך יחידות הוראה: 3.00".to_string(),
            ]
        );
    }

    #[test]
    fn summary_band_with_completion_line() {
        let order = OrderRef::new("o-1").with_agreed_hours(10.0);
        let (_, lines) =
            summarize_for_export(&order, &sample_meetings(), UnitMode::TeachingUnit);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "נותרו 7.00 יחידות הוראה");
    }

    #[test]
    fn number_formatting_is_two_decimals() {
        assert_eq!(format_number(3.0), "3.00");
        assert_eq!(format_number(2.25), "2.25");
        assert_eq!(format_number(1.5), "1.50");
    }

    #[test]
    fn escapes_html() {
        assert_eq!(html_escape("<b>a & b</b>"), "&lt;b&gt;a &amp; b&lt;/b&gt;");
    }
}
