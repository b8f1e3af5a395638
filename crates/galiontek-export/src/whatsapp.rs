//! WhatsApp share-link renderer.
//!
//! Builds a single plain-text message and percent-encodes it into a
//! `https://wa.me/?text=...` deep link. No network call happens here;
//! "sending" is the caller opening the link in a browsing context.

use galiontek_core::meeting::Meeting;
use galiontek_core::order::OrderRef;
use galiontek_core::units::UnitMode;

use crate::error::ExportError;
use crate::table;

/// Builds the plain-text share message.
///
/// Layout: bold title header, optional client line, the summary band, then
/// one emoji-prefixed block per meeting in list order.
pub fn build_message(order: &OrderRef, meetings: &[Meeting], mode: UnitMode) -> String {
    let (summary, summary_lines) = table::summarize_for_export(order, meetings, mode);
    let rows = table::rows(meetings, mode);

    let mut out = format!("*{}*\n", table::export_title(order));
    if let Some(ref client) = order.client_name {
        out.push_str(&format!("לקוח: {client}\n"));
    }
    out.push('\n');

    for line in &summary_lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    for row in &rows {
        out.push_str(&format!("📅 {} (יום {})\n", row.date, row.weekday));
        out.push_str(&format!("🕐 {}\n", row.time_range));
        out.push_str(&format!(
            "⏱️ {} שעות · {} {}\n",
            row.hours,
            row.units,
            summary.unit_mode.label()
        ));
        if row.topic != table::MISSING_TOPIC {
            out.push_str(&format!("📝 {}\n", row.topic));
        }
        out.push('\n');
    }

    out.trim_end().to_string()
}

/// Renders the shareable deep link for the given meetings.
///
/// # Errors
///
/// Returns [`ExportError::NoMeetings`] for an empty meeting list.
pub fn share_url(
    order: &OrderRef,
    meetings: &[Meeting],
    mode: UnitMode,
) -> Result<String, ExportError> {
    if meetings.is_empty() {
        return Err(ExportError::NoMeetings);
    }

    let message = build_message(order, meetings, mode);
    Ok(format!(
        "https://wa.me/?text={}",
        urlencoding::encode(&message)
    ))
}
