//! Email (`mailto:`) renderer.
//!
//! Builds an HTML table body structurally identical to the PDF table and
//! percent-encodes subject and body into a `mailto:` link. The recipient is
//! resolved by the caller from the client table; a missing address yields an
//! empty recipient field, never a failure.

use galiontek_core::meeting::Meeting;
use galiontek_core::order::OrderRef;
use galiontek_core::units::UnitMode;

use crate::error::ExportError;
use crate::table::{self, html_escape};

/// The email subject line for an order.
pub fn subject(order: &OrderRef) -> String {
    table::export_title(order)
}

/// Builds the HTML body: RTL container, title, summary band, meeting table.
pub fn build_html_body(order: &OrderRef, meetings: &[Meeting], mode: UnitMode) -> String {
    let (_, summary_lines) = table::summarize_for_export(order, meetings, mode);
    let rows = table::rows(meetings, mode);

    let mut body = String::from("<div dir=\"rtl\">");
    body.push_str(&format!(
        "<h2>{}</h2>",
        html_escape(&table::export_title(order))
    ));
    if let Some(ref client) = order.client_name {
        body.push_str(&format!("<p>לקוח: {}</p>", html_escape(client)));
    }

    for line in &summary_lines {
        body.push_str(&format!("<p>{}</p>", html_escape(line)));
    }

    body.push_str("<table border=\"1\" cellpadding=\"4\" cellspacing=\"0\"><tr>");
    for title in table::COLUMN_TITLES {
        body.push_str(&format!("<th>{title}</th>"));
    }
    body.push_str("</tr>");

    for row in &rows {
        body.push_str("<tr>");
        body.push_str(&format!("<td>{}</td>", row.date));
        body.push_str(&format!("<td>{}</td>", row.weekday));
        body.push_str(&format!("<td>{}</td>", row.time_range));
        body.push_str(&format!("<td>{}</td>", row.hours));
        body.push_str(&format!("<td>{}</td>", row.units));
        body.push_str(&format!("<td>{}</td>", html_escape(&row.topic)));
        body.push_str("</tr>");
    }

    body.push_str("</table></div>");
    body
}

/// Renders the `mailto:` deep link.
///
/// # Errors
///
/// Returns [`ExportError::NoMeetings`] for an empty meeting list.
pub fn mailto_url(
    recipient: Option<&str>,
    order: &OrderRef,
    meetings: &[Meeting],
    mode: UnitMode,
) -> Result<String, ExportError> {
    if meetings.is_empty() {
        return Err(ExportError::NoMeetings);
    }

    let body = build_html_body(order, meetings, mode);
    Ok(format!(
        "mailto:{}?subject={}&body={}",
        recipient.unwrap_or(""),
        urlencoding::encode(&subject(order)),
        urlencoding::encode(&body)
    ))
}
