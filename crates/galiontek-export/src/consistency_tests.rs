//! Cross-format consistency checks.
//!
//! The totals embedded in the PDF summary band, the WhatsApp message and the
//! email body must be byte-for-byte equal for the same input and unit mode.
//! All renderers go through [`crate::table`], and these tests pin that down.

use chrono::NaiveDate;
use galiontek_core::meeting::Meeting;
use galiontek_core::order::OrderRef;
use galiontek_core::units::UnitMode;

use crate::{email, pdf, table, whatsapp};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_order() -> OrderRef {
    OrderRef::new("o-7")
        .with_title("קורס אלגברה")
        .with_client_name("דנה לוי")
        .with_agreed_hours(10.0)
}

fn sample_meetings() -> Vec<Meeting> {
    vec![
        Meeting::new(
            "m-1",
            "o-7",
            date(2025, 3, 2),
            "09:00",
            "10:30",
            Some("וקטורים".to_string()),
        )
        .unwrap(),
        Meeting::new("m-2", "o-7", date(2025, 3, 7), "14:00", "14:45", None).unwrap(),
    ]
}

#[test]
fn unit_total_line_appears_in_text_formats() {
    for (mode, expected) in [
        (UnitMode::TeachingUnit, "סך יחידות הוראה: 3.00"),
        (UnitMode::AcademicHour, "סך שעות אקדמיות: 2.25"),
    ] {
        let order = sample_order();
        let meetings = sample_meetings();

        let message = whatsapp::build_message(&order, &meetings, mode);
        assert!(message.contains(expected), "whatsapp missing {expected:?}");

        let body = email::build_html_body(&order, &meetings, mode);
        assert!(body.contains(expected), "email missing {expected:?}");
    }
}

#[test]
fn all_formats_share_the_same_summary_band() {
    let order = sample_order();
    let meetings = sample_meetings();
    let mode = UnitMode::TeachingUnit;

    let (_, lines) = table::summarize_for_export(&order, &meetings, mode);
    let message = whatsapp::build_message(&order, &meetings, mode);
    let body = email::build_html_body(&order, &meetings, mode);

    for line in &lines {
        assert!(message.contains(line), "whatsapp missing {line:?}");
        assert!(body.contains(&table::html_escape(line)), "email missing {line:?}");
    }
}

#[test]
fn per_meeting_units_match_across_formats() {
    let order = sample_order();
    let meetings = sample_meetings();
    let mode = UnitMode::TeachingUnit;

    let rows = table::rows(&meetings, mode);
    let message = whatsapp::build_message(&order, &meetings, mode);
    let body = email::build_html_body(&order, &meetings, mode);

    for row in &rows {
        assert!(message.contains(&row.units));
        assert!(body.contains(&format!("<td>{}</td>", row.units)));
    }
}

#[test]
fn every_format_refuses_empty_input() {
    let order = sample_order();
    let mode = UnitMode::TeachingUnit;

    assert!(whatsapp::share_url(&order, &[], mode).is_err());
    assert!(email::mailto_url(None, &order, &[], mode).is_err());
    assert!(pdf::render(&order, &[], mode, date(2025, 3, 7)).is_err());
}
