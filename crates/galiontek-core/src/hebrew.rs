//! Hebrew locale tables for dates and export text.
//!
//! Grouping and arithmetic are locale-independent; only the rendered labels
//! live here.

use chrono::{Datelike, NaiveDate, Weekday};

/// Placeholder title for an order with no title of its own.
pub const DEFAULT_ORDER_TITLE: &str = "הזמנה";

/// Hebrew weekday name (Sunday is the first day of the week).
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "ראשון",
        Weekday::Mon => "שני",
        Weekday::Tue => "שלישי",
        Weekday::Wed => "רביעי",
        Weekday::Thu => "חמישי",
        Weekday::Fri => "שישי",
        Weekday::Sat => "שבת",
    }
}

/// Hebrew month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "ינואר",
        2 => "פברואר",
        3 => "מרץ",
        4 => "אפריל",
        5 => "מאי",
        6 => "יוני",
        7 => "יולי",
        8 => "אוגוסט",
        9 => "ספטמבר",
        10 => "אוקטובר",
        11 => "נובמבר",
        12 => "דצמבר",
        _ => "",
    }
}

/// Formats a date in the Israeli `DD/MM/YYYY` order.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}
