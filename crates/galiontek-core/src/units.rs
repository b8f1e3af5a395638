//! Clock parsing and teaching-unit arithmetic.
//!
//! Meetings are recorded as `HH:MM` start/end pairs on a single day. This
//! module turns such a pair into elapsed minutes and converts minutes into
//! billing units under the active [`UnitMode`]. All functions are pure; unit
//! values are never stored, only derived.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Regex for a 24-hour `HH:MM` clock value.
static CLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):([0-5]\d)$").expect("valid clock regex"));

/// The block size used when converting meeting minutes into billing units.
///
/// Only two conventions exist: the 60-minute academic hour and the 45-minute
/// teaching unit. The mode is supplied by the caller on every computation so
/// the same meeting can be viewed under either convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitMode {
    /// 60-minute blocks.
    #[default]
    AcademicHour,
    /// 45-minute blocks.
    TeachingUnit,
}

impl UnitMode {
    /// Returns the block size in minutes.
    pub fn block_minutes(self) -> u32 {
        match self {
            Self::AcademicHour => 60,
            Self::TeachingUnit => 45,
        }
    }

    /// Selects the mode from the "use 45-minute units" toggle.
    pub fn from_teaching_flag(use_teaching_units: bool) -> Self {
        if use_teaching_units {
            Self::TeachingUnit
        } else {
            Self::AcademicHour
        }
    }

    /// Hebrew label for the unit, as shown in summaries and exports.
    pub fn label(self) -> &'static str {
        match self {
            Self::AcademicHour => "שעות אקדמיות",
            Self::TeachingUnit => "יחידות הוראה",
        }
    }
}

/// Parses a strict `HH:MM` clock value into minutes since midnight.
///
/// Returns `None` for anything that is not a valid 24-hour clock value.
pub fn minutes_of_day(clock: &str) -> Option<u32> {
    let caps = CLOCK_REGEX.captures(clock.trim())?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    if hour >= 24 {
        return None;
    }
    Some(hour * 60 + minute)
}

/// Parses a strict `HH:MM` clock value into a [`NaiveTime`].
pub fn parse_clock(clock: &str) -> Option<NaiveTime> {
    let minutes = minutes_of_day(clock)?;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Computes the elapsed minutes between two same-day `HH:MM` clock values.
///
/// Returns `None` when either value fails to parse or when `end <= start`.
/// Overnight spans (end numerically before start) are invalid by design;
/// callers must treat `None` as a validation failure, never clamp to zero.
pub fn duration_minutes(start: &str, end: &str) -> Option<u32> {
    let start = minutes_of_day(start)?;
    let end = minutes_of_day(end)?;
    if end > start { Some(end - start) } else { None }
}

/// Computes the elapsed minutes between two parsed same-day times.
///
/// Same contract as [`duration_minutes`]: `None` unless `end > start`.
pub fn duration_between(start: NaiveTime, end: NaiveTime) -> Option<u32> {
    if end > start {
        Some((end - start).num_minutes() as u32)
    } else {
        None
    }
}

/// Converts elapsed minutes into units under the given mode, 2-decimal rounded.
pub fn teaching_units(duration_minutes: u32, mode: UnitMode) -> f64 {
    round2(f64::from(duration_minutes) / f64::from(mode.block_minutes()))
}

/// Converts elapsed minutes into hours, 2-decimal rounded.
pub fn hours(duration_minutes: u32) -> f64 {
    round2(f64::from(duration_minutes) / 60.0)
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
