//! The meeting record and its validated construction.
//!
//! A [`Meeting`] is a single scheduled teaching session tied to an order.
//! `duration_minutes` is derived at construction and is always positive for a
//! persisted meeting; intervals with `end <= start` are rejected and never
//! stored. Teaching-unit values are *not* a field — they depend on the
//! caller's [`UnitMode`] and are recomputed on every display or export call.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hebrew;
use crate::units::{self, UnitMode};

/// Errors raised while constructing a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeetingError {
    /// A start/end value was not a valid `HH:MM` clock value.
    #[error("ערך שעה לא תקין: {0}")]
    InvalidClock(String),
    /// The end time was not strictly later than the start time.
    #[error("שעת הסיום {end} אינה מאוחרת משעת ההתחלה {start}")]
    InvalidRange {
        /// The offending start time.
        start: String,
        /// The offending end time.
        end: String,
    },
}

/// A single scheduled teaching/consulting session tied to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// Opaque unique identifier.
    pub id: String,
    /// The owning order/engagement.
    pub order_id: String,
    /// Calendar date the meeting occurs on.
    pub date: NaiveDate,
    /// Start of the meeting (time of day, minute precision).
    pub start_time: NaiveTime,
    /// End of the meeting, strictly later than `start_time`.
    pub end_time: NaiveTime,
    /// Derived elapsed minutes; invariant: always > 0.
    pub duration_minutes: u32,
    /// Optional free-text description.
    pub topic: Option<String>,
}

impl Meeting {
    /// Builds a meeting from `HH:MM` start/end strings, validating the interval.
    pub fn new(
        id: impl Into<String>,
        order_id: impl Into<String>,
        date: NaiveDate,
        start: &str,
        end: &str,
        topic: Option<String>,
    ) -> Result<Self, MeetingError> {
        let start_time = units::parse_clock(start)
            .ok_or_else(|| MeetingError::InvalidClock(start.to_string()))?;
        let end_time =
            units::parse_clock(end).ok_or_else(|| MeetingError::InvalidClock(end.to_string()))?;
        Self::from_times(id, order_id, date, start_time, end_time, topic)
    }

    /// Builds a meeting from already-parsed times, validating the interval.
    pub fn from_times(
        id: impl Into<String>,
        order_id: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        topic: Option<String>,
    ) -> Result<Self, MeetingError> {
        let duration_minutes = units::duration_between(start_time, end_time).ok_or_else(|| {
            MeetingError::InvalidRange {
                start: start_time.format("%H:%M").to_string(),
                end: end_time.format("%H:%M").to_string(),
            }
        })?;

        Ok(Self {
            id: id.into(),
            order_id: order_id.into(),
            date,
            start_time,
            end_time,
            duration_minutes,
            topic,
        })
    }

    /// Duration in hours, 2-decimal rounded.
    pub fn hours(&self) -> f64 {
        units::hours(self.duration_minutes)
    }

    /// Billing units under the given mode, 2-decimal rounded.
    pub fn units(&self, mode: UnitMode) -> f64 {
        units::teaching_units(self.duration_minutes, mode)
    }

    /// The `HH:MM-HH:MM` time range for display.
    pub fn time_range(&self) -> String {
        format!(
            "{}-{}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }

    /// Hebrew weekday name of the meeting date.
    pub fn weekday_name(&self) -> &'static str {
        hebrew::weekday_name(self.date.weekday())
    }
}
