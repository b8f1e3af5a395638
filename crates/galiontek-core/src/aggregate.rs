//! Meeting aggregation: summary statistics, month grouping, completion.
//!
//! Everything here is a pure single-pass function over a meeting slice.
//! Nothing is cached; summaries are recomputed on every read, which is what
//! keeps them consistent with the live meeting list by construction.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::hebrew;
use crate::meeting::Meeting;
use crate::units::{self, UnitMode};

/// Computed totals over a meeting list. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingSummary {
    /// Number of meetings.
    pub total_meetings: usize,
    /// Sum of durations in hours, 2-decimal rounded.
    pub total_hours: f64,
    /// Sum of per-meeting units under `unit_mode`, 2-decimal rounded.
    pub total_units: f64,
    /// The mode the unit total was computed under.
    pub unit_mode: UnitMode,
}

/// Computes count, total hours and total units for a meeting list.
pub fn summarize(meetings: &[Meeting], mode: UnitMode) -> MeetingSummary {
    let total_minutes: u64 = meetings.iter().map(|m| u64::from(m.duration_minutes)).sum();
    let total_units: f64 = meetings.iter().map(|m| m.units(mode)).sum();

    MeetingSummary {
        total_meetings: meetings.len(),
        total_hours: units::round2(total_minutes as f64 / 60.0),
        total_units: units::round2(total_units),
        unit_mode: mode,
    }
}

/// A numeric `(year, month)` bucket key. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    /// Calendar year.
    pub year: i32,
    /// 1-based month.
    pub month: u32,
}

impl MonthKey {
    /// The bucket a date falls into.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Hebrew display label, e.g. "מרץ 2025".
    pub fn label(&self) -> String {
        format!("{} {}", hebrew::month_name(self.month), self.year)
    }
}

/// Buckets meetings by `(year, month)` for monthly reporting views.
pub fn group_by_month(meetings: &[Meeting]) -> BTreeMap<MonthKey, Vec<&Meeting>> {
    let mut groups: BTreeMap<MonthKey, Vec<&Meeting>> = BTreeMap::new();
    for meeting in meetings {
        groups
            .entry(MonthKey::from_date(meeting.date))
            .or_default()
            .push(meeting);
    }
    groups
}

/// Progress of a summary against an order's agreed unit count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionStatus {
    /// Whether the agreed amount has been reached (equality counts).
    pub completed: bool,
    /// Units still owed; zero once completed, never negative.
    pub remaining: f64,
}

impl CompletionStatus {
    /// Hebrew status line for the export summary band.
    pub fn message(&self, mode: UnitMode) -> String {
        if self.completed {
            "ההזמנה הושלמה".to_string()
        } else {
            format!("נותרו {:.2} {}", self.remaining, mode.label())
        }
    }
}

/// Compares delivered units with the order's agreed amount.
pub fn completion_status(summary: &MeetingSummary, agreed_units: f64) -> CompletionStatus {
    if summary.total_units >= agreed_units {
        CompletionStatus {
            completed: true,
            remaining: 0.0,
        }
    } else {
        CompletionStatus {
            completed: false,
            remaining: units::round2(agreed_units - summary.total_units),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn meeting(id: &str, d: NaiveDate, start: &str, end: &str) -> Meeting {
        Meeting::new(id, "o-1", d, start, end, None).unwrap()
    }

    fn sample_meetings() -> Vec<Meeting> {
        vec![
            meeting("m-1", date(2025, 3, 2), "09:00", "10:30"),
            meeting("m-2", date(2025, 3, 9), "14:00", "14:45"),
        ]
    }

    mod summary {
        use super::*;

        #[test]
        fn teaching_unit_mode() {
            let summary = summarize(&sample_meetings(), UnitMode::TeachingUnit);
            assert_eq!(summary.total_meetings, 2);
            assert_eq!(summary.total_hours, 2.25);
            // 90/45 + 45/45 = 2 + 1
            assert_eq!(summary.total_units, 3.0);
        }

        #[test]
        fn academic_hour_mode_equals_hours() {
            let summary = summarize(&sample_meetings(), UnitMode::AcademicHour);
            // 90/60 + 45/60 = 1.5 + 0.75
            assert_eq!(summary.total_units, 2.25);
            assert_eq!(summary.total_units, summary.total_hours);
        }

        #[test]
        fn empty_list() {
            let summary = summarize(&[], UnitMode::TeachingUnit);
            assert_eq!(summary.total_meetings, 0);
            assert_eq!(summary.total_hours, 0.0);
            assert_eq!(summary.total_units, 0.0);
        }

        #[test]
        fn idempotent() {
            let meetings = sample_meetings();
            let first = summarize(&meetings, UnitMode::TeachingUnit);
            let second = summarize(&meetings, UnitMode::TeachingUnit);
            assert_eq!(first, second);
        }
    }

    mod month_grouping {
        use super::*;

        #[test]
        fn buckets_by_year_month() {
            let meetings = vec![
                meeting("m-1", date(2024, 12, 29), "09:00", "10:00"),
                meeting("m-2", date(2025, 1, 5), "09:00", "10:00"),
                meeting("m-3", date(2025, 1, 12), "09:00", "10:00"),
            ];

            let groups = group_by_month(&meetings);
            assert_eq!(groups.len(), 2);

            let keys: Vec<_> = groups.keys().copied().collect();
            // Chronological key order across a year boundary.
            assert_eq!(
                keys,
                vec![
                    MonthKey {
                        year: 2024,
                        month: 12
                    },
                    MonthKey {
                        year: 2025,
                        month: 1
                    },
                ]
            );
            assert_eq!(groups[&keys[1]].len(), 2);
        }

        #[test]
        fn hebrew_label() {
            let key = MonthKey {
                year: 2025,
                month: 3,
            };
            assert_eq!(key.label(), "מרץ 2025");
        }
    }

    mod completion {
        use super::*;

        fn summary_with_units(total_units: f64) -> MeetingSummary {
            MeetingSummary {
                total_meetings: 1,
                total_hours: total_units,
                total_units,
                unit_mode: UnitMode::AcademicHour,
            }
        }

        #[test]
        fn incomplete_order() {
            let status = completion_status(&summary_with_units(7.5), 10.0);
            assert!(!status.completed);
            assert_eq!(status.remaining, 2.5);
        }

        #[test]
        fn equality_counts_as_completed() {
            let status = completion_status(&summary_with_units(5.0), 5.0);
            assert!(status.completed);
            assert_eq!(status.remaining, 0.0);
        }

        #[test]
        fn overshoot_is_completed() {
            let status = completion_status(&summary_with_units(6.5), 5.0);
            assert!(status.completed);
            assert_eq!(status.remaining, 0.0);
        }

        #[test]
        fn messages() {
            let done = CompletionStatus {
                completed: true,
                remaining: 0.0,
            };
            assert_eq!(done.message(UnitMode::AcademicHour), "ההזמנה הושלמה");

            let open = CompletionStatus {
                completed: false,
                remaining: 2.5,
            };
            assert_eq!(
                open.message(UnitMode::TeachingUnit),
                "נותרו 2.50 יחידות הוראה"
            );
        }
    }
}
