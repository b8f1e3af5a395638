//! Core types: meetings, clock math, teaching units, aggregation, Hebrew locale

pub mod aggregate;
pub mod hebrew;
pub mod meeting;
pub mod order;
pub mod tracing;
pub mod units;

pub use aggregate::{
    CompletionStatus, MeetingSummary, MonthKey, completion_status, group_by_month, summarize,
};
pub use meeting::{Meeting, MeetingError};
pub use order::{ClientRef, OrderRef};
pub use tracing::{TracingConfig, TracingError, init_tracing};
pub use units::{UnitMode, duration_minutes, hours, minutes_of_day, parse_clock, teaching_units};
