// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::{DayLabel, EventKind, RangeKey};

/// Errors raised while building or editing a schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The start of a date range is after its end.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The requested first day.
        start: Date,
        /// The requested last day.
        end: Date,
    },

    /// The hour of a 12-hour clock value is out of range.
    #[error("invalid hour: {0} (must be 1..=12)")]
    InvalidHour(u8),

    /// The minute of a clock value is out of range.
    #[error("invalid minute: {0} (must be 0..=59)")]
    InvalidMinute(u8),

    /// A calendar date could not be parsed.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    ParseDate(String),

    /// A time of day or time range could not be parsed.
    #[error("invalid time '{0}', expected forms like 9:30am, 9pm or 14:30")]
    ParseTime(String),

    /// A day label could not be parsed.
    #[error("invalid day '{0}', expected YYYY-MM-DD or a weekday name")]
    ParseDay(String),

    /// No time range with the given key exists in the day.
    #[error("time range not found: {0}")]
    RangeNotFound(RangeKey),

    /// A time range key appears more than once in a day.
    #[error("time range {key} appears more than once on {day}")]
    DuplicateRange {
        /// The day holding the ranges.
        day: DayLabel,
        /// The repeated key.
        key: RangeKey,
    },

    /// The day is not selected in the draft.
    #[error("day not selected: {0}")]
    DayNotFound(DayLabel),

    /// The same day appears more than once in a draft.
    #[error("day selected more than once: {0}")]
    DuplicateDay(DayLabel),

    /// The day does not belong to the kind of event being drafted.
    #[error("{label} cannot be selected for an event of {kind}")]
    KindMismatch {
        /// The rejected day.
        label: DayLabel,
        /// The kind of the draft.
        kind: EventKind,
    },
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
