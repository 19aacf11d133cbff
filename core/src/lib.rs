// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core types for drafting a group availability poll: the days an event may
//! happen on and the time ranges offered on each of them.

mod config;
mod date_range;
mod error;
mod event;
mod schedule;
mod time_of_day;
mod time_range;

pub use crate::config::{APP_NAME, Config};
pub use crate::date_range::{DateRange, dates_between};
pub use crate::error::{ScheduleError, ScheduleResult};
pub use crate::event::{DEFAULT_MIN_BLOCK_MINUTES, EventDraft, EventKind, ScheduleIssue};
pub use crate::schedule::{
    DayLabel, DaySchedule, RangeKey, ScheduledRange, WEEKDAYS, parse_weekday, weekday_name,
};
pub use crate::time_of_day::{Meridiem, TimeComponent, TimeOfDay};
pub use crate::time_range::{Endpoint, TimeOfDayRange};
