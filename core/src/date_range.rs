// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use jiff::{ToSpan, civil::Date};
use serde::{Deserialize, Serialize};

use crate::{ScheduleError, ScheduleResult};

/// Every calendar date from `start` to `end`, both inclusive, in ascending order.
///
/// Fails with [`ScheduleError::InvalidRange`] when `start` is after `end`.
/// The inputs are never modified and the same inputs always produce the same
/// sequence.
pub fn dates_between(start: Date, end: Date) -> ScheduleResult<Vec<Date>> {
    Ok(DateRange::new(start, end)?.dates().collect())
}

/// An inclusive span of calendar dates where `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRangeRepr")]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a range, rejecting a start that comes after the end.
    pub fn new(start: Date, end: Date) -> ScheduleResult<Self> {
        if start > end {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day.
    pub fn single(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The first day of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// The last day of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether the date falls inside the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the range, counting both ends.
    pub fn day_count(&self) -> usize {
        let days = (self.end - self.start).get_days();
        usize::try_from(days).unwrap_or_default() + 1
    }

    /// Lazily yields every date of the range in ascending order.
    pub fn dates(self) -> impl Iterator<Item = Date> {
        let end = self.end;
        self.start.series(1.day()).take_while(move |d| *d <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}

/// Parses `YYYY-MM-DD` as a single day, or `YYYY-MM-DD..YYYY-MM-DD`.
impl FromStr for DateRange {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once("..") {
            Some((start, end)) => Self::new(parse_date(start)?, parse_date(end)?),
            None => parse_date(s).map(Self::single),
        }
    }
}

pub(crate) fn parse_date(s: &str) -> ScheduleResult<Date> {
    let s = s.trim();
    s.parse()
        .map_err(|_| ScheduleError::ParseDate(s.to_string()))
}

#[derive(Deserialize)]
struct DateRangeRepr {
    start: Date,
    end: Date,
}

impl TryFrom<DateRangeRepr> for DateRange {
    type Error = ScheduleError;

    fn try_from(repr: DateRangeRepr) -> Result<Self, Self::Error> {
        Self::new(repr.start, repr.end)
    }
}
