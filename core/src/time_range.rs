// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ScheduleError, TimeOfDay};

/// A span of wall-clock time within one day.
///
/// Nothing forces `start` to precede `end`; use [`TimeOfDayRange::is_ordered`]
/// to check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeOfDayRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Which side of a [`TimeOfDayRange`] an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl TimeOfDayRange {
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Whether the range starts strictly before it ends.
    pub fn is_ordered(&self) -> bool {
        self.start < self.end
    }

    /// Length in minutes, or `None` if the range is empty or reversed.
    pub fn duration_minutes(&self) -> Option<u16> {
        self.is_ordered()
            .then(|| self.end.minutes_since_midnight() - self.start.minutes_since_midnight())
    }

    /// Whether two ordered ranges share some positive length of time.
    ///
    /// Touching ranges (`9-10`, `10-11`) do not overlap.
    pub fn overlaps(&self, other: &TimeOfDayRange) -> bool {
        self.is_ordered()
            && other.is_ordered()
            && self.start < other.end
            && other.start < self.end
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> TimeOfDay {
        match endpoint {
            Endpoint::Start => self.start,
            Endpoint::End => self.end,
        }
    }

    pub(crate) fn endpoint_mut(&mut self, endpoint: Endpoint) -> &mut TimeOfDay {
        match endpoint {
            Endpoint::Start => &mut self.start,
            Endpoint::End => &mut self.end,
        }
    }
}

impl fmt::Display for TimeOfDayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Parses `START-END` or `START~END`, e.g. `9:00am-11:30am`.
impl FromStr for TimeOfDayRange {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .or_else(|| s.split_once('~'))
            .ok_or_else(|| ScheduleError::ParseTime(s.trim().to_string()))?;
        Ok(Self::new(start.parse()?, end.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(s: &str) -> TimeOfDayRange {
        s.parse().unwrap()
    }

    #[test]
    fn default_is_empty_midnight_range() {
        let r = TimeOfDayRange::default();
        assert_eq!(r.start, TimeOfDay::MIDNIGHT);
        assert_eq!(r.end, TimeOfDay::MIDNIGHT);
        assert!(!r.is_ordered());
        assert_eq!(r.duration_minutes(), None);
    }

    #[test]
    fn computes_duration() {
        assert_eq!(range("9:00am-11:30am").duration_minutes(), Some(150));
        assert_eq!(range("11:00am-1:00pm").duration_minutes(), Some(120));
        assert_eq!(range("5pm-9am").duration_minutes(), None);
    }

    #[test]
    fn detects_overlap() {
        let morning = range("9am-12pm");
        assert!(morning.overlaps(&range("11am-1pm")));
        assert!(morning.overlaps(&range("10am-11am")));
        assert!(!morning.overlaps(&range("12pm-1pm")));
        assert!(!morning.overlaps(&range("1pm-10am")));
    }

    #[test]
    fn parses_both_separators() {
        assert_eq!(range("9am - 10am"), range("9:00 AM~10:00 AM"));
        assert_eq!(range("14:00-15:30").to_string(), "2:00 PM - 3:30 PM");
    }

    #[test]
    fn display_output_parses_back() {
        let r = range("8:15am-4:45pm");
        assert_eq!(range(&r.to_string()), r);
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(matches!(
            "9am".parse::<TimeOfDayRange>(),
            Err(ScheduleError::ParseTime(_))
        ));
    }
}
