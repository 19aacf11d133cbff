// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cmp::Ordering, fmt, str::FromStr};

use jiff::civil::{self, Time};
use serde::{Deserialize, Serialize};

use crate::{ScheduleError, ScheduleResult};

/// Before or after noon on a 12-hour clock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Meridiem {
    /// Midnight up to noon.
    #[default]
    Am,

    /// Noon up to midnight.
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// A wall-clock time on a 12-hour clock: hour `1..=12`, minute `0..=59`.
///
/// Values are ordered by their position in the day, so `12:00 AM` is the
/// earliest and `11:59 PM` the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

/// One editable field of a [`TimeOfDay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeComponent {
    /// The hour, `1..=12`.
    Hour(u8),

    /// The minute, `0..=59`.
    Minute(u8),

    /// AM or PM.
    Meridiem(Meridiem),
}

impl TimeOfDay {
    /// Midnight, the value a freshly added range starts with.
    pub const MIDNIGHT: Self = Self {
        hour: 12,
        minute: 0,
        meridiem: Meridiem::Am,
    };

    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> ScheduleResult<Self> {
        if !(1..=12).contains(&hour) {
            return Err(ScheduleError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(ScheduleError::InvalidMinute(minute));
        }
        Ok(Self {
            hour,
            minute,
            meridiem,
        })
    }

    /// Builds a value from a 24-hour clock reading.
    pub fn from_civil(time: Time) -> Self {
        // jiff guarantees hour in 0..=23 and minute in 0..=59
        let hour24 = time.hour().unsigned_abs();
        let minute = time.minute().unsigned_abs();
        let meridiem = if hour24 < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        };
        let hour = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour,
            minute,
            meridiem,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// The hour on a 24-hour clock, `0..=23`.
    pub fn hour24(&self) -> u8 {
        match (self.meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        }
    }

    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour24()) * 60 + u16::from(self.minute)
    }

    pub fn to_civil(&self) -> Time {
        civil_time(self.hour24(), self.minute)
    }

    /// Returns a copy with one field replaced.
    pub fn with(&self, component: TimeComponent) -> ScheduleResult<Self> {
        match component {
            TimeComponent::Hour(hour) => Self::new(hour, self.minute, self.meridiem),
            TimeComponent::Minute(minute) => Self::new(self.hour, minute, self.meridiem),
            TimeComponent::Meridiem(meridiem) => Self::new(self.hour, self.minute, meridiem),
        }
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl Ord for TimeOfDay {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minutes_since_midnight()
            .cmp(&other.minutes_since_midnight())
    }
}

impl PartialOrd for TimeOfDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

/// Accepts `9:30am`, `9:30 PM`, `9pm`, `12 am` and 24-hour `14:30`.
impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::ParseTime(s.trim().to_string());
        let lower = s.trim().to_ascii_lowercase();

        let (clock, meridiem) = if let Some(rest) = lower.strip_suffix("am") {
            (rest.trim_end(), Some(Meridiem::Am))
        } else if let Some(rest) = lower.strip_suffix("pm") {
            (rest.trim_end(), Some(Meridiem::Pm))
        } else {
            (lower.as_str(), None)
        };

        let (hour, minute) = match clock.split_once(':') {
            Some((h, m)) if m.len() == 2 => (h, m),
            Some(_) => return Err(invalid()),
            None if meridiem.is_some() => (clock, "0"),
            None => return Err(invalid()),
        };
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;

        match meridiem {
            Some(meridiem) => Self::new(hour, minute, meridiem),
            None => {
                if hour > 23 {
                    return Err(ScheduleError::InvalidHour(hour));
                }
                if minute > 59 {
                    return Err(ScheduleError::InvalidMinute(minute));
                }
                Ok(Self::from_civil(civil_time(hour, minute)))
            }
        }
    }
}

/// Callers guarantee `hour24 < 24` and `minute < 60`.
#[allow(clippy::cast_possible_wrap)]
fn civil_time(hour24: u8, minute: u8) -> Time {
    civil::time(hour24 as i8, minute as i8, 0, 0)
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
