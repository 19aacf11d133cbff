// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cmp::Ordering, collections::HashSet, fmt, str::FromStr};

use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date_range::parse_date;
use crate::{Endpoint, ScheduleError, ScheduleResult, TimeComponent, TimeOfDayRange};

/// Stable identity of one time range inside a [`DaySchedule`].
///
/// Keys are generated when a range is added and never reused, so removing or
/// reordering other ranges does not change which range a key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeKey(Uuid);

impl RangeKey {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The first eight hex digits, enough to tell ranges of one day apart.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RangeKey {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// The day a [`DaySchedule`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayLabel {
    /// A specific calendar date.
    Date(Date),

    /// A recurring day of the week.
    Weekday(Weekday),
}

impl DayLabel {
    pub fn date(&self) -> Option<Date> {
        match self {
            DayLabel::Date(d) => Some(*d),
            DayLabel::Weekday(_) => None,
        }
    }

    /// The weekday of the label, computed for dates.
    pub fn weekday(&self) -> Weekday {
        match self {
            DayLabel::Date(d) => d.weekday(),
            DayLabel::Weekday(w) => *w,
        }
    }
}

/// Dates sort chronologically, weekdays from Sunday to Saturday, and dates
/// before weekdays.
impl Ord for DayLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (DayLabel::Date(a), DayLabel::Date(b)) => a.cmp(b),
            (DayLabel::Weekday(a), DayLabel::Weekday(b)) => a
                .to_sunday_zero_offset()
                .cmp(&b.to_sunday_zero_offset()),
            (DayLabel::Date(_), DayLabel::Weekday(_)) => Ordering::Less,
            (DayLabel::Weekday(_), DayLabel::Date(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for DayLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Date> for DayLabel {
    fn from(value: Date) -> Self {
        DayLabel::Date(value)
    }
}

impl From<Weekday> for DayLabel {
    fn from(value: Weekday) -> Self {
        DayLabel::Weekday(value)
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::Date(d) => write!(f, "{d}"),
            DayLabel::Weekday(w) => write!(f, "{}", weekday_name(*w)),
        }
    }
}

impl FromStr for DayLabel {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(weekday) = parse_weekday(s) {
            return Ok(DayLabel::Weekday(weekday));
        }
        parse_date(s)
            .map(DayLabel::Date)
            .map_err(|_| ScheduleError::ParseDay(s.trim().to_string()))
    }
}

impl TryFrom<String> for DayLabel {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayLabel> for String {
    fn from(value: DayLabel) -> Self {
        match value {
            DayLabel::Date(d) => d.to_string(),
            DayLabel::Weekday(w) => weekday_name(w).to_ascii_lowercase(),
        }
    }
}

/// Weekdays in the order the week is presented, starting on Sunday.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Sunday",
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
    }
}

/// Parses a full or three-letter weekday name, ignoring case.
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    let s = s.trim().to_ascii_lowercase();
    if s.len() < 3 {
        return None;
    }
    WEEKDAYS.into_iter().find(|w| {
        let name = weekday_name(*w).to_ascii_lowercase();
        name == s || (s.len() == 3 && name.starts_with(&s))
    })
}

/// A time range together with its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledRange {
    pub key: RangeKey,
    pub range: TimeOfDayRange,
}

/// The availability ranges collected for one day, in the order they were added.
///
/// Keys are unique within a day; deserializing a day that repeats a key fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DayScheduleRepr")]
pub struct DaySchedule {
    label: DayLabel,
    #[serde(default)]
    ranges: Vec<ScheduledRange>,
}

#[derive(Deserialize)]
struct DayScheduleRepr {
    label: DayLabel,
    #[serde(default)]
    ranges: Vec<ScheduledRange>,
}

impl TryFrom<DayScheduleRepr> for DaySchedule {
    type Error = ScheduleError;

    fn try_from(repr: DayScheduleRepr) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(repr.ranges.len());
        if let Some(entry) = repr.ranges.iter().find(|entry| !seen.insert(entry.key)) {
            return Err(ScheduleError::DuplicateRange {
                day: repr.label,
                key: entry.key,
            });
        }
        Ok(Self {
            label: repr.label,
            ranges: repr.ranges,
        })
    }
}

impl DaySchedule {
    pub fn new(label: impl Into<DayLabel>) -> Self {
        Self {
            label: label.into(),
            ranges: Vec::new(),
        }
    }

    pub fn label(&self) -> DayLabel {
        self.label
    }

    pub fn ranges(&self) -> &[ScheduledRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn get(&self, key: RangeKey) -> Option<&TimeOfDayRange> {
        self.ranges.iter().find(|r| r.key == key).map(|r| &r.range)
    }

    /// Appends a `12:00 AM - 12:00 AM` range for the caller to edit.
    pub fn add_range(&mut self) -> RangeKey {
        self.push(TimeOfDayRange::default())
    }

    /// Appends the given range and returns its new key.
    pub fn push(&mut self, range: TimeOfDayRange) -> RangeKey {
        let key = RangeKey::generate();
        tracing::trace!(day = %self.label, %key, %range, "adding time range");
        self.ranges.push(ScheduledRange { key, range });
        key
    }

    /// Removes the range with the given key, keeping the others in order.
    pub fn remove(&mut self, key: RangeKey) -> ScheduleResult<TimeOfDayRange> {
        let index = self.position(key)?;
        Ok(self.ranges.remove(index).range)
    }

    /// Replaces the range with the given key.
    pub fn set_range(&mut self, key: RangeKey, range: TimeOfDayRange) -> ScheduleResult<()> {
        let index = self.position(key)?;
        self.ranges[index].range = range;
        Ok(())
    }

    /// Changes one field of one end of a range.
    ///
    /// On error the range is left untouched.
    pub fn edit(
        &mut self,
        key: RangeKey,
        endpoint: Endpoint,
        component: TimeComponent,
    ) -> ScheduleResult<()> {
        let index = self.position(key)?;
        let slot = self.ranges[index].range.endpoint_mut(endpoint);
        *slot = slot.with(component)?;
        Ok(())
    }

    /// Pairs of keys whose ranges overlap, in insertion order.
    pub fn overlapping_pairs(&self) -> Vec<(RangeKey, RangeKey)> {
        let mut pairs = Vec::new();
        for (i, a) in self.ranges.iter().enumerate() {
            for b in &self.ranges[i + 1..] {
                if a.range.overlaps(&b.range) {
                    pairs.push((a.key, b.key));
                }
            }
        }
        pairs
    }

    fn position(&self, key: RangeKey) -> ScheduleResult<usize> {
        self.ranges
            .iter()
            .position(|r| r.key == key)
            .ok_or(ScheduleError::RangeNotFound(key))
    }
}
