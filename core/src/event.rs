// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashSet, fmt, num::NonZeroU32};

use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    Config, DateRange, DayLabel, DaySchedule, RangeKey, ScheduleError, ScheduleResult,
    TimeOfDayRange,
};

/// Default minimum length of a time block, in minutes.
pub const DEFAULT_MIN_BLOCK_MINUTES: NonZeroU32 = match NonZeroU32::new(15) {
    Some(v) => v,
    None => panic!("zero block length"),
};

/// What kind of days an event is scheduled on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// Particular calendar dates.
    #[default]
    #[cfg_attr(feature = "clap", clap(name = "specific", alias = "dates"))]
    SpecificDates,

    /// Recurring days of the week.
    #[cfg_attr(feature = "clap", clap(name = "weekly", alias = "days-of-week"))]
    DaysOfWeek,
}

impl EventKind {
    /// Whether a day with this label can be selected for this kind.
    pub fn accepts(&self, label: &DayLabel) -> bool {
        matches!(
            (self, label),
            (EventKind::SpecificDates, DayLabel::Date(_))
                | (EventKind::DaysOfWeek, DayLabel::Weekday(_))
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::SpecificDates => write!(f, "specific dates"),
            EventKind::DaysOfWeek => write!(f, "days of week"),
        }
    }
}

/// Draft for an event being composed, before anyone responds to it.
///
/// The selected days are kept sorted by [`DayLabel`] order, never repeat, and
/// always match the draft's [`EventKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventDraftRepr")]
pub struct EventDraft {
    /// The name of the event.
    pub name: String,

    kind: EventKind,

    /// The shortest time block a participant may select, in minutes.
    pub min_block_minutes: NonZeroU32,

    days: Vec<DaySchedule>,
}

impl EventDraft {
    /// Creates an empty draft.
    pub fn new(kind: EventKind) -> Self {
        Self {
            name: String::new(),
            kind,
            min_block_minutes: DEFAULT_MIN_BLOCK_MINUTES,
            days: Vec::new(),
        }
    }

    /// Creates an empty draft with the configured defaults.
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_block_minutes: config.min_block_minutes,
            ..Self::new(config.default_kind)
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Switches the kind of event, discarding the selection if it changes.
    pub fn set_kind(&mut self, kind: EventKind) {
        if self.kind != kind {
            tracing::debug!(
                from = %self.kind,
                to = %kind,
                dropped = self.days.len(),
                "switching event kind"
            );
            self.kind = kind;
            self.days.clear();
        }
    }

    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    pub fn day(&self, label: impl Into<DayLabel>) -> Option<&DaySchedule> {
        let label = label.into();
        self.search(&label).ok().map(|i| &self.days[i])
    }

    pub fn day_mut(&mut self, label: impl Into<DayLabel>) -> Option<&mut DaySchedule> {
        let label = label.into();
        self.search(&label).ok().map(|i| &mut self.days[i])
    }

    pub fn is_selected(&self, label: impl Into<DayLabel>) -> bool {
        self.day(label).is_some()
    }

    /// Selects the weekday, or deselects it if already selected.
    ///
    /// Returns whether the weekday is selected afterwards.
    pub fn toggle_weekday(&mut self, weekday: Weekday) -> ScheduleResult<bool> {
        self.toggle(DayLabel::Weekday(weekday))
    }

    /// Selects the date, or deselects it if already selected.
    ///
    /// Returns whether the date is selected afterwards.
    pub fn toggle_date(&mut self, date: Date) -> ScheduleResult<bool> {
        self.toggle(DayLabel::Date(date))
    }

    /// Selects every date of the range that is not selected yet.
    ///
    /// Returns how many dates were added.
    pub fn select_dates(&mut self, range: DateRange) -> ScheduleResult<usize> {
        self.check_kind(&DayLabel::Date(range.start()))?;

        let mut added = 0;
        for date in range.dates() {
            if let Err(index) = self.search(&DayLabel::Date(date)) {
                self.days.insert(index, DaySchedule::new(date));
                added += 1;
            }
        }
        tracing::debug!(%range, added, "selected date range");
        Ok(added)
    }

    /// Deselects a day, handing back its schedule.
    pub fn deselect(&mut self, label: impl Into<DayLabel>) -> ScheduleResult<DaySchedule> {
        let label = label.into();
        match self.search(&label) {
            Ok(index) => Ok(self.days.remove(index)),
            Err(_) => Err(ScheduleError::DayNotFound(label)),
        }
    }

    /// Adds the same range to every selected day, returning the new keys in
    /// day order.
    pub fn apply_range_to_all(&mut self, range: TimeOfDayRange) -> Vec<RangeKey> {
        self.days.iter_mut().map(|day| day.push(range)).collect()
    }

    /// Problems that would make the draft confusing to respond to.
    pub fn issues(&self) -> Vec<ScheduleIssue> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push(ScheduleIssue::MissingName);
        }
        if self.days.is_empty() {
            issues.push(ScheduleIssue::NoDaysSelected);
        }

        let min_block = self.min_block_minutes.get();
        for day in &self.days {
            for entry in day.ranges() {
                match entry.range.duration_minutes() {
                    None => issues.push(ScheduleIssue::NotAscending {
                        day: day.label(),
                        key: entry.key,
                    }),
                    Some(minutes) if u32::from(minutes) < min_block => {
                        issues.push(ScheduleIssue::BelowMinBlock {
                            day: day.label(),
                            key: entry.key,
                            minutes,
                            min_block,
                        });
                    }
                    Some(_) => {}
                }
            }
            for (first, second) in day.overlapping_pairs() {
                issues.push(ScheduleIssue::Overlap {
                    day: day.label(),
                    first,
                    second,
                });
            }
        }
        issues
    }

    fn toggle(&mut self, label: DayLabel) -> ScheduleResult<bool> {
        self.check_kind(&label)?;
        match self.search(&label) {
            Ok(index) => {
                self.days.remove(index);
                Ok(false)
            }
            Err(index) => {
                self.days.insert(index, DaySchedule::new(label));
                Ok(true)
            }
        }
    }

    fn check_kind(&self, label: &DayLabel) -> ScheduleResult<()> {
        if self.kind.accepts(label) {
            Ok(())
        } else {
            Err(ScheduleError::KindMismatch {
                label: *label,
                kind: self.kind,
            })
        }
    }

    fn search(&self, label: &DayLabel) -> Result<usize, usize> {
        self.days.binary_search_by(|day| day.label().cmp(label))
    }
}

impl Default for EventDraft {
    fn default() -> Self {
        Self::new(EventKind::default())
    }
}

#[derive(Deserialize)]
struct EventDraftRepr {
    #[serde(default)]
    name: String,
    #[serde(default)]
    kind: EventKind,
    #[serde(default = "default_min_block")]
    min_block_minutes: NonZeroU32,
    #[serde(default)]
    days: Vec<DaySchedule>,
}

fn default_min_block() -> NonZeroU32 {
    DEFAULT_MIN_BLOCK_MINUTES
}

impl TryFrom<EventDraftRepr> for EventDraft {
    type Error = ScheduleError;

    fn try_from(repr: EventDraftRepr) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(repr.days.len());
        for day in &repr.days {
            let label = day.label();
            if !repr.kind.accepts(&label) {
                return Err(ScheduleError::KindMismatch {
                    label,
                    kind: repr.kind,
                });
            }
            if !seen.insert(label) {
                return Err(ScheduleError::DuplicateDay(label));
            }
        }

        let mut days = repr.days;
        days.sort_by_key(DaySchedule::label);
        Ok(Self {
            name: repr.name,
            kind: repr.kind,
            min_block_minutes: repr.min_block_minutes,
            days,
        })
    }
}

/// A problem found in an [`EventDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleIssue {
    /// The event has no name.
    MissingName,

    /// No day has been selected.
    NoDaysSelected,

    /// The range does not start before it ends.
    NotAscending { day: DayLabel, key: RangeKey },

    /// The range is shorter than the minimum time block.
    BelowMinBlock {
        day: DayLabel,
        key: RangeKey,
        minutes: u16,
        min_block: u32,
    },

    /// Two ranges of the same day overlap.
    Overlap {
        day: DayLabel,
        first: RangeKey,
        second: RangeKey,
    },
}

impl fmt::Display for ScheduleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleIssue::MissingName => write!(f, "the event has no name"),
            ScheduleIssue::NoDaysSelected => write!(f, "no days are selected"),
            ScheduleIssue::NotAscending { day, key } => write!(
                f,
                "{day}: range {} does not start before it ends",
                key.short()
            ),
            ScheduleIssue::BelowMinBlock {
                day,
                key,
                minutes,
                min_block,
            } => write!(
                f,
                "{day}: range {} lasts {minutes} minutes, \
                 shorter than the {min_block}-minute block",
                key.short()
            ),
            ScheduleIssue::Overlap { day, first, second } => write!(
                f,
                "{day}: ranges {} and {} overlap",
                first.short(),
                second.short()
            ),
        }
    }
}
