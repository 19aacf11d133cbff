// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::num::NonZeroU32;

use jiff::civil::{Date, Weekday};
use meetslot_core::{Config, DateRange, EventDraft, EventKind, TimeOfDayRange};

/// Parses a time range, panicking on malformed test input.
///
/// # Example
///
/// ```ignore
/// let morning = range("9am-12pm");
/// ```
#[must_use]
pub fn range(s: &str) -> TimeOfDayRange {
    s.parse()
        .unwrap_or_else(|e| panic!("bad range '{s}' in test: {e}"))
}

/// Creates a named draft for specific dates covering `start..=end`.
#[must_use]
pub fn dated_draft(name: &str, start: Date, end: Date) -> EventDraft {
    let mut draft = EventDraft::new(EventKind::SpecificDates);
    draft.name = name.to_string();
    let span = DateRange::new(start, end).expect("start should not be after end");
    draft.select_dates(span).expect("dates match the draft kind");
    draft
}

/// Creates a named days-of-week draft with the given weekdays selected.
#[must_use]
pub fn weekly_draft(name: &str, weekdays: &[Weekday]) -> EventDraft {
    let mut draft = EventDraft::new(EventKind::DaysOfWeek);
    draft.name = name.to_string();
    for weekday in weekdays {
        assert!(
            draft.toggle_weekday(*weekday).expect("weekday matches the draft kind"),
            "{weekday:?} was selected twice"
        );
    }
    draft
}

/// Builder for creating test configurations with custom settings.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .with_min_block(30)
///     .with_kind(EventKind::DaysOfWeek)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct TestConfigBuilder {
    config: Config,
}

#[allow(dead_code)]
impl TestConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_block(mut self, minutes: u32) -> Self {
        self.config.min_block_minutes = NonZeroU32::new(minutes).expect("block must be positive");
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.config.default_kind = kind;
        self
    }

    #[must_use]
    pub fn with_default_range(mut self, s: &str) -> Self {
        self.config.default_range = Some(range(s));
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
