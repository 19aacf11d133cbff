// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date selection workflow tests.
//!
//! These tests pick calendar dates for a draft through ranges and single-day
//! toggles, the way the create page of a poll does.

use jiff::civil::date;
use meetslot_core::{DateRange, DayLabel, EventDraft, EventKind, ScheduleError, dates_between};

use crate::common::{assert_days_ascending, assert_labels, dated_draft, range};

#[test]
fn date_selection_matches_enumerator() {
    // Arrange
    let (start, end) = (date(2024, 2, 27), date(2024, 3, 2));

    // Act
    let draft = dated_draft("Hackathon", start, end);

    // Assert - one day per enumerated date, leap day included
    let expected: Vec<_> = dates_between(start, end)
        .unwrap()
        .into_iter()
        .map(DayLabel::Date)
        .collect();
    assert_labels(&draft, &expected);
    assert!(draft.is_selected(date(2024, 2, 29)));
}

#[test]
fn date_selection_merges_overlapping_ranges() {
    // Arrange
    let mut draft = dated_draft("Review", date(2024, 12, 30), date(2025, 1, 2));

    // Act - overlapping range, then a range before the first one
    let added_after = draft
        .select_dates("2025-01-01..2025-01-04".parse().unwrap())
        .unwrap();
    let added_before = draft
        .select_dates(DateRange::single(date(2024, 12, 24)))
        .unwrap();

    // Assert
    assert_eq!(added_after, 2);
    assert_eq!(added_before, 1);
    assert_eq!(draft.days().len(), 7);
    assert_days_ascending(&draft);
    assert_eq!(draft.days()[0].label(), DayLabel::Date(date(2024, 12, 24)));
}

#[test]
fn date_selection_toggle_removes_single_day() {
    // Arrange
    let mut draft = dated_draft("Sprint", date(2024, 5, 6), date(2024, 5, 10));

    // Act
    let selected = draft.toggle_date(date(2024, 5, 8)).unwrap();

    // Assert
    assert!(!selected);
    assert_labels(
        &draft,
        &[
            DayLabel::Date(date(2024, 5, 6)),
            DayLabel::Date(date(2024, 5, 7)),
            DayLabel::Date(date(2024, 5, 9)),
            DayLabel::Date(date(2024, 5, 10)),
        ],
    );
}

#[test]
fn date_selection_reversed_range_changes_nothing() {
    // Arrange
    let mut draft = EventDraft::new(EventKind::SpecificDates);

    // Act
    let result = DateRange::new(date(2024, 2, 2), date(2024, 1, 30))
        .and_then(|span| draft.select_dates(span));

    // Assert
    assert_eq!(
        result,
        Err(ScheduleError::InvalidRange {
            start: date(2024, 2, 2),
            end: date(2024, 1, 30),
        })
    );
    assert!(draft.days().is_empty());
}

#[test]
fn date_selection_deselect_keeps_other_schedules() {
    // Arrange
    let mut draft = dated_draft("Workshop", date(2024, 9, 1), date(2024, 9, 3));
    let keys = draft.apply_range_to_all(range("10am-12pm"));

    // Act
    let removed = draft.deselect(date(2024, 9, 2)).unwrap();

    // Assert
    assert_eq!(removed.ranges()[0].key, keys[1]);
    assert_eq!(draft.days().len(), 2);
    assert_eq!(
        draft.day(date(2024, 9, 3)).unwrap().get(keys[2]),
        Some(&range("10am-12pm"))
    );
}
