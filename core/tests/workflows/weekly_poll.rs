// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Days-of-week poll workflow tests.

use jiff::civil::{Weekday, date};
use meetslot_core::{DayLabel, EventDraft, EventKind, ScheduleError, WEEKDAYS};

use crate::common::{assert_labels, assert_no_issues, range, weekly_draft};

#[test]
fn weekly_poll_days_follow_week_order() {
    // Arrange & Act - selected out of order
    let draft = weekly_draft(
        "Book club",
        &[Weekday::Saturday, Weekday::Monday, Weekday::Sunday],
    );

    // Assert - Sunday starts the week
    assert_labels(
        &draft,
        &[
            DayLabel::Weekday(Weekday::Sunday),
            DayLabel::Weekday(Weekday::Monday),
            DayLabel::Weekday(Weekday::Saturday),
        ],
    );
}

#[test]
fn weekly_poll_whole_week_with_shared_range() {
    // Arrange
    let mut draft = weekly_draft("Gym", &WEEKDAYS);

    // Act
    let keys = draft.apply_range_to_all(range("6am-7am"));

    // Assert
    assert_eq!(keys.len(), 7);
    for (day, key) in draft.days().iter().zip(&keys) {
        assert_eq!(day.get(*key), Some(&range("6am-7am")));
    }
    assert_no_issues(&draft);
}

#[test]
fn weekly_poll_rejects_dates() {
    // Arrange
    let mut draft = weekly_draft("Gym", &[Weekday::Monday]);

    // Act
    let result = draft.toggle_date(date(2024, 1, 1));

    // Assert
    assert_eq!(
        result,
        Err(ScheduleError::KindMismatch {
            label: DayLabel::Date(date(2024, 1, 1)),
            kind: EventKind::DaysOfWeek,
        })
    );
    assert_eq!(draft.days().len(), 1);
}

#[test]
fn weekly_poll_survives_json_file() {
    // Arrange
    let mut draft = weekly_draft("Choir", &[Weekday::Thursday]);
    draft.apply_range_to_all(range("7pm-9pm"));

    // Act
    let json = serde_json::to_string_pretty(&draft).unwrap();
    let loaded: EventDraft = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(loaded, draft);
    assert!(json.contains(r#""label": "thursday""#));
    assert!(json.contains(r#""start": "7:00 PM""#));
}
