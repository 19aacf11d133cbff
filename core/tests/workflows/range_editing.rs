// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Time range editing workflow tests.
//!
//! Ranges are addressed by key, so removing one range must never change
//! which range any other key points at.

use jiff::civil::Weekday;
use meetslot_core::{
    DayLabel, Endpoint, Meridiem, ScheduleError, ScheduleIssue, TimeComponent, TimeOfDay,
};

use crate::common::{assert_no_issues, range, weekly_draft};

#[test]
fn range_editing_remove_middle_keeps_other_keys() {
    // Arrange
    let mut draft = weekly_draft("Office hours", &[Weekday::Tuesday]);
    let day = draft.day_mut(Weekday::Tuesday).unwrap();
    let first = day.push(range("9am-10am"));
    let middle = day.push(range("11am-12pm"));
    let last = day.push(range("2pm-3pm"));

    // Act
    let removed = day.remove(middle).unwrap();

    // Assert
    assert_eq!(removed, range("11am-12pm"));
    assert_eq!(day.len(), 2);
    assert_eq!(day.get(first), Some(&range("9am-10am")));
    assert_eq!(day.get(last), Some(&range("2pm-3pm")));
    assert_eq!(day.get(middle), None);
    assert_eq!(day.remove(middle), Err(ScheduleError::RangeNotFound(middle)));
}

#[test]
fn range_editing_builds_range_from_default() {
    // Arrange
    let mut draft = weekly_draft("Office hours", &[Weekday::Friday]);
    let day = draft.day_mut(Weekday::Friday).unwrap();
    let key = day.add_range();

    // Act - 12:00 AM - 12:00 AM becomes 9:30 AM - 4:00 PM
    day.edit(key, Endpoint::Start, TimeComponent::Hour(9)).unwrap();
    day.edit(key, Endpoint::Start, TimeComponent::Minute(30))
        .unwrap();
    day.edit(key, Endpoint::End, TimeComponent::Hour(4)).unwrap();
    day.edit(key, Endpoint::End, TimeComponent::Meridiem(Meridiem::Pm))
        .unwrap();

    // Assert
    let edited = day.get(key).unwrap();
    assert_eq!(edited.start, TimeOfDay::new(9, 30, Meridiem::Am).unwrap());
    assert_eq!(edited.end, TimeOfDay::new(4, 0, Meridiem::Pm).unwrap());
    assert_eq!(edited.duration_minutes(), Some(390));
}

#[test]
fn range_editing_rejected_edit_leaves_range() {
    // Arrange
    let mut draft = weekly_draft("Office hours", &[Weekday::Monday]);
    let day = draft.day_mut(Weekday::Monday).unwrap();
    let key = day.push(range("9am-10am"));

    // Act
    let result = day.edit(key, Endpoint::End, TimeComponent::Minute(75));

    // Assert
    assert_eq!(result, Err(ScheduleError::InvalidMinute(75)));
    assert_eq!(day.get(key), Some(&range("9am-10am")));
}

#[test]
fn range_editing_fixing_overlap_clears_issue() {
    // Arrange
    let mut draft = weekly_draft("Tutoring", &[Weekday::Wednesday]);
    let day = draft.day_mut(Weekday::Wednesday).unwrap();
    let morning = day.push(range("9am-11am"));
    let late_morning = day.push(range("10am-12pm"));
    assert_eq!(
        draft.issues(),
        vec![ScheduleIssue::Overlap {
            day: DayLabel::Weekday(Weekday::Wednesday),
            first: morning,
            second: late_morning,
        }]
    );

    // Act
    draft
        .day_mut(Weekday::Wednesday)
        .unwrap()
        .set_range(late_morning, range("11am-12pm"))
        .unwrap();

    // Assert
    assert_no_issues(&draft);
}
