// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.
//!
//! These tests validate how configuration affects new drafts and the issues
//! reported for them.

use jiff::civil::Weekday;
use meetslot_core::{Config, DayLabel, EventDraft, EventKind, ScheduleIssue};

use crate::common::{TestConfigBuilder, range};

#[test]
fn config_defaults_applied_to_draft() {
    // Arrange
    let config = TestConfigBuilder::new()
        .with_min_block(30)
        .with_kind(EventKind::DaysOfWeek)
        .build();

    // Act
    let draft = EventDraft::from_config(&config);

    // Assert
    assert_eq!(draft.kind(), EventKind::DaysOfWeek);
    assert_eq!(draft.min_block_minutes.get(), 30);
    assert!(draft.days().is_empty());
}

#[test]
fn config_min_block_drives_issues() {
    // Arrange
    let config = TestConfigBuilder::new()
        .with_min_block(60)
        .with_kind(EventKind::DaysOfWeek)
        .build();
    let mut draft = EventDraft::from_config(&config);
    draft.name = "Lunch".to_string();
    draft.toggle_weekday(Weekday::Friday).unwrap();

    // Act
    let keys = draft.apply_range_to_all(range("12pm-12:45pm"));

    // Assert
    assert_eq!(
        draft.issues(),
        vec![ScheduleIssue::BelowMinBlock {
            day: DayLabel::Weekday(Weekday::Friday),
            key: keys[0],
            minutes: 45,
            min_block: 60,
        }]
    );
}

#[test]
fn config_default_range_fills_new_days() {
    // Arrange
    let config = TestConfigBuilder::new().with_default_range("9am-5pm").build();
    let mut draft = EventDraft::from_config(&config);
    draft.name = "Interviews".to_string();
    draft
        .select_dates("2024-04-01..2024-04-03".parse().unwrap())
        .unwrap();

    // Act
    if let Some(default_range) = config.default_range {
        draft.apply_range_to_all(default_range);
    }

    // Assert
    assert!(draft.days().iter().all(|d| d.len() == 1));
    assert!(draft.issues().is_empty());
}

#[test]
fn config_default_is_specific_dates_with_fifteen_minutes() {
    let draft = EventDraft::from_config(&Config::default());
    assert_eq!(draft.kind(), EventKind::SpecificDates);
    assert_eq!(draft.min_block_minutes.get(), 15);
}
