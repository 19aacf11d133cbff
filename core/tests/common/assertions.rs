// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use meetslot_core::{DayLabel, DaySchedule, EventDraft};

/// Asserts that the selected days are strictly ascending.
///
/// # Panics
///
/// Panics if two neighbouring days are out of order or equal.
pub fn assert_days_ascending(draft: &EventDraft) {
    for pair in draft.days().windows(2) {
        assert!(
            pair[0].label() < pair[1].label(),
            "days out of order: {} then {}",
            pair[0].label(),
            pair[1].label()
        );
    }
}

/// Asserts that the draft selects exactly these days, in this order.
pub fn assert_labels(draft: &EventDraft, expected: &[DayLabel]) {
    let labels: Vec<_> = draft.days().iter().map(DaySchedule::label).collect();
    assert_eq!(labels, expected, "selected days mismatch");
}

/// Asserts that the draft reports no issues.
pub fn assert_no_issues(draft: &EventDraft) {
    let issues = draft.issues();
    assert!(
        issues.is_empty(),
        "expected no issues, got: {}",
        issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    );
}
