// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, collections::HashSet, fmt};

use colored::Color;
use meetslot_core::{DayLabel, EventDraft, RangeKey, ScheduleIssue, ScheduledRange};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic};
use crate::util::{OutputFormat, format_minutes};

/// Renders the days and ranges of a draft.
///
/// The table has one row per range, and a single row with an empty range
/// for days that have none yet. The JSON form is the draft itself.
#[derive(Debug)]
pub struct ScheduleFormatter {
    columns: Vec<ScheduleColumn>,
    format: OutputFormat,
}

impl ScheduleFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![ScheduleColumn::Day, ScheduleColumn::Range],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.columns.push(ScheduleColumn::Length);
            self.columns.push(ScheduleColumn::Key);
        }
        self
    }

    pub fn format<'a>(&'a self, draft: &'a EventDraft) -> Display<'a> {
        Display {
            draft,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    draft: &'a EventDraft,
    formatter: &'a ScheduleFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.draft).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => {
                let rows = rows(self.draft);
                let style = TableStyleBasic::new().with_header(true);
                write!(f, "{}", Table::new(style, &self.formatter.columns, &rows))
            }
        }
    }
}

fn rows(draft: &EventDraft) -> Vec<ScheduleRow<'_>> {
    let flagged: HashSet<RangeKey> = draft
        .issues()
        .into_iter()
        .flat_map(|issue| match issue {
            ScheduleIssue::NotAscending { key, .. } | ScheduleIssue::BelowMinBlock { key, .. } => {
                vec![key]
            }
            ScheduleIssue::Overlap { first, second, .. } => vec![first, second],
            ScheduleIssue::MissingName | ScheduleIssue::NoDaysSelected => vec![],
        })
        .collect();

    let mut rows = Vec::new();
    for day in draft.days() {
        if day.is_empty() {
            rows.push(ScheduleRow {
                day: day.label(),
                entry: None,
                flagged: false,
            });
        }
        for entry in day.ranges() {
            rows.push(ScheduleRow {
                day: day.label(),
                entry: Some(entry),
                flagged: flagged.contains(&entry.key),
            });
        }
    }
    rows
}

#[derive(Debug)]
struct ScheduleRow<'a> {
    day: DayLabel,
    entry: Option<&'a ScheduledRange>,
    flagged: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduleColumn {
    Day,
    Range,
    Length,
    Key,
}

impl<'r> TableColumn<ScheduleRow<'r>> for ScheduleColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            ScheduleColumn::Day => "Day",
            ScheduleColumn::Range => "Range",
            ScheduleColumn::Length => "Length",
            ScheduleColumn::Key => "Key",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a ScheduleRow<'r>) -> Cow<'a, str> {
        match (self, data.entry) {
            (ScheduleColumn::Day, _) => data.day.to_string().into(),
            (ScheduleColumn::Range, Some(entry)) => entry.range.to_string().into(),
            (ScheduleColumn::Length, Some(entry)) => match entry.range.duration_minutes() {
                Some(minutes) => format_minutes(minutes).into(),
                None => "-".into(),
            },
            (ScheduleColumn::Key, Some(entry)) => entry.key.short().into(),
            (_, None) => "".into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ScheduleColumn::Length => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &ScheduleRow<'r>) -> Option<Color> {
        match (self, data.flagged) {
            (ScheduleColumn::Range | ScheduleColumn::Length, true) => Some(Color::Yellow),
            _ => None,
        }
    }
}
