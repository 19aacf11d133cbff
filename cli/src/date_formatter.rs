// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use jiff::civil::{Date, Weekday};
use meetslot_core::weekday_name;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct DateFormatter {
    columns: Vec<DateColumn>,
    format: OutputFormat,
}

impl DateFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![DateColumn::Date, DateColumn::Weekday],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.columns.insert(0, DateColumn::Index);
            self.columns.push(DateColumn::DayOfYear);
        }
        self
    }

    pub fn format<'a>(&'a self, dates: &'a [Date]) -> Display<'a> {
        let rows = dates
            .iter()
            .enumerate()
            .map(|(index, date)| DateRow {
                index,
                date: *date,
            })
            .collect();
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: Vec<DateRow>,
    formatter: &'a DateFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, &self.rows)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, &self.rows)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct DateRow {
    index: usize,
    date: Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateColumn {
    Index,
    Date,
    Weekday,
    DayOfYear,
}

impl TableColumn<DateRow> for DateColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            DateColumn::Index => "Index",
            DateColumn::Date => "Date",
            DateColumn::Weekday => "Weekday",
            DateColumn::DayOfYear => "Day of Year",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a DateRow) -> Cow<'a, str> {
        match self {
            DateColumn::Index => (data.index + 1).to_string().into(),
            DateColumn::Date => data.date.to_string().into(),
            DateColumn::Weekday => weekday_name(data.date.weekday()).into(),
            DateColumn::DayOfYear => data.date.day_of_year().to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            DateColumn::Index | DateColumn::DayOfYear => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &DateRow) -> Option<Color> {
        match data.date.weekday() {
            Weekday::Saturday | Weekday::Sunday => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
