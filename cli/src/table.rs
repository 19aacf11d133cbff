// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A table over borrowed rows, rendered by its style.
#[derive(Debug)]
pub struct Table<'a, S, C, T> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S, C, T> Table<'a, S, C, T>
where
    S: TableStyle,
    C: TableColumn<T>,
{
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S, C, T> fmt::Display for Table<'_, S, C, T>
where
    S: TableStyle,
    C: TableColumn<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();
        self.style.write(f, self.columns, self.data, &cells)
    }
}

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

pub trait TableStyle {
    fn write<C, T>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
        cells: &[Vec<Cow<'_, str>>],
    ) -> fmt::Result
    where
        C: TableColumn<T>;
}

/// Aligned plain-text columns, one row per line.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: &'static str,
    header: bool,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self {
            separator: "  ",
            header: false,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl TableStyle for TableStyleBasic {
    fn write<C, T>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
        cells: &[Vec<Cow<'_, str>>],
    ) -> fmt::Result
    where
        C: TableColumn<T>,
    {
        let names: Vec<Cow<'_, str>> = columns.iter().map(|col| col.name()).collect();
        let mut widths: Vec<usize> = match self.header {
            true => names.iter().map(|a| a.width()).collect(),
            false => vec![0; columns.len()],
        };
        for row in cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }

        let paddings: Vec<_> = columns.iter().map(|col| col.padding_direction()).collect();
        if self.header {
            let header: Vec<_> = names.iter().map(|a| a.bold().to_string()).collect();
            self.write_row(f, &paddings, &widths, &header)?;
        }

        for (row, item) in cells.iter().zip(data) {
            let styled: Vec<String> = columns
                .iter()
                .zip(row)
                .map(|(col, cell)| match col.color(item) {
                    Some(color) => cell.color(color).to_string(),
                    None => cell.to_string(),
                })
                .collect();
            self.write_row(f, &paddings, &widths, &styled)?;
        }
        Ok(())
    }
}

impl TableStyleBasic {
    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        paddings: &[PaddingDirection],
        widths: &[usize],
        row: &[String],
    ) -> fmt::Result {
        for (i, ((padding, width), cell)) in paddings.iter().zip(widths).zip(row).enumerate() {
            let last = i + 1 == paddings.len();
            // ANSI escapes do not take up room on screen
            let visible = console_width(cell);
            let pad = width.saturating_sub(visible);
            match padding {
                PaddingDirection::Left if last => write!(f, "{cell}")?,
                PaddingDirection::Left => write!(f, "{cell}{}", " ".repeat(pad))?,
                PaddingDirection::Right => write!(f, "{}{cell}", " ".repeat(pad))?,
            }
            if !last {
                write!(f, "{}", self.separator)?;
            }
        }
        writeln!(f)
    }
}

/// A JSON array with one object per row, keyed by column name.
#[derive(Debug, Clone)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<C, T>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        _data: &[T],
        cells: &[Vec<Cow<'_, str>>],
    ) -> fmt::Result
    where
        C: TableColumn<T>,
    {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = cells
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .zip(row)
                    .map(|(col, cell)| (col.name().into_owned(), cell.to_string().into()))
                    .collect()
            })
            .collect();
        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut rest = s;
    while let Some(start) = rest.find('\u{1b}') {
        width += rest[..start].width();
        rest = match rest[start..].find('m') {
            Some(end) => &rest[start + end + 1..],
            None => "",
        };
    }
    width + rest.width()
}
