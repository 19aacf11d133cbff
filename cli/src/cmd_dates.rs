// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use jiff::civil::Date;
use meetslot_core::dates_between;

use crate::arg::CommonArgs;
use crate::date_formatter::DateFormatter;
use crate::util::{OutputFormat, parse_date, today};

/// Lists every date between two dates, both inclusive.
#[derive(Debug, Clone)]
pub struct CmdDates {
    pub start: String,
    pub end: String,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdDates {
    pub const NAME: &str = "dates";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List every date from START to END, inclusive")
            .arg(arg!(start: <START> "First date: YYYY-MM-DD, today or tomorrow"))
            .arg(arg!(end: <END> "Last date: YYYY-MM-DD, today or tomorrow"))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let get = |id: &str| {
            matches
                .get_one::<String>(id)
                .cloned()
                .unwrap_or_default()
        };
        Self {
            start: get("start"),
            end: get("end"),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing dates...");
        let dates = self.dates(today())?;
        let formatter = DateFormatter::new()
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        print!("{}", formatter.format(&dates));
        Ok(())
    }

    /// Resolves the arguments against `today` and enumerates the range.
    pub fn dates(&self, today: Date) -> Result<Vec<Date>, Box<dyn Error>> {
        let start = parse_date(today, &self.start)?;
        let end = parse_date(today, &self.end)?;
        Ok(dates_between(start, end)?)
    }
}
