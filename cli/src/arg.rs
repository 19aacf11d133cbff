// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgAction, ArgMatches, arg, value_parser};
use jiff::civil::Weekday;
use meetslot_core::{DateRange, EventKind, TimeOfDayRange, parse_weekday};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DraftArgs;

impl DraftArgs {
    pub fn name() -> Arg {
        arg!(name: [NAME] "Name of the event")
    }

    pub fn get_name(matches: &ArgMatches) -> Option<String> {
        matches.get_one("name").cloned()
    }

    pub fn kind() -> Arg {
        arg!(--kind <KIND> "Whether the event is on specific dates or days of the week")
            .value_parser(value_parser!(EventKind))
    }

    pub fn get_kind(matches: &ArgMatches) -> Option<EventKind> {
        matches.get_one("kind").copied()
    }

    pub fn dates() -> Arg {
        arg!(-d --dates <RANGE> "Dates to offer, as YYYY-MM-DD or YYYY-MM-DD..YYYY-MM-DD")
            .value_parser(value_parser!(DateRange))
            .action(ArgAction::Append)
    }

    pub fn get_dates(matches: &ArgMatches) -> Vec<DateRange> {
        matches
            .get_many::<DateRange>("dates")
            .map(|a| a.copied().collect())
            .unwrap_or_default()
    }

    pub fn weekday() -> Arg {
        arg!(-w --weekday <DAY> "Day of the week to offer, e.g. monday or mon")
            .value_parser(parse_weekday_arg)
            .action(ArgAction::Append)
    }

    pub fn get_weekdays(matches: &ArgMatches) -> Vec<Weekday> {
        matches
            .get_many::<Weekday>("weekday")
            .map(|a| a.copied().collect())
            .unwrap_or_default()
    }

    pub fn range() -> Arg {
        arg!(-r --range <RANGE> "Time range added to every day, e.g. 9am-5pm")
            .value_parser(value_parser!(TimeOfDayRange))
            .action(ArgAction::Append)
    }

    pub fn get_ranges(matches: &ArgMatches) -> Vec<TimeOfDayRange> {
        matches
            .get_many::<TimeOfDayRange>("range")
            .map(|a| a.copied().collect())
            .unwrap_or_default()
    }

    pub fn min_block() -> Arg {
        arg!(--"min-block" <MINUTES> "Shortest time block participants may pick, in minutes")
            .value_parser(value_parser!(u32).range(1..))
    }

    pub fn get_min_block(matches: &ArgMatches) -> Option<u32> {
        matches.get_one("min-block").copied()
    }
}

fn parse_weekday_arg(s: &str) -> Result<Weekday, Box<dyn Error + Send + Sync>> {
    parse_weekday(s).ok_or_else(|| format!("invalid weekday '{s}'").into())
}
