// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, num::NonZeroU32};

use clap::{ArgMatches, Command};
use colored::Colorize;
use jiff::civil::Weekday;
use meetslot_core::{Config, DateRange, EventDraft, EventKind, TimeOfDayRange};

use crate::arg::{CommonArgs, DraftArgs};
use crate::schedule_formatter::ScheduleFormatter;
use crate::util::OutputFormat;

/// Drafts a new event from command-line arguments.
#[derive(Debug, Clone)]
pub struct CmdNew {
    pub name: Option<String>,
    pub kind: Option<EventKind>,
    pub dates: Vec<DateRange>,
    pub weekdays: Vec<Weekday>,
    pub ranges: Vec<TimeOfDayRange>,
    pub min_block: Option<u32>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Draft a new event and show its schedule")
            .arg(DraftArgs::name())
            .arg(DraftArgs::kind())
            .arg(DraftArgs::dates())
            .arg(DraftArgs::weekday())
            .arg(DraftArgs::range())
            .arg(DraftArgs::min_block())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let dates = DraftArgs::get_dates(matches);
        let weekdays = DraftArgs::get_weekdays(matches);
        if !dates.is_empty() && !weekdays.is_empty() {
            return Err("--dates and --weekday cannot be used together".into());
        }

        Ok(Self {
            name: DraftArgs::get_name(matches),
            kind: DraftArgs::get_kind(matches),
            dates,
            weekdays,
            ranges: DraftArgs::get_ranges(matches),
            min_block: DraftArgs::get_min_block(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        })
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "drafting new event...");
        let draft = self.build(config)?;

        let formatter = ScheduleFormatter::new()
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        print!("{}", formatter.format(&draft));

        for issue in draft.issues() {
            eprintln!("{} {}", "Warning:".yellow(), issue);
        }
        Ok(())
    }

    /// Builds the draft, filling anything not given from the configuration.
    pub fn build(&self, config: &Config) -> Result<EventDraft, Box<dyn Error>> {
        let mut draft = EventDraft::from_config(config);
        draft.set_kind(self.resolve_kind(config));
        if let Some(name) = &self.name {
            draft.name = name.clone();
        }
        if let Some(min_block) = self.min_block.and_then(NonZeroU32::new) {
            draft.min_block_minutes = min_block;
        }

        for range in &self.dates {
            draft.select_dates(*range)?;
        }
        for weekday in &self.weekdays {
            if !draft.is_selected(*weekday) {
                draft.toggle_weekday(*weekday)?;
            }
        }

        let ranges = match (self.ranges.is_empty(), config.default_range) {
            (true, Some(default_range)) => vec![default_range],
            _ => self.ranges.clone(),
        };
        for range in ranges {
            draft.apply_range_to_all(range);
        }
        Ok(draft)
    }

    fn resolve_kind(&self, config: &Config) -> EventKind {
        match (self.kind, self.dates.is_empty(), self.weekdays.is_empty()) {
            (Some(kind), _, _) => kind,
            (None, false, _) => EventKind::SpecificDates,
            (None, _, false) => EventKind::DaysOfWeek,
            (None, true, true) => config.default_kind,
        }
    }
}
