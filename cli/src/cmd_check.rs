// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use meetslot_core::{EventDraft, ScheduleIssue};
use tokio::fs;

use crate::arg::CommonArgs;
use crate::schedule_formatter::ScheduleFormatter;
use crate::util::OutputFormat;

/// Loads a saved draft and reports its issues.
#[derive(Debug, Clone)]
pub struct CmdCheck {
    pub path: PathBuf,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdCheck {
    pub const NAME: &str = "check";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check a draft saved as JSON")
            .arg(
                arg!(file: <FILE> "Path to the draft, as written by `new --output-format json`")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            path: matches
                .get_one::<PathBuf>("file")
                .cloned()
                .unwrap_or_default(),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking draft...");
        let draft = load_draft(&self.path).await?;
        let issues = draft.issues();

        match self.output_format {
            OutputFormat::Json => {
                let messages: Vec<String> = issues.iter().map(ToString::to_string).collect();
                println!("{}", serde_json::to_string_pretty(&messages)?);
            }
            OutputFormat::Table => {
                if self.verbose {
                    print!("{}", ScheduleFormatter::new().with_verbose(true).format(&draft));
                }
                for issue in &issues {
                    println!("{} {}", "-".yellow(), issue);
                }
            }
        }

        check_result(&draft, &issues)
    }
}

/// Reads a draft from a JSON file, re-checking its invariants.
pub async fn load_draft(path: &Path) -> Result<EventDraft, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read draft at {}: {}", path.display(), e))?;
    let draft = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse draft at {}: {}", path.display(), e))?;
    Ok(draft)
}

fn check_result(draft: &EventDraft, issues: &[ScheduleIssue]) -> Result<(), Box<dyn Error>> {
    match issues.len() {
        0 => {
            tracing::info!(name = %draft.name, days = draft.days().len(), "draft is ready");
            Ok(())
        }
        n => {
            tracing::warn!(name = %draft.name, issues = n, "draft has issues");
            let noun = if n == 1 { "issue" } else { "issues" };
            Err(format!("{n} {noun} found").into())
        }
    }
}
