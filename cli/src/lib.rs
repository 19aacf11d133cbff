// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for meetslot.

mod arg;
mod cli;
mod cmd_check;
mod cmd_dates;
mod cmd_generate_completion;
mod cmd_new;
mod config;
mod date_formatter;
mod schedule_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
