// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the meetslot-core crate.
//!
//! These tests walk through building an event draft the way a user would:
//! picking days, adding and editing time ranges, and checking the result.

mod config_driven;
mod date_selection;
mod range_editing;
mod weekly_poll;
