// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each command writes to the given output so it can run against a buffer
//! in tests and against stdout from `main`.

pub mod display;
pub mod history;
pub mod settings;

pub use history::{parse_session_id, run_list, run_show};
pub use settings::run_settings;
