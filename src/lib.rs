// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sift - browse and filter research session history.
//!
//! The research backend produces sessions (a prompt plus messages, sources
//! and an optional infographic). This crate lists them and narrows the list
//! by topic, tag and creation date.
//!
//! - `history`: session records, listing sources, and the filter engine
//! - `config`: user settings in `~/.sift/settings.json`
//! - `cli`, `commands`: the `sift` command-line front end

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;

pub use error::{Result, SiftError};
pub use history::{apply_history_filters, apply_history_filters_in, HistoryFilters, SessionSummary};
