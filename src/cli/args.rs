// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Sift.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::history::HistoryFilters;

/// Sift - browse and filter research session history
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(version, about = "Browse and filter research session history")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List sessions, optionally filtered (default when no command given)
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one session with its messages, sources and infographic
    Show(ShowArgs),

    /// Show or initialize configuration
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the list subcommand
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Only sessions whose prompt contains this text (case-insensitive)
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Only sessions tagged with this tag, e.g. "ev" or "#ev"
    #[arg(short = 'g', long)]
    pub tag: Option<String>,

    /// Earliest creation day to include (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    pub from_date: Option<String>,

    /// Latest creation day to include (YYYY-MM-DD)
    #[arg(long = "to", value_name = "DATE")]
    pub to_date: Option<String>,

    /// Maximum number of sessions to show
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Session listing file (overrides settings)
    #[arg(short, long)]
    pub sessions: Option<PathBuf>,
}

impl ListArgs {
    /// Filter criteria exactly as typed
    pub fn filters(&self) -> HistoryFilters {
        HistoryFilters {
            topic: self.topic.clone(),
            tag: self.tag.clone(),
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
        }
    }
}

/// Arguments for the show subcommand
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Session ID (a leading '#' is accepted)
    pub session_id: String,

    /// Session listing file (overrides settings)
    #[arg(short, long)]
    pub sessions: Option<PathBuf>,
}

/// Arguments for settings management
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Print the effective settings (default)
    Show,

    /// Print the settings file location
    Path,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing settings file
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for command results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
