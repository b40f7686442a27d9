// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! `sift settings`

use std::io::Write;
use std::path::Path;

use crate::cli::{SettingsArgs, SettingsCommands};
use crate::config::Settings;
use crate::error::{Result, SiftError};

/// Run a settings subcommand against the file at `path`.
pub fn run_settings(
    args: &SettingsArgs,
    settings: &Settings,
    path: &Path,
    out: &mut dyn Write,
) -> Result<()> {
    match args.command {
        None | Some(SettingsCommands::Show) => {
            writeln!(out, "{}", serde_json::to_string_pretty(settings)?)?;
        }
        Some(SettingsCommands::Path) => {
            writeln!(out, "{}", path.display())?;
        }
        Some(SettingsCommands::Init { force }) => {
            if path.exists() && !force {
                return Err(SiftError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Settings::default().save_to_clean(path)?;
            tracing::info!(path = %path.display(), "wrote default settings");
            writeln!(out, "Wrote default settings to {}", path.display())?;
        }
    }

    Ok(())
}
