// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sift - research session history in your terminal
//!
//! Entry point for the Sift CLI application.

use std::io;

use clap::Parser;

use sift::cli::{Cli, Commands, ListArgs};
use sift::commands;
use sift::config::Settings;
use sift::error::Result;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on filter diagnostics, `-vv` everything; `RUST_LOG` still applies.
    let directive = match cli.verbose {
        0 => None,
        1 => Some("sift=debug"),
        _ => Some("sift=trace"),
    };
    if let Some(directive) = directive {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // Load settings
    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = match Settings::load_from(&settings_path) {
        Ok(settings) => settings,
        // A broken settings file must not block `sift settings init --force`.
        Err(e) if matches!(cli.command, Some(Commands::Settings(_))) => {
            tracing::warn!("could not load {}: {}", settings_path.display(), e);
            Settings::default()
        }
        Err(e) => return Err(e),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => commands::run_list(&ListArgs::default(), &settings, cli.format, &mut out)?,
        Some(Commands::List(args)) => commands::run_list(&args, &settings, cli.format, &mut out)?,
        Some(Commands::Show(args)) => commands::run_show(&args, &settings, cli.format, &mut out)?,
        Some(Commands::Settings(args)) => {
            commands::run_settings(&args, &settings, &settings_path, &mut out)?
        }
    }

    Ok(())
}
