// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! `sift list` and `sift show`

use std::io::Write;
use std::path::PathBuf;

use crate::cli::{ListArgs, OutputFormat, ShowArgs};
use crate::config::Settings;
use crate::error::{Result, SiftError};
use crate::history::time::parse_filter_date;
use crate::history::{HistoryView, JsonFileListing, SessionListing};

use super::display::{format_session_detail, format_session_line};

fn listing_for(sessions: &Option<PathBuf>, settings: &Settings) -> JsonFileListing {
    let path = sessions.clone().unwrap_or_else(|| settings.sessions_path());
    JsonFileListing::new(path)
}

/// Tell the user when a date bound is being ignored.
fn warn_on_ignored_dates(args: &ListArgs) {
    for (flag, value) in [("--from", &args.from_date), ("--to", &args.to_date)] {
        if let Some(raw) = value.as_deref() {
            if !raw.trim().is_empty() && parse_filter_date(raw).is_none() {
                tracing::warn!("ignoring {} '{}': expected YYYY-MM-DD", flag, raw);
            }
        }
    }
}

/// Parse a session id, accepting a leading '#'
pub fn parse_session_id(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    digits
        .parse::<i64>()
        .map_err(|_| SiftError::InvalidInput(format!("Invalid session ID '{}'", raw)))
}

/// List sessions from the configured listing, filtered by `args`.
pub fn run_list(
    args: &ListArgs,
    settings: &Settings,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let limit = args.limit.unwrap_or(settings.history.default_limit);
    if limit == 0 {
        return Err(SiftError::InvalidInput(
            "--limit must be at least 1".to_string(),
        ));
    }

    warn_on_ignored_dates(args);

    let listing = listing_for(&args.sessions, settings);
    let mut view = HistoryView::load(&listing)?;
    view.set_filters(args.filters());

    let visible = view.visible();
    let shown = &visible[..visible.len().min(limit)];
    tracing::debug!(
        total = view.len(),
        matched = visible.len(),
        shown = shown.len(),
        "listing sessions"
    );

    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(shown)?)?;
        return Ok(());
    }

    if view.is_empty() {
        writeln!(out, "No sessions in history.")?;
        return Ok(());
    }
    if visible.is_empty() {
        writeln!(out, "No sessions match your filter.")?;
        return Ok(());
    }

    for session in shown {
        writeln!(out, "{}", format_session_line(session, &settings.appearance))?;
    }
    if shown.len() < view.len() {
        writeln!(
            out,
            "\nShowing {} of {} matching ({} total)",
            shown.len(),
            visible.len(),
            view.len()
        )?;
    }

    Ok(())
}

/// Show one session in full.
pub fn run_show(
    args: &ShowArgs,
    settings: &Settings,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let id = parse_session_id(&args.session_id)?;
    let listing = listing_for(&args.sessions, settings);
    let detail = listing.get_session(id)?.ok_or(SiftError::NotFound(id))?;

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?,
        OutputFormat::Text => write!(out, "{}", format_session_detail(&detail, &settings.appearance))?,
    }

    Ok(())
}
