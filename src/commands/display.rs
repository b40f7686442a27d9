// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Display formatting for session listings and details
//!
//! Functions return formatted strings rather than printing so they can be
//! tested directly.

use std::fmt::Write as _;

use chrono::{Local, TimeZone};

use crate::config::AppearanceConfig;
use crate::history::time::parse_instant;
use crate::history::{SessionDetail, SessionSummary};

/// Truncate to at most `max_chars` characters, marking the cut with "..."
pub fn truncate_prompt(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Render an ISO-8601 timestamp in `tz`; unparseable text is shown as-is
pub fn format_timestamp_in<Tz>(value: &str, date_format: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(instant) = parse_instant(value, tz) else {
        return value.to_string();
    };

    let mut out = String::new();
    match write!(out, "{}", instant.with_timezone(tz).format(date_format)) {
        Ok(()) => out,
        Err(_) => value.to_string(),
    }
}

/// Render an ISO-8601 timestamp in local time
pub fn format_timestamp(value: &str, date_format: &str) -> String {
    format_timestamp_in(value, date_format, &Local)
}

/// One listing row: `#id | date | status | prompt`
pub fn format_session_line(session: &SessionSummary, appearance: &AppearanceConfig) -> String {
    format!(
        "#{} | {} | {} | {}",
        session.id,
        format_timestamp(&session.created_at, &appearance.date_format),
        session.status,
        truncate_prompt(&session.prompt, appearance.prompt_width)
    )
}

/// Multi-line rendering of a full session
pub fn format_session_detail(detail: &SessionDetail, appearance: &AppearanceConfig) -> String {
    let session = &detail.session;
    let mut out = String::new();

    let _ = writeln!(out, "Session #{}", session.id);
    let _ = writeln!(out, "Prompt: {}", session.prompt);
    let _ = writeln!(
        out,
        "Created: {}",
        format_timestamp(&session.created_at, &appearance.date_format)
    );
    let _ = writeln!(out, "Status: {}", session.status);

    let _ = writeln!(out, "\nMessages:");
    if detail.messages.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for message in &detail.messages {
        let _ = writeln!(out, "  [{}] {}", message.role, message.content);
    }

    let _ = writeln!(out, "\nSources:");
    if detail.sources.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for source in &detail.sources {
        let _ = write!(out, "  - {} <{}>", source.title, source.url);
        if let Some(confidence) = source.confidence {
            let _ = write!(out, " (confidence {:.2})", confidence);
        }
        let _ = writeln!(out);
        if let Some(snippet) = source.snippet.as_deref().filter(|s| !s.trim().is_empty()) {
            let _ = writeln!(out, "    {}", truncate_prompt(snippet, appearance.prompt_width));
        }
    }

    let _ = writeln!(out, "\nInfographic:");
    match &detail.infographic {
        Some(infographic) => {
            let _ = writeln!(
                out,
                "  #{} created {}",
                infographic.id,
                format_timestamp(&infographic.created_at, &appearance.date_format)
            );
            let _ = writeln!(out, "  {}", truncate_prompt(&infographic.image_url, 60));
        }
        None => {
            let _ = writeln!(out, "  (not generated)");
        }
    }

    out
}
