// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History filtering by topic, tag and date range
//!
//! Every active filter narrows the result; an absent or blank criterion is
//! no constraint at all. Malformed dates disable their bound instead of
//! failing the query. The output is always a subsequence of the input in
//! its original order.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::session::SessionSummary;
use super::time::{day_end, day_start, parse_filter_date};

/// User-entered filter criteria, passed through as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFilters {
    /// Case-insensitive substring of the prompt
    #[serde(default)]
    pub topic: Option<String>,
    /// Tag token, with or without its leading `#`
    #[serde(default)]
    pub tag: Option<String>,
    /// Earliest calendar day to include (`YYYY-MM-DD`)
    #[serde(default, alias = "fromDate")]
    pub from_date: Option<String>,
    /// Latest calendar day to include (`YYYY-MM-DD`)
    #[serde(default, alias = "toDate")]
    pub to_date: Option<String>,
}

impl HistoryFilters {
    /// Criteria with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_from_date(mut self, date: impl Into<String>) -> Self {
        self.from_date = Some(date.into());
        self
    }

    pub fn with_to_date(mut self, date: impl Into<String>) -> Self {
        self.to_date = Some(date.into());
        self
    }

    /// Normalized topic needle, if the topic filter is active
    pub fn topic_needle(&self) -> Option<String> {
        let topic = self.topic.as_deref()?.trim().to_lowercase();
        (!topic.is_empty()).then_some(topic)
    }

    /// Normalized `#tag` needle, if the tag filter is active
    pub fn tag_needle(&self) -> Option<String> {
        let tag = self.tag.as_deref()?.trim().to_lowercase();
        let tag = tag.strip_prefix('#').unwrap_or(&tag);
        (!tag.is_empty()).then(|| format!("#{}", tag))
    }

    /// Resolve the criteria against a time zone
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> ResolvedFilters {
        let from = self.from_date.as_deref().and_then(|raw| {
            let bound = parse_filter_date(raw).and_then(|date| day_start(date, tz));
            if bound.is_none() && !raw.trim().is_empty() {
                tracing::debug!(from_date = raw, "ignoring unparseable from date");
            }
            bound
        });
        let to = self.to_date.as_deref().and_then(|raw| {
            let bound = parse_filter_date(raw).and_then(|date| day_end(date, tz));
            if bound.is_none() && !raw.trim().is_empty() {
                tracing::debug!(to_date = raw, "ignoring unparseable to date");
            }
            bound
        });

        ResolvedFilters {
            topic: self.topic_needle(),
            tag: self.tag_needle(),
            from,
            to,
        }
    }

    /// True when no criterion would narrow the result
    pub fn is_inactive(&self) -> bool {
        self.resolve(&Utc).is_inactive()
    }
}

/// Criteria after trimming, case-folding and date resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFilters {
    /// Lower-cased topic substring
    pub topic: Option<String>,
    /// Lower-cased tag including its `#`
    pub tag: Option<String>,
    /// Inclusive lower bound
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound
    pub to: Option<DateTime<Utc>>,
}

impl ResolvedFilters {
    pub fn is_inactive(&self) -> bool {
        self.topic.is_none() && self.tag.is_none() && self.from.is_none() && self.to.is_none()
    }
}

/// Filter sessions using the process-local time zone for date bounds.
pub fn apply_history_filters(
    sessions: &[SessionSummary],
    filters: &HistoryFilters,
) -> Vec<SessionSummary> {
    apply_history_filters_in(sessions, filters, &Local)
}

/// Filter sessions, interpreting date bounds and naive timestamps in `tz`.
///
/// Passes run in order topic, tag, from, to; a pass whose criterion is
/// inactive is skipped outright.
pub fn apply_history_filters_in<Tz: TimeZone>(
    sessions: &[SessionSummary],
    filters: &HistoryFilters,
    tz: &Tz,
) -> Vec<SessionSummary> {
    let resolved = filters.resolve(tz);
    let mut result: Vec<&SessionSummary> = sessions.iter().collect();

    if let Some(topic) = &resolved.topic {
        result.retain(|s| s.prompt.to_lowercase().contains(topic.as_str()));
        tracing::debug!(topic = %topic, remaining = result.len(), "applied topic filter");
    }

    if let Some(tag) = &resolved.tag {
        result.retain(|s| s.prompt.to_lowercase().contains(tag.as_str()));
        tracing::debug!(tag = %tag, remaining = result.len(), "applied tag filter");
    }

    if resolved.from.is_none() && resolved.to.is_none() {
        return result.into_iter().cloned().collect();
    }

    // Each survivor's timestamp is parsed once and shared by both bounds.
    let mut dated: Vec<(&SessionSummary, Option<DateTime<Utc>>)> = result
        .into_iter()
        .map(|s| (s, s.created_instant(tz)))
        .collect();

    if let Some(from) = resolved.from {
        dated.retain(|(_, created)| created.is_some_and(|created| created >= from));
        tracing::debug!(from = %from, remaining = dated.len(), "applied from-date filter");
    }

    if let Some(to) = resolved.to {
        dated.retain(|(_, created)| created.is_some_and(|created| created <= to));
        tracing::debug!(to = %to, remaining = dated.len(), "applied to-date filter");
    }

    dated.into_iter().map(|(s, _)| s.clone()).collect()
}
