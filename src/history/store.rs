// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Session listing sources and the filtered history view
//!
//! The backend owns session storage. A listing only has to hand back the
//! records it returned; `JsonFileListing` reads a saved response body.

use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};

use super::filter::{apply_history_filters_in, HistoryFilters};
use super::session::{SessionDetail, SessionSummary};
use crate::error::{Result, SiftError};

/// Source of session records
pub trait SessionListing {
    /// All session summaries, in the order the source returned them
    fn list_sessions(&self) -> Result<Vec<SessionSummary>>;

    /// Full record for one session, if the source has it
    fn get_session(&self, id: i64) -> Result<Option<SessionDetail>>;
}

/// Listing backed by a JSON array of session records on disk
///
/// Accepts either the summary list (`GET /api/sessions`) or an array of
/// detail records; summaries are read as details with empty collections.
pub struct JsonFileListing {
    /// Path to the JSON file
    path: PathBuf,
}

impl JsonFileListing {
    /// Create a listing for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this listing reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<SessionDetail>> {
        if !self.path.exists() {
            return Err(SiftError::Listing(format!(
                "session file not found: {}",
                self.path.display()
            )));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let records: Vec<SessionDetail> = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "loaded session listing"
        );
        Ok(records)
    }
}

impl SessionListing for JsonFileListing {
    fn list_sessions(&self) -> Result<Vec<SessionSummary>> {
        Ok(self.load()?.into_iter().map(|d| d.session).collect())
    }

    fn get_session(&self, id: i64) -> Result<Option<SessionDetail>> {
        Ok(self.load()?.into_iter().find(|d| d.session.id == id))
    }
}

/// In-memory listing, used for tests and embedding callers
#[derive(Debug, Clone, Default)]
pub struct MemoryListing {
    sessions: Vec<SessionDetail>,
}

impl MemoryListing {
    pub fn new(sessions: Vec<SessionDetail>) -> Self {
        Self { sessions }
    }

    /// Build a listing from bare summaries
    pub fn from_summaries(summaries: Vec<SessionSummary>) -> Self {
        Self::new(
            summaries
                .into_iter()
                .map(|session| SessionDetail {
                    session,
                    sources: Vec::new(),
                    messages: Vec::new(),
                    infographic: None,
                })
                .collect(),
        )
    }
}

impl SessionListing for MemoryListing {
    fn list_sessions(&self) -> Result<Vec<SessionSummary>> {
        Ok(self.sessions.iter().map(SessionDetail::summary).collect())
    }

    fn get_session(&self, id: i64) -> Result<Option<SessionDetail>> {
        Ok(self.sessions.iter().find(|d| d.session.id == id).cloned())
    }
}

/// Full session history plus the criteria currently applied to it
///
/// The unfiltered collection is kept so criteria can be replaced freely;
/// the latest `set_filters` call always determines what is visible.
pub struct HistoryView<Tz: TimeZone = Local> {
    sessions: Vec<SessionSummary>,
    filters: HistoryFilters,
    tz: Tz,
}

impl HistoryView<Local> {
    /// Load every session from `listing`, with date bounds in local time
    pub fn load(listing: &dyn SessionListing) -> Result<Self> {
        Ok(Self::new(listing.list_sessions()?, Local))
    }
}

impl<Tz: TimeZone> HistoryView<Tz> {
    /// Wrap an already-fetched collection
    pub fn new(sessions: Vec<SessionSummary>, tz: Tz) -> Self {
        Self {
            sessions,
            filters: HistoryFilters::default(),
            tz,
        }
    }

    /// Replace the active criteria
    pub fn set_filters(&mut self, filters: HistoryFilters) {
        self.filters = filters;
    }

    /// Currently applied criteria
    pub fn filters(&self) -> &HistoryFilters {
        &self.filters
    }

    /// Every session, unfiltered
    pub fn all(&self) -> &[SessionSummary] {
        &self.sessions
    }

    /// Sessions passing the current criteria
    pub fn visible(&self) -> Vec<SessionSummary> {
        apply_history_filters_in(&self.sessions, &self.filters, &self.tz)
    }

    /// Look up a session in the unfiltered collection
    pub fn find(&self, id: i64) -> Option<&SessionSummary> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
