// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Session records as returned by the research backend
//!
//! Timestamps stay as the ISO-8601 text the backend sent; they are only
//! parsed when a date bound needs comparing.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::time::parse_instant;

/// Lightweight record describing one research session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session ID
    pub id: i64,
    /// The research prompt the user submitted
    pub prompt: String,
    /// Backend status label (not interpreted here)
    pub status: String,
    /// Creation time as ISO-8601 text
    #[serde(alias = "createdAt")]
    pub created_at: String,
}

impl SessionSummary {
    /// Create a summary from its parts
    pub fn new(
        id: i64,
        prompt: impl Into<String>,
        status: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            status: status.into(),
            created_at: created_at.into(),
        }
    }

    /// Parse `created_at` into an instant, reading naive timestamps in `tz`
    pub fn created_instant<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        parse_instant(&self.created_at, tz)
    }
}

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message exchanged within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub role: MessageRole,
    pub content: String,
    #[serde(alias = "createdAt")]
    pub created_at: String,
}

/// A web source collected during research
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default, alias = "fetchedAt")]
    pub fetched_at: Option<String>,
    /// Relevance confidence in `[0, 1]` when the backend scored it
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Generated infographic attached to a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Infographic {
    pub id: i64,
    /// Usually an SVG data URL
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    #[serde(default, alias = "layoutMeta")]
    pub layout_meta: serde_json::Value,
    #[serde(alias = "createdAt")]
    pub created_at: String,
}

/// Full session record with its messages, sources and infographic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetail {
    #[serde(flatten)]
    pub session: SessionSummary,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub infographic: Option<Infographic>,
}

impl SessionDetail {
    /// Summary part of this detail record
    pub fn summary(&self) -> SessionSummary {
        self.session.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_deserializes_backend_shape() {
        let json = r#"{"id":7,"prompt":"EV trends #ev","status":"created","created_at":"2026-02-01T10:00:00Z"}"#;
        let summary: SessionSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 7);
        assert_eq!(summary.prompt, "EV trends #ev");
        assert_eq!(summary.status, "created");
    }

    #[test]
    fn test_summary_accepts_camel_case_created_at() {
        let json = r#"{"id":1,"prompt":"p","status":"s","createdAt":"2026-02-01"}"#;
        let summary: SessionSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.created_at, "2026-02-01");
    }

    #[test]
    fn test_summary_serializes_snake_case() {
        let summary = SessionSummary::new(1, "p", "done", "2026-02-01T10:00:00Z");
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["created_at"], "2026-02-01T10:00:00Z");
    }

    #[test]
    fn test_created_instant_parses_utc() {
        let summary = SessionSummary::new(1, "p", "s", "2026-02-01T10:00:00Z");
        let instant = summary.created_instant(&Utc).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_created_instant_garbage() {
        let summary = SessionSummary::new(1, "p", "s", "yesterday-ish");
        assert!(summary.created_instant(&Utc).is_none());
    }

    #[test]
    fn test_detail_defaults_missing_collections() {
        let json = r#"{"id":3,"prompt":"Battery supply chain #ev","status":"done","created_at":"2026-02-03T10:00:00Z"}"#;
        let detail: SessionDetail = serde_json::from_str(json).unwrap();
        assert!(detail.sources.is_empty());
        assert!(detail.messages.is_empty());
        assert!(detail.infographic.is_none());
        assert_eq!(detail.summary().id, 3);
    }

    #[test]
    fn test_detail_full_record() {
        let json = r#"{
            "id": 2,
            "prompt": "AI regulation overview #policy",
            "status": "done",
            "created_at": "2026-02-02T10:00:00Z",
            "messages": [
                {"id": 1, "role": "user", "content": "AI regulation overview", "created_at": "2026-02-02T10:00:00Z"},
                {"id": 2, "role": "assistant", "content": "Summary...", "created_at": "2026-02-02T10:00:05Z"}
            ],
            "sources": [
                {"id": 9, "title": "EU AI Act", "url": "https://example.org/ai-act", "snippet": null, "fetched_at": null, "confidence": 0.8}
            ],
            "infographic": {"id": 4, "image_url": "data:image/svg+xml;base64,AAAA", "layout_meta": {"w": 800}, "created_at": "2026-02-02T10:01:00Z"}
        }"#;
        let detail: SessionDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.messages.len(), 2);
        assert_eq!(detail.messages[1].role, MessageRole::Assistant);
        assert_eq!(detail.sources[0].confidence, Some(0.8));
        assert_eq!(detail.infographic.as_ref().unwrap().layout_meta["w"], 800);
    }

    #[test]
    fn test_message_role_display() {
        assert_eq!(MessageRole::User.to_string(), "user");
        assert_eq!(MessageRole::Assistant.to_string(), "assistant");
    }
}
