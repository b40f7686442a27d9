// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Research session history
//!
//! Session records from the backend, the listing sources that provide
//! them, and the topic/tag/date filters applied when browsing.

pub mod filter;
pub mod session;
pub mod store;
pub mod time;

pub use filter::{apply_history_filters, apply_history_filters_in, HistoryFilters, ResolvedFilters};
pub use session::{Infographic, Message, MessageRole, SessionDetail, SessionSummary, Source};
pub use store::{HistoryView, JsonFileListing, MemoryListing, SessionListing};
