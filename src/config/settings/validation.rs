// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use chrono::format::{Item, StrftimeItems};

use crate::error::{Result, SiftError};

use super::Settings;

/// Shortest prompt width that still leaves room for the "..." suffix.
const MIN_PROMPT_WIDTH: usize = 4;

impl Settings {
    /// Reject settings that would make listings unusable.
    pub fn validate(&self) -> Result<()> {
        if self.history.default_limit == 0 {
            return Err(SiftError::Config(
                "history.default_limit must be at least 1".to_string(),
            ));
        }

        if self.appearance.prompt_width < MIN_PROMPT_WIDTH {
            return Err(SiftError::Config(format!(
                "appearance.prompt_width must be at least {}",
                MIN_PROMPT_WIDTH
            )));
        }

        if self.appearance.date_format.trim().is_empty() {
            return Err(SiftError::Config(
                "appearance.date_format must not be empty".to_string(),
            ));
        }

        if StrftimeItems::new(&self.appearance.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(SiftError::Config(format!(
                "appearance.date_format is not a valid strftime format: {}",
                self.appearance.date_format
            )));
        }

        Ok(())
    }
}
