//! Page-level configuration.
//!
//! Every field has a default, so hosts only need to override what differs.
//! The client reads an optional JSON block from the page; grid containers can
//! further override the feed URL and item cap through their own attributes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    COPIED_FEEDBACK_MS, DEFAULT_SHARE_TEXT, DEFAULT_SHARE_TITLE, DEFAULT_SOURCE, FADE_OUT_MS, GRID_SELECTOR,
    REVEAL_DELAY_MS,
};
use crate::error::GalleryError;
use crate::viewer::ViewerTimings;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Feed URL when the first container has no `data-source`.
    pub default_source: String,
    /// Selector for grid containers.
    pub grid_selector: String,
    pub share_title: String,
    /// Share text for items without alt text.
    pub share_text: String,
    pub reveal_delay_ms: u32,
    pub fade_out_ms: u32,
    pub copied_feedback_ms: u32,
    /// Console log level name (`error` .. `trace`).
    pub log_level: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_source: DEFAULT_SOURCE.to_owned(),
            grid_selector: GRID_SELECTOR.to_owned(),
            share_title: DEFAULT_SHARE_TITLE.to_owned(),
            share_text: DEFAULT_SHARE_TEXT.to_owned(),
            reveal_delay_ms: REVEAL_DELAY_MS,
            fade_out_ms: FADE_OUT_MS,
            copied_feedback_ms: COPIED_FEEDBACK_MS,
            log_level: "info".to_owned(),
        }
    }
}

impl GalleryConfig {
    /// Parse a configuration block. Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Decode`] when `raw` is not a JSON object of
    /// the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, GalleryError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Configuration from an optional page block, falling back to defaults
    /// when the block is missing, blank, or malformed.
    #[must_use]
    pub fn from_page_block(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring gallery config block: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn viewer_timings(&self) -> ViewerTimings {
        ViewerTimings { reveal_delay_ms: self.reveal_delay_ms, fade_out_ms: self.fade_out_ms }
    }

    /// Parsed log level; unknown names fall back to `Info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
