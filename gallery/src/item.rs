//! Feed model: gallery items and the lenient feed parser.
//!
//! The feed is a JSON array of items fetched once per page load. Items have
//! no identity beyond their position, so parsing never drops or reorders an
//! element: anything it cannot understand becomes an [`MediaKind::Unsupported`]
//! item that keeps its slot. Grids skip those slots; the viewer shows an
//! empty body for them.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use serde::Deserialize;
use serde_json::Value;

use crate::error::GalleryError;

/// What kind of media an item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Self-hosted video file.
    Video,
    /// YouTube link; played through the embed player.
    Youtube,
    /// Missing or unrecognized `type` tag.
    #[default]
    #[serde(other)]
    Unsupported,
}

/// Layout size hint for a grid tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Span {
    /// Double-width, double-height tile.
    #[serde(rename = "2x2")]
    Large,
    /// Single-cell tile.
    #[default]
    #[serde(other)]
    Small,
}

impl Span {
    /// CSS modifier class for the tile wrapper.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Large => "span-2x2",
            Self::Small => "span-1x1",
        }
    }
}

/// One entry of the gallery feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GalleryItem {
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub span: Span,
}

impl GalleryItem {
    #[must_use]
    pub fn new(kind: MediaKind, src: impl Into<String>) -> Self {
        Self { kind, src: src.into(), ..Self::default() }
    }

    /// Alt text, or the empty string when the feed omits it.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or_default()
    }

    /// Alt text, or `default` when the feed omits it or leaves it empty.
    #[must_use]
    pub fn alt_or(&self, default: &str) -> String {
        self.alt.as_deref().filter(|a| !a.is_empty()).unwrap_or(default).to_owned()
    }

    /// Full class list for the tile wrapper.
    #[must_use]
    pub fn tile_class(&self) -> String {
        format!("bento-item {}", self.span.class())
    }

    /// Whether a grid renders a tile for this item.
    #[must_use]
    pub fn has_tile(&self) -> bool {
        !matches!(self.kind, MediaKind::Unsupported)
    }

    fn from_value(value: Value) -> Self {
        match serde_json::from_value(value) {
            Ok(item) => item,
            Err(e) => {
                log::warn!("unreadable gallery entry kept as placeholder: {e}");
                Self::default()
            }
        }
    }
}

/// Parse a feed body.
///
/// A body that is valid JSON but not an array yields an empty list.
///
/// # Errors
///
/// Returns [`GalleryError::Decode`] when the body is not valid JSON.
pub fn parse_feed(body: &str) -> Result<Vec<GalleryItem>, GalleryError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(items_from_value(value))
}

/// Convert an already-decoded feed value into items, one per array element.
#[must_use]
pub fn items_from_value(value: Value) -> Vec<GalleryItem> {
    let Value::Array(entries) = value else {
        log::warn!("gallery feed is not a JSON array; rendering nothing");
        return Vec::new();
    };
    entries.into_iter().map(GalleryItem::from_value).collect()
}
