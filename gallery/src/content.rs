//! Lightbox body content for a single item.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::item::{GalleryItem, MediaKind};
use crate::youtube;

/// What the lightbox body shows for the current item.
///
/// Replacing the content (or clearing it) is what stops any playing media, so
/// hosts render this value from scratch rather than patching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerContent {
    /// Still image scaled to fit.
    Image { src: String, alt: String },
    /// Inline player with controls, autoplaying muted.
    Video { src: String },
    /// Embedded third-party player.
    Embed { src: String, allow: &'static str },
    /// Nothing to show for this item.
    Empty,
}

impl ViewerContent {
    #[must_use]
    pub fn for_item(item: &GalleryItem) -> Self {
        match item.kind {
            MediaKind::Image => Self::Image { src: item.src.clone(), alt: item.alt_text().to_owned() },
            MediaKind::Video => Self::Video { src: item.src.clone() },
            MediaKind::Youtube => Self::Embed {
                src: youtube::embed_url(youtube::extract_video_id(&item.src)),
                allow: youtube::EMBED_ALLOW,
            },
            MediaKind::Unsupported => Self::Empty,
        }
    }

    /// Source URL of the displayed media, if any.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Image { src, .. } | Self::Video { src } | Self::Embed { src, .. } => Some(src),
            Self::Empty => None,
        }
    }
}
