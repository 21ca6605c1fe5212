//! Grid planning: container attributes and the tiles each container shows.
//!
//! DESIGN
//! ======
//! All containers on a page share one fetched list. The feed URL comes from
//! the first container, and every container shows a prefix of the shared list
//! capped by its own limit. Because tiles are always a prefix, a tile's
//! position in any container equals its position in the list the viewer
//! navigates.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::YOUTUBE_THUMB_ALT;
use crate::item::{GalleryItem, MediaKind};
use crate::youtube;

/// Attributes read from one grid container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSpec {
    /// Feed URL override; only the first container's value is used.
    pub source: Option<String>,
    /// Maximum number of list entries this container shows.
    pub limit: Option<usize>,
}

impl GridSpec {
    /// Read raw `data-source` / `data-limit` attribute values.
    #[must_use]
    pub fn from_attributes(source: Option<String>, limit: Option<&str>) -> Self {
        Self { source: source.filter(|s| !s.trim().is_empty()), limit: parse_limit(limit) }
    }
}

/// Parse a `data-limit` value.
///
/// Reads the leading integer after optional whitespace and sign, so
/// `"6 items"` caps at 6. Missing, unparsable, zero, and negative values all
/// mean "no cap". A negative value does not count back from the end of the
/// list: `"-2"` shows every item rather than all but the last two.
#[must_use]
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let trimmed = raw?.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if negative || digits.is_empty() {
        return None;
    }
    match digits.parse::<usize>() {
        Ok(0) => None,
        Ok(n) => Some(n),
        // Too many digits to fit: effectively uncapped.
        Err(_) => Some(usize::MAX),
    }
}

/// Feed URL for the page: the first container's source, else `default`.
///
/// Returns `None` when the page has no containers, in which case nothing is
/// fetched.
#[must_use]
pub fn feed_source<'a>(specs: &'a [GridSpec], default: &'a str) -> Option<&'a str> {
    let first = specs.first()?;
    for other in specs.iter().skip(1) {
        if other.source.is_some() && other.source != first.source {
            log::debug!("ignoring data-source on secondary grid; all grids share the first feed");
        }
    }
    Some(first.source.as_deref().unwrap_or(default))
}

/// Media shown inside a grid tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileMedia {
    /// Lazy-loaded still image.
    Image { src: String, alt: String },
    /// Muted, looping, autoplaying preview without controls.
    Video { src: String, poster: Option<String> },
    /// Thumbnail with a play overlay standing in for an embed.
    YoutubeThumb { thumbnail: String, alt: String },
}

/// One grid tile; activating it opens the viewer at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub class: String,
    pub media: TileMedia,
}

impl Tile {
    /// Tile for `item`, or `None` when the item's kind has no tile.
    #[must_use]
    pub fn for_item(index: usize, item: &GalleryItem) -> Option<Self> {
        let media = match item.kind {
            MediaKind::Image => TileMedia::Image { src: item.src.clone(), alt: item.alt_text().to_owned() },
            MediaKind::Video => TileMedia::Video { src: item.src.clone(), poster: item.poster.clone() },
            MediaKind::Youtube => TileMedia::YoutubeThumb {
                thumbnail: youtube::thumbnail_url(youtube::extract_video_id(&item.src)),
                alt: item.alt_or(YOUTUBE_THUMB_ALT),
            },
            MediaKind::Unsupported => return None,
        };
        Some(Self { index, class: item.tile_class(), media })
    }
}

/// Tiles for one container: the first `limit` list entries, in order,
/// skipping kinds that have no tile.
#[must_use]
pub fn plan_tiles(items: &[GalleryItem], limit: Option<usize>) -> Vec<Tile> {
    let take = limit.unwrap_or(items.len());
    items
        .iter()
        .take(take)
        .enumerate()
        .filter_map(|(index, item)| Tile::for_item(index, item))
        .collect()
}
