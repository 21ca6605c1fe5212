//! YouTube link handling: video ID extraction and derived URLs.

#[cfg(test)]
#[path = "youtube_test.rs"]
mod youtube_test;

use std::sync::LazyLock;

use regex::Regex;

/// Permissions granted to the embedded player iframe.
pub const EMBED_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Watch, embed, and short-link URL shapes, capturing the 11-character ID.
static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([A-Za-z0-9_-]{11})")
        .expect("YouTube ID regex should compile")
});

/// Extract the video ID from a YouTube URL.
///
/// Returns `url` unchanged when it does not look like a known YouTube link,
/// so feeds may also carry bare IDs.
#[must_use]
pub fn extract_video_id(url: &str) -> &str {
    VIDEO_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map_or(url, |m| m.as_str())
}

/// Autoplaying embed URL for the lightbox player.
#[must_use]
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=1&rel=0")
}

/// High-resolution thumbnail shown in grid tiles.
#[must_use]
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")
}
