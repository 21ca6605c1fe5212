//! Shared constants for the gallery crate.

// ── Feed / grid ────────────────────────────────────────────────

/// Feed URL used when the first grid container has no `data-source`.
pub const DEFAULT_SOURCE: &str = "/assets/gallery.json";

/// CSS selector identifying grid containers on the host page.
pub const GRID_SELECTOR: &str = ".bento";

/// Attribute overriding the feed URL on a grid container.
pub const SOURCE_ATTR: &str = "data-source";

/// Attribute capping how many items a grid container shows.
pub const LIMIT_ATTR: &str = "data-limit";

// ── Viewer timings ─────────────────────────────────────────────

/// Delay between mounting the overlay and starting its fade-in.
pub const REVEAL_DELAY_MS: u32 = 10;

/// Length of the overlay fade-out; the viewer still counts as open meanwhile.
pub const FADE_OUT_MS: u32 = 300;

/// How long the share control shows its "copied" confirmation.
pub const COPIED_FEEDBACK_MS: u32 = 2000;

// ── Downloads ──────────────────────────────────────────────────

/// Filename used when the source path has no usable last segment.
pub const DEFAULT_FILENAME: &str = "gallery-item";

/// Extension appended to extension-less image filenames.
pub const IMAGE_EXTENSION: &str = "jpg";

/// Extension appended to extension-less video filenames.
pub const VIDEO_EXTENSION: &str = "mp4";

// ── User-facing text ───────────────────────────────────────────

pub const YOUTUBE_DOWNLOAD_NOTICE: &str = "YouTube videos cannot be downloaded directly.";
pub const UNSUPPORTED_DOWNLOAD_NOTICE: &str = "This item cannot be downloaded.";
pub const COPY_FAILED_PREFIX: &str = "Could not copy link: ";
pub const DEFAULT_SHARE_TITLE: &str = "Hackathon Nova Gallery";
pub const DEFAULT_SHARE_TEXT: &str = "Check out this moment from Hackathon Nova!";
pub const YOUTUBE_THUMB_ALT: &str = "YouTube video";
