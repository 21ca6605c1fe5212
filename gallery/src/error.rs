//! Error type for fallible gallery operations.
//!
//! Nothing in the gallery surfaces these to the user directly: every variant
//! ends in a log line and one of the fallbacks (empty grid, open-in-new-tab,
//! copy notice).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure from a feed fetch, a byte download, or a browser capability call.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// The request never produced a response.
    #[error("request to {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    /// The server answered with a non-2xx status.
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    /// The feed body was not valid JSON.
    #[error("failed to decode gallery feed: {0}")]
    Decode(#[from] serde_json::Error),
    /// Turning fetched bytes into a saved file failed.
    #[error("failed to save download: {0}")]
    Blob(String),
    /// Writing to the clipboard was rejected.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    /// The native share sheet rejected or was dismissed.
    #[error("share failed: {0}")]
    Share(String),
}
