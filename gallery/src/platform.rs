//! Browser capabilities used by the download and share actions.
//!
//! The client implements this on top of fetch, object URLs, the Web Share
//! API, and the clipboard. Futures are `?Send`: everything runs on the page's
//! single UI thread.

#[cfg(test)]
#[path = "platform_test.rs"]
pub(crate) mod platform_test;

use async_trait::async_trait;

use crate::error::GalleryError;
use crate::share::ShareData;

#[async_trait(?Send)]
pub trait Platform {
    /// Fetch the body at `url`. Non-2xx responses are errors.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, GalleryError>;

    /// Hand `bytes` to the browser as a file download named `filename`.
    fn save_bytes(&self, bytes: &[u8], filename: &str) -> Result<(), GalleryError>;

    /// Open `url` in a new browsing context.
    fn open_in_new_tab(&self, url: &str);

    /// Show a blocking notice.
    fn notify(&self, message: &str);

    /// Page origin (`scheme://host[:port]`) used to absolutize relative URLs.
    fn origin(&self) -> String;

    /// Whether a native share sheet exists.
    fn can_share(&self) -> bool;

    /// Open the native share sheet. Rejections include user dismissal.
    async fn share(&self, data: &ShareData) -> Result<(), GalleryError>;

    async fn copy_text(&self, text: &str) -> Result<(), GalleryError>;
}
