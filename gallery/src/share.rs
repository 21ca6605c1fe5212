//! Share action: absolute URL resolution and the share-or-copy flow.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use crate::config::GalleryConfig;
use crate::consts::COPY_FAILED_PREFIX;
use crate::item::GalleryItem;
use crate::platform::Platform;

/// Payload for the native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    #[must_use]
    pub fn for_item(item: &GalleryItem, origin: &str, config: &GalleryConfig) -> Self {
        Self {
            title: config.share_title.clone(),
            text: item.alt_or(&config.share_text),
            url: resolve_share_url(&item.src, origin),
        }
    }
}

/// Absolute URL for `src`: anything starting with `http` is kept, everything
/// else is joined onto `origin`.
#[must_use]
pub fn resolve_share_url(src: &str, origin: &str) -> String {
    if src.starts_with("http") {
        return src.to_owned();
    }
    let separator = if src.starts_with('/') { "" } else { "/" };
    format!("{origin}{separator}{src}")
}

/// How a share attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native sheet completed.
    Shared,
    /// The native sheet was dismissed or failed; nothing else happens.
    Dismissed,
    /// No native sheet; the URL went to the clipboard.
    Copied,
    /// Clipboard refused; the URL was shown in a notice instead.
    CopyFailed { url: String },
}

/// Share `item` through `platform`.
pub async fn share_item<P>(platform: &P, item: &GalleryItem, config: &GalleryConfig) -> ShareOutcome
where
    P: Platform + ?Sized,
{
    let data = ShareData::for_item(item, &platform.origin(), config);

    if platform.can_share() {
        return match platform.share(&data).await {
            Ok(()) => ShareOutcome::Shared,
            Err(e) => {
                log::info!("share canceled or failed: {e}");
                ShareOutcome::Dismissed
            }
        };
    }

    match platform.copy_text(&data.url).await {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            log::warn!("{e}");
            platform.notify(&format!("{COPY_FAILED_PREFIX}{}", data.url));
            ShareOutcome::CopyFailed { url: data.url }
        }
    }
}
