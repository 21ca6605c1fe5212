//! Download action: filename derivation and the fetch-or-open flow.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::consts::{DEFAULT_FILENAME, IMAGE_EXTENSION, UNSUPPORTED_DOWNLOAD_NOTICE, VIDEO_EXTENSION, YOUTUBE_DOWNLOAD_NOTICE};
use crate::error::GalleryError;
use crate::item::{GalleryItem, MediaKind};
use crate::platform::Platform;

/// Save-as name for `item`: the last path segment without its query string.
///
/// Empty names become [`DEFAULT_FILENAME`]; names without a dot get the
/// kind's usual extension.
#[must_use]
pub fn derive_filename(item: &GalleryItem) -> String {
    let last_segment = item.src.rsplit('/').next().unwrap_or_default();
    let name = last_segment.split('?').next().unwrap_or_default();
    let mut filename = if name.is_empty() { DEFAULT_FILENAME.to_owned() } else { name.to_owned() };
    if !filename.contains('.') {
        match item.kind {
            MediaKind::Image => filename = format!("{filename}.{IMAGE_EXTENSION}"),
            MediaKind::Video => filename = format!("{filename}.{VIDEO_EXTENSION}"),
            MediaKind::Youtube | MediaKind::Unsupported => {}
        }
    }
    filename
}

/// What the download control does for an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadPlan {
    /// Fetch `url` and save it as `filename`.
    Fetch { url: String, filename: String },
    /// No downloadable representation; show `notice` instead.
    Unsupported { notice: &'static str },
}

#[must_use]
pub fn plan_download(item: &GalleryItem) -> DownloadPlan {
    match item.kind {
        MediaKind::Image | MediaKind::Video => {
            DownloadPlan::Fetch { url: item.src.clone(), filename: derive_filename(item) }
        }
        MediaKind::Youtube => DownloadPlan::Unsupported { notice: YOUTUBE_DOWNLOAD_NOTICE },
        MediaKind::Unsupported => DownloadPlan::Unsupported { notice: UNSUPPORTED_DOWNLOAD_NOTICE },
    }
}

/// How a download attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved { filename: String },
    /// Retrieval failed; the source was opened directly instead.
    OpenedFallback { url: String },
    Unsupported,
}

/// Download `item` through `platform`.
///
/// `on_busy(true)` fires before the fetch starts and `on_busy(false)` after
/// it settles, whatever the result. Unsupported items show a notice and never
/// go busy.
pub async fn download_item<P>(platform: &P, item: &GalleryItem, mut on_busy: impl FnMut(bool)) -> DownloadOutcome
where
    P: Platform + ?Sized,
{
    let (url, filename) = match plan_download(item) {
        DownloadPlan::Fetch { url, filename } => (url, filename),
        DownloadPlan::Unsupported { notice } => {
            platform.notify(notice);
            return DownloadOutcome::Unsupported;
        }
    };

    on_busy(true);
    let result = fetch_and_save(platform, &url, &filename).await;
    on_busy(false);

    match result {
        Ok(()) => DownloadOutcome::Saved { filename },
        Err(e) => {
            log::error!("download failed, opening source instead: {e}");
            platform.open_in_new_tab(&url);
            DownloadOutcome::OpenedFallback { url }
        }
    }
}

async fn fetch_and_save<P>(platform: &P, url: &str, filename: &str) -> Result<(), GalleryError>
where
    P: Platform + ?Sized,
{
    let bytes = platform.fetch_bytes(url).await?;
    platform.save_bytes(&bytes, filename)
}
