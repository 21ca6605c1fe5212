//! HTTP helpers for the gallery feed and media downloads.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an empty feed / error, so components and
//! tests compile without a browser.
//!
//! ERROR HANDLING
//! ==============
//! The feed never fails outward: any fetch or decode problem is logged and
//! the page renders an empty gallery. Byte downloads return
//! `Result<_, GalleryError>` so the download flow can fall back.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gallery::error::GalleryError;
use gallery::item::GalleryItem;

#[cfg(any(test, feature = "csr"))]
fn request_failed(url: &str, reason: impl std::fmt::Display) -> GalleryError {
    GalleryError::Fetch { url: url.to_owned(), reason: reason.to_string() }
}

/// Fetch and parse the gallery feed at `url`.
///
/// Returns an empty list on any failure.
pub async fn fetch_gallery(url: &str) -> Vec<GalleryItem> {
    match fetch_feed(url).await {
        Ok(items) => items,
        Err(e) => {
            leptos::logging::error!("gallery feed unavailable: {e}");
            Vec::new()
        }
    }
}

async fn fetch_feed(url: &str) -> Result<Vec<GalleryItem>, GalleryError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| request_failed(url, e))?;
        if !resp.ok() {
            return Err(GalleryError::Status { url: url.to_owned(), status: resp.status() });
        }
        let body = resp.text().await.map_err(|e| request_failed(url, e))?;
        gallery::item::parse_feed(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Ok(Vec::new())
    }
}

/// Fetch the raw body at `url`.
///
/// # Errors
///
/// Returns [`GalleryError::Fetch`] when the request fails and
/// [`GalleryError::Status`] on a non-2xx response.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, GalleryError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| request_failed(url, e))?;
        if !resp.ok() {
            return Err(GalleryError::Status { url: url.to_owned(), status: resp.status() });
        }
        resp.binary().await.map_err(|e| request_failed(url, e))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(GalleryError::Fetch { url: url.to_owned(), reason: "not available outside the browser".to_owned() })
    }
}
