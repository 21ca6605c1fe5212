use futures::executor::block_on;

use super::*;

#[test]
fn request_failed_wraps_url_and_reason() {
    let err = request_failed("/assets/gallery.json", "TypeError: Failed to fetch");
    assert_eq!(err.to_string(), "request to /assets/gallery.json failed: TypeError: Failed to fetch");
}

#[cfg(not(feature = "csr"))]
#[test]
fn feed_is_empty_off_browser() {
    assert!(block_on(fetch_gallery("/assets/gallery.json")).is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn bytes_fail_off_browser() {
    let err = block_on(fetch_bytes("/a.jpg")).unwrap_err();
    assert!(matches!(err, GalleryError::Fetch { .. }));
}
