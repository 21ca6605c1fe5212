use futures::executor::block_on;

use super::*;
use crate::platform::platform_test::FakePlatform;

fn item(kind: MediaKind, src: &str) -> GalleryItem {
    GalleryItem::new(kind, src)
}

// =============================================================
// derive_filename
// =============================================================

#[test]
fn filename_is_last_segment() {
    assert_eq!(derive_filename(&item(MediaKind::Image, "/assets/photos/stage.png")), "stage.png");
}

#[test]
fn filename_drops_query_string() {
    assert_eq!(derive_filename(&item(MediaKind::Video, "https://cdn.example/clip.webm?sig=abc")), "clip.webm");
}

#[test]
fn extensionless_image_gets_jpg() {
    assert_eq!(derive_filename(&item(MediaKind::Image, "/photos/keynote")), "keynote.jpg");
}

#[test]
fn extensionless_video_gets_mp4() {
    assert_eq!(derive_filename(&item(MediaKind::Video, "/media/demo?dl=1")), "demo.mp4");
}

#[test]
fn trailing_slash_uses_default_name() {
    assert_eq!(derive_filename(&item(MediaKind::Image, "/photos/")), "gallery-item.jpg");
    assert_eq!(derive_filename(&item(MediaKind::Video, "")), "gallery-item.mp4");
}

#[test]
fn query_only_segment_uses_default_name() {
    assert_eq!(derive_filename(&item(MediaKind::Image, "/render?id=7")), "render.jpg");
    assert_eq!(derive_filename(&item(MediaKind::Image, "/?id=7")), "gallery-item.jpg");
}

// =============================================================
// plan_download
// =============================================================

#[test]
fn youtube_is_unsupported_with_notice() {
    let plan = plan_download(&item(MediaKind::Youtube, "https://youtu.be/dQw4w9WgXcQ"));
    assert_eq!(plan, DownloadPlan::Unsupported { notice: "YouTube videos cannot be downloaded directly." });
}

#[test]
fn unknown_kind_is_unsupported() {
    assert!(matches!(
        plan_download(&item(MediaKind::Unsupported, "/a.mp3")),
        DownloadPlan::Unsupported { .. }
    ));
}

#[test]
fn image_plans_fetch() {
    assert_eq!(
        plan_download(&item(MediaKind::Image, "/a.jpg")),
        DownloadPlan::Fetch { url: "/a.jpg".into(), filename: "a.jpg".into() }
    );
}

// =============================================================
// download_item
// =============================================================

#[test]
fn successful_download_saves_and_toggles_busy() {
    let platform = FakePlatform::default();
    let mut busy = Vec::new();
    let outcome = block_on(download_item(&platform, &item(MediaKind::Image, "/a.jpg"), |b| busy.push(b)));

    assert_eq!(outcome, DownloadOutcome::Saved { filename: "a.jpg".into() });
    assert_eq!(busy, vec![true, false]);
    assert_eq!(platform.saved.borrow().as_slice(), &[(6, "a.jpg".to_owned())]);
    assert!(platform.opened.borrow().is_empty());
}

#[test]
fn failed_fetch_opens_source_in_new_tab() {
    let platform = FakePlatform { fetch_status: Some(404), ..FakePlatform::default() };
    let mut busy = Vec::new();
    let outcome = block_on(download_item(&platform, &item(MediaKind::Video, "/b.mp4"), |b| busy.push(b)));

    assert_eq!(outcome, DownloadOutcome::OpenedFallback { url: "/b.mp4".into() });
    assert_eq!(platform.opened.borrow().as_slice(), &["/b.mp4".to_owned()]);
    assert_eq!(busy, vec![true, false]);
    assert!(platform.saved.borrow().is_empty());
}

#[test]
fn failed_save_also_falls_back() {
    let platform = FakePlatform { save_fails: true, ..FakePlatform::default() };
    let outcome = block_on(download_item(&platform, &item(MediaKind::Image, "/a.jpg"), |_| {}));
    assert_eq!(outcome, DownloadOutcome::OpenedFallback { url: "/a.jpg".into() });
}

#[test]
fn youtube_download_notifies_without_fetching() {
    let platform = FakePlatform::default();
    let mut busy = Vec::new();
    let outcome = block_on(download_item(&platform, &item(MediaKind::Youtube, "dQw4w9WgXcQ"), |b| busy.push(b)));

    assert_eq!(outcome, DownloadOutcome::Unsupported);
    assert!(busy.is_empty());
    assert!(platform.fetched.borrow().is_empty());
    assert_eq!(platform.notices.borrow().as_slice(), &[YOUTUBE_DOWNLOAD_NOTICE.to_owned()]);
}
