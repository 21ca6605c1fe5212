use serde_json::json;

use super::*;

// =============================================================
// Deserialization
// =============================================================

#[test]
fn parses_each_known_kind() {
    let items = parse_feed(
        r#"[
            {"type": "image", "src": "/a.jpg", "alt": "Stage"},
            {"type": "video", "src": "/b.mp4", "poster": "/b.jpg"},
            {"type": "youtube", "src": "https://youtu.be/dQw4w9WgXcQ"}
        ]"#,
    )
    .unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].kind, MediaKind::Image);
    assert_eq!(items[0].alt.as_deref(), Some("Stage"));
    assert_eq!(items[1].kind, MediaKind::Video);
    assert_eq!(items[1].poster.as_deref(), Some("/b.jpg"));
    assert_eq!(items[2].kind, MediaKind::Youtube);
}

#[test]
fn unknown_type_becomes_unsupported() {
    let items = parse_feed(r#"[{"type": "audio", "src": "/c.mp3"}]"#).unwrap();
    assert_eq!(items[0].kind, MediaKind::Unsupported);
    assert_eq!(items[0].src, "/c.mp3");
    assert!(!items[0].has_tile());
}

#[test]
fn missing_type_becomes_unsupported() {
    let items = parse_feed(r#"[{"src": "/c.jpg"}]"#).unwrap();
    assert_eq!(items[0].kind, MediaKind::Unsupported);
}

#[test]
fn span_large_only_for_2x2() {
    let items = parse_feed(
        r#"[
            {"type": "image", "src": "/a.jpg", "span": "2x2"},
            {"type": "image", "src": "/b.jpg", "span": "1x1"},
            {"type": "image", "src": "/c.jpg", "span": "3x1"},
            {"type": "image", "src": "/d.jpg"}
        ]"#,
    )
    .unwrap();
    let spans: Vec<Span> = items.iter().map(|i| i.span).collect();
    assert_eq!(spans, vec![Span::Large, Span::Small, Span::Small, Span::Small]);
}

#[test]
fn non_object_entries_keep_their_slot() {
    let items = items_from_value(json!([
        {"type": "image", "src": "/a.jpg"},
        42,
        {"type": "video", "src": "/b.mp4"}
    ]));
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].kind, MediaKind::Unsupported);
    assert_eq!(items[2].src, "/b.mp4");
}

// =============================================================
// Feed shape
// =============================================================

#[test]
fn empty_array_is_empty_list() {
    assert!(parse_feed("[]").unwrap().is_empty());
}

#[test]
fn non_array_document_is_empty_list() {
    assert!(parse_feed(r#"{"items": []}"#).unwrap().is_empty());
    assert!(parse_feed("null").unwrap().is_empty());
    assert!(parse_feed("\"hello\"").unwrap().is_empty());
}

#[test]
fn invalid_json_is_decode_error() {
    assert!(matches!(parse_feed("<html>"), Err(GalleryError::Decode(_))));
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn tile_class_includes_span_modifier() {
    let mut item = GalleryItem::new(MediaKind::Image, "/a.jpg");
    assert_eq!(item.tile_class(), "bento-item span-1x1");
    item.span = Span::Large;
    assert_eq!(item.tile_class(), "bento-item span-2x2");
}

#[test]
fn alt_text_defaults_to_empty() {
    let item = GalleryItem::new(MediaKind::Image, "/a.jpg");
    assert_eq!(item.alt_text(), "");
}

#[test]
fn alt_or_skips_missing_and_empty_alt() {
    let mut item = GalleryItem::new(MediaKind::Image, "/a.jpg");
    assert_eq!(item.alt_or("fallback"), "fallback");
    item.alt = Some(String::new());
    assert_eq!(item.alt_or("fallback"), "fallback");
    item.alt = Some("Stage".into());
    assert_eq!(item.alt_or("fallback"), "Stage");
}
