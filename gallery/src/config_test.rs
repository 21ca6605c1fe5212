use super::*;

#[test]
fn defaults_match_constants() {
    let config = GalleryConfig::default();
    assert_eq!(config.default_source, "/assets/gallery.json");
    assert_eq!(config.grid_selector, ".bento");
    assert_eq!(config.fade_out_ms, 300);
    assert_eq!(config.reveal_delay_ms, 10);
    assert_eq!(config.copied_feedback_ms, 2000);
    assert_eq!(config.log_level(), log::Level::Info);
}

#[test]
fn partial_block_keeps_other_defaults() {
    let config = GalleryConfig::from_json(r#"{"share_title": "Demo Day", "fade_out_ms": 150}"#).unwrap();
    assert_eq!(config.share_title, "Demo Day");
    assert_eq!(config.fade_out_ms, 150);
    assert_eq!(config.share_text, DEFAULT_SHARE_TEXT);
    assert_eq!(config.viewer_timings(), ViewerTimings { reveal_delay_ms: 10, fade_out_ms: 150 });
}

#[test]
fn wrong_field_type_is_error() {
    assert!(GalleryConfig::from_json(r#"{"fade_out_ms": "slow"}"#).is_err());
}

#[test]
fn page_block_missing_or_blank_uses_defaults() {
    assert_eq!(GalleryConfig::from_page_block(None), GalleryConfig::default());
    assert_eq!(GalleryConfig::from_page_block(Some("  \n")), GalleryConfig::default());
}

#[test]
fn page_block_malformed_uses_defaults() {
    assert_eq!(GalleryConfig::from_page_block(Some("{oops")), GalleryConfig::default());
}

#[test]
fn page_block_applies_overrides() {
    let config = GalleryConfig::from_page_block(Some(r#"{"default_source": "/feeds/all.json"}"#));
    assert_eq!(config.default_source, "/feeds/all.json");
}

#[test]
fn log_level_parses_names_case_insensitively() {
    let config = GalleryConfig { log_level: "DEBUG".into(), ..GalleryConfig::default() };
    assert_eq!(config.log_level(), log::Level::Debug);
    let config = GalleryConfig { log_level: "loud".into(), ..GalleryConfig::default() };
    assert_eq!(config.log_level(), log::Level::Info);
}
