use super::*;

// =============================================================
// Overlay visibility classes
// =============================================================

#[test]
fn hidden_overlay_is_unmounted_and_transparent() {
    let class = overlay_class(false, false);
    assert!(class.contains(" hidden"));
    assert!(class.contains(" opacity-0"));
}

#[test]
fn mounted_overlay_waits_for_reveal() {
    let class = overlay_class(true, false);
    assert!(!class.contains(" hidden"));
    assert!(class.contains(" opacity-0"));
}

#[test]
fn revealed_overlay_has_no_visibility_modifiers() {
    let class = overlay_class(true, true);
    assert!(!class.contains(" hidden"));
    assert!(!class.contains("opacity-0"));
    assert!(class.contains("transition-opacity"));
}

// =============================================================
// Control labels
// =============================================================

#[test]
fn share_control_confirms_copy() {
    assert_eq!(share_label(false), "Share");
    assert_eq!(share_label(true), "Copied!");
    assert_eq!(share_icon(true), "fas fa-check");
}

#[test]
fn download_control_spins_while_busy() {
    assert_eq!(download_icon(true), "fas fa-spinner fa-spin");
    assert_eq!(download_icon(false), "fas fa-download");
}
