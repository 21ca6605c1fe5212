use super::*;

#[test]
fn escape_and_arrows_map_to_commands() {
    assert_eq!(Key::from("Escape").command(), Some(KeyCommand::Close));
    assert_eq!(Key::from("ArrowLeft").command(), Some(KeyCommand::Prev));
    assert_eq!(Key::from("ArrowRight").command(), Some(KeyCommand::Next));
}

#[test]
fn other_keys_have_no_command() {
    assert_eq!(Key::from("ArrowUp").command(), None);
    assert_eq!(Key::from("Enter").command(), None);
    assert_eq!(Key::from("escape").command(), None);
}

#[test]
fn only_backdrop_and_content_dismiss() {
    assert!(ClickTarget::Overlay.dismisses());
    assert!(ClickTarget::Content.dismisses());
    assert!(!ClickTarget::Inner.dismisses());
}
