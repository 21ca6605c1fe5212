#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_config_is_default_off_browser() {
    assert_eq!(read_config(), GalleryConfig::default());
}

