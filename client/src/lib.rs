//! Browser client for the media gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled to WASM with the `csr` feature and loaded by a static host page.
//! On start it reads the optional page configuration, fills every
//! `.bento` container with tiles from the gallery feed, and mounts the
//! lightbox viewer. Native builds (no `csr`) compile the same components with
//! browser calls stubbed out so the crate's tests run off-browser.
//!
//! | Module | Role |
//! |--------|------|
//! | `app` | Page bootstrap |
//! | `components` | Grid tiles and the lightbox overlay |
//! | `net` | Feed and media fetches |
//! | `state` | Shared lightbox handle and view signals |
//! | `util` | Host page discovery, scroll lock, download/share platform |

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }

    let config = util::page::read_config();
    log::set_max_level(config.log_level().to_level_filter());
    leptos::task::spawn_local(app::mount_gallery(config));
}
