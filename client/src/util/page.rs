//! Host page discovery: grid containers and the optional config block.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gallery mounts into a page it does not own. Containers are marked with
//! a CSS class and carry `data-source` / `data-limit`; page-wide settings sit
//! in a `<script type="application/json" id="gallery-config">` block.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use gallery::config::GalleryConfig;
#[cfg(feature = "csr")]
use gallery::consts::{LIMIT_ATTR, SOURCE_ATTR};
#[cfg(feature = "csr")]
use gallery::grid::GridSpec;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast as _;

/// Id of the optional JSON configuration element.
pub const CONFIG_ELEMENT_ID: &str = "gallery-config";

/// Read page configuration, falling back to defaults.
pub fn read_config() -> GalleryConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        GalleryConfig::from_page_block(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        GalleryConfig::default()
    }
}

/// Every element matching `selector`, in document order.
#[cfg(feature = "csr")]
pub fn grid_containers(selector: &str) -> Vec<web_sys::HtmlElement> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            leptos::logging::warn!("invalid grid selector {selector:?}: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Container attributes as a [`GridSpec`].
#[cfg(feature = "csr")]
pub fn grid_spec(container: &web_sys::Element) -> GridSpec {
    GridSpec::from_attributes(
        container.get_attribute(SOURCE_ATTR),
        container.get_attribute(LIMIT_ATTR).as_deref(),
    )
}
