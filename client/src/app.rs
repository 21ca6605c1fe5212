//! Page bootstrap: discover grids, fetch the feed once, mount everything.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load on the local executor. Grid containers are
//! cleared and filled with a [`BentoGrid`] each; a single [`Lightbox`] is
//! appended to `<body>`. Every grid and the lightbox share one
//! [`LightboxHandle`], so a tile at position `i` opens the viewer at item `i`.

use gallery::config::GalleryConfig;
#[cfg(feature = "csr")]
use gallery::grid::{GridSpec, feed_source, plan_tiles};
#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::components::bento_grid::BentoGrid;
#[cfg(feature = "csr")]
use crate::components::lightbox::Lightbox;
#[cfg(feature = "csr")]
use crate::net::api::fetch_gallery;
#[cfg(feature = "csr")]
use crate::state::lightbox::LightboxHandle;
#[cfg(feature = "csr")]
use crate::util::page;

/// Render every gallery grid on the page and attach the viewer.
///
/// Pages without grid containers are left untouched and nothing is fetched.
#[allow(clippy::unused_async)]
pub async fn mount_gallery(config: GalleryConfig) {
    #[cfg(feature = "csr")]
    {
        let containers = page::grid_containers(&config.grid_selector);
        let specs: Vec<GridSpec> = containers.iter().map(|c| page::grid_spec(c)).collect();
        let Some(source) = feed_source(&specs, &config.default_source) else {
            leptos::logging::log!("no {} containers on this page", config.grid_selector);
            return;
        };

        let items = fetch_gallery(source).await;
        leptos::logging::log!("gallery loaded {} items from {source}", items.len());
        let handle = LightboxHandle::new(items.clone(), config.viewer_timings());

        for (container, grid) in containers.into_iter().zip(&specs) {
            let tiles = plan_tiles(&items, grid.limit);
            container.set_inner_html("");
            leptos::mount::mount_to(container, move || view! { <BentoGrid tiles=tiles lightbox=handle /> }).forget();
        }

        leptos::mount::mount_to_body(move || view! { <Lightbox handle=handle config=config /> });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
