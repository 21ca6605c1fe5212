//! Grid body for one host container.

use gallery::grid::Tile;
use leptos::prelude::*;

use crate::components::media_tile::MediaTile;
use crate::state::lightbox::LightboxHandle;

/// Renders `tiles` in order. The host container supplies the grid layout.
#[component]
pub fn BentoGrid(tiles: Vec<Tile>, lightbox: LightboxHandle) -> impl IntoView {
    tiles
        .into_iter()
        .map(|tile| view! { <MediaTile tile=tile lightbox=lightbox /> })
        .collect_view()
}
