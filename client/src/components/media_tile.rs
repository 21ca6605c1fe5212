//! A single grid tile.

use gallery::grid::{Tile, TileMedia};
use leptos::prelude::*;

use crate::state::lightbox::LightboxHandle;

/// Tile wrapper plus its media; clicking the media opens the viewer.
#[component]
pub fn MediaTile(tile: Tile, lightbox: LightboxHandle) -> impl IntoView {
    let index = tile.index;
    let on_open = move |_| lightbox.open(index);

    let media = match tile.media {
        TileMedia::Image { src, alt } => view! {
            <img src=src alt=alt loading="lazy" style="cursor: zoom-in" on:click=on_open />
        }
        .into_any(),
        TileMedia::Video { src, poster } => view! {
            <video
                src=src
                poster=poster
                muted=true
                prop:muted=true
                autoplay=true
                loop=true
                preload="metadata"
                style="cursor: zoom-in"
                on:click=on_open
            ></video>
        }
        .into_any(),
        TileMedia::YoutubeThumb { thumbnail, alt } => view! {
            <div class="relative w-full h-full cursor-pointer group" on:click=on_open>
                <img src=thumbnail alt=alt class="w-full h-full object-cover" />
                <div class="absolute inset-0 flex items-center justify-center bg-black/20 group-hover:bg-black/40 transition">
                    <i class="fas fa-play-circle text-white text-5xl opacity-80 group-hover:scale-110 transition-transform"></i>
                </div>
            </div>
        }
        .into_any(),
    };

    view! { <div class=tile.class>{media}</div> }
}
