//! Lightbox overlay: media body, navigation, download, and share controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overlay renders purely from [`crate::state::lightbox::LightboxView`]
//! signals. Transition
//! timers live here: when the viewer requests a reveal or a hide, an effect
//! arms a one-shot timeout that calls back into the [`LightboxHandle`]. The
//! element ids match the host stylesheet's `#lightbox` / `#lb-*` rules.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use gallery::config::GalleryConfig;
use gallery::content::ViewerContent;
use gallery::input::ClickTarget;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

use crate::state::lightbox::LightboxHandle;
use crate::util::browser::{spawn_download, spawn_share};

/// Overlay classes for the current visibility.
fn overlay_class(mounted: bool, opaque: bool) -> String {
    let mut class = String::from(
        "fixed inset-0 z-50 flex items-center justify-center bg-black/90 transition-opacity duration-300",
    );
    if !mounted {
        class.push_str(" hidden");
    }
    if !opaque {
        class.push_str(" opacity-0");
    }
    class
}

fn share_label(copied: bool) -> &'static str {
    if copied { "Copied!" } else { "Share" }
}

fn share_icon(copied: bool) -> &'static str {
    if copied { "fas fa-check" } else { "fas fa-share-alt" }
}

fn download_icon(busy: bool) -> &'static str {
    if busy { "fas fa-spinner fa-spin" } else { "fas fa-download" }
}

fn content_view(content: Option<ViewerContent>) -> AnyView {
    match content {
        Some(ViewerContent::Image { src, alt }) => view! {
            <img src=src alt=alt class="max-w-full max-h-[85vh] object-contain shadow-2xl rounded-lg" />
        }
        .into_any(),
        Some(ViewerContent::Video { src }) => view! {
            <video
                src=src
                controls=true
                autoplay=true
                muted=true
                prop:muted=true
                class="max-w-full max-h-[85vh] shadow-2xl rounded-lg bg-black"
            ></video>
        }
        .into_any(),
        Some(ViewerContent::Embed { src, allow }) => view! {
            <iframe
                src=src
                allow=allow
                allowfullscreen=true
                class="w-full max-w-4xl aspect-video shadow-2xl rounded-lg border border-gray-800"
            ></iframe>
        }
        .into_any(),
        Some(ViewerContent::Empty) | None => ().into_any(),
    }
}

/// Fresh stage for `content`; rebuilt per item so the fade-in replays.
fn stage_view(content: Option<ViewerContent>) -> AnyView {
    view! {
        <div class="lb-stage w-full h-full flex items-center justify-center animate-fade-in">
            {content_view(content)}
        </div>
    }
    .into_any()
}

/// Classify a click that bubbled to the overlay.
#[cfg(feature = "csr")]
fn click_target(ev: &leptos::ev::MouseEvent) -> ClickTarget {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return ClickTarget::Inner;
    };
    let target_node: &web_sys::EventTarget = target.as_ref();
    if ev.current_target().is_some_and(|current| &current == target_node) {
        return ClickTarget::Overlay;
    }
    if target.id() == "lb-content" || target.class_list().contains("lb-stage") {
        return ClickTarget::Content;
    }
    ClickTarget::Inner
}

#[cfg(not(feature = "csr"))]
fn click_target(_ev: &leptos::ev::MouseEvent) -> ClickTarget {
    ClickTarget::Inner
}

/// The page's single viewer overlay.
#[component]
pub fn Lightbox(handle: LightboxHandle, config: GalleryConfig) -> impl IntoView {
    let view = handle.view;
    let busy = RwSignal::new(false);
    let copied = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            let Some(delay_ms) = view.pending_reveal.get() else {
                return;
            };
            view.pending_reveal.set(None);
            Timeout::new(delay_ms, move || {
                if handle.is_visible() {
                    view.opaque.set(true);
                }
            })
            .forget();
        });

        Effect::new(move || {
            let Some((token, delay_ms)) = view.pending_hide.get() else {
                return;
            };
            view.pending_hide.set(None);
            Timeout::new(delay_ms, move || handle.finish_close(token)).forget();
        });

        let keydown = window_event_listener(leptos::ev::keydown, move |ev| handle.on_key(&ev.key()));
        on_cleanup(move || keydown.remove());
    }

    let on_backdrop = move |ev: leptos::ev::MouseEvent| handle.on_backdrop_click(click_target(&ev));
    let on_close = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        handle.close();
    };
    let on_prev = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        handle.show_prev();
    };
    let on_next = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        handle.show_next();
    };
    let on_download = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if busy.get_untracked() {
            return;
        }
        if let Some(item) = handle.current_item() {
            spawn_download(item, busy);
        }
    };
    let share_config = StoredValue::new(config);
    let on_share = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if let Some(item) = handle.current_item() {
            spawn_share(item, share_config.get_value(), copied);
        }
    };

    view! {
        <div
            id="lightbox"
            class=move || overlay_class(view.mounted.get(), view.opaque.get())
            on:click=on_backdrop
        >
            <button id="lb-close" class="absolute top-4 right-4 text-white text-3xl" title="Close" on:click=on_close>
                <i class="fas fa-times"></i>
            </button>
            <button id="lb-prev" class="absolute left-4 text-white text-4xl" title="Previous" on:click=on_prev>
                <i class="fas fa-chevron-left"></i>
            </button>
            <div id="lb-content" class="w-full h-full max-w-6xl flex items-center justify-center p-8">
                {move || stage_view(view.content.get())}
            </div>
            <button id="lb-next" class="absolute right-4 text-white text-4xl" title="Next" on:click=on_next>
                <i class="fas fa-chevron-right"></i>
            </button>
            <div class="absolute bottom-6 flex gap-3">
                <button
                    id="lb-download"
                    class="px-4 py-2 rounded-full bg-white/10 text-white hover:bg-white/20"
                    title="Download"
                    disabled=move || busy.get()
                    on:click=on_download
                >
                    <i class=move || download_icon(busy.get())></i>
                    <span class="hidden sm:inline">" Download"</span>
                </button>
                <button
                    id="lb-share"
                    class="px-4 py-2 rounded-full bg-white/10 text-white hover:bg-white/20"
                    title="Share"
                    on:click=on_share
                >
                    <i class=move || share_icon(copied.get())></i>
                    <span class="hidden sm:inline">" "{move || share_label(copied.get())}</span>
                </button>
            </div>
        </div>
    }
}
