//! Browser implementation of the gallery's download and share capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gallery::download` and `gallery::share` describe the flows against the
//! `Platform` trait. [`WebPlatform`] backs that trait with fetch, object
//! URLs, the Web Share API, and the async clipboard. The `spawn_*` helpers
//! run a flow on the local executor and mirror its progress into signals
//! the lightbox buttons render from.

use gallery::config::GalleryConfig;
use gallery::item::GalleryItem;
use leptos::prelude::*;

#[cfg(feature = "csr")]
mod web {
    use async_trait::async_trait;
    use gallery::error::GalleryError;
    use gallery::platform::Platform;
    use gallery::share::ShareData;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    /// [`Platform`] over the current `window`.
    pub struct WebPlatform;

    fn js_message(value: &JsValue) -> String {
        value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{value:?}"))
    }

    fn window() -> Result<web_sys::Window, GalleryError> {
        web_sys::window().ok_or_else(|| GalleryError::Blob("no window".to_owned()))
    }

    #[async_trait(?Send)]
    impl Platform for WebPlatform {
        async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, GalleryError> {
            crate::net::api::fetch_bytes(url).await
        }

        fn save_bytes(&self, bytes: &[u8], filename: &str) -> Result<(), GalleryError> {
            let blob_err = |e: JsValue| GalleryError::Blob(js_message(&e));
            let document = window()?
                .document()
                .ok_or_else(|| GalleryError::Blob("no document".to_owned()))?;
            let body = document
                .body()
                .ok_or_else(|| GalleryError::Blob("no body".to_owned()))?;

            let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
            let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(blob_err)?;
            let object_url = web_sys::Url::create_object_url_with_blob(&blob).map_err(blob_err)?;

            let anchor = document
                .create_element("a")
                .map_err(blob_err)?
                .dyn_into::<web_sys::HtmlAnchorElement>()
                .map_err(|_| GalleryError::Blob("anchor element unavailable".to_owned()))?;
            anchor.set_href(&object_url);
            anchor.set_download(filename);
            let attached = body.append_child(&anchor).map_err(blob_err);
            if attached.is_ok() {
                anchor.click();
                anchor.remove();
            }
            let revoked = web_sys::Url::revoke_object_url(&object_url).map_err(blob_err);
            attached?;
            revoked
        }

        fn open_in_new_tab(&self, url: &str) {
            let Ok(window) = window() else { return };
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                leptos::logging::warn!("could not open {url}: {}", js_message(&e));
            }
        }

        fn notify(&self, message: &str) {
            let Ok(window) = window() else { return };
            if let Err(e) = window.alert_with_message(message) {
                leptos::logging::warn!("alert failed: {}", js_message(&e));
            }
        }

        fn origin(&self) -> String {
            window()
                .ok()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default()
        }

        fn can_share(&self) -> bool {
            window()
                .ok()
                .is_some_and(|w| js_sys::Reflect::has(&w.navigator(), &JsValue::from_str("share")).unwrap_or(false))
        }

        async fn share(&self, data: &ShareData) -> Result<(), GalleryError> {
            let navigator = window()?.navigator();
            let payload = web_sys::ShareData::new();
            payload.set_title(&data.title);
            payload.set_text(&data.text);
            payload.set_url(&data.url);
            JsFuture::from(navigator.share_with_data(&payload))
                .await
                .map(|_| ())
                .map_err(|e| GalleryError::Share(js_message(&e)))
        }

        async fn copy_text(&self, text: &str) -> Result<(), GalleryError> {
            let clipboard = window()?.navigator().clipboard();
            JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|e| GalleryError::Clipboard(js_message(&e)))
        }
    }
}

#[cfg(feature = "csr")]
pub use web::WebPlatform;

/// Download `item` in the background. `busy` is true while bytes are in flight.
pub fn spawn_download(item: GalleryItem, busy: RwSignal<bool>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = gallery::download::download_item(&WebPlatform, &item, |b| busy.set(b)).await;
        log::debug!("download finished: {outcome:?}");
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (item, busy);
    }
}

/// Share `item` in the background. After a clipboard copy, `copied` stays
/// true for `config.copied_feedback_ms`.
pub fn spawn_share(item: GalleryItem, config: GalleryConfig, copied: RwSignal<bool>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = gallery::share::share_item(&WebPlatform, &item, &config).await;
        log::debug!("share finished: {outcome:?}");
        if outcome == gallery::share::ShareOutcome::Copied {
            copied.set(true);
            gloo_timers::callback::Timeout::new(config.copied_feedback_ms, move || copied.set(false)).forget();
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (item, config, copied);
    }
}
