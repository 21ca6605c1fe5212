//! Page scroll lock behind the open lightbox.
//!
//! Sets `overflow: hidden` on `<body>` while locked and removes the inline
//! value when unlocked, so the host stylesheet's own overflow rule applies
//! again. Requires a browser environment; native builds no-op.

/// Lock or restore page scrolling.
pub fn set_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let result = if locked {
            body.style().set_property("overflow", "hidden")
        } else {
            body.style().remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            leptos::logging::warn!("scroll lock update failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}
