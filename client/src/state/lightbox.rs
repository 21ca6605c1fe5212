//! Lightbox state: the reactive view model and the shared viewer handle.
//!
//! DESIGN
//! ======
//! One [`gallery::viewer::Viewer`] exists per page. It lives in a
//! `StoredValue` behind [`LightboxHandle`], a `Copy` handle that grid tiles
//! and the lightbox chrome both hold. The viewer drives [`SignalBinding`],
//! which only writes signals; the `Lightbox` component renders from those
//! signals and runs the transition timers they request.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use gallery::content::ViewerContent;
use gallery::input::{ClickTarget, Key};
use gallery::item::GalleryItem;
use gallery::viewer::{CloseToken, Phase, ViewBinding, Viewer, ViewerCore, ViewerTimings};
use leptos::prelude::*;

/// Signals the lightbox chrome renders from.
#[derive(Clone, Copy)]
pub struct LightboxView {
    /// Overlay is out of `display: none`.
    pub mounted: RwSignal<bool>,
    /// Overlay is at full opacity.
    pub opaque: RwSignal<bool>,
    pub content: RwSignal<Option<ViewerContent>>,
    pub scroll_locked: RwSignal<bool>,
    /// Fade-in requested after this many milliseconds.
    pub pending_reveal: RwSignal<Option<u32>>,
    /// Hide requested for this close after this many milliseconds.
    pub pending_hide: RwSignal<Option<(CloseToken, u32)>>,
}

impl LightboxView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mounted: RwSignal::new(false),
            opaque: RwSignal::new(false),
            content: RwSignal::new(None),
            scroll_locked: RwSignal::new(false),
            pending_reveal: RwSignal::new(None),
            pending_hide: RwSignal::new(None),
        }
    }
}

impl Default for LightboxView {
    fn default() -> Self {
        Self::new()
    }
}

/// [`ViewBinding`] that records every effect into [`LightboxView`] signals.
pub struct SignalBinding {
    view: LightboxView,
}

impl ViewBinding for SignalBinding {
    fn render(&mut self, content: &ViewerContent) {
        self.view.content.set(Some(content.clone()));
    }

    fn clear(&mut self) {
        self.view.content.set(None);
    }

    fn set_mounted(&mut self, mounted: bool) {
        self.view.mounted.set(mounted);
    }

    fn set_opaque(&mut self, opaque: bool) {
        self.view.opaque.set(opaque);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        crate::util::scroll_lock::set_locked(locked);
        self.view.scroll_locked.set(locked);
    }

    fn schedule_reveal(&mut self, delay_ms: u32) {
        self.view.pending_reveal.set(Some(delay_ms));
    }

    fn schedule_hide(&mut self, token: CloseToken, delay_ms: u32) {
        self.view.pending_hide.set(Some((token, delay_ms)));
    }
}

/// Shared, `Copy` access to the page's single viewer.
#[derive(Clone, Copy)]
pub struct LightboxHandle {
    viewer: StoredValue<Viewer<SignalBinding>>,
    pub view: LightboxView,
}

impl LightboxHandle {
    #[must_use]
    pub fn new(items: Vec<GalleryItem>, timings: ViewerTimings) -> Self {
        let view = LightboxView::new();
        let mut viewer = Viewer::new(ViewerCore::new(timings), SignalBinding { view });
        viewer.load(items);
        Self { viewer: StoredValue::new(viewer), view }
    }

    pub fn open(self, index: usize) {
        self.viewer.update_value(|v| v.open(index));
    }

    pub fn close(self) {
        self.viewer.update_value(Viewer::close);
    }

    pub fn finish_close(self, token: CloseToken) {
        self.viewer.update_value(|v| v.finish_close(token));
    }

    pub fn show_next(self) {
        self.viewer.update_value(Viewer::show_next);
    }

    pub fn show_prev(self) {
        self.viewer.update_value(Viewer::show_prev);
    }

    /// Route a page-level key press (`KeyboardEvent.key`).
    pub fn on_key(self, key: &str) {
        let key = Key::from(key);
        self.viewer.update_value(|v| v.on_key(&key));
    }

    pub fn on_backdrop_click(self, target: ClickTarget) {
        self.viewer.update_value(|v| v.on_backdrop_click(target));
    }

    /// The item currently shown, cloned out of the viewer.
    #[must_use]
    pub fn current_item(self) -> Option<GalleryItem> {
        self.viewer.with_value(|v| v.current_item().cloned())
    }

    /// Fully visible (not hidden and not fading out).
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.viewer.with_value(|v| v.core.phase() == Phase::Visible)
    }

    #[must_use]
    pub fn current_index(self) -> usize {
        self.viewer.with_value(|v| v.core.state().current_index())
    }
}
