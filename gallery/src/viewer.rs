//! Lightbox viewer: state, the open/close state machine, and its dispatcher.
//!
//! [`ViewerCore`] holds all viewer logic and returns [`Action`]s instead of
//! touching a document, so it is tested natively. [`Viewer`] wraps a core and
//! applies those actions to an injected [`ViewBinding`]; the browser client
//! implements the binding with reactive signals and the body style.
//!
//! ```text
//!            open(i)                 close()            fade_out_ms elapsed
//!   Hidden ─────────► Visible ───────────────► FadingOut ───────────────► Hidden
//!                        ▲                         │
//!                        └─────── open(i) ─────────┘
//! ```
//!
//! `FadingOut` still counts as open: keys and navigation keep working until
//! the overlay is actually hidden. Each close carries a [`CloseToken`]; a hide
//! timer whose token no longer matches (the viewer was reopened) is ignored.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::consts::{FADE_OUT_MS, REVEAL_DELAY_MS};
use crate::content::ViewerContent;
use crate::input::{ClickTarget, Key, KeyCommand};
use crate::item::GalleryItem;

/// The item list and the position the viewer shows.
///
/// `current_index` is always in `[0, items.len())` while `items` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    items: Vec<GalleryItem>,
    current_index: usize,
}

impl GalleryState {
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items, current_index: 0 }
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current(&self) -> Option<&GalleryItem> {
        self.items.get(self.current_index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move to `index`. Out-of-range requests leave the state untouched.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Step forward, wrapping past the end.
    pub fn advance(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.current_index = (self.current_index + 1) % self.items.len();
        true
    }

    /// Step backward, wrapping past the start.
    pub fn retreat(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let len = self.items.len();
        self.current_index = (self.current_index + len - 1) % len;
        true
    }
}

/// Identifies one close request so late hide timers can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseToken(pub u64);

/// Overlay visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Visible,
    /// Fade-out running; hidden once the matching token's timer fires.
    FadingOut { token: CloseToken },
}

/// Transition delays applied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerTimings {
    pub reveal_delay_ms: u32,
    pub fade_out_ms: u32,
}

impl Default for ViewerTimings {
    fn default() -> Self {
        Self { reveal_delay_ms: REVEAL_DELAY_MS, fade_out_ms: FADE_OUT_MS }
    }
}

/// Effects requested by the state machine, in the order they must be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the body with fresh content.
    ShowContent(ViewerContent),
    /// Remove the body; stops any playing media.
    ClearContent,
    /// Take the overlay out of `display: none`.
    Mount,
    /// Start the fade-in after the given delay.
    Reveal { delay_ms: u32 },
    /// Start the fade-out now.
    FadeOut,
    /// Call [`ViewerCore::finish_close`] with `token` after the delay.
    ScheduleHide { token: CloseToken, delay_ms: u32 },
    /// Put the overlay back into `display: none`.
    Unmount,
    LockScroll,
    UnlockScroll,
}

/// Viewer logic with no host dependencies.
#[derive(Debug, Clone, Default)]
pub struct ViewerCore {
    state: GalleryState,
    phase: Phase,
    timings: ViewerTimings,
    next_token: u64,
}

impl ViewerCore {
    #[must_use]
    pub fn new(timings: ViewerTimings) -> Self {
        Self { timings, ..Self::default() }
    }

    // --- Data ---

    /// Replace the item list. The viewer stays in its current phase.
    pub fn load(&mut self, items: Vec<GalleryItem>) {
        self.state = GalleryState::new(items);
    }

    // --- Transitions ---

    /// Open at `index`. Ignored when `index` is out of range.
    pub fn open(&mut self, index: usize) -> Vec<Action> {
        if !self.state.select(index) {
            log::debug!("viewer open ignored: index {index} out of range ({} items)", self.state.len());
            return Vec::new();
        }
        self.phase = Phase::Visible;
        log::debug!("viewer opened at {index}");
        vec![
            self.content_action(),
            Action::Mount,
            Action::Reveal { delay_ms: self.timings.reveal_delay_ms },
            Action::LockScroll,
        ]
    }

    /// Begin closing. Ignored unless the viewer is fully visible.
    pub fn close(&mut self) -> Vec<Action> {
        if self.phase != Phase::Visible {
            return Vec::new();
        }
        let token = CloseToken(self.next_token);
        self.next_token += 1;
        self.phase = Phase::FadingOut { token };
        log::debug!("viewer closing ({token:?})");
        vec![Action::FadeOut, Action::ScheduleHide { token, delay_ms: self.timings.fade_out_ms }]
    }

    /// Complete the close started with `token`. Stale tokens are ignored.
    pub fn finish_close(&mut self, token: CloseToken) -> Vec<Action> {
        if self.phase != (Phase::FadingOut { token }) {
            return Vec::new();
        }
        self.phase = Phase::Hidden;
        log::debug!("viewer hidden");
        vec![Action::Unmount, Action::ClearContent, Action::UnlockScroll]
    }

    pub fn show_next(&mut self) -> Vec<Action> {
        if !self.is_open() || !self.state.advance() {
            return Vec::new();
        }
        vec![self.content_action()]
    }

    pub fn show_prev(&mut self) -> Vec<Action> {
        if !self.is_open() || !self.state.retreat() {
            return Vec::new();
        }
        vec![self.content_action()]
    }

    // --- Input ---

    /// Handle a key press anywhere on the page.
    pub fn on_key(&mut self, key: &Key) -> Vec<Action> {
        if !self.is_open() {
            return Vec::new();
        }
        match key.command() {
            Some(KeyCommand::Close) => self.close(),
            Some(KeyCommand::Prev) => self.show_prev(),
            Some(KeyCommand::Next) => self.show_next(),
            None => Vec::new(),
        }
    }

    /// Handle a click that reached the overlay.
    pub fn on_backdrop_click(&mut self, target: ClickTarget) -> Vec<Action> {
        if target.dismisses() { self.close() } else { Vec::new() }
    }

    // --- Queries ---

    /// Visible or fading out.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Hidden
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.state.current()
    }

    fn content_action(&self) -> Action {
        self.state
            .current()
            .map_or(Action::ClearContent, |item| Action::ShowContent(ViewerContent::for_item(item)))
    }
}

/// Host surface the viewer drives.
pub trait ViewBinding {
    /// Replace the body with `content`.
    fn render(&mut self, content: &ViewerContent);
    /// Empty the body.
    fn clear(&mut self);
    /// Toggle the overlay's `display: none` state.
    fn set_mounted(&mut self, mounted: bool);
    /// Toggle the overlay's opacity; transitions animate the change.
    fn set_opaque(&mut self, opaque: bool);
    /// Block or restore page scrolling behind the overlay.
    fn set_scroll_locked(&mut self, locked: bool);
    /// Call `set_opaque(true)` after `delay_ms`.
    fn schedule_reveal(&mut self, delay_ms: u32);
    /// Call [`Viewer::finish_close`] with `token` after `delay_ms`.
    fn schedule_hide(&mut self, token: CloseToken, delay_ms: u32);
}

/// A [`ViewerCore`] wired to a [`ViewBinding`].
pub struct Viewer<B: ViewBinding> {
    pub core: ViewerCore,
    binding: B,
}

impl<B: ViewBinding> Viewer<B> {
    #[must_use]
    pub fn new(core: ViewerCore, binding: B) -> Self {
        Self { core, binding }
    }

    pub fn load(&mut self, items: Vec<GalleryItem>) {
        self.core.load(items);
    }

    pub fn open(&mut self, index: usize) {
        let actions = self.core.open(index);
        self.dispatch(actions);
    }

    pub fn close(&mut self) {
        let actions = self.core.close();
        self.dispatch(actions);
    }

    pub fn finish_close(&mut self, token: CloseToken) {
        let actions = self.core.finish_close(token);
        self.dispatch(actions);
    }

    pub fn show_next(&mut self) {
        let actions = self.core.show_next();
        self.dispatch(actions);
    }

    pub fn show_prev(&mut self) {
        let actions = self.core.show_prev();
        self.dispatch(actions);
    }

    pub fn on_key(&mut self, key: &Key) {
        let actions = self.core.on_key(key);
        self.dispatch(actions);
    }

    pub fn on_backdrop_click(&mut self, target: ClickTarget) {
        let actions = self.core.on_backdrop_click(target);
        self.dispatch(actions);
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.core.current_item()
    }

    #[must_use]
    pub fn binding(&self) -> &B {
        &self.binding
    }

    fn dispatch(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::ShowContent(content) => self.binding.render(&content),
                Action::ClearContent => self.binding.clear(),
                Action::Mount => self.binding.set_mounted(true),
                Action::Reveal { delay_ms } => self.binding.schedule_reveal(delay_ms),
                Action::FadeOut => self.binding.set_opaque(false),
                Action::ScheduleHide { token, delay_ms } => self.binding.schedule_hide(token, delay_ms),
                Action::Unmount => self.binding.set_mounted(false),
                Action::LockScroll => self.binding.set_scroll_locked(true),
                Action::UnlockScroll => self.binding.set_scroll_locked(false),
            }
        }
    }
}
