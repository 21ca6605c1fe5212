//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (host page discovery, body
//! scroll, downloads and sharing) from component logic so components stay
//! testable off-browser.

pub mod browser;
pub mod page;
pub mod scroll_lock;
