//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The gallery has a single piece of shared state, the lightbox. Grid tiles
//! only ever call into it; they never own item state themselves.

pub mod lightbox;
