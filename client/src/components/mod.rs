//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BentoGrid` renders one host container's tiles; `Lightbox` renders the
//! page's single viewer overlay. Both talk to the shared
//! [`crate::state::lightbox::LightboxHandle`].

pub mod bento_grid;
pub mod lightbox;
pub mod media_tile;
