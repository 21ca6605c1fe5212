//! Media gallery core: feed model, grid planning, and the lightbox viewer.
//!
//! This crate has no browser dependencies. It owns everything about the
//! gallery that can be decided without a document: which tiles a grid
//! container shows, what the lightbox displays for a given item, how the
//! viewer moves between hidden, visible, and fading-out, and how the download
//! and share actions fall back when a browser capability fails. The `client`
//! crate wires DOM events into [`viewer::Viewer`] and implements the
//! [`viewer::ViewBinding`] and [`platform::Platform`] seams.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`item`] | Feed items and lenient feed parsing |
//! | [`grid`] | Per-container attributes and tile planning |
//! | [`youtube`] | Video ID extraction and embed/thumbnail URLs |
//! | [`content`] | What the lightbox body shows for one item |
//! | [`input`] | Keyboard and click-target types fed to the viewer |
//! | [`viewer`] | Viewer state machine ([`viewer::ViewerCore`]) and its dispatcher |
//! | [`platform`] | Async browser capability seam used by actions |
//! | [`download`] | Filename derivation and the download-with-fallback flow |
//! | [`share`] | Share URL resolution and the share-or-copy flow |
//! | [`config`] | Page-level configuration with defaults |
//! | [`error`] | Error type shared by fallible operations |
//! | [`consts`] | Paths, timings, and user-facing strings |

pub mod config;
pub mod consts;
pub mod content;
pub mod download;
pub mod error;
pub mod grid;
pub mod input;
pub mod item;
pub mod platform;
pub mod share;
pub mod viewer;
pub mod youtube;
