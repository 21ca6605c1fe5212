//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches the gallery feed and media bytes over HTTP. There is no
//! other network traffic.

pub mod api;
