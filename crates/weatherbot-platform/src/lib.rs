//! Browser platform adapter for the weather chat widget.
//!
//! Implements `weatherbot_core::ports::BackendPort` over the browser
//! `fetch()` API via gloo-net.

pub mod http;

pub use http::HttpBackend;
