//! Reqwest adapter for the marketplace backend.
//!
//! One [`HttpBackend`] implements every backend port. It owns transport
//! details only: URL building, JSON bodies, timeout and status mapping, and
//! envelope decoding into domain types.

mod backend;
mod dto;
mod resources;

pub use backend::HttpBackend;
