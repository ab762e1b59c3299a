//! Vendor client for the home-services marketplace.
//!
//! The `domain` module holds the registration wizard, session store, payment
//! flow, and one service per screen, all written against the ports in
//! `domain::ports`. `outbound` implements those ports over HTTP, the local
//! filesystem, and the terminal; `inbound` exposes the screens as a
//! command-line tool, and `runtime` hosts it on tokio.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod runtime;
