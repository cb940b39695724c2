//! # Slotbook Client
//!
//! The client side of the slotbook booking marketplace. It wires the pure
//! slot grid from `slotbook-core` to the outside world.
//!
//! ## Architecture
//!
//! - **Source**: the [`source::BookingSource`] trait, its HTTP implementation
//!   and a mock for tests
//! - **Cache**: query results kept as JSON with a freshness window
//! - **Session**: who is signed in, resolved from a bearer token and passed
//!   explicitly to everything that needs it
//! - **Router**: path-to-page mapping gated on the session
//! - **Booking**: the booking page flow and the "my bookings" view
//! - **Admin**: approving or rejecting businesses awaiting review
//! - **Config**: environment-driven settings

/// Administrator approval of new businesses
pub mod admin;
/// Booking page flow and the my-bookings view
pub mod booking;
/// Query cache and the caching source wrapper
pub mod cache;
/// Configuration loaded from the environment
pub mod config;
/// HTTP implementation of the data source
pub mod http;
/// Mock data source for tests
pub mod mock;
/// Route table and session gating
pub mod router;
/// Session resolution
pub mod session;
/// Data source trait
pub mod source;

use eyre::Result;

use crate::{cache::CachedSource, config::ClientConfig, http::HttpSource};

/// Builds the source the binary talks to: HTTP behind a query cache.
pub fn connect(config: &ClientConfig) -> Result<CachedSource<HttpSource>> {
    let http = HttpSource::new(config.clone())?;
    Ok(CachedSource::new(http, config.cache_ttl()))
}
