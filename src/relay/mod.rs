//! Relay subsystem.
//!
//! # Data Flow
//! ```text
//! GET /feed
//!     → fetcher.rs (GET target_url with Basic auth)
//!     → Ok(bytes)   → 200 application/rss+xml
//!     → Err(FetchError) → logged, 500 with opaque body
//! ```
//!
//! # Design Decisions
//! - One outbound request per inbound request; nothing is cached
//! - Remote status is not interpreted; the body is always relayed
//! - No timeout or retry on the outbound call

pub mod fetcher;

pub use fetcher::{FeedFetcher, FetchError, RSS_CONTENT_TYPE};
