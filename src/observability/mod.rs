//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! main.rs
//!     → logging.rs (install subscriber, RUST_LOG filter)
//! HttpServer
//!     → TraceLayer (per-request spans, x-request-id)
//!     → "relay" span handed to handlers (fetch failures, remote status)
//! ```
//!
//! # Design Decisions
//! - Credentials never appear in log fields
//! - Fetch failures are logged in full; callers only see a generic 500

pub mod logging;
