//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign x-request-id)
//!     → handlers.rs
//!         /      → fixed marker text
//!         /feed  → relay::FeedFetcher
//!         /ping  → {"message":"pong"}
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use handlers::{FETCH_FAILED_MESSAGE, ROOT_MARKER};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
