//! HTTP boundary subsystem.
//!
//! # Data Flow
//! ```text
//! POST /fund/account | /fund/safe  ({"text": ...})
//!     → request.rs (parse, validate address and token index)
//!     → funding service (nonce → build → sign → broadcast)
//!     → "Watch on <explorer>/tx/<hash>" or {"error": ...}
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use server::{AppState, HttpServer};
