//! Funding subsystem.
//!
//! # Data Flow
//! ```text
//! validated address (+ optional token index)
//!     → service.rs (nonce fetch → [gas estimate] → build → sign → broadcast)
//!     → transaction hash or typed error
//! ```

pub mod service;
pub mod tokens;

pub use service::{FundingError, FundingService};
pub use tokens::{TokenDescriptor, TokenTable};
