//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FaucetConfig (validated, immutable)
//!     → read once at startup, shared read-only
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The mnemonic never appears in config files; environment only

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ExplorerConfig;
pub use schema::FaucetConfig;
pub use schema::FundingConfig;
pub use schema::ListenerConfig;
pub use schema::TokenConfig;
