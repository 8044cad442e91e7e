//! Blockchain subsystem.
//!
//! # Data Flow
//! ```text
//! Environment variable (mnemonic)
//!     → wallet.rs (key derivation, signing)
//!     → transaction.rs (assemble, RLP encode)
//!     → rpc.rs (JSON-RPC calls to the node)
//! ```
//!
//! # Security Constraints
//! - Key material ONLY from environment variables
//! - Never log the mnemonic or private key

pub mod rpc;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use rpc::RpcClient;
pub use types::{ChainError, ChainResult};
pub use wallet::FaucetWallet;
