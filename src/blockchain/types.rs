//! Chain-specific types and error definitions.

use thiserror::Error;

/// Errors that can occur while talking to the chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The JSON-RPC response carried no result, or carried an error object.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Network, DNS, or TLS failure reaching the node.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid mnemonic, derivation failure, or signing failure.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// An RPC quantity that is neither hex nor decimal.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;
