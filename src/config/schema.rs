//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the faucet.
//! All types derive Serde traits for deserialization from config files.
//! The mnemonic is deliberately absent: it is read from the environment,
//! never from a file.

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Root configuration for the faucet.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FaucetConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// JSON-RPC node endpoint.
    pub node: NodeConfig,

    /// Block explorer used in response messages.
    pub explorer: ExplorerConfig,

    /// Fixed funding amounts and gas settings.
    pub funding: FundingConfig,

    /// Ordered token table, indexed by position in funding requests.
    pub tokens: Vec<TokenConfig>,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            node: NodeConfig::default(),
            explorer: ExplorerConfig::default(),
            funding: FundingConfig::default(),
            tokens: default_tokens(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// JSON-RPC node configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Node endpoint URL.
    pub url: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: "https://rinkeby.infura.io".to_string(),
        }
    }
}

/// Block explorer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Base URL; transaction links are `<base_url>/tx/<hash>`.
    pub base_url: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://rinkeby.etherscan.io".to_string(),
        }
    }
}

/// Fixed funding amounts and gas settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FundingConfig {
    /// Amount of ether sent per native funding request, in wei.
    pub eth_amount_wei: u128,

    /// Static gas price for every transaction, in wei.
    pub gas_price_wei: u128,

    /// Fixed gas limit for native transfers (token transfers are
    /// estimated via RPC instead).
    pub eth_gas_limit: u64,
}

impl Default for FundingConfig {
    fn default() -> Self {
        Self {
            // 0.05 ether
            eth_amount_wei: 50_000_000_000_000_000,
            gas_price_wei: 100_000_000,
            eth_gas_limit: 30_000,
        }
    }
}

/// One fundable token: contract address and transfer amount.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// ERC-20 contract address.
    pub contract: Address,

    /// Transfer amount in the token's smallest unit, as a decimal string
    /// (amounts for 18-decimal tokens overflow TOML integers).
    pub amount: String,
}

/// The three Rinkeby test tokens the original deployment funded.
fn default_tokens() -> Vec<TokenConfig> {
    vec![
        TokenConfig {
            contract: address!("975be7f72cea31fd83d0cb2a197f9136f38696b7"),
            amount: "1000000".to_string(),
        },
        TokenConfig {
            contract: address!("b3a4bc89d8517e0e2c9b66703d09d3029ffa1e6d"),
            amount: "100000000".to_string(),
        },
        TokenConfig {
            contract: address!("5f92161588c6178130ede8cbdc181acec66a9731"),
            amount: "100000000000000000000".to_string(),
        },
    ]
}
