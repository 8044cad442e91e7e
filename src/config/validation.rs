//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (gas settings nonzero, amounts parse)
//! - Check endpoint URLs actually parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FaucetConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::U256;
use thiserror::Error;
use url::Url;

use crate::config::schema::FaucetConfig;

/// A single semantic configuration problem.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("node.url is not a valid URL: {0}")]
    NodeUrl(String),

    #[error("explorer.base_url is not a valid URL: {0}")]
    ExplorerUrl(String),

    #[error("funding.eth_gas_limit must be nonzero")]
    ZeroGasLimit,

    #[error("funding.gas_price_wei must be nonzero")]
    ZeroGasPrice,

    #[error("tokens[{index}].amount is not a non-negative integer: {value}")]
    TokenAmount { index: usize, value: String },

    #[error("tokens must contain at least one entry")]
    NoTokens,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &FaucetConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.node.url.parse::<Url>().is_err() {
        errors.push(ValidationError::NodeUrl(config.node.url.clone()));
    }
    if config.explorer.base_url.parse::<Url>().is_err() {
        errors.push(ValidationError::ExplorerUrl(config.explorer.base_url.clone()));
    }
    if config.funding.eth_gas_limit == 0 {
        errors.push(ValidationError::ZeroGasLimit);
    }
    if config.funding.gas_price_wei == 0 {
        errors.push(ValidationError::ZeroGasPrice);
    }
    if config.tokens.is_empty() {
        errors.push(ValidationError::NoTokens);
    }
    for (index, token) in config.tokens.iter().enumerate() {
        if token.amount.parse::<U256>().is_err() {
            errors.push(ValidationError::TokenAmount {
                index,
                value: token.amount.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
