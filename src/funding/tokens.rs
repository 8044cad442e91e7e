//! The fixed token table.

use alloy::primitives::{Address, U256};

use crate::blockchain::types::{ChainError, ChainResult};
use crate::config::TokenConfig;

/// One fundable token: contract address and fixed transfer amount in the
/// token's smallest unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub contract: Address,
    pub amount: U256,
}

/// Ordered, read-only token table built once at startup.
///
/// Funding requests address entries by position.
#[derive(Debug, Clone)]
pub struct TokenTable {
    entries: Vec<TokenDescriptor>,
}

impl TokenTable {
    pub fn new(entries: Vec<TokenDescriptor>) -> Self {
        Self { entries }
    }

    /// Build the table from configuration. Amounts are decimal strings;
    /// config validation has already checked them, so a parse failure here
    /// means the table bypassed validation.
    pub fn from_config(tokens: &[TokenConfig]) -> ChainResult<Self> {
        let entries = tokens
            .iter()
            .map(|token| {
                let amount = token
                    .amount
                    .parse::<U256>()
                    .map_err(|_| ChainError::InvalidQuantity(token.amount.clone()))?;
                Ok(TokenDescriptor {
                    contract: token.contract,
                    amount,
                })
            })
            .collect::<ChainResult<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn get(&self, index: usize) -> Option<&TokenDescriptor> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
