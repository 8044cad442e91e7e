//! Funding orchestration.
//!
//! # Responsibilities
//! - Fetch the sender's pending nonce
//! - Estimate gas for token transfers
//! - Build, sign, and broadcast transactions
//!
//! # Design Decisions
//! - The nonce is fetched fresh from the pending pool on every request and
//!   never cached; requests are not serialized against each other, so two
//!   concurrent requests can observe the same nonce and one broadcast will
//!   be rejected by the node. Inherited behavior, kept deliberately.
//! - No retry anywhere: a failed RPC call fails the whole request. Nothing
//!   is persisted, so there is no cleanup path either.

use alloy::primitives::{Address, Bytes, U256};
use serde_json::{json, Value};
use thiserror::Error;

use crate::blockchain::rpc::{parse_quantity, RpcClient};
use crate::blockchain::transaction::{transfer_calldata, UnsignedTx};
use crate::blockchain::types::ChainError;
use crate::blockchain::wallet::FaucetWallet;
use crate::config::FundingConfig;
use crate::funding::tokens::TokenTable;

/// Errors surfaced by funding operations.
#[derive(Debug, Error)]
pub enum FundingError {
    /// Token index outside the configured table.
    #[error("invalid token index {index} (table has {len} entries)")]
    InvalidTokenIndex { index: usize, len: usize },

    /// RPC, transport, or signing failure.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// The faucet core: one wallet, one node, one token table.
///
/// All fields are read-only after construction; the service is shared
/// across concurrent requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct FundingService {
    rpc: RpcClient,
    wallet: FaucetWallet,
    tokens: TokenTable,
    funding: FundingConfig,
}

impl FundingService {
    pub fn new(
        rpc: RpcClient,
        wallet: FaucetWallet,
        tokens: TokenTable,
        funding: FundingConfig,
    ) -> Self {
        Self {
            rpc,
            wallet,
            tokens,
            funding,
        }
    }

    /// The funding account's address.
    pub fn sender(&self) -> Address {
        self.wallet.address()
    }

    /// Number of configured tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Send the fixed ether amount to `to`. Returns the transaction hash.
    pub async fn fund_native(&self, to: Address) -> Result<String, FundingError> {
        let nonce = self.pending_nonce().await?;
        let tx = UnsignedTx {
            nonce,
            gas_price: self.funding.gas_price_wei,
            gas_limit: self.funding.eth_gas_limit,
            to,
            value: U256::from(self.funding.eth_amount_wei),
            input: Bytes::new(),
        };
        self.broadcast(&tx).await
    }

    /// Transfer the configured amount of token `index` to `to`. Returns
    /// the transaction hash.
    ///
    /// The transaction is addressed to the token contract with zero value;
    /// gas is estimated via RPC since token transfers have no fixed cost.
    pub async fn fund_token(&self, to: Address, index: usize) -> Result<String, FundingError> {
        let token = self
            .tokens
            .get(index)
            .ok_or(FundingError::InvalidTokenIndex {
                index,
                len: self.tokens.len(),
            })?;

        let input = transfer_calldata(to, token.amount);
        let nonce = self.pending_nonce().await?;
        let gas_limit = self
            .estimate_gas(token.contract, U256::ZERO, &input)
            .await?;

        let tx = UnsignedTx {
            nonce,
            gas_price: self.funding.gas_price_wei,
            gas_limit,
            to: token.contract,
            value: U256::ZERO,
            input,
        };
        self.broadcast(&tx).await
    }

    /// Next nonce from the node's pending pool.
    async fn pending_nonce(&self) -> Result<u64, ChainError> {
        let result = self
            .rpc
            .call(
                "eth_getTransactionCount",
                json!([self.wallet.address(), "pending"]),
            )
            .await?;
        parse_quantity(&result)
    }

    /// `eth_estimateGas` for a call from the funding account.
    async fn estimate_gas(
        &self,
        to: Address,
        value: U256,
        data: &Bytes,
    ) -> Result<u64, ChainError> {
        let value_hex = if value.is_zero() {
            "0x0".to_string()
        } else {
            format!("0x{value:x}")
        };
        let call = json!([{
            "from": self.wallet.address(),
            "to": to,
            "value": value_hex,
            "data": data,
        }]);
        let result = self.rpc.call("eth_estimateGas", call).await?;
        parse_quantity(&result)
    }

    /// Sign the transaction and submit it via `eth_sendRawTransaction`.
    async fn broadcast(&self, tx: &UnsignedTx) -> Result<String, FundingError> {
        let signed = self.wallet.sign(tx)?;
        let result = self
            .rpc
            .call("eth_sendRawTransaction", json!([signed.raw_hex()]))
            .await?;

        let hash = match result {
            Value::String(hash) => hash,
            other => return Err(ChainError::Rpc(format!("non-string hash: {other}")).into()),
        };

        tracing::info!(
            to = %tx.to,
            nonce = tx.nonce,
            gas_limit = tx.gas_limit,
            tx_hash = %hash,
            "Transaction broadcast"
        );
        Ok(hash)
    }
}
