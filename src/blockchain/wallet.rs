//! Key derivation and transaction signing.
//!
//! # Security
//! - The mnemonic is loaded ONLY from an environment variable
//! - Phrase and private key are never logged or serialized
//!
//! The wallet is derived once at startup and injected into the service as
//! an immutable value; a malformed phrase aborts startup since the service
//! cannot operate without a signing key.

use alloy::primitives::Address;
use alloy::signers::local::coins_bip39::English;
use alloy::signers::local::{MnemonicBuilder, PrivateKeySigner};
use alloy::signers::SignerSync;

use crate::blockchain::transaction::{SignedTx, UnsignedTx};
use crate::blockchain::types::{ChainError, ChainResult};

/// Environment variable holding the funding account mnemonic.
pub const MNEMONIC_ENV_VAR: &str = "FAUCET_MNEMONIC";

/// Fixed BIP-44 path of the funding account.
pub const DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// The faucet's single signing identity.
///
/// Read-only after construction; safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct FaucetWallet {
    signer: PrivateKeySigner,
}

impl FaucetWallet {
    /// Derive the keypair from a BIP-39 phrase at [`DERIVATION_PATH`].
    ///
    /// Deterministic: the same phrase always yields the same key and
    /// address.
    pub fn from_mnemonic(phrase: &str) -> ChainResult<Self> {
        let signer = MnemonicBuilder::<English>::default()
            .phrase(phrase)
            .derivation_path(DERIVATION_PATH)
            .map_err(|e| ChainError::Wallet(format!("invalid derivation path: {e}")))?
            .build()
            .map_err(|e| ChainError::Wallet(format!("mnemonic derivation failed: {e}")))?;

        tracing::info!(address = %signer.address(), "Funding wallet derived");

        Ok(Self { signer })
    }

    /// Load the wallet from the `FAUCET_MNEMONIC` environment variable.
    pub fn from_env() -> ChainResult<Self> {
        let phrase = std::env::var(MNEMONIC_ENV_VAR).map_err(|_| {
            ChainError::Wallet(format!("environment variable {MNEMONIC_ENV_VAR} not set"))
        })?;
        Self::from_mnemonic(&phrase)
    }

    /// The derived 20-byte sender address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign the transaction's RLP hash, appending `(v, r, s)` with the
    /// pre-EIP-155 recovery convention `v = 27 + y_parity`.
    ///
    /// RFC-6979 deterministic ECDSA: signing the same transaction twice
    /// yields byte-identical signatures.
    pub fn sign(&self, tx: &UnsignedTx) -> ChainResult<SignedTx> {
        let signature = self
            .signer
            .sign_hash_sync(&tx.signing_hash())
            .map_err(|e| ChainError::Wallet(format!("signing failed: {e}")))?;

        Ok(SignedTx {
            tx: tx.clone(),
            v: 27 + signature.v() as u64,
            r: signature.r(),
            s: signature.s(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Bytes, U256};

    // Standard development mnemonic (Anvil/Hardhat default account 0).
    const TEST_MNEMONIC: &str =
        "test test test test test test test test test test test junk";

    fn test_tx() -> UnsignedTx {
        UnsignedTx {
            nonce: 5,
            gas_price: 100_000_000,
            gas_limit: 30_000,
            to: Address::repeat_byte(0xaa),
            value: U256::from(50_000_000_000_000_000u64),
            input: Bytes::new(),
        }
    }

    #[test]
    fn test_known_derivation_vector() {
        let wallet = FaucetWallet::from_mnemonic(TEST_MNEMONIC).unwrap();
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let a = FaucetWallet::from_mnemonic(TEST_MNEMONIC).unwrap();
        let b = FaucetWallet::from_mnemonic(TEST_MNEMONIC).unwrap();
        assert_eq!(a.address(), b.address());
    }

    #[test]
    fn test_invalid_phrase_is_rejected() {
        let result = FaucetWallet::from_mnemonic("definitely not a bip39 phrase");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("wallet error"));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let wallet = FaucetWallet::from_mnemonic(TEST_MNEMONIC).unwrap();
        let tx = test_tx();

        let first = wallet.sign(&tx).unwrap();
        let second = wallet.sign(&tx).unwrap();
        assert_eq!(first.raw_hex(), second.raw_hex());
    }

    #[test]
    fn test_recovery_id_convention() {
        let wallet = FaucetWallet::from_mnemonic(TEST_MNEMONIC).unwrap();
        let signed = wallet.sign(&test_tx()).unwrap();
        assert!(signed.v == 27 || signed.v == 28);
        assert!(signed.r > U256::ZERO);
        assert!(signed.s > U256::ZERO);
    }
}
