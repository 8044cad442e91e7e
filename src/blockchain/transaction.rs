//! Legacy transaction assembly and RLP wire encoding.
//!
//! # Responsibilities
//! - Assemble the six-field legacy transaction payload
//! - Produce the canonical RLP encoding used for both signing and broadcast
//! - Build ERC-20 `transfer` calldata for token funding
//!
//! The unsigned encoding is the RLP list
//! `[nonce, gasPrice, gasLimit, to, value, data]`; the signed encoding
//! appends `v, r, s` to the same list. Integers are minimal big-endian
//! byte strings (zero encodes as the empty string).

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use alloy_rlp::{Decodable, Encodable, Header};

/// 4-byte selector of the ERC-20 `transfer(address,uint256)` function.
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// An unsigned legacy transaction, consumed immediately by the signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTx {
    pub nonce: u64,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub to: Address,
    pub value: U256,
    pub input: Bytes,
}

impl UnsignedTx {
    fn fields_length(&self) -> usize {
        self.nonce.length()
            + self.gas_price.length()
            + self.gas_limit.length()
            + self.to.length()
            + self.value.length()
            + self.input.length()
    }

    fn encode_fields(&self, out: &mut Vec<u8>) {
        self.nonce.encode(out);
        self.gas_price.encode(out);
        self.gas_limit.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.input.encode(out);
    }

    /// RLP encoding of the six unsigned fields.
    pub fn rlp_unsigned(&self) -> Vec<u8> {
        let mut out = Vec::new();
        Header {
            list: true,
            payload_length: self.fields_length(),
        }
        .encode(&mut out);
        self.encode_fields(&mut out);
        out
    }

    /// keccak256 of the unsigned encoding; this is what gets signed.
    pub fn signing_hash(&self) -> B256 {
        keccak256(self.rlp_unsigned())
    }
}

/// A signed legacy transaction: the six fields plus `(v, r, s)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTx {
    pub tx: UnsignedTx,
    pub v: u64,
    pub r: U256,
    pub s: U256,
}

impl SignedTx {
    /// RLP encoding of `[nonce, gasPrice, gasLimit, to, value, data, v, r, s]`.
    pub fn rlp_signed(&self) -> Vec<u8> {
        let payload_length =
            self.tx.fields_length() + self.v.length() + self.r.length() + self.s.length();

        let mut out = Vec::new();
        Header {
            list: true,
            payload_length,
        }
        .encode(&mut out);
        self.tx.encode_fields(&mut out);
        self.v.encode(&mut out);
        self.r.encode(&mut out);
        self.s.encode(&mut out);
        out
    }

    /// `0x`-prefixed hex of the signed encoding, as `eth_sendRawTransaction`
    /// expects it.
    pub fn raw_hex(&self) -> String {
        format!("0x{}", alloy::hex::encode(self.rlp_signed()))
    }
}

/// Decode an unsigned transaction from its RLP encoding.
pub fn decode_unsigned(mut buf: &[u8]) -> alloy_rlp::Result<UnsignedTx> {
    let header = Header::decode(&mut buf)?;
    if !header.list {
        return Err(alloy_rlp::Error::UnexpectedString);
    }
    Ok(UnsignedTx {
        nonce: u64::decode(&mut buf)?,
        gas_price: u128::decode(&mut buf)?,
        gas_limit: u64::decode(&mut buf)?,
        to: Address::decode(&mut buf)?,
        value: U256::decode(&mut buf)?,
        input: Bytes::decode(&mut buf)?,
    })
}

/// Build the calldata for `transfer(recipient, amount)`: the selector,
/// then the recipient and amount each left-padded to 32 bytes.
pub fn transfer_calldata(recipient: Address, amount: U256) -> Bytes {
    let mut data = Vec::with_capacity(4 + 32 + 32);
    data.extend_from_slice(&TRANSFER_SELECTOR);
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(recipient.as_slice());
    data.extend_from_slice(&amount.to_be_bytes::<32>());
    Bytes::from(data)
}
