//! # ABI Word Encoding
//!
//! Minimal `abi.encode` for static types. Every value occupies one
//! 32-byte big-endian word; addresses are left-padded with zeros.
//!
//! Only what the permit digest and the domain separator need is supported:
//! `bytes32`, `address`, `uint256`.

use crate::crypto::keccak256;
use crate::entities::{Address, Hash, U256};

/// A single 32-byte ABI word.
pub type Word = [u8; 32];

/// Encodes an address as a left-padded word.
#[must_use]
pub fn address_word(address: &Address) -> Word {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_bytes());
    word
}

/// Encodes a `uint256` as a big-endian word.
#[must_use]
pub fn uint_word(value: U256) -> Word {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// Builder for `abi.encode(...)` over static types.
#[derive(Debug, Default, Clone)]
pub struct AbiEncoder {
    buf: Vec<u8>,
}

impl AbiEncoder {
    /// Creates an empty encoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `bytes32` value.
    #[must_use]
    pub fn hash(mut self, value: &Hash) -> Self {
        self.buf.extend_from_slice(value.as_bytes());
        self
    }

    /// Appends an `address` value.
    #[must_use]
    pub fn address(mut self, value: &Address) -> Self {
        self.buf.extend_from_slice(&address_word(value));
        self
    }

    /// Appends a `uint256` value.
    #[must_use]
    pub fn uint(mut self, value: U256) -> Self {
        self.buf.extend_from_slice(&uint_word(value));
        self
    }

    /// Number of encoded bytes so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been encoded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the encoded bytes.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// `keccak256(abi.encode(...))`.
    #[must_use]
    pub fn keccak(self) -> Hash {
        keccak256(&self.buf)
    }
}
