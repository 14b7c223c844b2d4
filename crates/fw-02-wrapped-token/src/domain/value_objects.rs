//! # Value Objects
//!
//! Immutable domain primitives for the wrapped token ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

pub use shared_types::{Address, Hash, U256};

/// Decimals of every wrapped token, regardless of the underlying.
pub const DECIMALS: u8 = 18;

/// Prefix prepended to the underlying token's name.
pub const NAME_PREFIX: &str = "Few Wrapped ";

/// Prefix prepended to the underlying token's symbol.
pub const SYMBOL_PREFIX: &str = "fw";

/// Allowance value that `transfer_from` never decrements.
pub const INFINITE_ALLOWANCE: U256 = U256::MAX;

// =============================================================================
// TOKEN METADATA
// =============================================================================

/// Name, symbol and decimals, fixed at deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// `"Few Wrapped " + underlying.name()`.
    pub name: String,
    /// `"fw" + underlying.symbol()`.
    pub symbol: String,
    /// Always 18.
    pub decimals: u8,
}

impl TokenMetadata {
    /// Derives wrapped metadata from the underlying token's name and symbol.
    #[must_use]
    pub fn wrapping(underlying_name: &str, underlying_symbol: &str) -> Self {
        Self {
            name: format!("{NAME_PREFIX}{underlying_name}"),
            symbol: format!("{SYMBOL_PREFIX}{underlying_symbol}"),
            decimals: DECIMALS,
        }
    }
}

// =============================================================================
// ECDSA SIGNATURE
// =============================================================================

/// A secp256k1 signature in Ethereum `(v, r, s)` form.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// Recovery id in 27/28 form.
    pub v: u8,
    /// R component.
    pub r: [u8; 32],
    /// S component.
    pub s: [u8; 32],
}

impl EcdsaSignature {
    /// Creates a signature from its components.
    #[must_use]
    pub const fn new(v: u8, r: [u8; 32], s: [u8; 32]) -> Self {
        Self { v, r, s }
    }

    /// `r ‖ s` as a 64-byte compact signature.
    #[must_use]
    pub fn to_compact(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..].copy_from_slice(&self.s);
        bytes
    }
}

impl fmt::Debug for EcdsaSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcdsaSignature(v={}, r=0x", self.v)?;
        for byte in &self.r[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..., s=0x")?;
        for byte in &self.s[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...)")
    }
}

// =============================================================================
// PERMIT
// =============================================================================

/// The EIP-712 `Permit` struct that gets signed off-chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitMessage {
    /// Balance owner granting the allowance.
    pub owner: Address,
    /// Address receiving the allowance.
    pub spender: Address,
    /// Allowance to set.
    pub value: U256,
    /// Owner's permit nonce at signing time.
    pub nonce: U256,
    /// Last timestamp (inclusive) at which the permit is accepted.
    pub deadline: U256,
}

/// A submitted permit: the signed fields minus the nonce, plus the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitRequest {
    /// Balance owner granting the allowance.
    pub owner: Address,
    /// Address receiving the allowance.
    pub spender: Address,
    /// Allowance to set.
    pub value: U256,
    /// Last timestamp (inclusive) at which the permit is accepted.
    pub deadline: U256,
    /// Owner's signature over the permit digest.
    pub signature: EcdsaSignature,
}

impl PermitRequest {
    /// The message this request claims was signed, given the current nonce.
    #[must_use]
    pub fn message(&self, nonce: U256) -> PermitMessage {
        PermitMessage {
            owner: self.owner,
            spender: self.spender,
            value: self.value,
            nonce,
            deadline: self.deadline,
        }
    }
}
