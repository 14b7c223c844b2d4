//! # Error Types
//!
//! All error types for the wrapped token ledger.
//!
//! Every error is a terminal rejection of a single operation: the ledger
//! rolls back everything the operation touched before the error reaches the
//! caller.

use shared_types::{Address, Capability, U256};
use std::fmt;
use thiserror::Error;

// =============================================================================
// TOKEN ERRORS
// =============================================================================

/// Errors returned by wrapped token operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Caller lacks the capability the operation requires.
    #[error("unauthorized: {caller:?} lacks the {capability} capability")]
    Unauthorized {
        caller: Address,
        capability: Capability,
    },

    /// Balance is lower than the amount being moved or burned.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: U256, available: U256 },

    /// Allowance is lower than the amount being spent.
    #[error("insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance { required: U256, available: U256 },

    /// The underlying token rejected a pull or push (revert or `false`).
    #[error("underlying {operation} failed: {reason}")]
    TransferFailed {
        operation: UnderlyingOperation,
        reason: String,
    },

    /// Permit submitted after its deadline.
    #[error("permit expired: deadline {deadline} is before {now}")]
    Expired { deadline: U256, now: u64 },

    /// Permit signature did not recover to the owner.
    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    /// A credit would exceed `U256::MAX`.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Which underlying call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnderlyingOperation {
    /// `transferFrom(caller, token, amount)` during wrap.
    Pull,
    /// `transfer(recipient, amount)` during unwrap.
    Push,
}

impl fmt::Display for UnderlyingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pull => write!(f, "transferFrom"),
            Self::Push => write!(f, "transfer"),
        }
    }
}

// =============================================================================
// SIGNATURE ERRORS
// =============================================================================

/// Reasons a permit signature is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// `v` is not 27 or 28.
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// `r` / `s` do not form a valid secp256k1 signature.
    #[error("malformed signature")]
    InvalidFormat,

    /// `s` lies in the upper half of the curve order (EIP-2).
    #[error("malleable signature: s is not in the lower half order")]
    MalleableSignature,

    /// Public key recovery failed.
    #[error("public key recovery failed")]
    RecoveryFailed,

    /// The permit owner is the zero address.
    #[error("owner is the zero address")]
    ZeroOwner,

    /// Recovered signer differs from the permit owner.
    #[error("signer mismatch: expected {expected:?}, recovered {actual:?}")]
    SignerMismatch { expected: Address, actual: Address },

    /// Signing key material is invalid or signing failed.
    #[error("signing failed")]
    SigningFailed,
}

// =============================================================================
// UNDERLYING TOKEN ERRORS
// =============================================================================

/// Error raised by an underlying token implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnderlyingError {
    /// The call reverted.
    #[error("reverted: {0}")]
    Reverted(String),
}

// =============================================================================
// TESTS
// =============================================================================
