//! # Domain Layer (Inner Hexagon)
//!
//! Pure ledger logic for a wrapped token.
//! NO I/O, NO locking, NO knowledge of the underlying token.
//!
//! - `ledger`: journaled balances, allowances, nonces and supply
//! - `permit`: EIP-712 hashing and signer recovery
//! - `invariants`: checks run after every committed operation

pub mod invariants;
pub mod ledger;
pub mod permit;
pub mod value_objects;

pub use invariants::*;
pub use ledger::*;
pub use permit::*;
pub use value_objects::*;
