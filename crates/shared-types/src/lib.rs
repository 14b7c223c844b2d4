//! # Shared Types Crate
//!
//! Primitives used by every crate of the wrapped-token platform.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address`, `Hash` and `U256` are defined once
//!   here so the registry, the factory and the token ledger agree on layout.
//! - **EVM-compatible encoding**: hashing and ABI word encoding reproduce the
//!   byte layout an off-chain client computes, so digests and predicted
//!   addresses match across implementations.
//! - **Ports live at the seam**: `CapabilityProvider` is defined here because
//!   the registry implements it and the token ledger consumes it.

pub mod abi;
pub mod capability;
pub mod crypto;
pub mod entities;
pub mod errors;

pub use abi::AbiEncoder;
pub use capability::{Capability, CapabilityProvider};
pub use crypto::keccak256;
pub use entities::*;
pub use errors::*;
