//! # FW-01 Access Registry - Capability Table ("Core")
//!
//! **Component ID:** 1
//! **Dependencies:** `shared-types` only (leaf component)
//!
//! ## Purpose
//!
//! Tracks which addresses may mint and which may burn wrapped tokens. Every
//! wrapped token deployed by the factory holds a shared handle to the same
//! registry through the `CapabilityProvider` port.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Single initialisation | `registry.rs` - `AccessRegistry::init()` |
//! | INVARIANT-2 | Only the owner mutates grants | `registry.rs` - `ensure_owner()` |
//! | INVARIANT-3 | Grants never expire | no TTL is stored; only `revoke_*` clears a grant |
//!
//! ## Usage Example
//!
//! ```
//! use fw_01_access_registry::prelude::*;
//!
//! let deployer = Address::repeat_byte(1);
//! let minter = Address::repeat_byte(2);
//!
//! let registry = AccessRegistry::new(Address::repeat_byte(0xc0));
//! registry.init(deployer).unwrap();
//! registry.grant_minter(deployer, minter).unwrap();
//! assert!(registry.is_minter(minter));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod errors;
pub mod events;
pub mod registry;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::errors::RegistryError;
    pub use crate::events::RegistryEvent;
    pub use crate::registry::AccessRegistry;
    pub use shared_types::{Address, Capability, CapabilityProvider};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Component name.
pub const COMPONENT_NAME: &str = "Access Registry";
