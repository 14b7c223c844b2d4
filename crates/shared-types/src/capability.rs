//! # Capability Port
//!
//! The seam between the access registry (which grants capabilities) and the
//! wrapped token ledger (which checks them before `mint` / `burn`).
//!
//! Tokens receive an `Arc<dyn CapabilityProvider>` at construction; there is
//! no global registry.

use crate::entities::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A permission that can be granted to an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// May mint wrapped tokens outside the wrap path.
    Minter,
    /// May burn its own wrapped tokens outside the unwrap path.
    Burner,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minter => write!(f, "minter"),
            Self::Burner => write!(f, "burner"),
        }
    }
}

/// Read-only capability lookups.
pub trait CapabilityProvider: Send + Sync {
    /// True if `account` currently holds the minter capability.
    fn is_minter(&self, account: Address) -> bool;

    /// True if `account` currently holds the burner capability.
    fn is_burner(&self, account: Address) -> bool;

    /// Dispatches on `capability`.
    fn has_capability(&self, account: Address, capability: Capability) -> bool {
        match capability {
            Capability::Minter => self.is_minter(account),
            Capability::Burner => self.is_burner(account),
        }
    }
}
