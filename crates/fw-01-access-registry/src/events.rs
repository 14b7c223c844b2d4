//! # Registry Events
//!
//! Emitted once per effective state change. Idempotent grants and revokes
//! that change nothing emit nothing.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Capability};

/// Events recorded by the access registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// Registry initialised; `owner` may now grant and revoke.
    Initialized { owner: Address },
    /// `account` received `capability`.
    CapabilityGranted {
        account: Address,
        capability: Capability,
    },
    /// `account` lost `capability`.
    CapabilityRevoked {
        account: Address,
        capability: Capability,
    },
}
