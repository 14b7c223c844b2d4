//! # Access Registry
//!
//! Flat capability table shared by every wrapped token.
//!
//! The registry is handed out as `Arc<AccessRegistry>` (or as
//! `Arc<dyn CapabilityProvider>`), so mutations go through an internal
//! `RwLock` and every method takes `&self`. Each mutation runs entirely under
//! one write guard, which makes it atomic with respect to readers.

use crate::errors::RegistryError;
use crate::events::RegistryEvent;
use parking_lot::RwLock;
use shared_types::{Address, Capability, CapabilityProvider};
use std::collections::HashSet;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct RegistryState {
    owner: Option<Address>,
    minters: HashSet<Address>,
    burners: HashSet<Address>,
    events: Vec<RegistryEvent>,
}

impl RegistryState {
    fn ensure_owner(&self, caller: Address) -> Result<(), RegistryError> {
        match self.owner {
            Some(owner) if owner == caller => Ok(()),
            _ => Err(RegistryError::Unauthorized { caller }),
        }
    }

    fn holders_mut(&mut self, capability: Capability) -> &mut HashSet<Address> {
        match capability {
            Capability::Minter => &mut self.minters,
            Capability::Burner => &mut self.burners,
        }
    }
}

/// The minter/burner capability registry.
#[derive(Debug)]
pub struct AccessRegistry {
    address: Address,
    state: RwLock<RegistryState>,
}

impl AccessRegistry {
    /// Creates an uninitialised registry deployed at `address`.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// The registry's own address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Current owner, `None` before `init`.
    #[must_use]
    pub fn owner(&self) -> Option<Address> {
        self.state.read().owner
    }

    /// One-time setup; makes `caller` the owner.
    ///
    /// # Errors
    ///
    /// `AlreadyInitialized` on every call after the first.
    pub fn init(&self, caller: Address) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        if let Some(owner) = state.owner {
            warn!(registry = %self.address, caller = %caller, "Rejected second init");
            return Err(RegistryError::AlreadyInitialized { owner });
        }

        state.owner = Some(caller);
        state.events.push(RegistryEvent::Initialized { owner: caller });
        info!(registry = %self.address, owner = %caller, "Access registry initialized");
        Ok(())
    }

    /// Grants the minter capability. Granting twice is a no-op.
    ///
    /// # Errors
    ///
    /// `Unauthorized` unless `caller` is the owner.
    pub fn grant_minter(&self, caller: Address, account: Address) -> Result<(), RegistryError> {
        self.set_capability(caller, account, Capability::Minter, true)
    }

    /// Grants the burner capability. Granting twice is a no-op.
    ///
    /// # Errors
    ///
    /// `Unauthorized` unless `caller` is the owner.
    pub fn grant_burner(&self, caller: Address, account: Address) -> Result<(), RegistryError> {
        self.set_capability(caller, account, Capability::Burner, true)
    }

    /// Revokes the minter capability. Revoking an absent grant is a no-op.
    ///
    /// # Errors
    ///
    /// `Unauthorized` unless `caller` is the owner.
    pub fn revoke_minter(&self, caller: Address, account: Address) -> Result<(), RegistryError> {
        self.set_capability(caller, account, Capability::Minter, false)
    }

    /// Revokes the burner capability. Revoking an absent grant is a no-op.
    ///
    /// # Errors
    ///
    /// `Unauthorized` unless `caller` is the owner.
    pub fn revoke_burner(&self, caller: Address, account: Address) -> Result<(), RegistryError> {
        self.set_capability(caller, account, Capability::Burner, false)
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.state.read().events.clone()
    }

    /// Drains the recorded events.
    pub fn take_events(&self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.state.write().events)
    }

    fn set_capability(
        &self,
        caller: Address,
        account: Address,
        capability: Capability,
        granted: bool,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        if let Err(err) = state.ensure_owner(caller) {
            warn!(
                registry = %self.address,
                caller = %caller,
                %capability,
                granted,
                "Rejected capability change from non-owner"
            );
            return Err(err);
        }

        let holders = state.holders_mut(capability);
        let changed = if granted {
            holders.insert(account)
        } else {
            holders.remove(&account)
        };

        if !changed {
            debug!(account = %account, %capability, granted, "Capability unchanged");
            return Ok(());
        }

        let event = if granted {
            RegistryEvent::CapabilityGranted { account, capability }
        } else {
            RegistryEvent::CapabilityRevoked { account, capability }
        };
        state.events.push(event);
        info!(account = %account, %capability, granted, "Capability updated");
        Ok(())
    }
}

impl CapabilityProvider for AccessRegistry {
    fn is_minter(&self, account: Address) -> bool {
        self.state.read().minters.contains(&account)
    }

    fn is_burner(&self, account: Address) -> bool {
        self.state.read().burners.contains(&account)
    }
}

// =============================================================================
// TESTS
// =============================================================================
