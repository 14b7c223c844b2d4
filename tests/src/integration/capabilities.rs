//! # Capability-Gated Supply
//!
//! Minting and burning through the shared access registry.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ether, World, SPENDER};
    use fw_01_access_registry::errors::RegistryError;
    use fw_02_wrapped_token::errors::TokenError;
    use fw_02_wrapped_token::events::TokenEvent;
    use shared_types::{Address, Capability, CapabilityProvider, U256};

    const OPERATOR: Address = Address::repeat_byte(0x0b);

    #[test]
    fn test_mint_requires_minter_capability() {
        let mut world = World::new();

        let err = world.token().mint(OPERATOR, SPENDER, ether(1)).unwrap_err();
        assert_eq!(
            err,
            TokenError::Unauthorized {
                caller: OPERATOR,
                capability: Capability::Minter
            }
        );

        let owner = world.deployer();
        world.platform.registry().grant_minter(owner, OPERATOR).unwrap();
        world.token().mint(OPERATOR, SPENDER, ether(1)).unwrap();

        assert_eq!(world.token().balance_of(SPENDER), ether(1));
        assert_eq!(world.token().total_supply(), ether(1));
        // minted supply is not backed by underlying
        assert_eq!(world.token().backing(), U256::zero());
        assert!(world.token().check_invariants().is_valid());
    }

    #[test]
    fn test_burn_requires_burner_capability() {
        let mut world = World::new();
        let owner = world.deployer();
        let registry = world.platform.registry().clone();
        registry.grant_minter(owner, OPERATOR).unwrap();
        world.token().mint(OPERATOR, OPERATOR, ether(3)).unwrap();

        let err = world.token().burn(OPERATOR, ether(1)).unwrap_err();
        assert_eq!(
            err,
            TokenError::Unauthorized {
                caller: OPERATOR,
                capability: Capability::Burner
            }
        );

        registry.grant_burner(owner, OPERATOR).unwrap();
        world.token().take_events();
        world.token().burn(OPERATOR, ether(1)).unwrap();

        assert_eq!(world.token().balance_of(OPERATOR), ether(2));
        assert_eq!(world.token().total_supply(), ether(2));
        let names: Vec<_> = world
            .token()
            .take_events()
            .iter()
            .map(TokenEvent::name)
            .collect();
        assert_eq!(names, vec!["Burn", "Transfer"]);
    }

    #[test]
    fn test_revoked_minter_loses_access() {
        let mut world = World::new();
        let owner = world.deployer();
        let registry = world.platform.registry().clone();

        registry.grant_minter(owner, OPERATOR).unwrap();
        world.token().mint(OPERATOR, OPERATOR, ether(1)).unwrap();

        registry.revoke_minter(owner, OPERATOR).unwrap();
        assert!(!registry.has_capability(OPERATOR, Capability::Minter));
        assert!(world.token().mint(OPERATOR, OPERATOR, ether(1)).is_err());
        assert_eq!(world.token().total_supply(), ether(1));
    }

    #[test]
    fn test_burner_cannot_burn_beyond_balance() {
        let mut world = World::new();
        let owner = world.deployer();
        world
            .platform
            .registry()
            .grant_burner(owner, OPERATOR)
            .unwrap();

        let registry = world.platform.registry().clone();
        assert!(registry.has_capability(OPERATOR, Capability::Burner));
        assert!(!registry.has_capability(OPERATOR, Capability::Minter));

        let err = world.token().burn(OPERATOR, ether(1)).unwrap_err();
        assert_eq!(
            err,
            TokenError::InsufficientBalance {
                required: ether(1),
                available: U256::zero()
            }
        );
    }

    #[test]
    fn test_non_owner_cannot_grant() {
        let world = World::new();
        let registry = world.platform.registry();

        let err = registry.grant_minter(SPENDER, SPENDER).unwrap_err();
        assert_eq!(err, RegistryError::Unauthorized { caller: SPENDER });
        assert!(!registry.has_capability(SPENDER, Capability::Minter));
    }
}
