//! # Factory Flows
//!
//! Deterministic deployment and the idempotent `create_token`, checked
//! against an address derivation written out by hand.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ether, World, CHAIN_ID, UNDERLYING, UNDERLYING_NAME};
    use fw_02_wrapped_token::adapters::InMemoryErc20;
    use fw_03_token_factory::adapters::InMemoryTokenDirectory;
    use fw_03_token_factory::config::FactoryConfig;
    use fw_03_token_factory::domain::WRAPPED_TOKEN_INIT_CODE;
    use fw_03_token_factory::errors::FactoryError;
    use fw_03_token_factory::events::FactoryEvent;
    use fw_03_token_factory::factory::TokenFactory;
    use fw_runtime::PlatformError;
    use sha3::{Digest, Keccak256};
    use shared_types::Address;
    use std::sync::Arc;

    fn keccak(data: &[u8]) -> [u8; 32] {
        Keccak256::digest(data).into()
    }

    fn create2_by_hand(factory: &Address, underlying: &Address) -> Address {
        let mut preimage = Vec::with_capacity(85);
        preimage.push(0xff);
        preimage.extend_from_slice(factory.as_bytes());
        preimage.extend_from_slice(&keccak(underlying.as_bytes()));
        preimage.extend_from_slice(&keccak(WRAPPED_TOKEN_INIT_CODE));
        Address::from_slice(&keccak(&preimage)[12..]).unwrap()
    }

    #[test]
    fn test_create_token_is_idempotent() {
        let mut world = World::new();

        let again = world.platform.create_token(UNDERLYING).unwrap();
        assert_eq!(again, world.wrapped);

        let factory = world.platform.factory();
        assert_eq!(factory.all_wrapped_tokens_length(), 1);
        assert_eq!(factory.all_wrapped_tokens(0), Some(world.wrapped));
        assert_eq!(factory.all_wrapped_tokens(1), None);
        assert_eq!(
            factory.events(),
            &[FactoryEvent::WrappedTokenCreated {
                underlying: UNDERLYING,
                wrapped: world.wrapped,
                index: 0
            }]
        );
    }

    #[test]
    fn test_repeat_create_keeps_token_state() {
        let mut world = World::new();
        let wallet = world.wallet.address();
        world.token().wrap(wallet, ether(5)).unwrap();

        world.platform.create_token(UNDERLYING).unwrap();
        assert_eq!(world.token().balance_of(wallet), ether(5));
    }

    #[test]
    fn test_deployed_address_matches_prediction() {
        let world = World::new();
        let factory_address = world.platform.config().factory_address;

        assert_eq!(
            world.platform.factory().predict_address(UNDERLYING),
            world.wrapped
        );
        assert_eq!(create2_by_hand(&factory_address, &UNDERLYING), world.wrapped);
        assert_eq!(
            world.platform.factory().get_wrapped_token(UNDERLYING),
            world.wrapped
        );
    }

    #[test]
    fn test_unknown_underlying_has_no_wrapper() {
        let mut world = World::new();
        let stranger = Address::repeat_byte(0x77);

        assert_eq!(
            world.platform.factory().get_wrapped_token(stranger),
            Address::ZERO
        );
        assert!(world.platform.create_token(stranger).is_err());
        assert_eq!(world.platform.factory().all_wrapped_tokens_length(), 1);
    }

    #[test]
    fn test_wrapped_token_cannot_be_wrapped_again() {
        let mut world = World::new();
        let wrapped = world.wrapped;

        assert_eq!(
            world.platform.create_token(wrapped).unwrap_err(),
            PlatformError::Factory(FactoryError::NestedWrapper(wrapped))
        );
        assert_eq!(world.platform.factory().all_wrapped_tokens_length(), 1);
    }

    #[test]
    fn test_factories_derive_distinct_addresses() {
        let world = World::new();
        let directory = Arc::new(InMemoryTokenDirectory::new());
        directory.register(world.underlying.clone());

        let other_address = Address::repeat_byte(0xfb);
        let mut other = TokenFactory::new(
            other_address,
            world.platform.registry().clone(),
            directory,
            FactoryConfig::with_chain_id(CHAIN_ID),
        );

        let wrapped = other.create_token(UNDERLYING).unwrap();
        assert_ne!(wrapped, world.wrapped);
        assert_eq!(wrapped, create2_by_hand(&other_address, &UNDERLYING));

        // the domain separator binds the wrapper address, so the two
        // deployments do not share permits
        let token = other.token(wrapped).unwrap();
        assert_eq!(token.name(), format!("Few Wrapped {UNDERLYING_NAME}"));
        assert_eq!(token.symbol(), "fwTT");
        assert_ne!(
            token.domain_separator(),
            world.view().domain_separator()
        );
    }

    #[test]
    fn test_wrappers_for_several_underlyings() {
        let mut world = World::new();
        let second = Address::repeat_byte(0x22);
        world
            .platform
            .register_underlying(Arc::new(InMemoryErc20::new(second, "Second", "SND")));

        let wrapped = world.platform.create_token(second).unwrap();

        let factory = world.platform.factory();
        assert_eq!(factory.all_wrapped_tokens_length(), 2);
        assert_eq!(factory.all_wrapped_tokens(1), Some(wrapped));
        assert_eq!(factory.token(wrapped).unwrap().symbol(), "fwSND");

        let report = serde_json::to_value(world.platform.report()).unwrap();
        assert_eq!(report["tokens"].as_array().map(Vec::len), Some(2));
        assert_eq!(report["tokens"][1]["symbol"], "fwSND");
    }

    #[test]
    fn test_zero_underlying_rejected() {
        let world = World::new();
        let directory = Arc::new(InMemoryTokenDirectory::new());
        let mut factory = TokenFactory::new(
            Address::repeat_byte(0xfc),
            world.platform.registry().clone(),
            directory,
            FactoryConfig::default(),
        );

        assert_eq!(
            factory.create_token(Address::ZERO).unwrap_err(),
            FactoryError::ZeroAddress
        );
        assert!(factory.events().is_empty());
    }
}
