//! # Permit Flows
//!
//! Off-chain signed allowances, the replay guard and the domain separator
//! computed independently from the raw EIP-712 layout.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ether, signed_permit, World, CHAIN_ID, SPENDER, UNDERLYING_NAME};
    use fw_02_wrapped_token::domain::{PermitMessage, PermitRequest, PermitSigner, PERMIT_TYPE};
    use fw_02_wrapped_token::errors::{SignatureError, TokenError};
    use fw_02_wrapped_token::events::TokenEvent;
    use k256::ecdsa::SigningKey;
    use sha3::{Digest, Keccak256};
    use shared_types::{Address, Hash, U256};

    const NOW: u64 = 1_700_000_000;

    fn keccak(data: &[u8]) -> [u8; 32] {
        Keccak256::digest(data).into()
    }

    fn word_from_u64(value: u64) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        word
    }

    fn word_from_address(address: &Address) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(address.as_bytes());
        word
    }

    #[test]
    fn test_permit_typehash_is_hash_of_type_string() {
        let mut world = World::new();
        assert_eq!(
            world.token().permit_typehash(),
            Hash::new(keccak(PERMIT_TYPE.as_bytes()))
        );
        assert_eq!(
            hex::encode(keccak(PERMIT_TYPE.as_bytes())),
            "6e71edae12b1b97f4d1f60370fef10105fa2faae0126114a169c64845d6126c9"
        );
    }

    #[test]
    fn test_domain_separator_matches_independent_computation() {
        let mut world = World::new();
        let wrapped = world.wrapped;

        let mut encoded = Vec::with_capacity(160);
        encoded.extend_from_slice(&keccak(
            b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)",
        ));
        encoded.extend_from_slice(&keccak(UNDERLYING_NAME.as_bytes()));
        encoded.extend_from_slice(&keccak(b"1"));
        encoded.extend_from_slice(&word_from_u64(CHAIN_ID));
        encoded.extend_from_slice(&word_from_address(&wrapped));

        assert_eq!(world.token().domain_separator(), Hash::new(keccak(&encoded)));
    }

    #[test]
    fn test_permit_grants_allowance_and_emits_approval() {
        let mut world = World::new();
        let owner = world.wallet.address();
        world.token().wrap(owner, ether(10)).unwrap();
        world.token().take_events();

        let request = signed_permit(world.view(), &world.wallet, SPENDER, ether(4), NOW + 60);
        world.token().permit(&request, NOW).unwrap();

        assert_eq!(world.token().allowance(owner, SPENDER), ether(4));
        assert_eq!(world.token().nonces(owner), U256::one());
        assert_eq!(
            world.token().take_events(),
            vec![TokenEvent::Approval {
                owner,
                spender: SPENDER,
                amount: ether(4)
            }]
        );

        world
            .token()
            .transfer_from(SPENDER, owner, SPENDER, ether(3))
            .unwrap();
        assert_eq!(world.token().allowance(owner, SPENDER), ether(1));
        assert_eq!(world.token().balance_of(SPENDER), ether(3));
    }

    #[test]
    fn test_permit_accepted_at_deadline() {
        let mut world = World::new();
        let request = signed_permit(world.view(), &world.wallet, SPENDER, ether(1), NOW);
        world.token().permit(&request, NOW).unwrap();
    }

    #[test]
    fn test_consumed_permit_cannot_be_replayed() {
        let mut world = World::new();
        let owner = world.wallet.address();
        let request = signed_permit(world.view(), &world.wallet, SPENDER, ether(4), NOW + 60);

        world.token().permit(&request, NOW).unwrap();
        world.token().approve(owner, SPENDER, U256::zero());

        let err = world.token().permit(&request, NOW).unwrap_err();
        assert!(matches!(err, TokenError::InvalidSignature(_)));
        assert_eq!(world.token().allowance(owner, SPENDER), U256::zero());
        assert_eq!(world.token().nonces(owner), U256::one());
    }

    #[test]
    fn test_expired_permit_rejected_even_when_signed() {
        let mut world = World::new();
        let owner = world.wallet.address();
        let request = signed_permit(world.view(), &world.wallet, SPENDER, ether(1), NOW - 1);

        let err = world.token().permit(&request, NOW).unwrap_err();
        assert_eq!(
            err,
            TokenError::Expired {
                deadline: U256::from(NOW - 1),
                now: NOW
            }
        );
        assert_eq!(world.token().nonces(owner), U256::zero());
    }

    #[test]
    fn test_signature_over_wrapped_name_domain_rejected() {
        let mut world = World::new();
        let owner = world.wallet.address();
        let wrapped = world.wrapped;
        let wrapped_name = world.token().name().to_string();

        let message = PermitMessage {
            owner,
            spender: SPENDER,
            value: ether(1),
            nonce: U256::zero(),
            deadline: U256::from(NOW + 60),
        };
        let wrong_domain =
            fw_02_wrapped_token::domain::domain_separator(&wrapped_name, CHAIN_ID, &wrapped);
        let signature = world.wallet.sign_permit(&wrong_domain, &message).unwrap();

        let err = world
            .token()
            .permit(
                &PermitRequest {
                    owner,
                    spender: SPENDER,
                    value: message.value,
                    deadline: message.deadline,
                    signature,
                },
                NOW,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            TokenError::InvalidSignature(SignatureError::SignerMismatch { .. })
        ));
    }

    #[test]
    fn test_permit_signed_by_other_key_rejected() {
        let mut world = World::new();
        let owner = world.wallet.address();
        let intruder = PermitSigner::new(SigningKey::random(&mut rand::thread_rng()));

        // the intruder signs exactly the message the token will check
        let message = PermitMessage {
            owner,
            spender: SPENDER,
            value: ether(1),
            nonce: world.view().nonces(owner),
            deadline: U256::from(NOW + 60),
        };
        let signature = intruder
            .sign_permit(&world.view().domain_separator(), &message)
            .unwrap();
        let request = PermitRequest {
            owner,
            spender: message.spender,
            value: message.value,
            deadline: message.deadline,
            signature,
        };

        let err = world.token().permit(&request, NOW).unwrap_err();
        assert_eq!(
            err,
            TokenError::InvalidSignature(SignatureError::SignerMismatch {
                expected: owner,
                actual: intruder.address()
            })
        );
        assert_eq!(world.token().allowance(owner, SPENDER), U256::zero());
        assert_eq!(world.token().nonces(owner), U256::zero());
    }

    #[test]
    fn test_zero_based_recovery_id_rejected() {
        let mut world = World::new();
        let owner = world.wallet.address();
        let mut request = signed_permit(world.view(), &world.wallet, SPENDER, ether(1), NOW + 60);
        let v = request.signature.v;
        request.signature.v = v - 27;

        let err = world.token().permit(&request, NOW).unwrap_err();
        assert_eq!(
            err,
            TokenError::InvalidSignature(SignatureError::InvalidRecoveryId(v - 27))
        );
        assert_eq!(world.token().allowance(owner, SPENDER), U256::zero());
    }

    #[test]
    fn test_permit_for_zero_owner_rejected() {
        let mut world = World::new();
        let mut request = signed_permit(world.view(), &world.wallet, SPENDER, ether(1), NOW + 60);
        request.owner = Address::ZERO;

        let err = world.token().permit(&request, NOW).unwrap_err();
        assert!(matches!(err, TokenError::InvalidSignature(_)));
    }
}
