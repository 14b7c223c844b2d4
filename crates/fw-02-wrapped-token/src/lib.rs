//! # FW-02 Wrapped Token - 1:1 Backed ERC20 Ledger
//!
//! **Component ID:** 2
//! **Dependencies:** `shared-types`; the access registry through the
//! `CapabilityProvider` port
//!
//! ## Purpose
//!
//! Issues a wrapped ERC20 for one underlying token. Holders deposit the
//! underlying with `wrap` and redeem it with `unwrap`; addresses holding the
//! minter/burner capability may change supply outside that path. Allowances
//! can be granted off-chain through EIP-712 `permit` signatures.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | `total_supply == Σ balances` | `domain/invariants.rs` - `check_supply_invariant()` |
//! | INVARIANT-2 | Failed operations leave no trace | `domain/ledger.rs` - `Ledger::revert()` |
//! | INVARIANT-3 | Infinite allowance never decremented | `domain/ledger.rs` - `Ledger::spend_allowance()` |
//! | INVARIANT-4 | Nonce advances once per accepted permit | `token.rs` - `WrappedToken::permit()` |
//! | INVARIANT-5 | Ledger written before the underlying is called | `token.rs` - `WrappedToken::execute()` |
//!
//! ## Permit Domain
//!
//! | Field | Value |
//! |-------|-------|
//! | `name` | the **underlying** token's name |
//! | `version` | `"1"` |
//! | `chainId` | chain id given at deployment |
//! | `verifyingContract` | the wrapped token's address |
//!
//! ## Outbound Dependencies
//!
//! | Component | Trait | Purpose |
//! |-----------|-------|---------|
//! | Underlying ERC20 | `UnderlyingToken` | Hold deposits, read name/symbol |
//! | 1 (Access Registry) | `CapabilityProvider` | Gate `mint` / `burn` |
//!
//! ## Usage Example
//!
//! ```
//! use fw_02_wrapped_token::prelude::*;
//! use std::sync::Arc;
//!
//! struct NoGrants;
//! impl CapabilityProvider for NoGrants {
//!     fn is_minter(&self, _: Address) -> bool { false }
//!     fn is_burner(&self, _: Address) -> bool { false }
//! }
//!
//! let alice = Address::repeat_byte(0xa1);
//! let token_address = Address::repeat_byte(0x70);
//!
//! let dai = Arc::new(InMemoryErc20::new(Address::repeat_byte(0xda), "Dai", "DAI"));
//! dai.mint(alice, U256::from(100)).unwrap();
//! dai.approve(alice, token_address, U256::MAX);
//!
//! let mut token = WrappedToken::deploy(token_address, 1, dai.clone(), Arc::new(NoGrants));
//! token.wrap(alice, U256::from(40)).unwrap();
//!
//! assert_eq!(token.symbol(), "fwDAI");
//! assert_eq!(token.balance_of(alice), U256::from(40));
//! assert_eq!(dai.balance_of(token_address), U256::from(40));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod token;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Value objects
    pub use crate::domain::value_objects::{
        Address, EcdsaSignature, Hash, PermitMessage, PermitRequest, TokenMetadata, DECIMALS,
        INFINITE_ALLOWANCE, U256,
    };

    // Permit
    pub use crate::domain::permit::{
        domain_separator, permit_typehash, recover_signer, PermitSigner, PERMIT_TYPE,
    };

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, InvariantCheckResult, InvariantViolation,
    };

    // Ports and adapters
    pub use crate::adapters::erc20::{FailureMode, InMemoryErc20};
    pub use crate::ports::outbound::{CapabilityProvider, UnderlyingToken};

    // Errors and events
    pub use crate::errors::{SignatureError, TokenError, UnderlyingError, UnderlyingOperation};
    pub use crate::events::TokenEvent;

    // Token
    pub use crate::token::WrappedToken;
    pub use shared_types::Capability;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Component name.
pub const COMPONENT_NAME: &str = "Wrapped Token";
