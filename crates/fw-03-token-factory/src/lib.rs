//! # FW-03 Token Factory - Deterministic Wrapper Deployment
//!
//! **Component ID:** 3
//! **Dependencies:** `fw-02-wrapped-token` (construction logic), the access
//! registry through `CapabilityProvider`
//!
//! ## Purpose
//!
//! Deploys exactly one wrapped token per underlying token. The wrapper's
//! address is derived CREATE2-style from the factory address and the
//! underlying address, so it can be predicted before deployment.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | One wrapper per underlying | `factory.rs` - `create_token()` early return |
//! | INVARIANT-2 | Mapping is append-only | `factory.rs` - no removal or overwrite path exists |
//! | INVARIANT-3 | Address is a pure function of `(factory, underlying)` | `domain/address.rs` - `compute_wrapped_token_address()` |
//!
//! ## Usage Example
//!
//! ```
//! use fw_03_token_factory::prelude::*;
//! use fw_02_wrapped_token::adapters::InMemoryErc20;
//! use std::sync::Arc;
//!
//! struct NoGrants;
//! impl CapabilityProvider for NoGrants {
//!     fn is_minter(&self, _: Address) -> bool { false }
//!     fn is_burner(&self, _: Address) -> bool { false }
//! }
//!
//! let underlying = Address::repeat_byte(0x11);
//! let directory = Arc::new(InMemoryTokenDirectory::new());
//! directory.register(Arc::new(InMemoryErc20::new(underlying, "Test Token", "TT")));
//!
//! let mut factory = TokenFactory::new(
//!     Address::repeat_byte(0xfa),
//!     Arc::new(NoGrants),
//!     directory,
//!     FactoryConfig::default(),
//! );
//!
//! let predicted = factory.predict_address(underlying);
//! assert_eq!(factory.create_token(underlying).unwrap(), predicted);
//! assert_eq!(factory.create_token(underlying).unwrap(), predicted);
//! assert_eq!(factory.all_wrapped_tokens_length(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod factory;
pub mod ports;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::InMemoryTokenDirectory;
    pub use crate::config::FactoryConfig;
    pub use crate::domain::address::{
        compute_wrapped_token_address, WRAPPED_TOKEN_INIT_CODE_HASH,
    };
    pub use crate::errors::FactoryError;
    pub use crate::events::FactoryEvent;
    pub use crate::factory::TokenFactory;
    pub use crate::ports::{CapabilityProvider, TokenDirectory};
    pub use shared_types::Address;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Component name.
pub const COMPONENT_NAME: &str = "Token Factory";
