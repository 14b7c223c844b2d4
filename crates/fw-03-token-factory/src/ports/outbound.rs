//! # Driven Ports (SPI - Outbound)

use fw_02_wrapped_token::ports::UnderlyingToken;
use shared_types::Address;
use std::sync::Arc;

pub use shared_types::CapabilityProvider;

/// Resolves token addresses to callable token handles.
///
/// Stands in for "the code deployed at this address": the factory can only
/// wrap tokens the directory knows about.
///
/// Wrappers deployed by the factory are owned by it and never appear here,
/// so a wrapped token cannot itself be wrapped (`FactoryError::NestedWrapper`).
pub trait TokenDirectory: Send + Sync {
    /// The token at `address`, if any.
    fn resolve(&self, address: Address) -> Option<Arc<dyn UnderlyingToken>>;
}
