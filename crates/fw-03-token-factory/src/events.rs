//! # Factory Events

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Emitted by the factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactoryEvent {
    /// A wrapper for `underlying` was deployed at `wrapped`.
    WrappedTokenCreated {
        /// Token being wrapped.
        underlying: Address,
        /// Newly deployed wrapped token.
        wrapped: Address,
        /// Position in `all_wrapped_tokens`.
        index: usize,
    },
}
