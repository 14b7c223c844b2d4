//! # In-Memory Token Directory

use crate::ports::outbound::TokenDirectory;
use fw_02_wrapped_token::ports::UnderlyingToken;
use parking_lot::RwLock;
use shared_types::Address;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Directory backed by a map of registered tokens.
#[derive(Default)]
pub struct InMemoryTokenDirectory {
    tokens: RwLock<HashMap<Address, Arc<dyn UnderlyingToken>>>,
}

impl InMemoryTokenDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `token` resolvable at its own address, replacing any previous
    /// entry.
    pub fn register(&self, token: Arc<dyn UnderlyingToken>) {
        let address = token.address();
        debug!(token = %address, name = %token.name(), "Token registered");
        self.tokens.write().insert(address, token);
    }

    /// Number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.read().len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.read().is_empty()
    }
}

impl TokenDirectory for InMemoryTokenDirectory {
    fn resolve(&self, address: Address) -> Option<Arc<dyn UnderlyingToken>> {
        self.tokens.read().get(&address).cloned()
    }
}

impl std::fmt::Debug for InMemoryTokenDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTokenDirectory")
            .field("tokens", &self.len())
            .finish()
    }
}
