//! # Factory Configuration

use serde::{Deserialize, Serialize};

/// Settings applied to every token the factory deploys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Chain id committed into each token's permit domain separator.
    pub chain_id: u64,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self { chain_id: 1 }
    }
}

impl FactoryConfig {
    /// Config for a specific chain.
    #[must_use]
    pub fn with_chain_id(chain_id: u64) -> Self {
        Self { chain_id }
    }
}
