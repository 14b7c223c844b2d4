//! # Platform
//!
//! One deployment of the three components, wired in dependency order:
//!
//! ```text
//! AccessRegistry ──(CapabilityProvider)──► TokenFactory ──deploys──► WrappedToken*
//!                                               ▲
//!                       InMemoryTokenDirectory ─┘ (resolves underlyings)
//! ```

use crate::config::PlatformConfig;
use fw_01_access_registry::errors::RegistryError;
use fw_01_access_registry::registry::AccessRegistry;
use fw_02_wrapped_token::errors::TokenError;
use fw_02_wrapped_token::ports::UnderlyingToken;
use fw_02_wrapped_token::token::WrappedToken;
use fw_03_token_factory::adapters::InMemoryTokenDirectory;
use fw_03_token_factory::errors::FactoryError;
use fw_03_token_factory::factory::TokenFactory;
use serde::Serialize;
use shared_types::{Address, Hash, U256};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Any failure surfaced by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// Registry rejected the call.
    #[error("registry: {0}")]
    Registry(#[from] RegistryError),

    /// Factory rejected the call.
    #[error("factory: {0}")]
    Factory(#[from] FactoryError),

    /// A wrapped token rejected the call.
    #[error("token: {0}")]
    Token(#[from] TokenError),

    /// No wrapped token is deployed at the address.
    #[error("no wrapped token at {0:?}")]
    UnknownToken(Address),
}

/// A deployed registry plus factory.
#[derive(Debug)]
pub struct Platform {
    config: PlatformConfig,
    registry: Arc<AccessRegistry>,
    directory: Arc<InMemoryTokenDirectory>,
    factory: TokenFactory,
}

impl Platform {
    /// Deploys the registry (initialised by the configured deployer) and the
    /// factory pointing at it.
    ///
    /// # Errors
    ///
    /// Propagates registry initialisation failures.
    pub fn deploy(config: PlatformConfig) -> Result<Self, PlatformError> {
        let registry = Arc::new(AccessRegistry::new(config.registry_address));
        registry.init(config.deployer)?;

        let directory = Arc::new(InMemoryTokenDirectory::new());
        let factory = TokenFactory::new(
            config.factory_address,
            registry.clone(),
            directory.clone(),
            config.factory_config(),
        );

        info!(
            registry = %config.registry_address,
            factory = %config.factory_address,
            deployer = %config.deployer,
            chain_id = config.chain_id,
            "Platform deployed"
        );

        Ok(Self {
            config,
            registry,
            directory,
            factory,
        })
    }

    /// Makes an underlying token known to the factory.
    pub fn register_underlying(&self, token: Arc<dyn UnderlyingToken>) {
        self.directory.register(token);
    }

    /// `factory.create_token(underlying)`.
    ///
    /// # Errors
    ///
    /// Propagates `FactoryError`.
    pub fn create_token(&mut self, underlying: Address) -> Result<Address, PlatformError> {
        Ok(self.factory.create_token(underlying)?)
    }

    /// Mutable handle on a deployed token.
    ///
    /// # Errors
    ///
    /// `UnknownToken` if nothing is deployed at `wrapped`.
    pub fn token_mut(&mut self, wrapped: Address) -> Result<&mut WrappedToken, PlatformError> {
        self.factory
            .token_mut(wrapped)
            .ok_or(PlatformError::UnknownToken(wrapped))
    }

    /// Shared registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<AccessRegistry> {
        &self.registry
    }

    /// The factory.
    #[must_use]
    pub fn factory(&self) -> &TokenFactory {
        &self.factory
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Snapshot of every deployed token.
    #[must_use]
    pub fn report(&self) -> DeploymentReport {
        let tokens = (0..self.factory.all_wrapped_tokens_length())
            .filter_map(|index| self.factory.all_wrapped_tokens(index))
            .filter_map(|wrapped| self.factory.token(wrapped))
            .map(TokenReport::from_token)
            .collect();

        DeploymentReport {
            chain_id: self.config.chain_id,
            registry: self.config.registry_address,
            registry_owner: self.registry.owner(),
            factory: self.config.factory_address,
            tokens,
        }
    }
}

/// Serializable view of a deployment.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentReport {
    pub chain_id: u64,
    pub registry: Address,
    pub registry_owner: Option<Address>,
    pub factory: Address,
    pub tokens: Vec<TokenReport>,
}

/// Serializable view of one wrapped token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenReport {
    pub wrapped: Address,
    pub underlying: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
    pub backing: U256,
    pub domain_separator: Hash,
}

impl TokenReport {
    fn from_token(token: &WrappedToken) -> Self {
        Self {
            wrapped: token.address(),
            underlying: token.underlying(),
            name: token.name().to_string(),
            symbol: token.symbol().to_string(),
            decimals: token.decimals(),
            total_supply: token.total_supply(),
            backing: token.backing(),
            domain_separator: token.domain_separator(),
        }
    }
}
