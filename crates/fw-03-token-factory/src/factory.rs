//! # Token Factory
//!
//! Deploys at most one wrapped token per underlying, at an address that is a
//! pure function of `(factory, underlying)`.
//!
//! The `underlying → wrapped` mapping is append-only: entries are never
//! overwritten or removed, which makes it injective.

use crate::config::FactoryConfig;
use crate::domain::address::compute_wrapped_token_address;
use crate::errors::FactoryError;
use crate::events::FactoryEvent;
use crate::ports::outbound::{CapabilityProvider, TokenDirectory};
use fw_02_wrapped_token::token::WrappedToken;
use shared_types::Address;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The wrapped token factory.
pub struct TokenFactory {
    address: Address,
    registry: Arc<dyn CapabilityProvider>,
    directory: Arc<dyn TokenDirectory>,
    config: FactoryConfig,
    wrapped_token_of: HashMap<Address, Address>,
    all_wrapped_tokens: Vec<Address>,
    tokens: HashMap<Address, WrappedToken>,
    events: Vec<FactoryEvent>,
}

impl TokenFactory {
    /// Creates a factory at `address` whose tokens all check `registry`.
    pub fn new(
        address: Address,
        registry: Arc<dyn CapabilityProvider>,
        directory: Arc<dyn TokenDirectory>,
        config: FactoryConfig,
    ) -> Self {
        info!(factory = %address, chain_id = config.chain_id, "Token factory created");
        Self {
            address,
            registry,
            directory,
            config,
            wrapped_token_of: HashMap::new(),
            all_wrapped_tokens: Vec::new(),
            tokens: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Returns the wrapper of `underlying`, deploying it on first request.
    ///
    /// A repeated request returns the existing address without deploying,
    /// emitting or failing.
    ///
    /// # Errors
    ///
    /// - `ZeroAddress` for the zero address
    /// - `NestedWrapper` if `underlying` is a wrapper this factory deployed
    /// - `UnknownUnderlying` if the directory has no token at `underlying`
    /// - `AddressCollision` if the derived address is already occupied
    #[instrument(skip(self), fields(factory = %self.address))]
    pub fn create_token(&mut self, underlying: Address) -> Result<Address, FactoryError> {
        if underlying.is_zero() {
            warn!("Rejected wrapping the zero address");
            return Err(FactoryError::ZeroAddress);
        }

        if let Some(existing) = self.wrapped_token_of.get(&underlying) {
            debug!(wrapped = %existing, "Wrapper already deployed");
            return Ok(*existing);
        }

        if self.tokens.contains_key(&underlying) {
            warn!("Rejected wrapping a wrapped token");
            return Err(FactoryError::NestedWrapper(underlying));
        }

        let handle = self.directory.resolve(underlying).ok_or_else(|| {
            warn!("No token at underlying address");
            FactoryError::UnknownUnderlying(underlying)
        })?;

        let wrapped = self.predict_address(underlying);
        if self.tokens.contains_key(&wrapped) || self.directory.resolve(wrapped).is_some() {
            warn!(wrapped = %wrapped, "Derived address already occupied");
            return Err(FactoryError::AddressCollision(wrapped));
        }

        let token = WrappedToken::deploy(
            wrapped,
            self.config.chain_id,
            handle,
            Arc::clone(&self.registry),
        );

        let index = self.all_wrapped_tokens.len();
        self.tokens.insert(wrapped, token);
        self.wrapped_token_of.insert(underlying, wrapped);
        self.all_wrapped_tokens.push(wrapped);
        self.events.push(FactoryEvent::WrappedTokenCreated {
            underlying,
            wrapped,
            index,
        });

        info!(wrapped = %wrapped, index, "Wrapped token created");
        Ok(wrapped)
    }

    /// Wrapper of `underlying`, `Address::ZERO` if not yet created.
    #[must_use]
    pub fn get_wrapped_token(&self, underlying: Address) -> Address {
        self.wrapped_token_of
            .get(&underlying)
            .copied()
            .unwrap_or(Address::ZERO)
    }

    /// Address `create_token(underlying)` deploys to, whether or not it has
    /// been called.
    #[must_use]
    pub fn predict_address(&self, underlying: Address) -> Address {
        compute_wrapped_token_address(&self.address, &underlying)
    }

    /// Number of deployed wrappers.
    #[must_use]
    pub fn all_wrapped_tokens_length(&self) -> usize {
        self.all_wrapped_tokens.len()
    }

    /// The `index`-th deployed wrapper, in creation order.
    #[must_use]
    pub fn all_wrapped_tokens(&self, index: usize) -> Option<Address> {
        self.all_wrapped_tokens.get(index).copied()
    }

    /// A deployed token by its wrapped address.
    #[must_use]
    pub fn token(&self, wrapped: Address) -> Option<&WrappedToken> {
        self.tokens.get(&wrapped)
    }

    /// Mutable access to a deployed token, for users interacting with it.
    pub fn token_mut(&mut self, wrapped: Address) -> Option<&mut WrappedToken> {
        self.tokens.get_mut(&wrapped)
    }

    /// Factory address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Configuration applied to new tokens.
    #[must_use]
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[FactoryEvent] {
        &self.events
    }

    /// Drains the recorded events.
    pub fn take_events(&mut self) -> Vec<FactoryEvent> {
        std::mem::take(&mut self.events)
    }
}

impl fmt::Debug for TokenFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenFactory")
            .field("address", &self.address)
            .field("config", &self.config)
            .field("wrapped_tokens", &self.all_wrapped_tokens.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
