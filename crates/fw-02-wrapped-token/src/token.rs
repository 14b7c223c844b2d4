//! # Wrapped Token
//!
//! One ERC20 ledger bound to one underlying token, backed 1:1 by deposits.
//!
//! ## Operation Flow
//!
//! ```text
//! checkpoint ─► checks ─► journaled ledger writes ─► underlying call ─┬─► commit (events released)
//!                                                                     └─► revert (journal replayed)
//! ```
//!
//! Ledger writes happen before the underlying token is called, so an
//! underlying that calls back sees the post-operation balances. If the call
//! fails, the journal undoes those writes.

use crate::domain::invariants::{check_all_invariants, InvariantCheckResult};
use crate::domain::ledger::Ledger;
use crate::domain::permit::{domain_separator, permit_typehash, verify_permit_signer};
use crate::domain::value_objects::{Address, Hash, PermitRequest, TokenMetadata, U256};
use crate::errors::{TokenError, UnderlyingError, UnderlyingOperation};
use crate::events::TokenEvent;
use crate::ports::outbound::{CapabilityProvider, UnderlyingToken};
use shared_types::Capability;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The wrapped token's handle on its underlying during an operation.
struct Vault<'a> {
    holder: Address,
    underlying: &'a dyn UnderlyingToken,
}

impl Vault<'_> {
    /// `underlying.transferFrom(from, holder, amount)`.
    fn pull(&self, from: Address, amount: U256) -> Result<(), TokenError> {
        let outcome = self
            .underlying
            .transfer_from(self.holder, from, self.holder, amount);
        Self::settle(UnderlyingOperation::Pull, outcome)
    }

    /// `underlying.transfer(to, amount)` sent by the holder.
    fn push(&self, to: Address, amount: U256) -> Result<(), TokenError> {
        let outcome = self.underlying.transfer(self.holder, to, amount);
        Self::settle(UnderlyingOperation::Push, outcome)
    }

    fn settle(
        operation: UnderlyingOperation,
        outcome: Result<bool, UnderlyingError>,
    ) -> Result<(), TokenError> {
        match outcome {
            Ok(true) => Ok(()),
            Ok(false) => Err(TokenError::TransferFailed {
                operation,
                reason: "returned false".to_string(),
            }),
            Err(err) => Err(TokenError::TransferFailed {
                operation,
                reason: err.to_string(),
            }),
        }
    }
}

/// A wrapped token instance.
pub struct WrappedToken {
    address: Address,
    chain_id: u64,
    metadata: TokenMetadata,
    underlying: Arc<dyn UnderlyingToken>,
    capabilities: Arc<dyn CapabilityProvider>,
    domain_separator: Hash,
    ledger: Ledger,
    events: Vec<TokenEvent>,
}

impl WrappedToken {
    /// Deploys a token at `address` wrapping `underlying`.
    ///
    /// Name and symbol are read from the underlying once; the domain
    /// separator is fixed here and never recomputed.
    pub fn deploy(
        address: Address,
        chain_id: u64,
        underlying: Arc<dyn UnderlyingToken>,
        capabilities: Arc<dyn CapabilityProvider>,
    ) -> Self {
        let underlying_name = underlying.name();
        let metadata = TokenMetadata::wrapping(&underlying_name, &underlying.symbol());
        let domain_separator = domain_separator(&underlying_name, chain_id, &address);

        info!(
            token = %address,
            underlying = %underlying.address(),
            name = %metadata.name,
            symbol = %metadata.symbol,
            chain_id,
            "Wrapped token deployed"
        );

        Self {
            address,
            chain_id,
            metadata,
            underlying,
            capabilities,
            domain_separator,
            ledger: Ledger::new(),
            events: Vec::new(),
        }
    }

    // =========================================================================
    // WRAP / UNWRAP
    // =========================================================================

    /// Deposits `amount` underlying from `caller` and credits `caller`.
    ///
    /// # Errors
    ///
    /// See [`WrappedToken::wrap_to`].
    pub fn wrap(&mut self, caller: Address, amount: U256) -> Result<(), TokenError> {
        self.wrap_to(caller, amount, caller)
    }

    /// Deposits `amount` underlying from `caller` and credits `recipient`.
    ///
    /// `caller` must have approved this token on the underlying.
    ///
    /// # Errors
    ///
    /// - `TransferFailed` if the underlying pull reverts or returns `false`
    /// - `Overflow` if the supply would exceed `U256::MAX`
    #[instrument(skip(self), fields(token = %self.address))]
    pub fn wrap_to(
        &mut self,
        caller: Address,
        amount: U256,
        recipient: Address,
    ) -> Result<(), TokenError> {
        self.execute("wrap", |ledger, vault| {
            ledger.mint_to(recipient, amount)?;
            ledger.emit(TokenEvent::Wrap {
                caller,
                amount,
                recipient,
            });
            vault.pull(caller, amount)
        })?;

        info!(caller = %caller, recipient = %recipient, %amount, "Wrapped");
        Ok(())
    }

    /// Burns `amount` from `caller` and returns the underlying to `caller`.
    ///
    /// # Errors
    ///
    /// See [`WrappedToken::unwrap_to`].
    pub fn unwrap(&mut self, caller: Address, amount: U256) -> Result<(), TokenError> {
        self.unwrap_to(caller, amount, caller)
    }

    /// Burns `amount` from `caller` and sends the underlying to `recipient`.
    ///
    /// # Errors
    ///
    /// - `InsufficientBalance` if `caller` holds less than `amount`
    /// - `TransferFailed` if the underlying push reverts or returns `false`;
    ///   the burn is rolled back
    #[instrument(skip(self), fields(token = %self.address))]
    pub fn unwrap_to(
        &mut self,
        caller: Address,
        amount: U256,
        recipient: Address,
    ) -> Result<(), TokenError> {
        self.execute("unwrap", |ledger, vault| {
            ledger.burn_from(caller, amount)?;
            ledger.emit(TokenEvent::Unwrap {
                caller,
                amount,
                recipient,
            });
            vault.push(recipient, amount)
        })?;

        info!(caller = %caller, recipient = %recipient, %amount, "Unwrapped");
        Ok(())
    }

    // =========================================================================
    // ERC20
    // =========================================================================

    /// Moves `amount` from `caller` to `to`.
    ///
    /// # Errors
    ///
    /// `InsufficientBalance` if `caller` holds less than `amount`.
    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.execute("transfer", |ledger, _| ledger.move_balance(caller, to, amount))
    }

    /// Moves `amount` from `from` to `to` using `caller`'s allowance.
    ///
    /// # Errors
    ///
    /// `InsufficientAllowance` or `InsufficientBalance`.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.execute("transfer_from", |ledger, _| {
            ledger.spend_allowance(from, caller, amount)?;
            ledger.move_balance(from, to, amount)
        })
    }

    /// Sets `spender`'s allowance over `caller`'s balance to `amount`.
    pub fn approve(&mut self, caller: Address, spender: Address, amount: U256) {
        self.ledger.checkpoint();
        self.ledger.approve(caller, spender, amount);
        self.commit("approve");
    }

    // =========================================================================
    // CAPABILITY-GATED SUPPLY
    // =========================================================================

    /// Creates `amount` for `recipient` without a deposit.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` unless `caller` holds the minter capability
    /// - `Overflow` if the supply would exceed `U256::MAX`
    pub fn mint(
        &mut self,
        caller: Address,
        recipient: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.require(caller, Capability::Minter)?;
        self.execute("mint", |ledger, _| {
            ledger.mint_to(recipient, amount)?;
            ledger.emit(TokenEvent::Mint {
                caller,
                amount,
                recipient,
            });
            Ok(())
        })?;

        info!(token = %self.address, minter = %caller, recipient = %recipient, %amount, "Minted");
        Ok(())
    }

    /// Destroys `amount` of `caller`'s own balance without releasing underlying.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` unless `caller` holds the burner capability
    /// - `InsufficientBalance` if `caller` holds less than `amount`
    pub fn burn(&mut self, caller: Address, amount: U256) -> Result<(), TokenError> {
        self.require(caller, Capability::Burner)?;
        self.execute("burn", |ledger, _| {
            ledger.emit(TokenEvent::Burn {
                caller,
                amount,
                recipient: caller,
            });
            ledger.burn_from(caller, amount)
        })?;

        info!(token = %self.address, burner = %caller, %amount, "Burned");
        Ok(())
    }

    // =========================================================================
    // PERMIT
    // =========================================================================

    /// Applies a signed allowance.
    ///
    /// `now` is the current unix timestamp; a permit is accepted up to and
    /// including its deadline.
    ///
    /// # Errors
    ///
    /// - `Expired` if `now > deadline`, checked before the signature
    /// - `InvalidSignature` if the signature does not recover to a non-zero
    ///   `owner` over the digest built with the owner's current nonce
    #[instrument(skip(self, request), fields(token = %self.address, owner = %request.owner))]
    pub fn permit(&mut self, request: &PermitRequest, now: u64) -> Result<(), TokenError> {
        if U256::from(now) > request.deadline {
            warn!(deadline = %request.deadline, now, "Rejected expired permit");
            return Err(TokenError::Expired {
                deadline: request.deadline,
                now,
            });
        }

        let separator = self.domain_separator;
        let nonce = self.execute("permit", |ledger, _| {
            let nonce = ledger.use_nonce(request.owner);
            let digest = request.message(nonce).digest(&separator);
            verify_permit_signer(&digest, &request.signature, &request.owner)?;
            ledger.approve(request.owner, request.spender, request.value);
            Ok(nonce)
        })?;

        info!(spender = %request.spender, value = %request.value, %nonce, "Permit applied");
        Ok(())
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    /// Deployed address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Address of the wrapped underlying token.
    #[must_use]
    pub fn underlying(&self) -> Address {
        self.underlying.address()
    }

    /// Chain id baked into the domain separator.
    #[must_use]
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// `"Few Wrapped " + underlying name`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// `"fw" + underlying symbol`.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    /// Always 18.
    #[must_use]
    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    /// Name, symbol and decimals together.
    #[must_use]
    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// Sum of all balances.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.ledger.total_supply()
    }

    /// Wrapped balance of `account`.
    #[must_use]
    pub fn balance_of(&self, account: Address) -> U256 {
        self.ledger.balance_of(&account)
    }

    /// Allowance of `spender` over `owner`'s balance.
    #[must_use]
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.ledger.allowance(&owner, &spender)
    }

    /// Next permit nonce of `owner`.
    #[must_use]
    pub fn nonces(&self, owner: Address) -> U256 {
        self.ledger.nonce(&owner)
    }

    /// `DOMAIN_SEPARATOR`.
    #[must_use]
    pub fn domain_separator(&self) -> Hash {
        self.domain_separator
    }

    /// `PERMIT_TYPEHASH`.
    #[must_use]
    pub fn permit_typehash(&self) -> Hash {
        permit_typehash()
    }

    /// Underlying held by this token.
    #[must_use]
    pub fn backing(&self) -> U256 {
        self.underlying.balance_of(self.address)
    }

    /// True if the held underlying covers the total supply. Direct deposits
    /// that bypassed `wrap` only ever increase the surplus.
    #[must_use]
    pub fn is_fully_backed(&self) -> bool {
        self.backing() >= self.total_supply()
    }

    /// Committed events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TokenEvent] {
        &self.events
    }

    /// Drains the committed events.
    pub fn take_events(&mut self) -> Vec<TokenEvent> {
        std::mem::take(&mut self.events)
    }

    /// Runs the ledger invariant checks.
    #[must_use]
    pub fn check_invariants(&self) -> InvariantCheckResult {
        check_all_invariants(&self.ledger)
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn require(&self, caller: Address, capability: Capability) -> Result<(), TokenError> {
        if self.capabilities.has_capability(caller, capability) {
            return Ok(());
        }
        warn!(token = %self.address, caller = %caller, %capability, "Rejected unauthorized caller");
        Err(TokenError::Unauthorized { caller, capability })
    }

    /// Runs `op` as one atomic operation.
    fn execute<T, F>(&mut self, operation: &'static str, op: F) -> Result<T, TokenError>
    where
        F: FnOnce(&mut Ledger, &Vault<'_>) -> Result<T, TokenError>,
    {
        let vault = Vault {
            holder: self.address,
            underlying: self.underlying.as_ref(),
        };

        self.ledger.checkpoint();
        match op(&mut self.ledger, &vault) {
            Ok(value) => {
                self.commit(operation);
                Ok(value)
            }
            Err(err) => {
                self.ledger.revert();
                warn!(token = %self.address, operation, error = %err, "Reverted");
                Err(err)
            }
        }
    }

    /// Releases the pending events of the open transaction.
    fn commit(&mut self, operation: &'static str) {
        let events = self.ledger.commit();
        debug_assert!(
            self.check_invariants().is_valid(),
            "ledger invariant broken by {operation}"
        );
        debug!(token = %self.address, operation, events = events.len(), "Committed");
        self.events.extend(events);
    }
}

impl fmt::Debug for WrappedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedToken")
            .field("address", &self.address)
            .field("underlying", &self.underlying.address())
            .field("metadata", &self.metadata)
            .field("chain_id", &self.chain_id)
            .field("total_supply", &self.ledger.total_supply())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
