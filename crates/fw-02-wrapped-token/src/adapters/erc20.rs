//! # In-Memory ERC20
//!
//! A plain ERC20 ledger implementing `UnderlyingToken`. Used as the
//! underlying in tests, benches and the runtime demo.
//!
//! `FailureMode` makes the token misbehave on purpose so the wrapped token's
//! rollback paths can be exercised.

use crate::domain::value_objects::{Address, INFINITE_ALLOWANCE, U256};
use crate::errors::UnderlyingError;
use crate::events::TokenEvent;
use crate::ports::outbound::UnderlyingToken;
use parking_lot::RwLock;
use std::collections::HashMap;

/// How transfers should fail, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Behave like a standard ERC20.
    #[default]
    None,
    /// Every transfer returns `false` without moving funds.
    ReturnFalse,
    /// Every transfer reverts.
    Revert,
}

#[derive(Debug, Default)]
struct Erc20State {
    total_supply: U256,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    failure_mode: FailureMode,
    events: Vec<TokenEvent>,
}

impl Erc20State {
    fn balance(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn check_failure(&self) -> Option<Result<bool, UnderlyingError>> {
        match self.failure_mode {
            FailureMode::None => None,
            FailureMode::ReturnFalse => Some(Ok(false)),
            FailureMode::Revert => Some(Err(UnderlyingError::Reverted(
                "token paused".to_string(),
            ))),
        }
    }

    fn move_balance(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), UnderlyingError> {
        let from_balance = self.balance(&from);
        if from_balance < amount {
            return Err(UnderlyingError::Reverted(
                "transfer amount exceeds balance".to_string(),
            ));
        }
        self.balances.insert(from, from_balance - amount);
        let to_balance = self
            .balance(&to)
            .checked_add(amount)
            .ok_or_else(|| UnderlyingError::Reverted("balance overflow".to_string()))?;
        self.balances.insert(to, to_balance);
        self.events.push(TokenEvent::Transfer { from, to, amount });
        Ok(())
    }
}

/// Standard ERC20 kept in memory.
#[derive(Debug)]
pub struct InMemoryErc20 {
    address: Address,
    name: String,
    symbol: String,
    state: RwLock<Erc20State>,
}

impl InMemoryErc20 {
    /// Creates an empty token.
    pub fn new(address: Address, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            address,
            name: name.into(),
            symbol: symbol.into(),
            state: RwLock::new(Erc20State::default()),
        }
    }

    /// Creates `amount` for `to`.
    ///
    /// # Errors
    ///
    /// `Reverted` if the supply would overflow.
    pub fn mint(&self, to: Address, amount: U256) -> Result<(), UnderlyingError> {
        let mut state = self.state.write();
        let supply = state
            .total_supply
            .checked_add(amount)
            .ok_or_else(|| UnderlyingError::Reverted("supply overflow".to_string()))?;
        state.total_supply = supply;
        let balance = state.balance(&to) + amount;
        state.balances.insert(to, balance);
        state.events.push(TokenEvent::Transfer {
            from: Address::ZERO,
            to,
            amount,
        });
        Ok(())
    }

    /// `approve(spender, amount)` with `msg.sender = owner`.
    pub fn approve(&self, owner: Address, spender: Address, amount: U256) {
        let mut state = self.state.write();
        state.allowances.insert((owner, spender), amount);
        state.events.push(TokenEvent::Approval {
            owner,
            spender,
            amount,
        });
    }

    /// Switches how subsequent transfers behave.
    pub fn set_failure_mode(&self, mode: FailureMode) {
        self.state.write().failure_mode = mode;
    }

    /// `allowance(owner, spender)`.
    #[must_use]
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.state
            .read()
            .allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// `totalSupply()`.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.state.read().total_supply
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<TokenEvent> {
        self.state.read().events.clone()
    }

    /// Drains the recorded events.
    pub fn take_events(&self) -> Vec<TokenEvent> {
        std::mem::take(&mut self.state.write().events)
    }
}

impl UnderlyingToken for InMemoryErc20 {
    fn address(&self) -> Address {
        self.address
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn symbol(&self) -> String {
        self.symbol.clone()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.state.read().balance(&account)
    }

    fn transfer(
        &self,
        caller: Address,
        to: Address,
        amount: U256,
    ) -> Result<bool, UnderlyingError> {
        let mut state = self.state.write();
        if let Some(outcome) = state.check_failure() {
            return outcome;
        }
        state.move_balance(caller, to, amount)?;
        Ok(true)
    }

    fn transfer_from(
        &self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<bool, UnderlyingError> {
        let mut state = self.state.write();
        if let Some(outcome) = state.check_failure() {
            return outcome;
        }

        let allowance = state
            .allowances
            .get(&(from, caller))
            .copied()
            .unwrap_or_default();
        if allowance < amount {
            return Err(UnderlyingError::Reverted(
                "transfer amount exceeds allowance".to_string(),
            ));
        }

        state.move_balance(from, to, amount)?;
        if allowance != INFINITE_ALLOWANCE {
            state.allowances.insert((from, caller), allowance - amount);
        }
        Ok(true)
    }
}

// =============================================================================
// TESTS
// =============================================================================
