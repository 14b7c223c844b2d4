//! # Ledger
//!
//! Balances, allowances, permit nonces and total supply of one wrapped
//! token, plus the journal that makes each operation all-or-nothing.
//!
//! Every write records the previous value in the journal. An operation
//! either `commit`s (journal dropped, pending events released) or
//! `revert`s (journal replayed backwards, pending events discarded).

use crate::domain::value_objects::{Address, INFINITE_ALLOWANCE, U256};
use crate::errors::TokenError;
use crate::events::TokenEvent;
use std::collections::HashMap;

/// Previous value of a slot, recorded before the slot is overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JournalEntry {
    TotalSupply(U256),
    Balance {
        account: Address,
        previous: U256,
    },
    Allowance {
        owner: Address,
        spender: Address,
        previous: U256,
    },
    Nonce {
        owner: Address,
        previous: U256,
    },
}

/// Journaled ERC20 state.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    total_supply: U256,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    nonces: HashMap<Address, U256>,
    journal: Vec<JournalEntry>,
    pending_events: Vec<TokenEvent>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    /// Sum of all balances.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Balance of `account`, zero if never credited.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Allowance of `spender` over `owner`'s balance.
    #[must_use]
    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Next permit nonce of `owner`.
    #[must_use]
    pub fn nonce(&self, owner: &Address) -> U256 {
        self.nonces.get(owner).copied().unwrap_or_default()
    }

    /// Iterates over non-zero balances.
    pub fn balances(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.balances.iter().filter(|(_, balance)| !balance.is_zero())
    }

    /// Number of journal entries not yet committed or reverted.
    #[must_use]
    pub fn journal_len(&self) -> usize {
        self.journal.len()
    }

    // =========================================================================
    // TRANSACTION BOUNDARY
    // =========================================================================

    /// Starts a new operation. Any leftover journal is discarded.
    pub fn checkpoint(&mut self) {
        self.journal.clear();
        self.pending_events.clear();
    }

    /// Keeps every write since the checkpoint and releases its events.
    pub fn commit(&mut self) -> Vec<TokenEvent> {
        self.journal.clear();
        std::mem::take(&mut self.pending_events)
    }

    /// Undoes every write since the checkpoint and drops its events.
    pub fn revert(&mut self) {
        while let Some(entry) = self.journal.pop() {
            match entry {
                JournalEntry::TotalSupply(previous) => self.total_supply = previous,
                JournalEntry::Balance { account, previous } => {
                    self.balances.insert(account, previous);
                }
                JournalEntry::Allowance {
                    owner,
                    spender,
                    previous,
                } => {
                    self.allowances.insert((owner, spender), previous);
                }
                JournalEntry::Nonce { owner, previous } => {
                    self.nonces.insert(owner, previous);
                }
            }
        }
        self.pending_events.clear();
    }

    /// Queues an event for release on commit.
    pub fn emit(&mut self, event: TokenEvent) {
        self.pending_events.push(event);
    }

    // =========================================================================
    // PRIMITIVE WRITES
    // =========================================================================

    fn set_balance(&mut self, account: Address, value: U256) {
        let previous = self.balance_of(&account);
        self.journal.push(JournalEntry::Balance { account, previous });
        self.balances.insert(account, value);
    }

    fn set_total_supply(&mut self, value: U256) {
        self.journal.push(JournalEntry::TotalSupply(self.total_supply));
        self.total_supply = value;
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, value: U256) {
        let previous = self.allowance(&owner, &spender);
        self.journal.push(JournalEntry::Allowance {
            owner,
            spender,
            previous,
        });
        self.allowances.insert((owner, spender), value);
    }

    fn credit(&mut self, account: Address, amount: U256) -> Result<(), TokenError> {
        let balance = self
            .balance_of(&account)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        self.set_balance(account, balance);
        Ok(())
    }

    fn debit(&mut self, account: Address, amount: U256) -> Result<(), TokenError> {
        let available = self.balance_of(&account);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        self.set_balance(account, available - amount);
        Ok(())
    }

    // =========================================================================
    // LEDGER OPERATIONS
    // =========================================================================

    /// Creates `amount` for `to`. Emits `Transfer(0, to, amount)`.
    ///
    /// # Errors
    ///
    /// `Overflow` if the total supply would exceed `U256::MAX`.
    pub fn mint_to(&mut self, to: Address, amount: U256) -> Result<(), TokenError> {
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        self.set_total_supply(supply);
        self.credit(to, amount)?;
        self.emit(TokenEvent::Transfer {
            from: Address::ZERO,
            to,
            amount,
        });
        Ok(())
    }

    /// Destroys `amount` of `from`'s balance. Emits `Transfer(from, 0, amount)`.
    ///
    /// # Errors
    ///
    /// `InsufficientBalance` if `from` holds less than `amount`.
    pub fn burn_from(&mut self, from: Address, amount: U256) -> Result<(), TokenError> {
        self.debit(from, amount)?;
        // balance <= supply, so this cannot underflow once the debit passed
        let supply = self.total_supply.saturating_sub(amount);
        self.set_total_supply(supply);
        self.emit(TokenEvent::Transfer {
            from,
            to: Address::ZERO,
            amount,
        });
        Ok(())
    }

    /// Moves `amount` from `from` to `to`. Emits `Transfer`.
    ///
    /// # Errors
    ///
    /// `InsufficientBalance` if `from` holds less than `amount`.
    pub fn move_balance(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.debit(from, amount)?;
        self.credit(to, amount)?;
        self.emit(TokenEvent::Transfer { from, to, amount });
        Ok(())
    }

    /// Overwrites the allowance. Emits `Approval`.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: U256) {
        self.set_allowance(owner, spender, amount);
        self.emit(TokenEvent::Approval {
            owner,
            spender,
            amount,
        });
    }

    /// Consumes `amount` of `spender`'s allowance over `owner`.
    ///
    /// An infinite allowance is left untouched. No `Approval` is emitted.
    ///
    /// # Errors
    ///
    /// `InsufficientAllowance` if the allowance is lower than `amount`.
    pub fn spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        let available = self.allowance(&owner, &spender);
        if available == INFINITE_ALLOWANCE {
            return Ok(());
        }
        if available < amount {
            return Err(TokenError::InsufficientAllowance {
                required: amount,
                available,
            });
        }
        self.set_allowance(owner, spender, available - amount);
        Ok(())
    }

    /// Returns the current nonce of `owner` and advances it by one.
    pub fn use_nonce(&mut self, owner: Address) -> U256 {
        let current = self.nonce(&owner);
        self.journal.push(JournalEntry::Nonce {
            owner,
            previous: current,
        });
        self.nonces.insert(owner, current.saturating_add(U256::one()));
        current
    }
}

// =============================================================================
// TESTS
// =============================================================================
