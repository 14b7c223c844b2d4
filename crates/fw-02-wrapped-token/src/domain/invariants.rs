//! # Domain Invariants
//!
//! Invariants that must hold between operations on a wrapped token.
//!
//! - INVARIANT-1: Supply Conservation (`total_supply == Σ balances`)
//! - INVARIANT-2: Clean Boundary (no journal entries outside an operation)
//!
//! Full backing (`underlying.balance_of(token) >= total_supply`) depends on
//! the underlying token and is checked by `WrappedToken::is_fully_backed`.

use crate::domain::ledger::Ledger;
use crate::domain::value_objects::U256;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Sum of every balance, `None` if it overflows `U256`.
#[must_use]
pub fn balance_sum(ledger: &Ledger) -> Option<U256> {
    ledger
        .balances()
        .try_fold(U256::zero(), |acc, (_, balance)| acc.checked_add(*balance))
}

/// INVARIANT-1: Supply Conservation
///
/// Every mint credits exactly what it adds to supply and every burn debits
/// exactly what it removes.
#[must_use]
pub fn check_supply_invariant(ledger: &Ledger) -> bool {
    balance_sum(ledger) == Some(ledger.total_supply())
}

/// INVARIANT-2: Clean Boundary
///
/// Between operations the journal is empty: every operation either
/// committed or reverted.
#[must_use]
pub fn check_clean_boundary_invariant(ledger: &Ledger) -> bool {
    ledger.journal_len() == 0
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(ledger: &Ledger) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_supply_invariant(ledger) {
        violations.push(InvariantViolation::SupplyMismatch {
            total_supply: ledger.total_supply(),
            balance_sum: balance_sum(ledger),
        });
    }

    if !check_clean_boundary_invariant(ledger) {
        violations.push(InvariantViolation::UncommittedJournal {
            entries: ledger.journal_len(),
        });
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Total supply differs from the sum of balances (`None` on overflow).
    SupplyMismatch {
        total_supply: U256,
        balance_sum: Option<U256>,
    },
    /// Writes left in the journal outside an operation.
    UncommittedJournal { entries: usize },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SupplyMismatch {
                total_supply,
                balance_sum: Some(sum),
            } => write!(f, "supply mismatch: total {total_supply} != balances {sum}"),
            Self::SupplyMismatch {
                total_supply,
                balance_sum: None,
            } => write!(f, "supply mismatch: total {total_supply}, balances overflow"),
            Self::UncommittedJournal { entries } => {
                write!(f, "{entries} journal entries outside an operation")
            }
        }
    }
}
