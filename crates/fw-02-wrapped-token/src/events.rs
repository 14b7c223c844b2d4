//! # Token Events
//!
//! Log entries emitted by the ledger. An operation's events are only
//! appended to the token's log when the operation commits.
//!
//! | Event | Emitted by |
//! |-------|-----------|
//! | `Transfer` | every balance move, mint (`from = 0`) and burn (`to = 0`) |
//! | `Approval` | `approve`, `permit` |
//! | `Wrap` / `Unwrap` | `wrap_to` / `unwrap_to` |
//! | `Mint` / `Burn` | capability-gated `mint` / `burn` |

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// ERC20 and wrapper events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    /// `amount` moved from `from` to `to`.
    Transfer {
        from: Address,
        to: Address,
        amount: U256,
    },
    /// Allowance of `spender` over `owner`'s balance set to `amount`.
    Approval {
        owner: Address,
        spender: Address,
        amount: U256,
    },
    /// `caller` deposited `amount` underlying; `recipient` was credited.
    Wrap {
        caller: Address,
        amount: U256,
        recipient: Address,
    },
    /// `caller` redeemed `amount`; `recipient` received the underlying.
    Unwrap {
        caller: Address,
        amount: U256,
        recipient: Address,
    },
    /// Minter `caller` created `amount` for `recipient`.
    Mint {
        caller: Address,
        amount: U256,
        recipient: Address,
    },
    /// Burner `caller` destroyed `amount` of its own balance.
    Burn {
        caller: Address,
        amount: U256,
        recipient: Address,
    },
}

impl TokenEvent {
    /// Short event name, as it would appear in an ABI.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transfer { .. } => "Transfer",
            Self::Approval { .. } => "Approval",
            Self::Wrap { .. } => "Wrap",
            Self::Unwrap { .. } => "Unwrap",
            Self::Mint { .. } => "Mint",
            Self::Burn { .. } => "Burn",
        }
    }
}
