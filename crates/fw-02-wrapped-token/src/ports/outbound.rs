//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the wrapped token depends on:
//! - The underlying ERC20 it wraps (`UnderlyingToken`)
//! - The shared capability registry (`CapabilityProvider`)
//!
//! Dependencies point INWARD: adapters implement these traits, the ledger
//! only sees trait objects.

use crate::domain::value_objects::{Address, U256};
use crate::errors::UnderlyingError;

pub use shared_types::CapabilityProvider;

// =============================================================================
// UNDERLYING TOKEN
// =============================================================================

/// The ERC20 surface a wrapped token needs from its underlying.
///
/// Both transfer methods mirror Solidity's loose ERC20 contract: a token may
/// signal failure by reverting (`Err`) or by returning `Ok(false)`. The
/// wrapped token treats both as a failed transfer.
pub trait UnderlyingToken: Send + Sync {
    /// Address the underlying is deployed at.
    fn address(&self) -> Address;

    /// `name()`. Read once at deployment.
    fn name(&self) -> String;

    /// `symbol()`. Read once at deployment.
    fn symbol(&self) -> String;

    /// `balanceOf(account)`.
    fn balance_of(&self, account: Address) -> U256;

    /// `transfer(to, amount)` executed with `msg.sender = caller`.
    ///
    /// # Arguments
    ///
    /// * `caller` - Account whose balance is debited (the wrapped token on unwrap)
    /// * `to` - Recipient of the underlying
    /// * `amount` - Amount to move
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Transfer applied
    /// * `Ok(false)` - Token refused without reverting
    /// * `Err(_)` - Token reverted
    fn transfer(&self, caller: Address, to: Address, amount: U256)
        -> Result<bool, UnderlyingError>;

    /// `transferFrom(from, to, amount)` executed with `msg.sender = caller`.
    ///
    /// On wrap, `caller` and `to` are the wrapped token and `from` is the
    /// depositor, so the depositor must have approved the wrapped token.
    fn transfer_from(
        &self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<bool, UnderlyingError>;
}
