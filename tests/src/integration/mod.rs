//! # Integration Tests
//!
//! Scenarios that span the registry, the factory and the wrapped tokens.

pub mod capabilities;
pub mod factory;
pub mod permit;
pub mod supply_invariant;
