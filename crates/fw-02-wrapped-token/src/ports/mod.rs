//! # Ports Layer (Middle Hexagon)
//!
//! - **Driven Ports (Outbound)**: `UnderlyingToken`, `CapabilityProvider`
//! - No concrete implementations in this module

pub mod outbound;

pub use outbound::*;
