//! # Ports Layer
//!
//! - **Driven Ports (Outbound)**: `TokenDirectory`, plus the
//!   `CapabilityProvider` handed through to every deployed token

pub mod outbound;

pub use outbound::*;
