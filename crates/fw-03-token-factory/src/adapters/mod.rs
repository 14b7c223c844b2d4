//! # Adapters Layer

pub mod directory;

pub use directory::*;
