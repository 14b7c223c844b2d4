//! # Domain Layer
//!
//! Pure address derivation. The factory's bookkeeping lives in `factory.rs`.

pub mod address;

pub use address::*;
