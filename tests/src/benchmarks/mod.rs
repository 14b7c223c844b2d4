//! # Few Wrapped Tokens Benchmarks
//!
//! Hot paths per component: ledger mutations, permit verification and
//! deterministic address derivation.

pub mod fw_03_token_factory;
