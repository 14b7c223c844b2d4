//! # Few Wrapped Tokens Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs      # Shared deployment and signing helpers
//! ├── benchmarks/      # Criterion benchmarks per component
//! │   ├── fw_02_wrapped_token.rs
//! │   └── fw_03_token_factory.rs
//! │
//! └── integration/     # Cross-component scenarios
//!     ├── wrap_unwrap.rs
//!     ├── permit.rs
//!     ├── capabilities.rs
//!     ├── factory.rs
//!     └── supply_invariant.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p fw-tests
//!
//! # By category
//! cargo test -p fw-tests integration::permit
//!
//! # Benchmarks
//! cargo bench -p fw-tests
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod benchmarks;
pub mod integration;
