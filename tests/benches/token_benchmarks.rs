//! # Few Wrapped Tokens Benchmarks
//!
//! | Component | Path | Target |
//! |-----------|------|--------|
//! | fw-02 Wrapped Token | wrap + unwrap round | < 50μs |
//! | fw-02 Wrapped Token | permit (recover + approve) | < 1ms |
//! | fw-03 Token Factory | CREATE2 derivation | < 10μs |
//! | fw-03 Token Factory | create_token | < 100μs |

use criterion::{criterion_group, criterion_main, Criterion};
use fw_tests::benchmarks::{fw_02_wrapped_token, fw_03_token_factory};

fn wrapped_token(c: &mut Criterion) {
    fw_02_wrapped_token::register_benchmarks(c);
}

fn token_factory(c: &mut Criterion) {
    fw_03_token_factory::register_benchmarks(c);
}

criterion_group!(benches, wrapped_token, token_factory);
criterion_main!(benches);
