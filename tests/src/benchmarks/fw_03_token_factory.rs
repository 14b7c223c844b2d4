//! # FW-03 Token Factory Benchmarks
//!
//! Performance targets:
//! - CREATE2 derivation: < 10μs
//! - create_token (fresh): < 100μs
//! - create_token (existing): < 1μs

use crate::fixtures::{World, UNDERLYING};
use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use fw_01_access_registry::registry::AccessRegistry;
use fw_02_wrapped_token::adapters::InMemoryErc20;
use fw_03_token_factory::adapters::InMemoryTokenDirectory;
use fw_03_token_factory::config::FactoryConfig;
use fw_03_token_factory::domain::compute_wrapped_token_address;
use fw_03_token_factory::factory::TokenFactory;
use shared_types::Address;
use std::sync::Arc;

const FACTORY: Address = Address::repeat_byte(0xfa);

fn underlying(index: u64) -> Address {
    let mut bytes = [0x10u8; 20];
    bytes[12..].copy_from_slice(&index.to_be_bytes());
    Address::new(bytes)
}

/// Factory with `count` registered but not yet wrapped underlyings.
fn factory_with_underlyings(count: u64) -> TokenFactory {
    let directory = Arc::new(InMemoryTokenDirectory::new());
    for index in 0..count {
        directory.register(Arc::new(InMemoryErc20::new(
            underlying(index),
            "Bench Token",
            "BT",
        )));
    }
    TokenFactory::new(
        FACTORY,
        Arc::new(AccessRegistry::new(Address::repeat_byte(0xc0))),
        directory,
        FactoryConfig::default(),
    )
}

pub fn bench_address_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("fw-03/create2");

    group.bench_function("compute_wrapped_token_address", |b| {
        b.iter(|| black_box(compute_wrapped_token_address(&FACTORY, black_box(&UNDERLYING))))
    });

    group.finish();
}

pub fn bench_create_token(c: &mut Criterion) {
    let mut group = c.benchmark_group("fw-03/create_token");

    for count in [1u64, 100, 1_000] {
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::new("fresh", count), &count, |b, &count| {
            b.iter_batched(
                || factory_with_underlyings(count),
                |mut factory| {
                    for index in 0..count {
                        let _ = black_box(factory.create_token(underlying(index)));
                    }
                    factory
                },
                BatchSize::LargeInput,
            )
        });
    }

    let mut world = World::new();
    group.bench_function("existing", |b| {
        b.iter(|| black_box(world.platform.create_token(black_box(UNDERLYING))))
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_address_derivation(c);
    bench_create_token(c);
}
