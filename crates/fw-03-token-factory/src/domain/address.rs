//! # Deterministic Addresses
//!
//! CREATE2-style derivation of wrapped token addresses.
//!
//! ```text
//! salt    = keccak256(underlying)
//! address = keccak256(0xff ‖ factory ‖ salt ‖ WRAPPED_TOKEN_INIT_CODE_HASH)[12..]
//! ```
//!
//! The result depends on nothing but the factory address and the underlying
//! address, so clients can compute it before the token exists.

use shared_types::crypto::keccak256_concat;
use shared_types::{keccak256, Address, Hash};
use std::sync::LazyLock;

/// Identifies the wrapped token implementation every factory deploys.
///
/// Changing it moves every predicted address.
pub const WRAPPED_TOKEN_INIT_CODE: &[u8] = b"fw-02-wrapped-token:WrappedToken:v1";

/// `keccak256(WRAPPED_TOKEN_INIT_CODE)`.
pub static WRAPPED_TOKEN_INIT_CODE_HASH: LazyLock<Hash> =
    LazyLock::new(|| keccak256(WRAPPED_TOKEN_INIT_CODE));

/// Salt under which the wrapped token for `underlying` is deployed.
#[must_use]
pub fn salt_for(underlying: &Address) -> Hash {
    keccak256(underlying.as_bytes())
}

/// Generic CREATE2 address.
#[must_use]
pub fn compute_create2_address(deployer: &Address, salt: &Hash, init_code_hash: &Hash) -> Address {
    let hash = keccak256_concat(&[
        &[0xff],
        deployer.as_bytes(),
        salt.as_bytes(),
        init_code_hash.as_bytes(),
    ]);
    Address::from_hash_tail(&hash)
}

/// Address the factory at `factory` deploys the wrapper of `underlying` to.
#[must_use]
pub fn compute_wrapped_token_address(factory: &Address, underlying: &Address) -> Address {
    compute_create2_address(factory, &salt_for(underlying), &WRAPPED_TOKEN_INIT_CODE_HASH)
}
