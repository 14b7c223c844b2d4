//! # EIP-712 Permit
//!
//! Typed-data hashing and secp256k1 signer recovery for `permit`.
//!
//! ```text
//! domainSeparator = keccak256(abi.encode(
//!     EIP712_DOMAIN_TYPEHASH,
//!     keccak256(underlying.name()),   // NOT the wrapped name
//!     keccak256("1"),
//!     chainId,
//!     address(this)))
//!
//! digest = keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ keccak256(abi.encode(
//!     PERMIT_TYPEHASH, owner, spender, value, nonce, deadline)))
//! ```
//!
//! The domain name is the underlying token's name. Wallets that build the
//! domain from the wrapped token's own `name()` produce signatures that do
//! not verify; clients must use the underlying name.

use crate::domain::value_objects::{Address, EcdsaSignature, Hash, PermitMessage, U256};
use crate::errors::SignatureError;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use shared_types::crypto::keccak256_concat;
use shared_types::{keccak256, AbiEncoder};
use std::fmt;

/// Canonical `Permit` type string.
pub const PERMIT_TYPE: &str =
    "Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)";

/// Canonical EIP-712 domain type string.
pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Domain version of every wrapped token.
pub const DOMAIN_VERSION: &str = "1";

/// Half of the secp256k1 curve order; `s` must not exceed it.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

// =============================================================================
// HASHING
// =============================================================================

/// `keccak256(PERMIT_TYPE)`.
#[must_use]
pub fn permit_typehash() -> Hash {
    keccak256(PERMIT_TYPE.as_bytes())
}

/// `keccak256(EIP712_DOMAIN_TYPE)`.
#[must_use]
pub fn domain_typehash() -> Hash {
    keccak256(EIP712_DOMAIN_TYPE.as_bytes())
}

/// Domain separator for a token at `verifying_contract`.
///
/// `name` is the underlying token's name.
#[must_use]
pub fn domain_separator(name: &str, chain_id: u64, verifying_contract: &Address) -> Hash {
    AbiEncoder::new()
        .hash(&domain_typehash())
        .hash(&keccak256(name.as_bytes()))
        .hash(&keccak256(DOMAIN_VERSION.as_bytes()))
        .uint(U256::from(chain_id))
        .address(verifying_contract)
        .keccak()
}

impl PermitMessage {
    /// `keccak256(abi.encode(PERMIT_TYPEHASH, owner, spender, value, nonce, deadline))`.
    #[must_use]
    pub fn struct_hash(&self) -> Hash {
        AbiEncoder::new()
            .hash(&permit_typehash())
            .address(&self.owner)
            .address(&self.spender)
            .uint(self.value)
            .uint(self.nonce)
            .uint(self.deadline)
            .keccak()
    }

    /// Full EIP-712 digest under `domain_separator`.
    #[must_use]
    pub fn digest(&self, domain_separator: &Hash) -> Hash {
        typed_data_digest(domain_separator, &self.struct_hash())
    }
}

/// `keccak256(0x19 ‖ 0x01 ‖ domain_separator ‖ struct_hash)`.
#[must_use]
pub fn typed_data_digest(domain_separator: &Hash, struct_hash: &Hash) -> Hash {
    keccak256_concat(&[
        &[0x19, 0x01],
        domain_separator.as_bytes(),
        struct_hash.as_bytes(),
    ])
}

// =============================================================================
// RECOVERY
// =============================================================================

/// Ethereum address of a secp256k1 public key.
#[must_use]
pub fn address_from_verifying_key(key: &VerifyingKey) -> Address {
    let encoded = key.to_encoded_point(false);
    // skip the 0x04 uncompressed prefix
    Address::from_hash_tail(&keccak256(&encoded.as_bytes()[1..]))
}

/// Recovers the address that signed `digest`.
///
/// # Errors
///
/// Rejects unknown `v` values, malformed or high-S signatures, and
/// signatures from which no public key can be recovered.
pub fn recover_signer(digest: &Hash, signature: &EcdsaSignature) -> Result<Address, SignatureError> {
    let recovery_id = parse_recovery_id(signature.v)?;
    if !is_low_s(&signature.s) {
        return Err(SignatureError::MalleableSignature);
    }

    let sig = Signature::from_slice(&signature.to_compact())
        .map_err(|_| SignatureError::InvalidFormat)?;
    let key = VerifyingKey::recover_from_prehash(digest.as_bytes(), &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_verifying_key(&key))
}

/// Checks that `signature` over `digest` was produced by `owner`.
///
/// # Errors
///
/// Any recovery error, `ZeroOwner` for the zero address, or
/// `SignerMismatch` when the recovered signer differs from `owner`.
pub fn verify_permit_signer(
    digest: &Hash,
    signature: &EcdsaSignature,
    owner: &Address,
) -> Result<(), SignatureError> {
    let recovered = recover_signer(digest, signature)?;
    if recovered.is_zero() || owner.is_zero() {
        return Err(SignatureError::ZeroOwner);
    }
    if recovered != *owner {
        return Err(SignatureError::SignerMismatch {
            expected: *owner,
            actual: recovered,
        });
    }
    Ok(())
}

/// Only the 27/28 form is accepted, matching `ecrecover`.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    let id = match v {
        27 => 0,
        28 => 1,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| SignatureError::InvalidRecoveryId(v))
}

fn is_low_s(s: &[u8; 32]) -> bool {
    s.as_slice() <= SECP256K1_HALF_ORDER.as_slice()
}

// =============================================================================
// OFF-CHAIN SIGNER
// =============================================================================

/// Holds a secp256k1 key and produces permit signatures.
///
/// This is the wallet side of `permit`; the ledger itself never signs.
pub struct PermitSigner {
    key: SigningKey,
    address: Address,
}

impl PermitSigner {
    /// Wraps an existing signing key.
    #[must_use]
    pub fn new(key: SigningKey) -> Self {
        let address = address_from_verifying_key(key.verifying_key());
        Self { key, address }
    }

    /// Builds a signer from a 32-byte secret scalar.
    ///
    /// # Errors
    ///
    /// `SigningFailed` if the bytes are not a valid secret key.
    pub fn from_slice(secret: &[u8]) -> Result<Self, SignatureError> {
        SigningKey::from_slice(secret)
            .map(Self::new)
            .map_err(|_| SignatureError::SigningFailed)
    }

    /// Address controlled by this key.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Signs a prehashed digest, returning `v` in 27/28 form with low `s`.
    ///
    /// # Errors
    ///
    /// `SigningFailed` if k256 refuses the digest.
    pub fn sign_digest(&self, digest: &Hash) -> Result<EcdsaSignature, SignatureError> {
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(digest.as_bytes())
            .map_err(|_| SignatureError::SigningFailed)?;

        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(EcdsaSignature::new(recid.to_byte() + 27, r, s))
    }

    /// Signs `message` for the token whose domain separator is given.
    ///
    /// # Errors
    ///
    /// `SigningFailed` if k256 refuses the digest.
    pub fn sign_permit(
        &self,
        domain_separator: &Hash,
        message: &PermitMessage,
    ) -> Result<EcdsaSignature, SignatureError> {
        self.sign_digest(&message.digest(domain_separator))
    }
}

impl fmt::Debug for PermitSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermitSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
