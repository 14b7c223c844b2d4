//! # Error Types

use shared_types::Address;
use thiserror::Error;

/// Reasons `create_token` refuses to deploy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// The zero address cannot be wrapped.
    #[error("cannot wrap the zero address")]
    ZeroAddress,

    /// No token is known at the given address.
    #[error("no token found at {0:?}")]
    UnknownUnderlying(Address),

    /// The address is a wrapper deployed by this factory. Wrappers are owned
    /// by the factory and are not exposed through the token directory.
    #[error("{0:?} is a wrapped token and cannot be wrapped again")]
    NestedWrapper(Address),

    /// The derived address is already occupied.
    #[error("address collision at {0:?}")]
    AddressCollision(Address),
}
