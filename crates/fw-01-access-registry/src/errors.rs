//! # Error Types

use shared_types::Address;
use thiserror::Error;

/// Errors returned by registry mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `init` was called on an already initialised registry.
    #[error("registry already initialized (owner {owner:?})")]
    AlreadyInitialized { owner: Address },

    /// Caller is not the registry owner, or no owner exists yet.
    #[error("unauthorized: {caller:?} is not the registry owner")]
    Unauthorized { caller: Address },
}
