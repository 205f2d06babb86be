//! Error types for container construction and search.
//!
//! Every variant signals a mistake in a program's static option
//! declarations; none of them is meant to be recovered from at runtime.
//! Searches that find nothing return `None`, not an error.

use thiserror::Error;

/// Errors raised while building, sealing, or querying a container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// `seal` was called on a container that is already sealed.
    #[error("container is already sealed")]
    AlreadySealed,
    /// An item was added to a sealed container.
    #[error("cannot add to a sealed container")]
    ContainerSealed,
    /// An unsealed container was added as an item.
    #[error("cannot add an unsealed item")]
    ItemNotSealed,
    /// Two options reachable from the same container share a name.
    #[error("options {first} and {second} both use the name '{name}'")]
    NameClash {
        /// The clashing short or long name.
        name: String,
        /// Label of the option found first.
        first: String,
        /// Label of the option found second.
        second: String,
    },
    /// A name query supplied neither a short nor a long name.
    #[error("option search needs a short name, a long name or a partial name")]
    EmptyQuery,
}

/// Convenience alias for results with [`ContainerError`].
pub type Result<T> = std::result::Result<T, ContainerError>;
