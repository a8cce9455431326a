//! Error types shared by the containers in this crate.

use thiserror::Error;

/// The error type for container operations.
///
/// Every variant is a programming-contract violation raised synchronously at
/// the offending call. None of these are transient: no operation retries,
/// partially recovers, or silently corrects its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A position handle was minted by a different list, or names an entry
    /// that has since been deleted.
    #[error("position is foreign to this list or refers to a deleted entry")]
    InvalidPosition,

    /// A call argument violated the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The operation requires a non-empty container.
    #[error("container is empty")]
    EmptyContainer,
}
