//! Error type shared by all Birel crates.

use thiserror::Error;

/// Result alias used throughout Birel.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by relation operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No pair matched exactly. Only `Relation::remove` raises this, and the
    /// relation is left untouched when it does.
    #[error("pair not found")]
    NotFound,

    /// Configuration rejected before any table was built.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A hasher was replaced while pairs were stored.
    #[error("relation holds {0} pairs; hashers can only be replaced on an empty relation")]
    NotEmpty(usize),

    /// The X and Y tables disagree.
    #[error("inconsistent tables: {0}")]
    Inconsistent(String),
}
