//! Utility functions and helpers.
//!
//! - [`error`] - The crate-wide error type
//! - [`hash`] - Key hashers and bucket placement

pub mod error;
pub mod hash;
