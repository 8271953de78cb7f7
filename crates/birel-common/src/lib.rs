//! # birel-common
//!
//! Foundation layer for Birel: the shared error type and key hashing.
//!
//! This crate has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod utils;

// Re-export commonly used types at crate root
pub use utils::error::{Error, Result};
pub use utils::hash::{DefaultKeyHasher, FnHasher, KeyHasher, bucket_index};
