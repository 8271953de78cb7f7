//! # birel-core
//!
//! Core layer for Birel: the dual-indexed relation and the tables behind it.
//!
//! This crate depends only on `birel-common`.
//!
//! ## Modules
//!
//! - [`relation`] - The [`Relation`] container and its queries
//! - [`config`] - Table sizing ([`RelationConfig`])
//! - [`statistics`] - Bucket occupancy ([`RelationStats`])
//!
//! The relation is a plain single-threaded value with no internal locking.
//! Share it across threads behind a lock of your choosing.

pub mod config;
pub(crate) mod index;
pub mod relation;
pub mod statistics;

// Re-export commonly used types
pub use birel_common::utils::error::{Error, Result};
pub use birel_common::utils::hash::{DefaultKeyHasher, FnHasher, KeyHasher};
pub use config::RelationConfig;
pub use relation::Relation;
pub use statistics::{RelationStats, TableStats};
