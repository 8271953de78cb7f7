//! # Birel
//!
//! A dual-indexed binary relation: a set of unique `(x, y)` pairs that can be
//! queried from either side in O(1) average time.
//!
//! Think countries and languages: a country speaks several languages, a
//! language is spoken in several countries, and you want both directions
//! without a database. [`Relation`] keeps two chained hash tables, one keyed
//! by x and one keyed by y, over a single copy of each pair, and updates
//! them together on every insert and removal.
//!
//! ## Quick Start
//!
//! ```rust
//! use birel::{Relation, RelationConfig};
//!
//! let pairs = [
//!     ("FR", "French"), ("DE", "German"), ("BE", "French"),
//!     ("BE", "Flemish"), ("IE", "English"), ("IE", "Irish"),
//! ];
//!
//! // Size the tables for the data at a load factor of 0.75
//! let config = RelationConfig::for_expected_pairs(pairs.len(), 0.75)?;
//! let mut spoken = Relation::with_config(config)?;
//! spoken.extend(pairs);
//!
//! assert!(spoken.project_from_y(&"French").contains(&"BE"));
//! assert_eq!(spoken.project_from_x(&"IE").len(), 2);
//!
//! spoken.remove_all_with_x(&"BE");
//! assert_eq!(spoken.len(), 4);
//! # Ok::<(), birel::Error>(())
//! ```
//!
//! ## Custom hashers
//!
//! Bucket placement can use any `Fn(&T) -> i64` through [`FnHasher`].
//! Hashers are fixed at construction and can only be replaced while the
//! relation is empty.

// Re-export the relation API
pub use birel_core::{Relation, RelationConfig, RelationStats, TableStats};

// Re-export hashing and errors - you'll need these for custom hashers
pub use birel_common::utils::error::{Error, Result};
pub use birel_common::utils::hash::{DefaultKeyHasher, FnHasher, KeyHasher, bucket_index};
