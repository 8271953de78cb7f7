//! Relation configuration.

use birel_common::utils::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Bucket count used by [`RelationConfig::default`].
pub const DEFAULT_BUCKET_COUNT: usize = 16;

/// Target ratio of stored pairs to buckets when sizing from an expected
/// pair count.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Configuration for a [`Relation`](crate::Relation).
///
/// The bucket count is fixed for the relation's lifetime; tables are never
/// resized.
///
/// # Examples
///
/// ```
/// use birel_core::RelationConfig;
///
/// // 11 pairs at a load factor of 0.75 -> 15 buckets
/// let config = RelationConfig::for_expected_pairs(11, 0.75).unwrap();
/// assert_eq!(config.bucket_count, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationConfig {
    /// Number of buckets in each of the X and Y tables.
    pub bucket_count: usize,
}

impl RelationConfig {
    /// Creates a configuration with the given bucket count.
    #[must_use]
    pub const fn new(bucket_count: usize) -> Self {
        Self { bucket_count }
    }

    /// Sizes the tables so `expected` pairs sit at `load_factor`.
    ///
    /// The bucket count is `round(expected / load_factor)`, never less
    /// than one.
    pub fn for_expected_pairs(expected: usize, load_factor: f64) -> Result<Self> {
        if !load_factor.is_finite() || load_factor <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "load_factor must be a positive number, got {load_factor}"
            )));
        }
        let buckets = (expected as f64 / load_factor).round() as usize;
        Ok(Self::new(buckets.max(1)))
    }

    /// Sets the bucket count.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Checks the configuration can build a relation.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(Error::InvalidConfig(
                "bucket_count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RelationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_COUNT)
    }
}
