//! Bucket occupancy statistics.
//!
//! Useful to judge whether the bucket count (and hasher) spreads keys well:
//! a long `longest_chain` with many `empty_buckets` means keys collide.

use serde::Serialize;

use crate::index::ChainedTable;

/// Occupancy of one hash table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStats {
    /// Buckets holding at least one pair.
    pub occupied_buckets: usize,
    /// Buckets holding nothing.
    pub empty_buckets: usize,
    /// Length of the longest chain.
    pub longest_chain: usize,
    /// Total links across all chains.
    pub links: usize,
}

impl TableStats {
    pub(crate) fn from_table(table: &ChainedTable) -> Self {
        let mut stats = Self {
            occupied_buckets: 0,
            empty_buckets: 0,
            longest_chain: 0,
            links: 0,
        };
        for bucket in 0..table.bucket_count() {
            let len = table.chain_len(bucket);
            if len == 0 {
                stats.empty_buckets += 1;
            } else {
                stats.occupied_buckets += 1;
            }
            stats.longest_chain = stats.longest_chain.max(len);
            stats.links += len;
        }
        stats
    }

    /// Average chain length over non-empty buckets.
    #[must_use]
    pub fn mean_chain_length(&self) -> f64 {
        if self.occupied_buckets == 0 {
            0.0
        } else {
            self.links as f64 / self.occupied_buckets as f64
        }
    }
}

/// Snapshot of a relation's size and table occupancy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationStats {
    /// Number of stored pairs.
    pub pair_count: usize,
    /// Buckets per table.
    pub bucket_count: usize,
    /// `pair_count / bucket_count`.
    pub load_factor: f64,
    /// Occupancy of the table keyed by x.
    pub x_table: TableStats,
    /// Occupancy of the table keyed by y.
    pub y_table: TableStats,
}
