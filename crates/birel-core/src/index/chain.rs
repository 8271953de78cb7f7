//! Chained hash tables over arena slots.
//!
//! A [`ChainedTable`] is a fixed array of buckets; each bucket is an owned
//! chain of [`SlotId`]s whose key hashed to that bucket. Chains are short on
//! average (the load factor is chosen by the caller), so they are kept
//! inline in a `SmallVec` and searched linearly.
//!
//! Entries are appended at the tail and read back newest-first, which gives
//! the "most recent first" chain order without relinking anything.

use super::arena::SlotId;
use smallvec::SmallVec;

/// Inline capacity of a chain before it spills to the heap.
const INLINE_CHAIN: usize = 4;

/// One bucket's collision chain.
pub(crate) type Chain = SmallVec<[SlotId; INLINE_CHAIN]>;

/// A fixed-size array of chains.
#[derive(Debug, Clone)]
pub(crate) struct ChainedTable {
    buckets: Vec<Chain>,
}

impl ChainedTable {
    /// Creates a table with `bucket_count` empty chains.
    pub(crate) fn new(bucket_count: usize) -> Self {
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Chain::new);
        Self { buckets }
    }

    #[inline]
    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Slots chained in `bucket`, most recently linked first.
    #[inline]
    pub(crate) fn chain(&self, bucket: usize) -> impl Iterator<Item = SlotId> + '_ {
        self.buckets[bucket].iter().rev().copied()
    }

    /// Length of the chain in `bucket`.
    #[inline]
    pub(crate) fn chain_len(&self, bucket: usize) -> usize {
        self.buckets[bucket].len()
    }

    /// Links `slot` at the head of `bucket`'s chain.
    #[inline]
    pub(crate) fn link(&mut self, bucket: usize, slot: SlotId) {
        self.buckets[bucket].push(slot);
    }

    /// Unlinks `slot` from `bucket`, keeping the order of the others.
    ///
    /// Returns `false` if the chain did not hold `slot`.
    pub(crate) fn unlink(&mut self, bucket: usize, slot: SlotId) -> bool {
        let chain = &mut self.buckets[bucket];
        match chain.iter().position(|&s| s == slot) {
            Some(pos) => {
                chain.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of links across all chains.
    pub(crate) fn link_count(&self) -> usize {
        self.buckets.iter().map(|c| c.len()).sum()
    }

    /// Empties every chain, releasing spilled storage.
    pub(crate) fn reset(&mut self) {
        for chain in &mut self.buckets {
            *chain = Chain::new();
        }
    }
}
