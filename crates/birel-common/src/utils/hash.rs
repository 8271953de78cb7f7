//! Key hashers and bucket placement.
//!
//! A relation places every key with `bucket_index(hasher.hash_key(key), n)`.
//! Hashers return a signed 64-bit value so callers can plug in arbitrary
//! integer functions (string length, first character, a constant to force
//! collisions); [`bucket_index`] folds any of them, `i64::MIN` included,
//! into `0..n`.

use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Fixed seeds for the default hasher. Placement must not change between
/// two relations built in the same process, so the seeds are never random.
const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Maps a key to an integer used for bucket placement.
pub trait KeyHasher<T: ?Sized> {
    /// Hashes `key`. Equal keys must produce equal values.
    fn hash_key(&self, key: &T) -> i64;
}

/// The natural hash of a value, computed with `ahash` under fixed seeds.
#[derive(Clone)]
pub struct DefaultKeyHasher {
    state: ahash::RandomState,
}

impl DefaultKeyHasher {
    /// Creates the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ahash::RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3]),
        }
    }
}

impl Default for DefaultKeyHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DefaultKeyHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultKeyHasher")
    }
}

impl<T: Hash + ?Sized> KeyHasher<T> for DefaultKeyHasher {
    #[inline]
    fn hash_key(&self, key: &T) -> i64 {
        BuildHasher::hash_one(&self.state, key) as i64
    }
}

/// Adapts a function or closure into a [`KeyHasher`].
///
/// ```
/// use birel_common::{FnHasher, KeyHasher};
///
/// let by_len = FnHasher::new(|s: &String| s.len() as i64);
/// assert_eq!(by_len.hash_key(&"java".to_string()), 4);
/// ```
#[derive(Clone, Copy)]
pub struct FnHasher<F>(F);

impl<F> FnHasher<F> {
    /// Wraps `f`.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> fmt::Debug for FnHasher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnHasher")
    }
}

impl<T, F> KeyHasher<T> for FnHasher<F>
where
    T: ?Sized,
    F: Fn(&T) -> i64,
{
    #[inline]
    fn hash_key(&self, key: &T) -> i64 {
        (self.0)(key)
    }
}

/// Folds a hash into a bucket index in `0..bucket_count`.
///
/// Uses the unsigned magnitude of `hash`, so `i64::MIN` lands on a valid
/// bucket instead of overflowing.
///
/// # Panics
///
/// Panics if `bucket_count` is zero.
#[inline]
#[must_use]
pub fn bucket_index(hash: i64, bucket_count: usize) -> usize {
    assert!(bucket_count > 0, "bucket_count must be positive");
    (hash.unsigned_abs() % bucket_count as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_hasher_is_deterministic() {
        let a = DefaultKeyHasher::new();
        let b = DefaultKeyHasher::default();

        assert_eq!(a.hash_key("java"), b.hash_key("java"));
        assert_eq!(a.hash_key(&42u32), b.hash_key(&42u32));
    }

    #[test]
    fn test_default_hasher_agrees_across_borrowed_forms() {
        let hasher = DefaultKeyHasher::new();
        let owned = String::from("javascript");

        assert_eq!(hasher.hash_key(&owned), hasher.hash_key(owned.as_str()));
    }

    #[test]
    fn test_fn_hasher() {
        let first_char = FnHasher::new(|s: &str| s.chars().next().map_or(0, |c| c as i64));

        assert_eq!(first_char.hash_key("English"), 'E' as i64);
        assert_eq!(first_char.hash_key(""), 0);
    }

    #[test]
    fn test_bucket_index_min_value() {
        assert_eq!(bucket_index(i64::MIN, 1), 0);
        assert!(bucket_index(i64::MIN, 7) < 7);
        // 2^63 is divisible by 8
        assert_eq!(bucket_index(i64::MIN, 8), 0);
    }

    #[test]
    fn test_bucket_index_negative() {
        assert_eq!(bucket_index(-13, 10), 3);
        assert_eq!(bucket_index(13, 10), 3);
    }

    #[test]
    #[should_panic(expected = "bucket_count must be positive")]
    fn test_bucket_index_zero_buckets() {
        let _ = bucket_index(1, 0);
    }

    proptest! {
        #[test]
        fn bucket_index_in_range(hash in any::<i64>(), buckets in 1usize..10_000) {
            prop_assert!(bucket_index(hash, buckets) < buckets);
        }
    }
}
