//! The dual-indexed relation.
//!
//! A [`Relation`] stores a set of unique `(x, y)` pairs and answers queries
//! from either side. Each pair lives once in a slot arena and is linked into
//! two chained hash tables: the X table, bucketed by `hash(x)`, and the Y
//! table, bucketed by `hash(y)`. Every mutation goes through
//! `attach`/`detach`, which always touch both tables, so callers can never
//! observe a pair linked into one table but not the other.
//!
//! ```text
//!   X table (by x)            arena              Y table (by y)
//!   ┌──────────┐                                 ┌──────────┐
//!   │ bucket 0 │──► s2 ─► s0   s0: (j, java)   ◄──│ bucket 0 │◄─ s0 ◄─ s1
//!   │ bucket 1 │──► s1         s1: (k, java)      │ bucket 1 │◄─ s2
//!   │   ...    │               s2: (j, js)        │   ...    │
//!   └──────────┘                                 └──────────┘
//! ```

mod render;
mod validate;

#[cfg(test)]
mod proptests;

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use birel_common::utils::error::{Error, Result};
use birel_common::utils::hash::{DefaultKeyHasher, KeyHasher, bucket_index};
use smallvec::SmallVec;

use crate::config::{DEFAULT_LOAD_FACTOR, RelationConfig};
use crate::index::{ChainedTable, PairArena, SlotId};
use crate::statistics::{RelationStats, TableStats};

/// A set of unique `(x, y)` pairs indexed by both components.
///
/// Lookups by x go through the X table and lookups by y through the Y table,
/// so both directions cost O(1) on average and O(chain length) in the worst
/// case. The bucket count is fixed at construction.
///
/// Hashers are part of the relation's type and are supplied at construction
/// ([`Relation::with_hashers`]); they can only be swapped while the relation
/// is empty.
///
/// Query methods accept borrowed forms of the keys, as `HashMap` does. The
/// hasher must hash a borrowed key the same way as the owned one.
///
/// # Examples
///
/// ```
/// use birel_core::Relation;
///
/// let mut languages = Relation::new(10);
/// languages.put("j", "java");
/// languages.put("j", "javascript");
/// languages.put("c", "c++");
///
/// assert_eq!(languages.len(), 3);
/// assert!(languages.contains(&"j", &"java"));
/// assert_eq!(
///     languages.project_from_x(&"j").into_iter().collect::<Vec<_>>(),
///     vec!["java", "javascript"]
/// );
///
/// languages.remove(&"j", &"java").unwrap();
/// assert!(languages.remove(&"j", &"java").is_err());
/// assert_eq!(languages.len(), 2);
/// ```
#[derive(Clone)]
pub struct Relation<X, Y, HX = DefaultKeyHasher, HY = DefaultKeyHasher> {
    /// Configuration the tables were built from.
    config: RelationConfig,
    /// Owns every stored pair exactly once.
    pairs: PairArena<X, Y>,
    /// Slots bucketed by `hash(x)`.
    table_x: ChainedTable,
    /// Slots bucketed by `hash(y)`; mirrors `table_x`.
    table_y: ChainedTable,
    hasher_x: HX,
    hasher_y: HY,
}

impl<X, Y> Relation<X, Y> {
    /// Creates an empty relation with `bucket_count` buckets per table and
    /// the default hashers.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero. Use [`Relation::with_config`] to get
    /// an error instead.
    #[must_use]
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket_count must be positive");
        Self::build(
            RelationConfig::new(bucket_count),
            DefaultKeyHasher::new(),
            DefaultKeyHasher::new(),
        )
    }

    /// Creates an empty relation from `config` with the default hashers.
    pub fn with_config(config: RelationConfig) -> Result<Self> {
        Self::with_hashers(config, DefaultKeyHasher::new(), DefaultKeyHasher::new())
    }
}

impl<X, Y, HX, HY> Relation<X, Y, HX, HY> {
    /// Creates an empty relation using custom hashers.
    ///
    /// # Examples
    ///
    /// ```
    /// use birel_core::{FnHasher, Relation, RelationConfig};
    ///
    /// let mut r = Relation::with_hashers(
    ///     RelationConfig::new(15),
    ///     FnHasher::new(|country: &String| country.len() as i64),
    ///     FnHasher::new(|lang: &String| lang.chars().next().map_or(0, |c| c as i64)),
    /// )
    /// .unwrap();
    ///
    /// r.put("FR".to_string(), "French".to_string());
    /// assert!(r.contains(&"FR".to_string(), &"French".to_string()));
    /// ```
    pub fn with_hashers(config: RelationConfig, hasher_x: HX, hasher_y: HY) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, hasher_x, hasher_y))
    }

    fn build(config: RelationConfig, hasher_x: HX, hasher_y: HY) -> Self {
        Self {
            pairs: PairArena::new(),
            table_x: ChainedTable::new(config.bucket_count),
            table_y: ChainedTable::new(config.bucket_count),
            hasher_x,
            hasher_y,
            config,
        }
    }

    /// Returns the number of stored pairs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pairs are stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.len() == 0
    }

    /// Returns the number of buckets in each table.
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.config.bucket_count
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RelationConfig {
        &self.config
    }

    /// Returns the hasher used to place x keys.
    pub fn hasher_x(&self) -> &HX {
        &self.hasher_x
    }

    /// Returns the hasher used to place y keys.
    pub fn hasher_y(&self) -> &HY {
        &self.hasher_y
    }

    /// Replaces the x hasher.
    ///
    /// Only allowed on an empty relation (for instance right after
    /// [`clear`](Self::clear)): stored pairs were placed under the old hash
    /// and would become unreachable. Returns [`Error::NotEmpty`] otherwise
    /// and leaves the relation unchanged.
    pub fn set_hasher_x(&mut self, hasher: HX) -> Result<()> {
        if !self.is_empty() {
            return Err(Error::NotEmpty(self.len()));
        }
        self.hasher_x = hasher;
        tracing::debug!("replaced x hasher");
        Ok(())
    }

    /// Replaces the y hasher. Same restriction as
    /// [`set_hasher_x`](Self::set_hasher_x).
    pub fn set_hasher_y(&mut self, hasher: HY) -> Result<()> {
        if !self.is_empty() {
            return Err(Error::NotEmpty(self.len()));
        }
        self.hasher_y = hasher;
        tracing::debug!("replaced y hasher");
        Ok(())
    }

    /// Removes every pair and resets both tables to empty buckets.
    pub fn clear(&mut self) {
        let dropped = self.pairs.len();
        self.pairs.clear();
        self.table_x.reset();
        self.table_y.reset();
        tracing::debug!(dropped, buckets = self.bucket_count(), "cleared relation");
    }

    /// Iterates over all pairs in X-table order: buckets ascending, each
    /// chain most recently inserted first.
    pub fn iter(&self) -> impl Iterator<Item = (&X, &Y)> + '_ {
        (0..self.table_x.bucket_count())
            .flat_map(move |bucket| self.table_x.chain(bucket))
            .filter_map(move |slot| self.pairs.get(slot))
    }

    /// Collects bucket occupancy for both tables.
    #[must_use]
    pub fn stats(&self) -> RelationStats {
        RelationStats {
            pair_count: self.len(),
            bucket_count: self.bucket_count(),
            load_factor: self.len() as f64 / self.bucket_count() as f64,
            x_table: TableStats::from_table(&self.table_x),
            y_table: TableStats::from_table(&self.table_y),
        }
    }
}

impl<X, Y, HX, HY> Relation<X, Y, HX, HY>
where
    X: Eq,
    Y: Eq,
    HX: KeyHasher<X>,
    HY: KeyHasher<Y>,
{
    // === Queries ===

    /// Returns `true` if the pair `(x, y)` is stored.
    pub fn contains<QX, QY>(&self, x: &QX, y: &QY) -> bool
    where
        X: Borrow<QX>,
        Y: Borrow<QY>,
        QX: Eq + ?Sized,
        QY: Eq + ?Sized,
        HX: KeyHasher<QX>,
    {
        self.find(x, y).is_some()
    }

    /// Returns every `y` paired with `x`. Empty if there is none.
    pub fn project_from_x<Q>(&self, x: &Q) -> BTreeSet<Y>
    where
        X: Borrow<Q>,
        Y: Ord + Clone,
        Q: Eq + ?Sized,
        HX: KeyHasher<Q>,
    {
        let bucket = self.bucket_x(x);
        self.table_x
            .chain(bucket)
            .filter_map(|slot| self.pairs.get(slot))
            .filter(|(sx, _)| key_eq(*sx, x))
            .map(|(_, sy)| sy.clone())
            .collect()
    }

    /// Returns every `x` paired with `y`. Empty if there is none.
    pub fn project_from_y<Q>(&self, y: &Q) -> BTreeSet<X>
    where
        Y: Borrow<Q>,
        X: Ord + Clone,
        Q: Eq + ?Sized,
        HY: KeyHasher<Q>,
    {
        let bucket = self.bucket_y(y);
        self.table_y
            .chain(bucket)
            .filter_map(|slot| self.pairs.get(slot))
            .filter(|(_, sy)| key_eq(*sy, y))
            .map(|(sx, _)| sx.clone())
            .collect()
    }

    // === Mutation ===

    /// Adds the pair `(x, y)`.
    ///
    /// Returns `false` and changes nothing if the pair is already stored.
    pub fn put(&mut self, x: X, y: Y) -> bool {
        if self.find(&x, &y).is_some() {
            return false;
        }
        self.attach(x, y);
        true
    }

    /// Removes the pair `(x, y)` from both tables and returns it.
    ///
    /// Returns [`Error::NotFound`] without touching anything if the pair is
    /// not stored.
    pub fn remove<QX, QY>(&mut self, x: &QX, y: &QY) -> Result<(X, Y)>
    where
        X: Borrow<QX>,
        Y: Borrow<QY>,
        QX: Eq + ?Sized,
        QY: Eq + ?Sized,
        HX: KeyHasher<QX>,
    {
        let slot = self.find(x, y).ok_or(Error::NotFound)?;
        Ok(self.detach(slot))
    }

    /// Removes every pair whose first component is `x` and returns how many
    /// were removed. Pairs with a different x in the same bucket stay.
    pub fn remove_all_with_x<Q>(&mut self, x: &Q) -> usize
    where
        X: Borrow<Q>,
        Q: Eq + ?Sized,
        HX: KeyHasher<Q>,
    {
        let bucket = self.bucket_x(x);
        // Snapshot first: detaching edits the chain being scanned.
        let doomed: SmallVec<[SlotId; 8]> = self
            .table_x
            .chain(bucket)
            .filter(|&slot| {
                self.pairs
                    .get(slot)
                    .is_some_and(|(sx, _)| key_eq(sx, x))
            })
            .collect();

        for &slot in &doomed {
            self.detach(slot);
        }
        if !doomed.is_empty() {
            tracing::debug!(removed = doomed.len(), bucket, "removed all pairs with x");
        }
        doomed.len()
    }

    /// Removes every pair whose second component is `y` and returns how many
    /// were removed. Pairs with a different y in the same bucket stay.
    pub fn remove_all_with_y<Q>(&mut self, y: &Q) -> usize
    where
        Y: Borrow<Q>,
        Q: Eq + ?Sized,
        HY: KeyHasher<Q>,
    {
        let bucket = self.bucket_y(y);
        let doomed: SmallVec<[SlotId; 8]> = self
            .table_y
            .chain(bucket)
            .filter(|&slot| {
                self.pairs
                    .get(slot)
                    .is_some_and(|(_, sy)| key_eq(sy, y))
            })
            .collect();

        for &slot in &doomed {
            self.detach(slot);
        }
        if !doomed.is_empty() {
            tracing::debug!(removed = doomed.len(), bucket, "removed all pairs with y");
        }
        doomed.len()
    }

    // === Internals ===

    #[inline]
    fn bucket_x<Q: ?Sized>(&self, x: &Q) -> usize
    where
        HX: KeyHasher<Q>,
    {
        bucket_index(self.hasher_x.hash_key(x), self.table_x.bucket_count())
    }

    #[inline]
    fn bucket_y<Q: ?Sized>(&self, y: &Q) -> usize
    where
        HY: KeyHasher<Q>,
    {
        bucket_index(self.hasher_y.hash_key(y), self.table_y.bucket_count())
    }

    /// Finds the slot holding exactly `(x, y)`. Both components are compared
    /// so a colliding x in the same bucket is never mistaken for `x`.
    fn find<QX, QY>(&self, x: &QX, y: &QY) -> Option<SlotId>
    where
        X: Borrow<QX>,
        Y: Borrow<QY>,
        QX: Eq + ?Sized,
        QY: Eq + ?Sized,
        HX: KeyHasher<QX>,
    {
        let bucket = self.bucket_x(x);
        self.table_x.chain(bucket).find(|&slot| {
            self.pairs
                .get(slot)
                .is_some_and(|(sx, sy)| key_eq(sx, x) && key_eq(sy, y))
        })
    }

    /// Stores a new pair and links it into both tables.
    fn attach(&mut self, x: X, y: Y) {
        let bucket_x = self.bucket_x(&x);
        let bucket_y = self.bucket_y(&y);
        let slot = self.pairs.insert(x, y);
        self.table_x.link(bucket_x, slot);
        self.table_y.link(bucket_y, slot);
    }

    /// Unlinks a stored pair from both tables and frees its slot.
    ///
    /// # Panics
    ///
    /// Panics if either table lacks the link. That means the tables went
    /// out of sync, which no sequence of public calls can cause.
    fn detach(&mut self, slot: SlotId) -> (X, Y) {
        let Some((x, y)) = self.pairs.get(slot) else {
            out_of_sync("arena", slot.index());
        };
        let bucket_x = self.bucket_x(x);
        let bucket_y = self.bucket_y(y);

        if !self.table_x.unlink(bucket_x, slot) {
            out_of_sync("X", bucket_x);
        }
        if !self.table_y.unlink(bucket_y, slot) {
            out_of_sync("Y", bucket_y);
        }
        match self.pairs.remove(slot) {
            Some(pair) => pair,
            None => out_of_sync("arena", slot.index()),
        }
    }
}

/// Compares a stored key against a borrowed lookup key.
#[inline]
fn key_eq<K, Q>(stored: &K, key: &Q) -> bool
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    key == stored.borrow()
}

#[cold]
#[inline(never)]
fn out_of_sync(table: &str, position: usize) -> ! {
    tracing::error!(table, position, "relation tables out of sync");
    panic!("relation tables out of sync: {table} table has no entry at {position}");
}

impl<X, Y, HX, HY> PartialEq for Relation<X, Y, HX, HY>
where
    X: Eq,
    Y: Eq,
    HX: KeyHasher<X>,
    HY: KeyHasher<Y>,
{
    /// Two relations are equal when they hold the same pairs, whatever their
    /// bucket counts.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(x, y)| other.contains(x, y))
    }
}

impl<X, Y, HX, HY> Eq for Relation<X, Y, HX, HY>
where
    X: Eq,
    Y: Eq,
    HX: KeyHasher<X>,
    HY: KeyHasher<Y>,
{
}

impl<X, Y, HX, HY> Extend<(X, Y)> for Relation<X, Y, HX, HY>
where
    X: Eq,
    Y: Eq,
    HX: KeyHasher<X>,
    HY: KeyHasher<Y>,
{
    fn extend<I: IntoIterator<Item = (X, Y)>>(&mut self, iter: I) {
        for (x, y) in iter {
            self.put(x, y);
        }
    }
}

impl<X, Y> FromIterator<(X, Y)> for Relation<X, Y>
where
    X: Eq + std::hash::Hash,
    Y: Eq + std::hash::Hash,
{
    /// Sizes the tables for the collected pairs at the default load factor.
    fn from_iter<I: IntoIterator<Item = (X, Y)>>(iter: I) -> Self {
        let pairs: Vec<(X, Y)> = iter.into_iter().collect();
        let config =
            RelationConfig::for_expected_pairs(pairs.len(), DEFAULT_LOAD_FACTOR).unwrap_or_default();
        let mut relation = Self::build(config, DefaultKeyHasher::new(), DefaultKeyHasher::new());
        relation.extend(pairs);
        relation
    }
}

impl<X: fmt::Debug, Y: fmt::Debug, HX, HY> fmt::Debug for Relation<X, Y, HX, HY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("bucket_count", &self.bucket_count())
            .field("len", &self.len())
            .field("pairs", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use birel_common::utils::hash::FnHasher;

    const A: [&str; 10] = ["j", "j", "c", "c", "c", "p", "n", "k", "k", "k"];
    const B: [&str; 10] = [
        "java",
        "javascript",
        "c++",
        "c#",
        "c",
        "python",
        "node",
        "java",
        "node",
        "c",
    ];

    /// Ten language pairs in 13 buckets (load factor 0.75).
    fn languages() -> Relation<String, String> {
        let config = RelationConfig::for_expected_pairs(A.len(), DEFAULT_LOAD_FACTOR).unwrap();
        let mut r = Relation::with_config(config).unwrap();
        for (x, y) in A.iter().zip(B.iter()) {
            r.put((*x).to_string(), (*y).to_string());
        }
        r
    }

    type Colliding = Relation<u32, u32, FnHasher<fn(&u32) -> i64>, FnHasher<fn(&u32) -> i64>>;

    /// Every key lands in the same bucket on both sides.
    fn colliding(bucket_count: usize) -> Colliding {
        let constant: fn(&u32) -> i64 = |_| 7;
        Relation::with_hashers(
            RelationConfig::new(bucket_count),
            FnHasher::new(constant),
            FnHasher::new(constant),
        )
        .unwrap()
    }

    fn set<const N: usize>(items: [&str; N]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_new_relation_is_empty() {
        let r: Relation<i32, i32> = Relation::new(8);
        assert_eq!(r.len(), 0);
        assert!(r.is_empty());
        assert_eq!(r.bucket_count(), 8);
        assert!(!r.contains(&1, &1));
        assert!(r.project_from_x(&1).is_empty());
        assert!(r.project_from_y(&1).is_empty());
    }

    #[test]
    #[should_panic(expected = "bucket_count must be positive")]
    fn test_new_zero_buckets_panics() {
        let _r: Relation<i32, i32> = Relation::new(0);
    }

    #[test]
    fn test_with_config_zero_buckets() {
        let result: Result<Relation<i32, i32>> = Relation::with_config(RelationConfig::new(0));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_contains() {
        let r = languages();
        assert!(r.contains("j", "java"));
        assert!(!r.contains("r", "ruby"));
        assert!(!r.contains("j", "c"));
    }

    #[test]
    fn test_project_from_x() {
        let r = languages();
        assert_eq!(r.project_from_x("j"), set(["java", "javascript"]));
        assert_eq!(r.project_from_x("c"), set(["c++", "c#", "c"]));
        assert!(r.project_from_x("z").is_empty());
    }

    #[test]
    fn test_project_from_y() {
        let r = languages();
        assert_eq!(r.project_from_y("java"), set(["j", "k"]));
        assert_eq!(r.project_from_y("c"), set(["c", "k"]));
        assert!(r.project_from_y("ruby").is_empty());
    }

    #[test]
    fn test_put_is_idempotent() {
        let mut r = languages();
        assert_eq!(r.len(), A.len());

        assert!(!r.put("j".into(), "java".into()));
        assert_eq!(r.len(), A.len());
        assert_eq!(r.project_from_x("j"), set(["java", "javascript"]));

        assert!(r.put("g".into(), "groovy".into()));
        assert_eq!(r.len(), A.len() + 1);
        r.validate().unwrap();
    }

    #[test]
    fn test_scenario_remove_twice() {
        let mut r: Relation<&str, &str> = Relation::new(10);
        r.put("j", "java");
        r.put("j", "javascript");
        r.put("c", "c++");

        assert_eq!(r.project_from_x(&"j"), BTreeSet::from(["java", "javascript"]));
        assert_eq!(r.len(), 3);

        assert_eq!(r.remove(&"j", &"java"), Ok(("j", "java")));
        assert_eq!(r.len(), 2);
        assert!(!r.contains(&"j", &"java"));

        assert_eq!(r.remove(&"j", &"java"), Err(Error::NotFound));
        assert_eq!(r.len(), 2);
        r.validate().unwrap();
    }

    #[test]
    fn test_remove_missing_leaves_relation_untouched() {
        let mut r = languages();
        let before = r.render();

        assert_eq!(r.remove("not in the relation", "?"), Err(Error::NotFound));
        // Right x, wrong y
        assert_eq!(r.remove("j", "c"), Err(Error::NotFound));

        assert_eq!(r.len(), A.len());
        assert_eq!(r.render(), before);
    }

    #[test]
    fn test_remove_clears_both_sides() {
        let mut r = languages();
        r.remove("k", "java").unwrap();

        assert_eq!(r.project_from_y("java"), set(["j"]));
        assert_eq!(r.project_from_x("k"), set(["node", "c"]));
        r.validate().unwrap();
    }

    #[test]
    fn test_remove_all_with_x() {
        let mut r = languages();
        assert_eq!(r.remove_all_with_x("j"), 2);

        assert!(!r.contains("j", "java"));
        assert!(!r.contains("j", "javascript"));
        assert!(r.contains("c", "c"));
        assert!(r.contains("k", "java"));
        assert_eq!(r.project_from_y("java"), set(["k"]));
        assert_eq!(r.len(), A.len() - 2);
        r.validate().unwrap();
    }

    #[test]
    fn test_remove_all_with_y() {
        let mut r = languages();
        assert_eq!(r.remove_all_with_y("java"), 2);

        assert!(!r.contains("j", "java"));
        assert!(!r.contains("k", "java"));
        assert!(r.contains("c", "c"));
        assert!(r.contains("j", "javascript"));
        assert_eq!(r.len(), A.len() - 2);
        r.validate().unwrap();
    }

    #[test]
    fn test_remove_all_without_match_is_noop() {
        let mut r = languages();
        assert_eq!(r.remove_all_with_x("zz"), 0);
        assert_eq!(r.remove_all_with_y("cobol"), 0);
        assert_eq!(r.len(), A.len());
    }

    #[test]
    fn test_clear() {
        let mut r = languages();
        r.clear();

        assert_eq!(r.len(), 0);
        assert!(!r.contains("j", "java"));
        assert_eq!(r.bucket_count(), 13);
        assert_eq!(r.iter().count(), 0);
        r.validate().unwrap();

        r.put("j".into(), "java".into());
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_size_tracks_put_and_remove() {
        let mut r = languages();
        r.put("g".into(), "groovy".into());
        assert_eq!(r.len(), A.len() + 1);
        r.remove("g", "groovy").unwrap();
        assert_eq!(r.len(), A.len());
    }

    #[test]
    fn test_collisions_are_kept_apart() {
        let mut r = colliding(4);
        r.put(1, 10);
        r.put(2, 20);
        r.put(1, 11);

        assert!(r.contains(&1, &10));
        assert!(r.contains(&2, &20));
        assert!(!r.contains(&1, &20));
        assert_eq!(r.project_from_x(&1), BTreeSet::from([10, 11]));
        assert_eq!(r.project_from_x(&2), BTreeSet::from([20]));

        r.remove(&1, &10).unwrap();
        assert!(r.contains(&2, &20));
        assert!(r.contains(&1, &11));
        r.validate().unwrap();
    }

    #[test]
    fn test_put_with_colliding_x_is_not_a_duplicate() {
        let mut r = colliding(1);
        assert!(r.put(1, 5));
        // Same y, different x in the same bucket
        assert!(r.put(2, 5));
        assert_eq!(r.len(), 2);
        assert_eq!(r.project_from_y(&5), BTreeSet::from([1, 2]));
    }

    #[test]
    fn test_bulk_removal_with_collisions() {
        let mut r = colliding(3);
        for y in 0..5 {
            r.put(1, y);
            r.put(2, y);
        }

        assert_eq!(r.remove_all_with_x(&1), 5);
        assert_eq!(r.len(), 5);
        assert!((0..5).all(|y| r.contains(&2, &y)));
        assert!(r.project_from_x(&1).is_empty());

        assert_eq!(r.remove_all_with_y(&3), 1);
        assert_eq!(r.project_from_x(&2), BTreeSet::from([0, 1, 2, 4]));
        r.validate().unwrap();
    }

    #[test]
    fn test_min_value_hash() {
        let min: fn(&u32) -> i64 = |_| i64::MIN;
        let mut r = Relation::with_hashers(
            RelationConfig::new(7),
            FnHasher::new(min),
            FnHasher::new(min),
        )
        .unwrap();

        r.put(1u32, 2u32);
        r.put(3, 4);
        assert!(r.contains(&1, &2));
        assert_eq!(r.remove(&3, &4), Ok((3, 4)));
        r.validate().unwrap();
    }

    #[test]
    fn test_set_hasher_requires_empty() {
        let mut r = colliding(4);
        r.put(1, 1);

        let other: fn(&u32) -> i64 = |v| i64::from(*v);
        assert_eq!(r.set_hasher_x(FnHasher::new(other)), Err(Error::NotEmpty(1)));
        assert_eq!(r.set_hasher_y(FnHasher::new(other)), Err(Error::NotEmpty(1)));
        assert!(r.contains(&1, &1));

        r.clear();
        r.set_hasher_x(FnHasher::new(other)).unwrap();
        r.set_hasher_y(FnHasher::new(other)).unwrap();
        r.put(1, 2);
        r.put(5, 6);
        assert_eq!(r.hasher_x().hash_key(&5), 5);
        assert!(r.contains(&5, &6));
        r.validate().unwrap();
    }

    #[test]
    fn test_iter_order_is_deterministic() {
        let mut r = colliding(2);
        r.put(1, 1);
        r.put(2, 2);
        r.put(3, 3);

        let pairs: Vec<_> = r.iter().map(|(x, y)| (*x, *y)).collect();
        assert_eq!(pairs, vec![(3, 3), (2, 2), (1, 1)]);
    }

    #[test]
    fn test_equality_ignores_bucket_count() {
        let mut a: Relation<i32, i32> = Relation::new(3);
        let mut b: Relation<i32, i32> = Relation::new(11);
        a.extend([(1, 2), (3, 4)]);
        b.extend([(3, 4), (1, 2)]);
        assert_eq!(a, b);

        b.put(5, 6);
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_iterator() {
        let r: Relation<&str, &str> = [("FR", "French"), ("BE", "French"), ("FR", "French")]
            .into_iter()
            .collect();

        assert_eq!(r.len(), 2);
        // 3 collected pairs at 0.75 -> 4 buckets
        assert_eq!(r.bucket_count(), 4);
        assert_eq!(r.project_from_y(&"French"), BTreeSet::from(["BE", "FR"]));
    }

    #[test]
    fn test_stats() {
        let mut r = colliding(4);
        r.put(1, 1);
        r.put(2, 2);

        let stats = r.stats();
        assert_eq!(stats.pair_count, 2);
        assert_eq!(stats.bucket_count, 4);
        assert_eq!(stats.load_factor, 0.5);
        assert_eq!(stats.x_table.occupied_buckets, 1);
        assert_eq!(stats.x_table.empty_buckets, 3);
        assert_eq!(stats.x_table.longest_chain, 2);
        assert_eq!(stats.y_table, stats.x_table);
    }

    #[test]
    fn test_debug_lists_pairs() {
        let mut r: Relation<&str, &str> = Relation::new(1);
        r.put("j", "java");
        assert_eq!(
            format!("{r:?}"),
            r#"Relation { bucket_count: 1, len: 1, pairs: [("j", "java")] }"#
        );
    }

    #[test]
    #[should_panic(expected = "relation tables out of sync: Y table")]
    fn test_missing_mirror_panics() {
        let mut r = colliding(2);
        r.put(1, 1);

        // Drop the Y link behind the relation's back
        let slot = r.find(&1, &1).unwrap();
        let bucket_y = r.bucket_y(&1u32);
        assert!(r.table_y.unlink(bucket_y, slot));

        let _ = r.remove(&1, &1);
    }
}
