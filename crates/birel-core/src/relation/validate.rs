//! Consistency check between the X and Y tables.

use birel_common::utils::error::{Error, Result};
use birel_common::utils::hash::KeyHasher;

use super::Relation;

impl<X, Y, HX, HY> Relation<X, Y, HX, HY>
where
    X: Eq,
    Y: Eq,
    HX: KeyHasher<X>,
    HY: KeyHasher<Y>,
{
    /// Walks both tables independently and checks they describe the same
    /// set of pairs.
    ///
    /// Verifies that every link points at a live pair placed in the bucket
    /// its key hashes to, that each pair has exactly one mirror in the other
    /// table, that no pair is stored twice, and that both tables hold
    /// exactly [`len`](Self::len) links.
    ///
    /// Cost is O(n × chain length); meant for tests and diagnostics.
    pub fn validate(&self) -> Result<()> {
        let mut x_links = 0;
        for bucket in 0..self.table_x.bucket_count() {
            for slot in self.table_x.chain(bucket) {
                x_links += 1;
                let Some((x, y)) = self.pairs.get(slot) else {
                    return Err(inconsistent(format!("X bucket {bucket} links a free slot")));
                };
                let home = self.bucket_x(x);
                if home != bucket {
                    return Err(inconsistent(format!(
                        "pair in X bucket {bucket} hashes to bucket {home}"
                    )));
                }
                let copies = self
                    .table_x
                    .chain(bucket)
                    .filter_map(|s| self.pairs.get(s))
                    .filter(|(sx, sy)| *sx == x && *sy == y)
                    .count();
                if copies != 1 {
                    return Err(inconsistent(format!(
                        "pair in X bucket {bucket} is stored {copies} times"
                    )));
                }
                let mirror = self.bucket_y(y);
                let mirrors = self.table_y.chain(mirror).filter(|&s| s == slot).count();
                if mirrors != 1 {
                    return Err(inconsistent(format!(
                        "pair in X bucket {bucket} has {mirrors} mirrors in Y bucket {mirror}"
                    )));
                }
            }
        }

        let mut y_links = 0;
        for bucket in 0..self.table_y.bucket_count() {
            for slot in self.table_y.chain(bucket) {
                y_links += 1;
                let Some((x, y)) = self.pairs.get(slot) else {
                    return Err(inconsistent(format!("Y bucket {bucket} links a free slot")));
                };
                let home = self.bucket_y(y);
                if home != bucket {
                    return Err(inconsistent(format!(
                        "pair in Y bucket {bucket} hashes to bucket {home}"
                    )));
                }
                let mirror = self.bucket_x(x);
                let mirrors = self.table_x.chain(mirror).filter(|&s| s == slot).count();
                if mirrors != 1 {
                    return Err(inconsistent(format!(
                        "pair in Y bucket {bucket} has {mirrors} mirrors in X bucket {mirror}"
                    )));
                }
            }
        }

        let len = self.len();
        if x_links != len || y_links != len {
            return Err(inconsistent(format!(
                "size is {len} but X table has {x_links} links and Y table has {y_links}"
            )));
        }
        Ok(())
    }
}

fn inconsistent(detail: String) -> Error {
    Error::Inconsistent(detail)
}
