//! Human-readable dump of both tables.

use std::fmt::{self, Display};

use super::Relation;
use crate::index::{ChainedTable, SlotId};

impl<X: Display, Y: Display, HX, HY> Relation<X, Y, HX, HY> {
    /// Renders every bucket of both tables, empty ones included.
    ///
    /// The output only depends on the table contents, so two relations
    /// built by the same sequence of operations render identically.
    ///
    /// ```text
    /// -- X table --
    /// Bucket 0: [(j, javascript), (j, java)]
    /// Bucket 1: []
    ///
    /// -- Y table --
    /// Bucket 0: [(java, j)]
    /// Bucket 1: [(javascript, j)]
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<X: Display, Y: Display, HX, HY> Display for Relation<X, Y, HX, HY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, "X", &self.table_x, |slot| self.pairs.get(slot))?;
        writeln!(f)?;
        write_table(f, "Y", &self.table_y, |slot| {
            self.pairs.get(slot).map(|(x, y)| (y, x))
        })
    }
}

fn write_table<'a, K, V>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    table: &ChainedTable,
    entry: impl Fn(SlotId) -> Option<(&'a K, &'a V)>,
) -> fmt::Result
where
    K: Display + 'a,
    V: Display + 'a,
{
    writeln!(f, "-- {name} table --")?;
    for bucket in 0..table.bucket_count() {
        write!(f, "Bucket {bucket}: [")?;
        for (i, (key, value)) in table.chain(bucket).filter_map(&entry).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({key}, {value})")?;
        }
        writeln!(f, "]")?;
    }
    Ok(())
}
