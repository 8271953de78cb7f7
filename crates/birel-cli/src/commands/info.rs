//! Relation info command.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::output::{self, Format};
use crate::{OutputFormat, TableOptions, loader};

/// Summary of a loaded relation.
#[derive(Serialize)]
struct InfoOutput {
    path: String,
    pair_count: usize,
    distinct_x: usize,
    distinct_y: usize,
    bucket_count: usize,
    load_factor: f64,
}

/// Run the info command.
pub fn run(path: &Path, opts: &TableOptions, format: OutputFormat, quiet: bool) -> Result<()> {
    let relation = loader::load_relation(path, opts)?;

    let xs: BTreeSet<&String> = relation.iter().map(|(x, _)| x).collect();
    let ys: BTreeSet<&String> = relation.iter().map(|(_, y)| y).collect();
    let output = InfoOutput {
        path: path.display().to_string(),
        pair_count: relation.len(),
        distinct_x: xs.len(),
        distinct_y: ys.len(),
        bucket_count: relation.bucket_count(),
        load_factor: relation.stats().load_factor,
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            let items = vec![
                ("Path", output.path),
                ("Pairs", output.pair_count.to_string()),
                ("Distinct x", output.distinct_x.to_string()),
                ("Distinct y", output.distinct_y.to_string()),
                ("Buckets", output.bucket_count.to_string()),
                ("Load factor", format!("{:.2}", output.load_factor)),
            ];
            output::print_key_value_table(&items, fmt, quiet)?;
        }
    }

    Ok(())
}
