//! Bucket occupancy statistics command.

use std::path::Path;

use anyhow::Result;
use birel_core::TableStats;
use comfy_table::Cell;

use crate::output::{self, Format};
use crate::{OutputFormat, TableOptions, loader};

fn stats_row(name: &str, stats: &TableStats) -> Vec<Cell> {
    vec![
        Cell::new(name),
        Cell::new(stats.occupied_buckets),
        Cell::new(stats.empty_buckets),
        Cell::new(stats.longest_chain),
        Cell::new(format!("{:.2}", stats.mean_chain_length())),
    ]
}

/// Run the stats command.
pub fn run(path: &Path, opts: &TableOptions, format: OutputFormat, quiet: bool) -> Result<()> {
    let relation = loader::load_relation(path, opts)?;
    let stats = relation.stats();

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&stats, quiet)?,
        Format::Table => {
            if !quiet {
                println!(
                    "Pairs: {}, Buckets: {}, Load factor: {:.2}\n",
                    stats.pair_count, stats.bucket_count, stats.load_factor
                );

                let mut table = output::create_table();
                output::add_header(
                    &mut table,
                    &["Table", "Occupied", "Empty", "Longest chain", "Mean chain"],
                );
                table.add_row(stats_row("X", &stats.x_table));
                table.add_row(stats_row("Y", &stats.y_table));
                println!("{table}");
            }
        }
    }

    Ok(())
}
