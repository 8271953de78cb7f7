//! Pair lookup and projection commands.

use std::path::Path;

use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;

use crate::output::{self, Format};
use crate::{OutputFormat, TableOptions, loader};

/// Which component a projection starts from.
pub enum Side {
    /// Find every y paired with this x.
    X(String),
    /// Find every x paired with this y.
    Y(String),
}

#[derive(Serialize)]
struct ContainsOutput<'a> {
    x: &'a str,
    y: &'a str,
    contains: bool,
}

#[derive(Serialize)]
struct ProjectOutput<'a> {
    from: &'static str,
    key: &'a str,
    values: Vec<String>,
}

/// Run the contains command.
pub fn contains(
    path: &Path,
    x: &String,
    y: &String,
    opts: &TableOptions,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let relation = loader::load_relation(path, opts)?;
    let found = relation.contains(x, y);

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(
            &ContainsOutput {
                x,
                y,
                contains: found,
            },
            quiet,
        )?,
        Format::Table => {
            if !quiet {
                println!("({x}, {y}): {}", if found { "present" } else { "absent" });
            }
        }
    }

    Ok(())
}

/// Run the project command.
pub fn project(
    path: &Path,
    side: Side,
    opts: &TableOptions,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let relation = loader::load_relation(path, opts)?;

    let (from, key, values) = match &side {
        Side::X(x) => ("x", x, relation.project_from_x(x)),
        Side::Y(y) => ("y", y, relation.project_from_y(y)),
    };
    tracing::debug!(from, key = %key, matches = values.len(), "projected");

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(
            &ProjectOutput {
                from,
                key,
                values: values.into_iter().collect(),
            },
            quiet,
        )?,
        Format::Table => {
            if !quiet {
                let other = if from == "x" { "y" } else { "x" };
                let mut table = output::create_table();
                output::add_header(&mut table, &[&format!("{other} where {from} = {key}")]);
                for value in &values {
                    table.add_row(vec![Cell::new(value)]);
                }
                println!("{table}");
            }
        }
    }

    Ok(())
}
