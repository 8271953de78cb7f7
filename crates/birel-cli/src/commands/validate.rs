//! Table consistency command.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::output::{self, Format};
use crate::{OutputFormat, TableOptions, loader};

/// Validation result output.
#[derive(Serialize)]
struct ValidationOutput {
    valid: bool,
    pair_count: usize,
    error: Option<String>,
}

/// Run the validate command.
pub fn run(path: &Path, opts: &TableOptions, format: OutputFormat, quiet: bool) -> Result<()> {
    let relation = loader::load_relation(path, opts)?;
    let result = relation.validate();

    let output = ValidationOutput {
        valid: result.is_ok(),
        pair_count: relation.len(),
        error: result.as_ref().err().map(|e| e.to_string()),
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => match &output.error {
            None => output::success(
                &format!("Tables are consistent ({} pairs)", output.pair_count),
                quiet,
            ),
            Some(e) => output::error(e),
        },
    }

    // Non-zero exit code on failure
    result?;
    Ok(())
}
