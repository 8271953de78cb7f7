//! Table dump command.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::output::{self, Format};
use crate::{OutputFormat, TableOptions, loader};

#[derive(Serialize)]
struct RenderOutput {
    bucket_count: usize,
    render: String,
}

/// Run the render command.
pub fn run(path: &Path, opts: &TableOptions, format: OutputFormat, quiet: bool) -> Result<()> {
    let relation = loader::load_relation(path, opts)?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(
            &RenderOutput {
                bucket_count: relation.bucket_count(),
                render: relation.render(),
            },
            quiet,
        )?,
        Format::Table => {
            if !quiet {
                print!("{}", relation.render());
            }
        }
    }

    Ok(())
}
