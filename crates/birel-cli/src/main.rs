//! Birel CLI - build a relation from a pair file and inspect it.
//!
//! Each invocation loads the pairs, sizes the tables, and runs one query or
//! diagnostic. Nothing is persisted; the file is the source of truth.

mod commands;
mod loader;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Birel relation inspection tool.
///
/// Loads `x,y` pairs into a dual-indexed relation and answers queries from
/// either side.
#[derive(Parser)]
#[command(name = "birel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    table: TableOptions,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// How pair files are parsed and how the tables are sized.
#[derive(Args, Clone, Debug)]
struct TableOptions {
    /// Buckets per table (default: sized from the pair count)
    #[arg(long, global = true)]
    buckets: Option<usize>,

    /// Target pairs per bucket when sizing from the pair count
    #[arg(long, global = true, default_value_t = 0.75)]
    load_factor: f64,

    /// Separator between x and y in text pair files
    #[arg(long, global = true, default_value_t = ',')]
    delimiter: char,

    /// Hash function for x keys
    #[arg(long, global = true, default_value = "default")]
    hasher_x: HasherKind,

    /// Hash function for y keys
    #[arg(long, global = true, default_value = "default")]
    hasher_y: HasherKind,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default for TTY)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Bucket placement functions selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
enum HasherKind {
    /// Natural hash of the string
    #[default]
    Default,
    /// String length in bytes
    Length,
    /// Code point of the first character (0 when empty)
    FirstChar,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Show pair count, bucket count and load factor
    Info {
        /// Path to the pair file
        path: PathBuf,
    },

    /// Show bucket occupancy for both tables
    Stats {
        /// Path to the pair file
        path: PathBuf,
    },

    /// Dump every bucket of both tables
    Render {
        /// Path to the pair file
        path: PathBuf,
    },

    /// Check that the X and Y tables agree
    Validate {
        /// Path to the pair file
        path: PathBuf,
    },

    /// Check whether a pair is stored
    Contains {
        /// Path to the pair file
        path: PathBuf,
        /// First component
        x: String,
        /// Second component
        y: String,
    },

    /// List every y paired with an x, or every x paired with a y
    Project {
        /// Path to the pair file
        path: PathBuf,

        /// Project from this x
        #[arg(long, conflicts_with = "y", required_unless_present = "y")]
        x: Option<String>,

        /// Project from this y
        #[arg(long)]
        y: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let opts = &cli.table;
    let result = match cli.command {
        Commands::Info { path } => commands::info::run(&path, opts, cli.format, cli.quiet),
        Commands::Stats { path } => commands::stats::run(&path, opts, cli.format, cli.quiet),
        Commands::Render { path } => commands::render::run(&path, opts, cli.format, cli.quiet),
        Commands::Validate { path } => {
            commands::validate::run(&path, opts, cli.format, cli.quiet)
        }
        Commands::Contains { path, x, y } => {
            commands::query::contains(&path, &x, &y, opts, cli.format, cli.quiet)
        }
        Commands::Project { path, x, y } => {
            let side = match (x, y) {
                (Some(x), _) => commands::query::Side::X(x),
                (None, Some(y)) => commands::query::Side::Y(y),
                (None, None) => unreachable!("clap requires --x or --y"),
            };
            commands::query::project(&path, side, opts, cli.format, cli.quiet)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
