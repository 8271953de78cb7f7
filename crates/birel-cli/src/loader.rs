//! Pair file loading and relation construction.
//!
//! Text files hold one `x<delimiter>y` pair per line; blank lines and lines
//! starting with `#` are skipped. Files ending in `.json` hold an array of
//! two-element arrays: `[["FR", "French"], ["BE", "Flemish"]]`.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use birel_common::utils::hash::{DefaultKeyHasher, FnHasher, KeyHasher};
use birel_core::{Relation, RelationConfig};
use thiserror::Error;

use crate::{HasherKind, TableOptions};

/// Hasher over owned string keys.
pub type StrHasher = FnHasher<fn(&String) -> i64>;

/// The relation type every command works on.
pub type CliRelation = Relation<String, String, StrHasher, StrHasher>;

/// Errors raised while reading a pair file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A text line is not `x<delimiter>y`.
    #[error("{}:{line}: expected `x{delimiter}y`, found {content:?}", path.display())]
    Malformed {
        /// File being read.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Expected separator.
        delimiter: char,
        /// The offending line.
        content: String,
    },

    /// A JSON file is not an array of string pairs.
    #[error("{}: {source}", path.display())]
    Json {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

static NATURAL: LazyLock<DefaultKeyHasher> = LazyLock::new(DefaultKeyHasher::new);

fn natural_hash(s: &String) -> i64 {
    NATURAL.hash_key(s)
}

fn length_hash(s: &String) -> i64 {
    s.len() as i64
}

fn first_char_hash(s: &String) -> i64 {
    s.chars().next().map_or(0, |c| i64::from(u32::from(c)))
}

impl HasherKind {
    /// Returns the hash function this kind names.
    pub fn hasher(self) -> StrHasher {
        let f: fn(&String) -> i64 = match self {
            HasherKind::Default => natural_hash,
            HasherKind::Length => length_hash,
            HasherKind::FirstChar => first_char_hash,
        };
        FnHasher::new(f)
    }
}

/// Reads pairs from `path`.
pub fn read_pairs(path: &Path, delimiter: char) -> Result<Vec<(String, String)>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        return serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        });
    }

    parse_text(path, &content, delimiter)
}

fn parse_text(
    path: &Path,
    content: &str,
    delimiter: char,
) -> Result<Vec<(String, String)>, LoadError> {
    let mut pairs = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = || LoadError::Malformed {
            path: path.to_path_buf(),
            line: idx + 1,
            delimiter,
            content: raw.to_string(),
        };
        let (x, y) = line.split_once(delimiter).ok_or_else(&malformed)?;
        let (x, y) = (x.trim(), y.trim());
        if x.is_empty() || y.is_empty() {
            return Err(malformed());
        }
        pairs.push((x.to_string(), y.to_string()));
    }
    Ok(pairs)
}

/// Loads `path` into a relation configured by `opts`.
pub fn load_relation(path: &Path, opts: &TableOptions) -> anyhow::Result<CliRelation> {
    let pairs = read_pairs(path, opts.delimiter)?;

    let config = match opts.buckets {
        Some(buckets) => RelationConfig::new(buckets),
        None => RelationConfig::for_expected_pairs(pairs.len(), opts.load_factor)?,
    };
    let mut relation =
        Relation::with_hashers(config, opts.hasher_x.hasher(), opts.hasher_y.hasher())?;

    let read = pairs.len();
    relation.extend(pairs);
    tracing::info!(
        path = %path.display(),
        read,
        stored = relation.len(),
        buckets = relation.bucket_count(),
        "loaded relation"
    );
    if relation.len() < read {
        tracing::debug!(duplicates = read - relation.len(), "skipped duplicate pairs");
    }

    Ok(relation)
}
