//! CLI command implementations.

pub mod info;
pub mod query;
pub mod render;
pub mod stats;
pub mod validate;
