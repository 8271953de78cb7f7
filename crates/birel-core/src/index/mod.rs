//! Storage structures behind a relation.
//!
//! - [`arena`] - Owns every stored pair exactly once
//! - [`chain`] - Chained hash tables of arena slots, one keyed by x, one by y

pub(crate) mod arena;
pub(crate) mod chain;

pub(crate) use arena::{PairArena, SlotId};
pub(crate) use chain::ChainedTable;
