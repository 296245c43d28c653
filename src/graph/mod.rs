//! Link graph construction over a closed page-id universe.
//!
//! The graph stage is strategy-agnostic about where pages came from - it
//! consumes (page id, outgoing ids) pairs plus the authoritative universe
//! set and produces:
//! - the adjacency structure (universe-closed, every id keyed)
//! - the reverse adjacency structure (pure inversion)
//! - out-/in-degree mappings and their descriptive statistics
//!
//! Construction is a batch operation: it must not start until the full pair
//! sequence exists, because universe filtering needs the complete id set.

mod adjacency;
mod stats;

pub use adjacency::{build_adjacency, invert_adjacency, LinkGraph};
pub use stats::{degree_stats, DegreeSummary};
