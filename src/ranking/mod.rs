//! Rank computation - from the link graph to ordered importance scores.
//!
//! PageRank runs over the adjacency and reverse structures the graph stage
//! built; the Top-K selector orders the final mapping for presentation.
//! Both consume finished structures only - nothing here reaches back into
//! graph construction.

mod pagerank;
mod topk;

pub use pagerank::{PageRanker, RankOutcome};
pub use topk::top_k;
