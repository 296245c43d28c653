//! Core types for webrank - shared across the pipeline.
//!
//! The graph stages communicate through plain ordered maps rather than an
//! index-addressed graph type. Key design decisions:
//! - `BTreeMap`/`BTreeSet` everywhere: iteration order is ascending page id,
//!   which makes every stage deterministic without explicit sorting
//! - Adjacency values are `Vec<PageId>` in link-discovery order, duplicates
//!   and self-references preserved (the multiplicity carries rank mass)
//! - All structures are built fresh per run and never persisted

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Identifier of a crawled page. Page ids are non-negative integers assigned
/// by the crawler; the authoritative set of valid ids (the universe) is fixed
/// for the duration of one run.
pub type PageId = u64;

/// The closed set of valid page ids for one run.
pub type Universe = BTreeSet<PageId>;

/// Page id -> ordered outgoing (or incoming) link targets.
///
/// Invariant once built: every universe id is a key (empty vec when the page
/// has no links), and every listed target is itself a universe member.
pub type AdjacencyMap = BTreeMap<PageId, Vec<PageId>>;

/// Page id -> degree count (length of its adjacency or reverse entry).
pub type DegreeMap = BTreeMap<PageId, usize>;

/// Page id -> PageRank score.
pub type RankMap = BTreeMap<PageId, f64>;

/// Tunable parameters for the PageRank engine.
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Damping factor d: fraction of rank mass that follows links.
    /// The remaining (1-d)/N teleports uniformly.
    pub damping: f64,

    /// Relative change of the total rank mass below which iteration stops.
    ///
    /// This is a sum-based test: it compares Σnew against Σold, not any
    /// per-node distance. It is deliberately weaker than an L1/L∞ test and
    /// can stop while individual ranks are still moving; see
    /// `ranking::pagerank` for the full behavior.
    pub convergence_threshold: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            convergence_threshold: 0.005,
        }
    }
}

/// A page paired with its final score - the Top-K output unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedPage {
    pub id: PageId,
    pub score: f64,
}

impl RankedPage {
    pub fn new(id: PageId, score: f64) -> Self {
        Self { id, score }
    }
}

/// Ordering: descending by score, ties broken by ascending page id.
/// The tie-break mirrors the rank map's own iteration order, so sorting a
/// map's entries with this `Ord` is stable against re-runs.
impl Eq for RankedPage {}

impl PartialOrd for RankedPage {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedPage {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| self.id.cmp(&other.id))
    }
}
