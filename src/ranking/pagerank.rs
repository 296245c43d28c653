//! Iterative PageRank over the link graph.
//!
//! The engine computes a per-page importance score with the classic damped
//! update, evaluated for every page from a full snapshot of the previous
//! iteration (no new rank ever reads another new rank):
//!
//! ```text
//! new[a] = (1 - d)/N + d * sum over s linking to a of rank[s] / eff_out(s)
//! ```
//!
//! with damping d = 0.85 by default, so (1-d)/N of mass teleports uniformly
//! each pass. A source appearing twice in a target's incoming list
//! contributes twice; duplicate links carry real weight.
//!
//! Two engine behaviors are intentional departures from textbook PageRank:
//!
//! - `eff_out` floors a dangling page's out-degree to 1 instead of
//!   redistributing its mass across the universe. Graphs with dangling
//!   pages therefore finish with total mass below 1.
//! - The stop rule compares total mass between passes, not per-page
//!   movement. Mass-conserving graphs (no dangling pages) keep the sum
//!   fixed from the first pass, so the loop exits after one pass even when
//!   individual ranks are still far from stationary. A per-page L1 or max
//!   test is the stricter alternative if stationarity is ever required.
//!
//! There is no iteration cap; termination relies on the stop rule alone.

use crate::graph::LinkGraph;
use crate::types::{PageId, RankMap, RankingConfig, Universe};

/// Result of one PageRank run.
#[derive(Debug, Clone)]
pub struct RankOutcome {
    /// Final page id -> score mapping (the freshly computed pass).
    pub ranks: RankMap,
    /// Full update passes computed, including the final one.
    pub iterations: usize,
}

/// PageRank engine over a [`LinkGraph`].
pub struct PageRanker {
    config: RankingConfig,
}

impl PageRanker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Compute PageRank scores for every page in the graph's universe.
    ///
    /// Ranks start uniform at 1/N (summing to 1). Each pass computes all N
    /// new ranks from the previous mapping, then compares total mass: the
    /// pass's freshly computed mapping is returned once the relative change
    /// of the sum is within the configured threshold, or immediately when
    /// the previous sum is zero (the empty universe). Otherwise the new
    /// mapping becomes current and the loop continues.
    pub fn compute_ranks(&self, graph: &LinkGraph) -> RankOutcome {
        let universe = graph.universe();
        let n = universe.len() as f64;
        let damping = self.config.damping;

        let mut ranks = uniform_ranks(universe);
        let mut iterations = 0;

        loop {
            let new_ranks: RankMap = universe
                .iter()
                .map(|&id| {
                    let inbound: f64 = graph
                        .incoming(id)
                        .iter()
                        .map(|&source| ranks[&source] / effective_out_degree(graph, source))
                        .sum();
                    (id, (1.0 - damping) / n + damping * inbound)
                })
                .collect();
            iterations += 1;

            let total_old: f64 = ranks.values().sum();
            let total_new: f64 = new_ranks.values().sum();

            if total_old == 0.0 {
                return RankOutcome {
                    ranks: new_ranks,
                    iterations,
                };
            }
            if ((total_new - total_old) / total_old).abs() <= self.config.convergence_threshold {
                return RankOutcome {
                    ranks: new_ranks,
                    iterations,
                };
            }
            ranks = new_ranks;
        }
    }
}

/// Uniform starting distribution: every page at 1/N.
fn uniform_ranks(universe: &Universe) -> RankMap {
    let n = universe.len() as f64;
    universe.iter().map(|&id| (id, 1.0 / n)).collect()
}

/// Out-degree used for mass division, floored to 1 so dangling pages do
/// not divide by zero. See the module docs for the mass-leak consequence.
fn effective_out_degree(graph: &LinkGraph, id: PageId) -> f64 {
    graph.out_degree(id).max(1) as f64
}
