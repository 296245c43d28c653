//! Adjacency construction, inversion, and the `LinkGraph` container.
//!
//! The closure invariant established here is what the rest of the pipeline
//! leans on: every universe id is a key of both structures, and every listed
//! target/source is itself a universe member. Downstream stages never check
//! membership again.

use crate::types::{AdjacencyMap, DegreeMap, PageId, Universe};

/// Build the closed adjacency structure from extracted link pairs.
///
/// The algorithm follows the contract exactly:
/// 1. Accumulate each (page id, outgoing) pair as a provisional entry
/// 2. Remove entries whose key is not a universe member
/// 3. Filter every remaining sequence to universe-member targets
/// 4. Normalize universe ids that supplied no pair to empty entries
///
/// Input pair order does not affect the result (each page id appears at most
/// once, so accumulation is permutation-idempotent). Duplicate targets and
/// self-references survive filtering; they are edges like any other.
pub fn build_adjacency(
    pairs: impl IntoIterator<Item = (PageId, Vec<PageId>)>,
    universe: &Universe,
) -> AdjacencyMap {
    let mut adjacency = AdjacencyMap::new();
    for (page_id, outgoing) in pairs {
        adjacency.insert(page_id, outgoing);
    }

    adjacency.retain(|id, _| universe.contains(id));
    for targets in adjacency.values_mut() {
        targets.retain(|target| universe.contains(target));
    }
    for &id in universe {
        adjacency.entry(id).or_default();
    }

    adjacency
}

/// Invert an adjacency structure: target id -> ordered source ids.
///
/// Pure structural inversion, one incoming entry per edge, so duplicate and
/// self links keep their multiplicity. Sources appear in ascending-id order
/// (the adjacency map's iteration order); within one source, in that source's
/// link order. Every universe id gets a key, empty when nothing links to it.
pub fn invert_adjacency(adjacency: &AdjacencyMap, universe: &Universe) -> AdjacencyMap {
    let mut reverse: AdjacencyMap = universe.iter().map(|&id| (id, Vec::new())).collect();

    for (&source, targets) in adjacency {
        for target in targets {
            if let Some(incoming) = reverse.get_mut(target) {
                incoming.push(source);
            }
        }
    }

    reverse
}

/// The directed link graph over one run's page universe.
///
/// Owns the universe, the adjacency structure, and its inversion, all built
/// once from the complete pair sequence. The rank engine reads both
/// directions; degree statistics read the derived degree mappings.
#[derive(Debug)]
pub struct LinkGraph {
    universe: Universe,
    adjacency: AdjacencyMap,
    reverse: AdjacencyMap,
}

impl LinkGraph {
    /// Build the graph from (page id, outgoing ids) pairs and the universe.
    pub fn build(pairs: impl IntoIterator<Item = (PageId, Vec<PageId>)>, universe: Universe) -> Self {
        let adjacency = build_adjacency(pairs, &universe);
        let reverse = invert_adjacency(&adjacency, &universe);
        Self {
            universe,
            adjacency,
            reverse,
        }
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    pub fn reverse(&self) -> &AdjacencyMap {
        &self.reverse
    }

    /// Number of pages in the universe.
    pub fn page_count(&self) -> usize {
        self.universe.len()
    }

    /// Number of retained edges (sum of out-degrees).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Outgoing-link count of one page. Zero for ids outside the universe.
    pub fn out_degree(&self, id: PageId) -> usize {
        self.adjacency.get(&id).map_or(0, Vec::len)
    }

    /// Sources linking to one page, in ascending source-id order.
    pub fn incoming(&self, id: PageId) -> &[PageId] {
        self.reverse.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Page id -> outgoing-link count, for every universe id.
    pub fn out_degrees(&self) -> DegreeMap {
        self.adjacency
            .iter()
            .map(|(&id, targets)| (id, targets.len()))
            .collect()
    }

    /// Page id -> incoming-link count, for every universe id.
    pub fn in_degrees(&self) -> DegreeMap {
        self.reverse
            .iter()
            .map(|(&id, sources)| (id, sources.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn universe(ids: &[PageId]) -> Universe {
        ids.iter().copied().collect::<BTreeSet<_>>()
    }

    #[test]
    fn test_closure_invariant() {
        let u = universe(&[0, 1, 2]);
        let pairs = vec![
            (0, vec![1, 7, 2]),  // 7 is outside the universe
            (9, vec![0]),        // 9 is outside the universe
        ];

        let adjacency = build_adjacency(pairs, &u);

        // Every universe id is a key, nothing else is
        let keys: Vec<PageId> = adjacency.keys().copied().collect();
        assert_eq!(keys, vec![0, 1, 2]);

        // Every retained target is a universe member
        for targets in adjacency.values() {
            assert!(targets.iter().all(|t| u.contains(t)));
        }
        assert_eq!(adjacency[&0], vec![1, 2]);
    }

    #[test]
    fn test_missing_pages_normalized_to_empty() {
        let u = universe(&[0, 1, 2, 3]);
        let adjacency = build_adjacency(vec![(1, vec![0])], &u);

        assert_eq!(adjacency.len(), 4);
        assert!(adjacency[&0].is_empty());
        assert!(adjacency[&2].is_empty());
        assert!(adjacency[&3].is_empty());
    }

    #[test]
    fn test_duplicates_and_self_links_preserved() {
        let u = universe(&[0, 1]);
        let adjacency = build_adjacency(vec![(0, vec![1, 1, 0, 1])], &u);

        assert_eq!(adjacency[&0], vec![1, 1, 0, 1]);
    }

    #[test]
    fn test_permutation_idempotent() {
        let u = universe(&[0, 1, 2]);
        let forward = vec![(0, vec![1]), (1, vec![2]), (2, vec![0, 1])];
        let mut shuffled = forward.clone();
        shuffled.reverse();

        assert_eq!(build_adjacency(forward, &u), build_adjacency(shuffled, &u));
    }

    #[test]
    fn test_empty_universe() {
        let u = universe(&[]);
        let adjacency = build_adjacency(vec![(0, vec![1])], &u);
        assert!(adjacency.is_empty());
        assert!(invert_adjacency(&adjacency, &u).is_empty());
    }

    #[test]
    fn test_inversion_count_conservation() {
        let u = universe(&[0, 1, 2, 3]);
        let adjacency = build_adjacency(
            vec![(0, vec![1, 2, 1]), (1, vec![2]), (2, vec![0, 0])],
            &u,
        );
        let reverse = invert_adjacency(&adjacency, &u);

        let out_total: usize = adjacency.values().map(Vec::len).sum();
        let in_total: usize = reverse.values().map(Vec::len).sum();
        assert_eq!(out_total, in_total);

        // Duplicate edges keep their multiplicity on the incoming side
        assert_eq!(reverse[&1], vec![0, 0]);
        assert_eq!(reverse[&0], vec![2, 2]);
        // Untouched page keyed with an empty list
        assert!(reverse[&3].is_empty());
    }

    #[test]
    fn test_inversion_source_order_ascending() {
        let u = universe(&[0, 1, 2, 5]);
        let adjacency = build_adjacency(
            vec![(5, vec![1]), (0, vec![1]), (2, vec![1])],
            &u,
        );
        let reverse = invert_adjacency(&adjacency, &u);

        assert_eq!(reverse[&1], vec![0, 2, 5]);
    }

    #[test]
    fn test_link_graph_cycle() {
        let u = universe(&[0, 1, 2]);
        let graph = LinkGraph::build(vec![(0, vec![1]), (1, vec![2]), (2, vec![0])], u);

        assert_eq!(graph.page_count(), 3);
        assert_eq!(graph.edge_count(), 3);

        let out = graph.out_degrees();
        let inc = graph.in_degrees();
        for id in 0..3 {
            assert_eq!(out[&id], 1);
            assert_eq!(inc[&id], 1);
        }
        assert_eq!(graph.out_degree(0), 1);
        assert_eq!(graph.incoming(0), &[2]);
    }

    #[test]
    fn test_degrees_for_id_outside_universe() {
        let u = universe(&[0]);
        let graph = LinkGraph::build(vec![(0, vec![0])], u);

        assert_eq!(graph.out_degree(42), 0);
        assert!(graph.incoming(42).is_empty());
    }
}
