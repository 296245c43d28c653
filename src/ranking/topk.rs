//! Top-K selection over a rank mapping.

use crate::types::{RankMap, RankedPage};

/// Return the K highest-scoring pages, descending by score.
///
/// Ties break by ascending page id so repeated runs over the same corpus
/// produce identical output. When `k` exceeds the mapping size every entry
/// is returned, still fully sorted.
pub fn top_k(ranks: &RankMap, k: usize) -> Vec<RankedPage> {
    let mut pages: Vec<RankedPage> = ranks
        .iter()
        .map(|(&id, &score)| RankedPage::new(id, score))
        .collect();
    pages.sort();
    pages.truncate(k);
    pages
}
