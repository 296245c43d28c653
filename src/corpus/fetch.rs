//! Parallel fetch and extract with a hard collection barrier.
//!
//! Acquisition fans out across a worker pool, but graph construction must
//! see the complete pair set before it starts (universe filtering needs
//! every id), so this stage collects everything into memory and only then
//! returns. Failed pages are counted and skipped; they contribute no pair
//! and the graph builder later normalizes them to empty entries.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use rayon::prelude::*;

use crate::extraction::extract_links;
use crate::types::PageId;

use super::source::PageSource;

/// Progress line interval in verbose mode.
const PROGRESS_STEP: usize = 1000;

/// Everything the acquisition barrier produced.
#[derive(Debug)]
pub struct FetchReport {
    /// One (page id, outgoing ids) pair per successfully fetched page,
    /// in id order.
    pub pairs: Vec<(PageId, Vec<PageId>)>,
    /// Pages that failed to fetch and were skipped.
    pub failed: usize,
}

/// Fetch every listed page and extract its links, in parallel.
///
/// `workers` sizes the pool; 0 means one worker per available core. The
/// call returns only after every page has been attempted - the barrier
/// the sequential graph stages rely on.
pub fn fetch_and_extract(
    source: &dyn PageSource,
    ids: &[PageId],
    workers: usize,
    verbose: bool,
) -> Result<FetchReport> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build fetch pool: {}", e))?;

    let total = ids.len();
    let done = AtomicUsize::new(0);

    let results: Vec<(PageId, Result<Vec<PageId>>)> = pool.install(|| {
        ids.par_iter()
            .map(|&id| {
                let links = source.fetch(id).map(|content| extract_links(&content));
                let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
                if verbose && (finished % PROGRESS_STEP == 0 || finished == total) {
                    eprintln!("  {}/{} pages", finished, total);
                }
                (id, links)
            })
            .collect()
    });

    let mut pairs = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (id, outcome) in results {
        match outcome {
            Ok(outgoing) => pairs.push((id, outgoing)),
            Err(err) => {
                failed += 1;
                if verbose {
                    eprintln!("⚠️  Skipping page {}: {}", id, err);
                }
            }
        }
    }

    Ok(FetchReport { pairs, failed })
}
