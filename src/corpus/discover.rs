//! Page-file discovery for directory corpora.
//!
//! A directory corpus stores one crawled page per file, named `<id>.html`
//! (`0.html`, `13781.html`, ...). Discovery walks the tree with a parallel
//! gitignore-aware walker, keeps files whose stem is a bare integer id,
//! and returns a deterministic sorted listing.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use ignore::{WalkBuilder, WalkState};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::PageId;

/// Matches `<digits>.html` file names; the capture is the page id.
static PAGE_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.html$").expect("Invalid page-file pattern"));

/// Find the corpus page files under `root`.
///
/// Returns (page id, path) pairs sorted by id. File names that do not
/// match `<digits>.html` are ignored. Should the same id appear in several
/// subdirectories, the lexicographically first path wins.
pub fn find_page_files(root: &Path) -> Result<Vec<(PageId, PathBuf)>> {
    if !root.is_dir() {
        anyhow::bail!("Corpus path is not a directory: {}", root.display());
    }

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .require_git(false)
        .follow_links(false)
        .threads(0)
        .build_parallel();

    let found = Mutex::new(Vec::new());

    walker.run(|| {
        Box::new(|entry_result| {
            // Unreadable entries are skipped, matching the walker's own
            // tolerance for permission errors and broken symlinks
            if let Ok(entry) = entry_result {
                let path = entry.path();
                if path.is_file() {
                    if let Some(id) = page_id_of(path) {
                        if let Ok(mut found) = found.lock() {
                            found.push((id, path.to_path_buf()));
                        }
                    }
                }
            }
            WalkState::Continue
        })
    });

    let mut pages = found
        .into_inner()
        .map_err(|_| anyhow::anyhow!("Page collection mutex poisoned"))?;

    // Sort for determinism, then keep one path per id
    pages.sort();
    pages.dedup_by_key(|(id, _)| *id);

    Ok(pages)
}

/// Extract the page id from a file name, or None for non-corpus files.
fn page_id_of(path: &Path) -> Option<PageId> {
    let name = path.file_name()?.to_str()?;
    let captures = PAGE_FILE.captures(name)?;
    // Ids wider than u64 fail the parse and the file is skipped
    captures.get(1)?.as_str().parse().ok()
}
