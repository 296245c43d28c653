//! Corpus acquisition - listing, fetching, and link-extraction fan-out.
//!
//! This is the producer side of the pipeline: a [`PageSource`] names the
//! universe and serves raw pages, and [`fetch_and_extract`] reduces the
//! whole corpus to (page id, outgoing ids) pairs behind a hard barrier.
//! The consumer side (graph construction, ranking) is strictly sequential
//! and starts only once that barrier is crossed.

mod discover;
mod fetch;
mod source;

pub use discover::find_page_files;
pub use fetch::{fetch_and_extract, FetchReport};
pub use source::{DirectorySource, HttpSource, PageSource};
