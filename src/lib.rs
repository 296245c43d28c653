//! webrank - link-graph construction and PageRank over a crawled page corpus.
//!
//! Ingests crawled HTML pages (one integer id per page), derives the
//! directed link graph restricted to the known id universe, reports
//! degree-distribution statistics, and computes a per-page PageRank score
//! by iterative fixed point.
//!
//! # Architecture
//!
//! ```text
//! Page Listing → Fetch + Extract → Graph Building → Degree Stats → PageRank → Top-K
//!       ↓              ↓                ↓                ↓             ↓         ↓
//!    ignore /       rayon pool      universe-        mean/median   iterative  sorted
//!    reqwest        + scraper       closed maps      /quintiles    passes     pairs
//! ```
//!
//! Acquisition (listing and fetching) may fan out across workers; every
//! stage from graph construction on is strictly sequential and starts only
//! after the full (id, outgoing links) pair set is collected. The core
//! stages exchange plain ordered maps - see [`types`] - so callers can
//! persist, display, or recombine the intermediate structures freely.

pub mod config;
pub mod corpus;
pub mod extraction;
pub mod graph;
pub mod ranking;
pub mod rendering;
pub mod types;

// Re-export core types
pub use types::{AdjacencyMap, DegreeMap, PageId, RankMap, RankedPage, RankingConfig, Universe};

// Re-export the pipeline stages
pub use corpus::{fetch_and_extract, DirectorySource, FetchReport, HttpSource, PageSource};
pub use extraction::extract_links;
pub use graph::{build_adjacency, degree_stats, invert_adjacency, DegreeSummary, LinkGraph};
pub use ranking::{top_k, PageRanker, RankOutcome};
pub use rendering::{Colorizer, RunReport};
