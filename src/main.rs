//! webrank CLI - link graph and PageRank over a crawled page corpus.
//!
//! This is the command-line entry point for webrank. It orchestrates the
//! full pipeline:
//!
//! 1. Page Listing: enumerate the id universe from a directory or a
//!    remote origin
//! 2. Fetch + Extract: pull raw pages across a worker pool and reduce
//!    each to its outgoing page ids (hard barrier before the next stage)
//! 3. Graph Building: universe-closed adjacency plus its inversion
//! 4. Degree Stats: out-/in-degree distribution summaries
//! 5. PageRank: iterative scores with the rank-sum stop rule
//! 6. Report: top-K table and statistics, console or JSON
//!
//! Stages 3-6 are strictly sequential; only acquisition is parallel.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Link graph and PageRank over a crawled page corpus
///
/// webrank reads a corpus of crawled pages named `<id>.html`, builds the
/// directed link graph over the discovered id universe, and reports degree
/// statistics plus the top pages by PageRank.
///
/// Examples:
///   webrank ./corpus                    # Local corpus directory
///   webrank ./corpus --top 10 --stats   # Bigger table + run statistics
///   webrank --base-url http://host/web --count 5000
///   webrank ./corpus --json             # Machine-readable report
#[derive(Parser, Debug)]
#[command(name = "webrank")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Corpus directory containing `<id>.html` page files
    ///
    /// The page-id universe is the set of ids discovered on disk.
    /// Mutually exclusive with --base-url.
    #[arg(value_name = "DIR", conflicts_with = "base_url")]
    pub corpus: Option<PathBuf>,

    /// Remote corpus origin serving pages at `<URL>/<id>.html`
    ///
    /// Requires --count; the universe is ids 0..count. Failed pages are
    /// retried with backoff, then skipped.
    #[arg(long, value_name = "URL", requires = "count")]
    pub base_url: Option<String>,

    /// Number of remote pages (universe size for --base-url)
    #[arg(long, value_name = "N", requires = "base_url")]
    pub count: Option<u64>,

    /// How many top-ranked pages to report
    ///
    /// Defaults to 5, or the [ranking] top value in webrank.toml.
    #[arg(short, long, value_name = "K")]
    pub top: Option<usize>,

    /// PageRank convergence threshold
    ///
    /// Iteration stops when the relative change of the total rank mass
    /// between passes is at most this value. Defaults to 0.005.
    #[arg(long, value_name = "T")]
    pub threshold: Option<f64>,

    /// Fetch worker threads
    ///
    /// Sizes the parallel fetch pool; 0 (the default) means one worker
    /// per available core.
    #[arg(short, long, value_name = "W")]
    pub workers: Option<usize>,

    /// Show statistics
    ///
    /// Appends a run-statistics footer to the report:
    ///   - Pages discovered / fetch failures
    ///   - Edges retained
    ///   - PageRank iterations
    ///   - Time breakdown
    #[arg(long)]
    pub stats: bool,

    /// Emit the report as JSON instead of the console table
    ///
    /// The JSON carries the same data as the console report (graph size,
    /// degree summaries, iterations, top pages) for downstream tooling.
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    ///
    /// Shows progress messages on stderr during execution:
    ///   "Found 5000 pages"
    ///   "  1000/5000 pages"
    ///   "PageRank stopped after 12 iterations"
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    ///
    /// Useful for piping to files or tools that don't handle ANSI
    /// escape codes well. JSON output is never colored.
    #[arg(long)]
    pub no_color: bool,
}

/// Pages reported when neither the CLI nor webrank.toml sets a top count.
const DEFAULT_TOP: usize = 5;

/// Remote fetch retry attempts when webrank.toml does not set them.
const DEFAULT_RETRIES: u32 = 3;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Run the ranking pipeline
    let output = run(&cli)?;

    // Print to stdout (can be piped or redirected)
    println!("{}", output);

    Ok(())
}

/// Execute the full webrank pipeline
///
/// This orchestrates all stages:
/// 1. Page Listing - universe of ids from directory or remote origin
/// 2. Fetch + Extract - parallel acquisition behind a collection barrier
/// 3. Graph Building - universe-closed adjacency and reverse maps
/// 4. Degree Stats - distribution summaries over both degree maps
/// 5. PageRank - iterative scores, rank-sum stop rule
/// 6. Report - console table or JSON
fn run(cli: &Cli) -> Result<String> {
    use webrank::config::Config;
    use webrank::corpus::{fetch_and_extract, DirectorySource, HttpSource, PageSource};
    use webrank::graph::{degree_stats, LinkGraph};
    use webrank::ranking::{top_k, PageRanker};
    use webrank::rendering::{Colorizer, RunReport};
    use webrank::types::{RankingConfig, Universe};
    use std::time::Instant;

    let start = Instant::now();

    // ══════════════════════════════════════════════════════════════════════════
    // Stage 1: Page Listing
    // ══════════════════════════════════════════════════════════════════════════
    let (source, file_config): (Box<dyn PageSource>, Config) = if let Some(dir) = &cli.corpus {
        let root = dir.canonicalize().map_err(|e| {
            anyhow::anyhow!("Failed to resolve corpus path '{}': {}", dir.display(), e)
        })?;
        // Corpus-local configuration sits next to the pages
        let config = Config::load(&root);
        (Box::new(DirectorySource::open(&root)?), config)
    } else if let Some(url) = &cli.base_url {
        let count = cli
            .count
            .ok_or_else(|| anyhow::anyhow!("--base-url requires --count"))?;
        // Remote corpora have no root directory; config comes from cwd
        let config = Config::load(Path::new("."));
        let retries = config.retries.unwrap_or(DEFAULT_RETRIES);
        (Box::new(HttpSource::new(url, count, retries)?), config)
    } else {
        anyhow::bail!("Provide a corpus directory or --base-url with --count");
    };

    if cli.verbose {
        eprintln!("🕸️  webrank v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("📂 Corpus: {}", source.describe());
        eprintln!("{}", file_config.display_summary());
    }

    let ids = source.list()?;
    if ids.is_empty() {
        return Ok("No pages found. Check the corpus path or --count.".into());
    }
    let universe: Universe = ids.iter().copied().collect();

    if cli.verbose {
        eprintln!("✓ Found {} pages ({:.2?})", ids.len(), start.elapsed());
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Stage 2: Fetch + Link Extraction (parallel, collected barrier)
    // ══════════════════════════════════════════════════════════════════════════
    let fetch_start = Instant::now();
    let workers = cli.workers.or(file_config.workers).unwrap_or(0);
    let fetched = fetch_and_extract(source.as_ref(), &ids, workers, cli.verbose)?;

    if cli.verbose {
        eprintln!(
            "✓ Fetched and extracted {} pages, {} failed ({:.2?})",
            fetched.pairs.len(),
            fetched.failed,
            fetch_start.elapsed()
        );
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Stage 3: Graph Building (sequential from here on)
    // ══════════════════════════════════════════════════════════════════════════
    let graph_start = Instant::now();
    let graph = LinkGraph::build(fetched.pairs, universe);

    if cli.verbose {
        eprintln!(
            "✓ Built graph: {} pages, {} edges ({:.2?})",
            graph.page_count(),
            graph.edge_count(),
            graph_start.elapsed()
        );
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Stage 4: Degree Statistics
    // ══════════════════════════════════════════════════════════════════════════
    let outgoing = degree_stats(&graph.out_degrees());
    let incoming = degree_stats(&graph.in_degrees());

    // ══════════════════════════════════════════════════════════════════════════
    // Stage 5: PageRank
    // ══════════════════════════════════════════════════════════════════════════
    let rank_start = Instant::now();
    let defaults = RankingConfig::default();
    let ranking_config = RankingConfig {
        damping: file_config.damping.unwrap_or(defaults.damping),
        convergence_threshold: cli
            .threshold
            .or(file_config.convergence_threshold)
            .unwrap_or(defaults.convergence_threshold),
    };
    let outcome = PageRanker::new(ranking_config).compute_ranks(&graph);

    if cli.verbose {
        eprintln!(
            "✓ PageRank stopped after {} iterations ({:.2?})",
            outcome.iterations,
            rank_start.elapsed()
        );
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Stage 6: Top-K + Report
    // ══════════════════════════════════════════════════════════════════════════
    let top_count = cli.top.or(file_config.top).unwrap_or(DEFAULT_TOP);
    let top = top_k(&outcome.ranks, top_count);

    let report = RunReport {
        pages: graph.page_count(),
        edges: graph.edge_count(),
        fetch_failures: fetched.failed,
        outgoing,
        incoming,
        iterations: outcome.iterations,
        top,
    };

    if cli.verbose {
        eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        eprintln!("Total time: {:.2?}", start.elapsed());
    }

    if cli.json {
        return report.to_json();
    }

    let colors = Colorizer::new(!cli.no_color);
    let mut output = report.render(&colors);

    if cli.stats {
        output.push_str(&format!(
            "\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\
             ## Statistics\n\
             Pages discovered: {}\n\
             Fetch failures: {}\n\
             Edges retained: {}\n\
             PageRank iterations: {}\n\
             Total time: {:.2?}\n",
            ids.len(),
            fetched.failed,
            report.edges,
            report.iterations,
            start.elapsed()
        ));
    }

    Ok(output)
}
