//! Configuration loading from webrank.toml.
//!
//! A corpus can carry its tuning next to its pages:
//!
//! ```toml
//! [ranking]
//! damping = 0.85
//! convergence-threshold = 0.005
//! top = 5
//!
//! [fetch]
//! workers = 8
//! retries = 3
//! ```
//!
//! Precedence: CLI flag > webrank.toml > built-in default. Loading never
//! fails - a missing or malformed file falls back to defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File-provided settings, all optional. `None` means "not configured";
/// the CLI layer resolves the final value.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source file for this config (for display).
    pub source: Option<PathBuf>,

    /// PageRank damping factor.
    pub damping: Option<f64>,

    /// Relative rank-sum change below which iteration stops.
    pub convergence_threshold: Option<f64>,

    /// How many top-ranked pages to report.
    pub top: Option<usize>,

    /// Fetch worker threads (0 = one per core).
    pub workers: Option<usize>,

    /// Retry attempts per remote page fetch. Ignored for directory
    /// corpora, which read without retrying.
    pub retries: Option<u32>,
}

/// Raw config as deserialized from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
    ranking: Option<RawRanking>,
    fetch: Option<RawFetch>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct RawRanking {
    damping: Option<f64>,
    convergence_threshold: Option<f64>,
    top: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct RawFetch {
    workers: Option<usize>,
    retries: Option<u32>,
}

impl Config {
    /// Load configuration from `webrank.toml` in the given directory,
    /// falling back to defaults when absent or unreadable.
    pub fn load(directory: &Path) -> Self {
        let path = directory.join("webrank.toml");
        if path.exists() {
            if let Some(config) = Self::load_file(&path) {
                return config;
            }
        }
        Self::default()
    }

    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let raw: RawConfig = toml::from_str(&content).ok()?;
        Some(Self::from_raw(raw, path.to_path_buf()))
    }

    fn from_raw(raw: RawConfig, source: PathBuf) -> Self {
        let ranking = raw.ranking.unwrap_or_default();
        let fetch = raw.fetch.unwrap_or_default();
        Self {
            source: Some(source),
            damping: ranking.damping,
            convergence_threshold: ranking.convergence_threshold,
            top: ranking.top,
            workers: fetch.workers,
            retries: fetch.retries,
        }
    }

    /// Format config for verbose display.
    pub fn display_summary(&self) -> String {
        let mut lines = Vec::new();

        if let Some(ref source) = self.source {
            lines.push(format!("   Config: {}", source.display()));
        } else {
            lines.push("   Config: (defaults)".to_string());
        }

        if let Some(damping) = self.damping {
            lines.push(format!("   Damping: {}", damping));
        }
        if let Some(threshold) = self.convergence_threshold {
            lines.push(format!("   Convergence threshold: {}", threshold));
        }
        if let Some(top) = self.top {
            lines.push(format!("   Top: {}", top));
        }
        if let Some(workers) = self.workers {
            lines.push(format!("   Workers: {}", workers));
        }
        if let Some(retries) = self.retries {
            lines.push(format!("   Retries: {}", retries));
        }

        lines.join("\n")
    }
}
