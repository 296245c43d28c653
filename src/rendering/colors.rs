//! ANSI color utilities for the console report.
//!
//! All coloring goes through one switchable [`Colorizer`] so `--no-color`
//! and JSON output stay byte-identical to the plain text path.
//!
//! Color scheme kept readable on both light and dark terminals:
//! - High contrast for section headings
//! - Semantic colors for the data (page ids = cyan, scores = green)
//! - Muted colors for metadata

use owo_colors::OwoColorize;

/// Applies the report color scheme, or passes text through untouched when
/// disabled.
pub struct Colorizer {
    enabled: bool,
}

impl Colorizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Section headings (bold bright blue)
    pub fn heading(&self, s: &str) -> String {
        if self.enabled {
            s.bright_blue().bold().to_string()
        } else {
            s.to_string()
        }
    }

    /// Page ids (cyan)
    pub fn page_id(&self, s: &str) -> String {
        if self.enabled {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    }

    /// Rank scores (green)
    pub fn score(&self, s: &str) -> String {
        if self.enabled {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    /// Warnings such as fetch failures (yellow)
    pub fn warning(&self, s: &str) -> String {
        if self.enabled {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }

    /// Dim text for secondary information
    pub fn dim(&self, s: &str) -> String {
        if self.enabled {
            s.dimmed().to_string()
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_colorizer_passes_through() {
        let colors = Colorizer::new(false);
        assert_eq!(colors.heading("Top pages"), "Top pages");
        assert_eq!(colors.page_id("42"), "42");
        assert_eq!(colors.score("0.25"), "0.25");
        assert_eq!(colors.warning("careful"), "careful");
        assert_eq!(colors.dim("meta"), "meta");
    }

    #[test]
    fn test_enabled_colorizer_keeps_the_text() {
        let colors = Colorizer::new(true);
        assert!(colors.heading("Top pages").contains("Top pages"));
        assert!(colors.page_id("42").contains("42"));
        assert!(colors.score("0.25").contains("0.25"));
    }
}
