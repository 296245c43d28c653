//! The run report - console and JSON rendition of one pipeline run.
//!
//! The core stages return plain maps; every display decision lives here.
//! The console form is the classic degree/top-K printout; the JSON form is
//! the same data serialized for downstream tooling.

use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use crate::graph::DegreeSummary;
use crate::types::RankedPage;

use super::colors::Colorizer;

/// Everything one pipeline run produced, ready to display.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Universe size.
    pub pages: usize,
    /// Retained edges (sum of out-degrees after universe filtering).
    pub edges: usize,
    /// Pages skipped because their fetch failed.
    pub fetch_failures: usize,
    /// Out-degree distribution summary.
    pub outgoing: DegreeSummary,
    /// In-degree distribution summary.
    pub incoming: DegreeSummary,
    /// PageRank update passes until the stop rule fired.
    pub iterations: usize,
    /// Highest-ranked pages, descending.
    pub top: Vec<RankedPage>,
}

impl RunReport {
    /// Render the console report.
    pub fn render(&self, colors: &Colorizer) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{} {} pages, {} edges",
            colors.heading("Graph:"),
            self.pages,
            self.edges
        );
        if self.fetch_failures > 0 {
            let _ = writeln!(
                out,
                "{}",
                colors.warning(&format!(
                    "  ({} pages failed to fetch and were skipped)",
                    self.fetch_failures
                ))
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", colors.heading("Outgoing links:"));
        self.write_summary(&mut out, &self.outgoing, colors);
        let _ = writeln!(out, "{}", colors.heading("Incoming links:"));
        self.write_summary(&mut out, &self.incoming, colors);

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} {}",
            colors.heading(&format!("Top {} by PageRank", self.top.len())),
            colors.dim(&format!("({} iterations)", self.iterations))
        );
        for (position, page) in self.top.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>3}. {}  {}",
                position + 1,
                colors.page_id(&format!("page {}", page.id)),
                colors.score(&format!("{:.6}", page.score))
            );
        }
        if self.top.is_empty() {
            let _ = writeln!(out, "  {}", colors.dim("(no pages)"));
        }

        out
    }

    fn write_summary(&self, out: &mut String, summary: &DegreeSummary, colors: &Colorizer) {
        let _ = writeln!(
            out,
            "  avg={:.4}  median={}  max={}  min={}",
            summary.mean, summary.median, summary.max, summary.min
        );
        let _ = writeln!(
            out,
            "  {}",
            colors.dim(&format!("quintiles={:?}", summary.quintiles))
        );
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::degree_stats;
    use crate::types::DegreeMap;

    fn sample_report() -> RunReport {
        let degrees: DegreeMap = (0..4u64).map(|id| (id, 1)).collect();
        RunReport {
            pages: 4,
            edges: 4,
            fetch_failures: 1,
            outgoing: degree_stats(&degrees),
            incoming: degree_stats(&degrees),
            iterations: 2,
            top: vec![RankedPage::new(3, 0.4), RankedPage::new(0, 0.2)],
        }
    }

    #[test]
    fn test_console_report_plain() {
        let report = sample_report();
        let text = report.render(&Colorizer::new(false));

        assert!(text.contains("4 pages, 4 edges"));
        assert!(text.contains("1 pages failed to fetch"));
        assert!(text.contains("Outgoing links:"));
        assert!(text.contains("Incoming links:"));
        assert!(text.contains("avg=1.0000  median=1  max=1  min=1"));
        assert!(text.contains("Top 2 by PageRank"));
        assert!(text.contains("(2 iterations)"));
        assert!(text.contains("page 3"));
        assert!(text.contains("0.400000"));
    }

    #[test]
    fn test_console_report_empty_universe() {
        let report = RunReport {
            pages: 0,
            edges: 0,
            fetch_failures: 0,
            outgoing: DegreeSummary::default(),
            incoming: DegreeSummary::default(),
            iterations: 1,
            top: vec![],
        };
        let text = report.render(&Colorizer::new(false));

        assert!(text.contains("0 pages, 0 edges"));
        assert!(text.contains("(no pages)"));
        assert!(!text.contains("failed to fetch"));
    }

    #[test]
    fn test_json_report_carries_every_field() -> Result<()> {
        let report = sample_report();
        let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;

        assert_eq!(json["pages"], 4);
        assert_eq!(json["edges"], 4);
        assert_eq!(json["fetch_failures"], 1);
        assert_eq!(json["iterations"], 2);
        assert_eq!(json["top"][0]["id"], 3);
        assert_eq!(json["outgoing"]["median"], 1.0);
        assert_eq!(json["incoming"]["count"], 4);
        Ok(())
    }
}
