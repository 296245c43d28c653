//! Anchor scanning: HTML content -> ordered page-id sequence.
//!
//! Crawled pages reference each other through anchors whose href is the
//! target's file name, e.g. `<a href="13781.html">`. Extraction walks every
//! anchor in document order, truncates the href at the first `.` and parses
//! the prefix as an integer id.
//!
//! Design rationale:
//! - A real HTML parser (scraper) instead of regex: corpus pages are
//!   machine-generated but not uniformly well-formed, and the parser
//!   normalizes attribute-name case for free (`HREF=` occurs in the wild)
//! - Silent skip on parse failure: non-numeric targets are expected and
//!   high-frequency, not exceptional
//! - No deduplication and no self-link filtering: multiplicity is meaningful
//!   to the rank computation and the graph stage owns any filtering

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::types::PageId;

/// Matches every anchor element. Compiled once; the selector is shared
/// across the parallel extraction workers.
static ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("Invalid anchor selector"));

/// Extract the ordered sequence of page ids referenced by a page's content.
///
/// For each anchor with an `href`, the id is the href truncated at the first
/// `.` delimiter and parsed as an unsigned integer (`"13781.html"` -> 13781,
/// `"9"` -> 9). Anything that does not reduce to an integer - missing hrefs,
/// textual targets, empty strings - is skipped without error.
///
/// Returns ids in link-appearance order, duplicates preserved. Content with
/// no links (or no parseable links) yields an empty vec.
pub fn extract_links(content: &str) -> Vec<PageId> {
    let document = Html::parse_document(content);

    document
        .select(&ANCHOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(parse_target)
        .collect()
}

/// Reduce one href to a page id: cut at the first `.`, trim, parse.
/// Returns None for anything that is not a clean non-negative integer.
fn parse_target(href: &str) -> Option<PageId> {
    let stem = href.split('.').next()?.trim();
    stem.parse::<PageId>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shape of a typical corpus page.
    const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
Lorem ipsum dolor sit amet, consectetur adipiscing elit.
<p>
<a HREF="13781.html"> This is a link </a>
<p>
</body>
</html>"#;

    #[test]
    fn test_sample_page() {
        // Uppercase HREF must be handled - the parser lowercases attribute names
        assert_eq!(extract_links(SAMPLE_PAGE), vec![13781]);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(extract_links(""), Vec::<PageId>::new());
    }

    #[test]
    fn test_no_links() {
        let html = "<html><body><p>plain text, zero anchors</p></body></html>";
        assert_eq!(extract_links(html), Vec::<PageId>::new());
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let html = r#"
            <a href="5.html">a</a>
            <a href="3.html">b</a>
            <a href="5.html">c</a>
            <a href="3.html">d</a>
        "#;
        assert_eq!(extract_links(html), vec![5, 3, 5, 3]);
    }

    #[test]
    fn test_malformed_targets_skipped() {
        // The fragment href needs the wider raw-string guard: its "# would
        // terminate an r#"..."# literal
        let html = r##"
            <a href="about.html">textual</a>
            <a href="">empty</a>
            <a href="#section">fragment</a>
            <a href="12abc.html">digits then junk</a>
            <a href="-4.html">negative</a>
            <a name="no-href">missing attribute</a>
            <a href="42.html">the one good link</a>
        "##;
        assert_eq!(extract_links(html), vec![42]);
    }

    #[test]
    fn test_truncation_at_first_dot() {
        let html = r#"
            <a href="7.html#frag">anchor suffix</a>
            <a href="10.5.html">double extension</a>
            <a href="9">bare id</a>
            <a href=" 11.html">padded</a>
        "#;
        assert_eq!(extract_links(html), vec![7, 10, 9, 11]);
    }

    #[test]
    fn test_path_qualified_targets_skipped() {
        // Targets with directory prefixes do not reduce to an integer
        let html = r#"<a href="web/13.html">nested</a><a href="./8.html">relative</a>"#;
        assert_eq!(extract_links(html), Vec::<PageId>::new());
    }

    #[test]
    fn test_nested_markup_document_order() {
        let html = r#"
            <div><ul>
                <li><a href="2.html">two</a></li>
                <li><span><a href="1.html">one</a></span></li>
            </ul></div>
            <a href="0.html">zero</a>
        "#;
        assert_eq!(extract_links(html), vec![2, 1, 0]);
    }

    #[test]
    fn test_arbitrary_garbage_tolerated() {
        // Must never panic on non-HTML input
        let _ = extract_links("\u{0}\u{1}<<<>>>&&&<a href=<a<a href='3.html'>x");
        assert_eq!(extract_links("not html at all"), Vec::<PageId>::new());
    }
}
