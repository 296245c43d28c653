//! Corpus sources - where pages come from.
//!
//! A [`PageSource`] hands the pipeline its two inbound facts: the universe
//! of page ids and each page's raw content. The graph stages never see
//! paths or URLs, only ids and markup; swapping a local directory for a
//! remote origin is a construction-time choice in the CLI.
//!
//! Both implementations hold their I/O handles internally. The HTTP client
//! is built once per source and reused for every fetch.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;

use crate::types::PageId;

use super::discover::find_page_files;

/// First retry waits this long; the delay doubles per attempt.
const RETRY_BASE_DELAY: Duration = Duration::from_millis(200);

/// Per-attempt HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A corpus of crawled pages addressable by integer id.
///
/// `list` yields the authoritative universe for a run; `fetch` returns one
/// page's raw markup. Implementations are consulted from parallel fetch
/// workers and must be shareable across threads.
pub trait PageSource: Send + Sync {
    /// The sorted, deduplicated universe of page ids.
    fn list(&self) -> Result<Vec<PageId>>;

    /// Raw content of one page.
    fn fetch(&self, id: PageId) -> Result<String>;

    /// Human-readable origin for progress output.
    fn describe(&self) -> String;
}

/// Pages stored as `<id>.html` files under a directory root.
pub struct DirectorySource {
    root: PathBuf,
    pages: BTreeMap<PageId, PathBuf>,
}

impl DirectorySource {
    /// Discover the corpus under `root`. Fails if the path is not a
    /// directory; an empty directory is a valid empty corpus.
    pub fn open(root: &Path) -> Result<Self> {
        let pages = find_page_files(root)?.into_iter().collect();
        Ok(Self {
            root: root.to_path_buf(),
            pages,
        })
    }
}

impl PageSource for DirectorySource {
    fn list(&self) -> Result<Vec<PageId>> {
        Ok(self.pages.keys().copied().collect())
    }

    fn fetch(&self, id: PageId) -> Result<String> {
        let path = self
            .pages
            .get(&id)
            .ok_or_else(|| anyhow::anyhow!("Unknown page id: {}", id))?;
        // Crawled pages are not guaranteed valid UTF-8; invalid sequences
        // are replaced rather than failing the page
        let bytes = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Pages served at `<base-url>/<id>.html` with ids `0..count`.
///
/// A bare HTTP origin cannot enumerate its objects, so the universe is the
/// contiguous id range the crawler wrote. Fetches retry transient failures
/// with doubling backoff before giving up on a page.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
    count: u64,
    retries: u32,
}

impl HttpSource {
    pub fn new(base_url: &str, count: u64, retries: u32) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            count,
            retries,
        })
    }

    fn page_url(&self, id: PageId) -> String {
        format!("{}/{}.html", self.base_url, id)
    }

    fn request(&self, url: &str) -> reqwest::Result<String> {
        self.client.get(url).send()?.error_for_status()?.text()
    }
}

impl PageSource for HttpSource {
    fn list(&self) -> Result<Vec<PageId>> {
        Ok((0..self.count).collect())
    }

    fn fetch(&self, id: PageId) -> Result<String> {
        let url = self.page_url(id);
        let mut delay = RETRY_BASE_DELAY;
        let mut attempt = 0;

        loop {
            match self.request(&url) {
                Ok(body) => return Ok(body),
                Err(err) => {
                    if attempt >= self.retries {
                        return Err(anyhow::anyhow!(
                            "Failed to fetch {} after {} attempts: {}",
                            url,
                            attempt + 1,
                            err
                        ));
                    }
                    attempt += 1;
                    std::thread::sleep(delay);
                    delay = delay.saturating_mul(2);
                }
            }
        }
    }

    fn describe(&self) -> String {
        format!("{} ({} pages)", self.base_url, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_directory_source_lists_and_fetches() -> Result<()> {
        let dir = std::env::temp_dir().join("webrank_test_dir_source");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("0.html"), "<a href=\"1.html\">one</a>")?;
        fs::write(dir.join("1.html"), "<html></html>")?;
        fs::write(dir.join("about.html"), "<html></html>")?;

        let source = DirectorySource::open(&dir)?;
        assert_eq!(source.list()?, vec![0, 1]);
        assert!(source.fetch(0)?.contains("1.html"));

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_directory_source_unknown_id_fails() -> Result<()> {
        let dir = std::env::temp_dir().join("webrank_test_dir_source_unknown");
        fs::create_dir_all(&dir)?;

        let source = DirectorySource::open(&dir)?;
        assert!(source.list()?.is_empty());
        assert!(source.fetch(42).is_err());

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_directory_source_tolerates_invalid_utf8() -> Result<()> {
        let dir = std::env::temp_dir().join("webrank_test_dir_source_utf8");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("3.html"), b"<a href=\"7.html\">\xff\xfe</a>" as &[u8])?;

        let source = DirectorySource::open(&dir)?;
        let content = source.fetch(3)?;
        assert!(content.contains("7.html"));

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_http_source_universe_is_contiguous() -> Result<()> {
        let source = HttpSource::new("http://corpus.test/web", 4, 0)?;
        assert_eq!(source.list()?, vec![0, 1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_http_source_url_layout() -> Result<()> {
        let source = HttpSource::new("http://corpus.test/web/", 1, 0)?;
        assert_eq!(source.page_url(13781), "http://corpus.test/web/13781.html");
        Ok(())
    }
}
