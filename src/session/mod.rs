//! Per-session state around the stateless comparison core.
//!
//! A [`Session`] owns the page cache and the performance history. Every
//! comparison builds and discards its own prefix tree; nothing here is
//! shared with the core.

pub mod cache;
pub mod history;

pub use cache::PageCache;
pub use history::{PerfPoint, PerformanceHistory};

use crate::document::PageSource;
use crate::search::{compare, Comparison};
use crate::utils::progress::ProgressBar;
use crate::utils::AppConfig;
use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

/// One page's text together with its comparison
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    pub page: usize,
    pub page_count: usize,
    #[serde(skip)]
    pub text: String,
    #[serde(flatten)]
    pub comparison: Comparison,
}

pub struct Session {
    cache: PageCache,
    history: PerformanceHistory,
    parallel: bool,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_options(config.effective_page_cache_size(), config.parallel_scan)
    }

    pub fn with_options(cache_size: usize, parallel: bool) -> Self {
        Self {
            cache: PageCache::new(cache_size),
            history: PerformanceHistory::new(),
            parallel,
        }
    }

    /// Compare both strategies on one page and record the result
    pub fn compare_page<S: PageSource + ?Sized>(
        &mut self,
        source: &S,
        page: usize,
        query: &str,
    ) -> Result<PageResult> {
        let text = self.cache.page_text(source, page)?;
        let comparison = compare(&text, query)?;

        self.history.record(source.id(), page, &comparison);

        Ok(PageResult {
            page,
            page_count: source.page_count(),
            text,
            comparison,
        })
    }

    /// Compare every page of `source`.
    ///
    /// Pages are extracted in order through the cache, compared (in
    /// parallel when enabled), then recorded in page order.
    pub fn scan<S: PageSource + ?Sized>(
        &mut self,
        source: &S,
        query: &str,
        progress: &ProgressBar,
    ) -> Result<Vec<PageResult>> {
        let page_count = source.page_count();
        let mut texts = Vec::with_capacity(page_count);
        for page in 1..=page_count {
            texts.push((page, self.cache.page_text(source, page)?));
        }

        let run = |(page, text): (usize, String)| -> Result<PageResult> {
            let comparison = compare(&text, query)?;
            progress.inc(1);
            Ok(PageResult {
                page,
                page_count,
                text,
                comparison,
            })
        };

        let results: Vec<PageResult> = if self.parallel {
            texts.into_par_iter().map(run).collect::<Result<_>>()?
        } else {
            texts.into_iter().map(run).collect::<Result<_>>()?
        };

        for result in &results {
            self.history
                .record(source.id(), result.page, &result.comparison);
        }

        tracing::info!(
            document = %source.id(),
            pages = page_count,
            parallel = self.parallel,
            "scan complete"
        );
        Ok(results)
    }

    pub fn history(&self) -> &PerformanceHistory {
        &self.history
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentId, TextDocument};

    fn doc() -> TextDocument {
        TextDocument::from_text(
            DocumentId::named("book.txt", "book"),
            "the cat sat on the mat\x0cRun Run away\x0cnothing here",
        )
    }

    #[test]
    fn test_compare_page() {
        let mut session = Session::with_options(4, false);
        let result = session.compare_page(&doc(), 1, "the").unwrap();

        assert_eq!(result.page, 1);
        assert_eq!(result.page_count, 3);
        assert_eq!(result.comparison.normal.match_count, 2);
        assert_eq!(session.history().series(doc().id()).len(), 1);
    }

    #[test]
    fn test_repeat_query_records_once() {
        let d = doc();
        let mut session = Session::with_options(4, false);
        session.compare_page(&d, 2, "run away").unwrap();
        session.compare_page(&d, 2, "run away").unwrap();

        assert_eq!(session.history().series(d.id()).len(), 1);
        assert!(session.cache().hit_rate() > 0.0);
    }

    #[test]
    fn test_empty_query_is_error() {
        let mut session = Session::with_options(4, false);
        assert!(session.compare_page(&doc(), 1, " ").is_err());
    }

    #[test]
    fn test_scan_parallel_matches_sequential() {
        let d = doc();
        let mut sequential = Session::with_options(4, false);
        let mut parallel = Session::with_options(4, true);
        let pb = ProgressBar::hidden();

        let a = sequential.scan(&d, "run", &pb).unwrap();
        let b = parallel.scan(&d, "run", &pb).unwrap();

        let pages: Vec<usize> = b.iter().map(|r| r.page).collect();
        assert_eq!(pages, vec![1, 2, 3]);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.comparison, y.comparison);
        }
        assert_eq!(parallel.history().series(d.id()).len(), 3);
        assert_eq!(b[1].comparison.trie.match_count, 2);
    }
}
