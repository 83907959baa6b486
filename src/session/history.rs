use crate::document::DocumentId;
use crate::search::Comparison;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cost and match figures for one searched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfPoint {
    pub page: usize,
    pub query: String,
    pub page_words: usize,
    pub normal_ops: usize,
    pub trie_ops: usize,
    pub normal_matches: usize,
    pub trie_matches: usize,
}

impl PerfPoint {
    pub fn new(page: usize, comparison: &Comparison) -> Self {
        Self {
            page,
            query: comparison.query.clone(),
            page_words: comparison.page_words,
            normal_ops: comparison.normal.operation_cost,
            trie_ops: comparison.trie.operation_cost,
            normal_matches: comparison.normal.match_count,
            trie_matches: comparison.trie.match_count,
        }
    }
}

/// Append-only performance series, one per document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceHistory {
    documents: BTreeMap<DocumentId, Vec<PerfPoint>>,
}

impl PerformanceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point unless this page was already recorded for the same
    /// query. Returns whether the point was added.
    pub fn record(&mut self, document: &DocumentId, page: usize, comparison: &Comparison) -> bool {
        let series = self.documents.entry(document.clone()).or_default();
        if series
            .iter()
            .any(|p| p.page == page && p.query == comparison.query)
        {
            return false;
        }

        series.push(PerfPoint::new(page, comparison));
        true
    }

    /// Every point recorded for `document`, in recording order
    pub fn series(&self, document: &DocumentId) -> &[PerfPoint] {
        self.documents
            .get(document)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Points for one query, in recording order
    pub fn series_for_query<'a>(
        &'a self,
        document: &DocumentId,
        query: &'a str,
    ) -> impl Iterator<Item = &'a PerfPoint> + 'a {
        self.series(document).iter().filter(move |p| p.query == query)
    }

    pub fn documents(&self) -> impl Iterator<Item = &DocumentId> {
        self.documents.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.values().all(Vec::is_empty)
    }
}
