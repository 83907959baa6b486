use crate::document::{DocumentId, PageSource};
use anyhow::Result;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Extracted page text keyed by (document, page).
///
/// Only one document is cached at a time: opening a different document
/// drops every entry belonging to the previous one.
pub struct PageCache {
    document: Option<DocumentId>,
    pages: LruCache<(DocumentId, usize), String>,
    hits: u64,
    misses: u64,
}

impl PageCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            document: None,
            pages: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
            hits: 0,
            misses: 0,
        }
    }

    /// Switch to `id`, invalidating cached pages of any other document
    pub fn open_document(&mut self, id: &DocumentId) {
        if self.document.as_ref() == Some(id) {
            return;
        }

        if let Some(previous) = self.document.replace(id.clone()) {
            tracing::debug!(%previous, next = %id, dropped = self.pages.len(), "document changed, clearing page cache");
        }
        self.pages.clear();
    }

    /// Page text from the cache, extracting it from `source` on a miss
    pub fn page_text<S: PageSource + ?Sized>(&mut self, source: &S, page: usize) -> Result<String> {
        self.open_document(source.id());

        let key = (source.id().clone(), page);
        if let Some(text) = self.pages.get(&key) {
            self.hits += 1;
            return Ok(text.clone());
        }

        self.misses += 1;
        let text = source.page_text(page)?;
        self.pages.put(key, text.clone());
        Ok(text)
    }

    pub fn current_document(&self) -> Option<&DocumentId> {
        self.document.as_ref()
    }

    pub fn contains(&self, id: &DocumentId, page: usize) -> bool {
        self.pages.contains(&(id.clone(), page))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Fraction of lookups served from memory
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn clear(&mut self) {
        self.document = None;
        self.pages.clear();
    }
}
