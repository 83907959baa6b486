//! Page extraction boundary.
//!
//! The comparison core only ever sees page text. Where that text comes from
//! is behind [`PageSource`]; [`TextDocument`] reads plain text split into
//! pages by form feeds, which is what `pdftotext` emits.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Page separator in extracted text
pub const PAGE_BREAK: char = '\x0c';

/// Stable identifier for a loaded document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Identifier for a file: sanitized file name plus a hash of the
    /// canonical path, so two files with the same name stay distinct
    pub fn for_path(path: &Path) -> Self {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let name = canonical
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document");

        Self::named(name, &canonical.to_string_lossy())
    }

    /// Identifier from a display name and arbitrary identity key
    pub fn named(name: &str, key: &str) -> Self {
        let sanitized: String = name
            .chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
            .take(24)
            .collect();

        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);

        DocumentId(format!("{}-{:016x}", sanitized, hasher.finish()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that can hand out page text by 1-based page number
pub trait PageSource {
    fn id(&self) -> &DocumentId;

    fn page_count(&self) -> usize;

    /// Text of `page` (1-based). Out-of-range pages are an error.
    fn page_text(&self, page: usize) -> Result<String>;
}

/// Plain-text document with form-feed page breaks
#[derive(Debug, Clone)]
pub struct TextDocument {
    id: DocumentId,
    path: Option<PathBuf>,
    pages: Vec<String>,
}

impl TextDocument {
    /// Read a UTF-8 file from disk
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut doc = Self::from_text(DocumentId::for_path(path), &content);
        doc.path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            id = %doc.id,
            pages = doc.pages.len(),
            "opened document"
        );
        Ok(doc)
    }

    /// Split already-extracted text into pages
    pub fn from_text(id: DocumentId, content: &str) -> Self {
        let mut pages: Vec<String> = content.split(PAGE_BREAK).map(str::to_string).collect();

        // pdftotext terminates the last page with a form feed too
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }

        Self { id, path: None, pages }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PageSource for TextDocument {
    fn id(&self) -> &DocumentId {
        &self.id
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page: usize) -> Result<String> {
        if page == 0 || page > self.pages.len() {
            anyhow::bail!(
                "Page {} out of range (document has {} pages)",
                page,
                self.pages.len()
            );
        }
        Ok(self.pages[page - 1].clone())
    }
}
