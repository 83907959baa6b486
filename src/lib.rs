//! # pagesearch - linear vs. trie phrase search
//!
//! Runs two search strategies over the text of a document page and reports
//! how many matches and how much work each one took.
//!
//! ## Architecture
//!
//! - [`trie`] - Prefix tree over normalized words
//! - [`search`] - The two strategies, their comparison, and highlighting
//! - [`document`] - Page extraction boundary ([`document::PageSource`])
//! - [`session`] - Page cache and performance history across queries
//! - [`output`] - Terminal rendering
//! - [`utils`] - Normalization, tokenization, config, progress bars
//!
//! ## Quick Start
//!
//! ```
//! use pagesearch::search::compare;
//!
//! let cmp = compare("the cat sat on the mat", "the").unwrap();
//! assert_eq!(cmp.normal.match_count, 2);
//! assert_eq!(cmp.normal.operation_cost, 6);
//! assert_eq!(cmp.trie.match_count, 2);
//! assert_eq!(cmp.candidates, vec!["the"]);
//! ```

pub mod document;
pub mod output;
pub mod search;
pub mod session;
pub mod trie;
pub mod utils;
