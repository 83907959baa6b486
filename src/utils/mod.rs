//! Utility functions shared across the crate.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration and application data directory
//! - [`normalize`] - Word canonicalization (lowercase + NFKC)
//! - [`progress`] - Progress bars, no-op without the `progress` feature
//! - [`tokenizer`] - Whitespace tokenization and phrase windows
//!
//! ## Key Functions
//!
//! ```
//! use pagesearch::utils::{normalize_word, split_words};
//!
//! assert_eq!(normalize_word("CAFE\u{0301}"), "caf\u{e9}");
//! assert_eq!(split_words("run  away"), vec!["run", "away"]);
//! ```

pub mod app_data;
pub mod normalize;
pub mod progress;
pub mod tokenizer;

pub use app_data::*;
pub use normalize::*;
pub use tokenizer::*;
