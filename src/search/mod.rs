//! Side-by-side comparison of the two search strategies on one page.
//!
//! - **Normal search** counts literal, case-insensitive occurrences of the
//!   query in the raw page text. Its cost is the page's token count.
//! - **Trie search** builds a [`PrefixTree`] from the page's normalized
//!   tokens and looks up completions of the first query word. Its reported
//!   match count is a sliding-window phrase count over the page tokens; the
//!   candidate set only feeds highlighting. Its cost is the candidate count
//!   plus the length of the normalized first word.
//!
//! Both strategies are independent and may report different counts.

pub mod highlight;

use crate::trie::PrefixTree;
use crate::utils::{normal_search, normalize_word, split_words, window_text, word_count};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use highlight::{highlight, MatchKind, Segment};

/// Errors surfaced at the comparison boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Query was empty or whitespace only
    EmptyQuery,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyQuery => write!(f, "query must contain at least one word"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Match count and operation cost reported by one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrategyOutcome {
    pub match_count: usize,
    pub operation_cost: usize,
}

/// Result of running both strategies on one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Trimmed query as compared
    pub query: String,
    /// Whitespace-delimited tokens on the page
    pub page_words: usize,
    pub normal: StrategyOutcome,
    pub trie: StrategyOutcome,
    /// Trie completions of the first query word, sorted for display
    pub candidates: Vec<String>,
}

/// Count non-overlapping, case-insensitive occurrences of `query` in `text`.
///
/// The query is matched literally; regex metacharacters have no meaning.
/// `query` must not be empty.
pub fn exact_count(text: &str, query: &str) -> usize {
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(text).count(),
        Err(e) => {
            // Only reachable when the escaped query exceeds the regex size limit
            tracing::warn!(error = %e, "falling back to lowercase scan");
            text.to_lowercase().matches(&query.to_lowercase()).count()
        }
    }
}

/// Count token windows whose space-joined, lowercased text equals the
/// lowercased query. Windows overlap; the window length is the query's
/// word count.
pub fn phrase_window_count(words: &[&str], query: &str) -> usize {
    let len = word_count(query);
    if len == 0 || len > words.len() {
        return 0;
    }

    let target = query.to_lowercase();
    words
        .windows(len)
        .filter(|window| window_text(window) == target)
        .count()
}

/// Build a fresh tree from the normalized form of every page token
pub fn build_page_tree(words: &[&str]) -> PrefixTree {
    words.iter().map(|w| normalize_word(w)).collect()
}

/// Normal search outcome for a page
pub fn normal_strategy(page_text: &str, query: &str) -> StrategyOutcome {
    StrategyOutcome {
        match_count: exact_count(page_text, query),
        operation_cost: word_count(page_text),
    }
}

/// Trie search outcome plus the raw candidate set.
///
/// `query` must contain at least one word.
pub fn trie_strategy(words: &[&str], query: &str) -> (StrategyOutcome, Vec<String>) {
    let tree = build_page_tree(words);
    let first = query
        .split_whitespace()
        .next()
        .map(normalize_word)
        .unwrap_or_default();

    let candidates = tree.search_prefix(&first);
    let outcome = StrategyOutcome {
        match_count: phrase_window_count(words, query),
        operation_cost: candidates.len() + first.chars().count(),
    };

    (outcome, candidates)
}

/// Run both strategies on one page.
///
/// The query is trimmed first. An empty page is fine and yields zero
/// counts; an empty query is rejected.
pub fn compare(page_text: &str, query: &str) -> Result<Comparison, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let words = split_words(page_text);
    let normal = normal_strategy(page_text, query);
    let (trie, mut candidates) = trie_strategy(&words, query);
    candidates.sort();

    tracing::debug!(
        page_words = words.len(),
        normal_matches = normal.match_count,
        trie_matches = trie.match_count,
        candidates = candidates.len(),
        "compared strategies"
    );

    Ok(Comparison {
        query: query.to_string(),
        page_words: words.len(),
        normal,
        trie,
        candidates,
    })
}

/// Prefix completion on one page, trie lookup next to the linear scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Normalized prefix as looked up
    pub prefix: String,
    /// Distinct trie completions, sorted
    pub candidates: Vec<String>,
    pub trie_ops: usize,
    /// Page tokens whose normalized form starts with the prefix, in page order
    pub linear_matches: Vec<String>,
    pub linear_ops: usize,
}

/// Complete `prefix` against the words of one page.
///
/// An empty prefix is valid and matches every word.
pub fn complete(page_text: &str, prefix: &str) -> Completion {
    let words = split_words(page_text);
    let prefix = normalize_word(prefix.trim());

    let mut candidates = build_page_tree(&words).search_prefix(&prefix);
    candidates.sort();

    let linear_matches: Vec<String> = normal_search(&words, &prefix)
        .into_iter()
        .map(str::to_string)
        .collect();

    Completion {
        trie_ops: candidates.len() + prefix.chars().count(),
        linear_ops: words.len(),
        prefix,
        candidates,
        linear_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_page() {
        let cmp = compare("the cat sat on the mat", "the").unwrap();

        assert_eq!(cmp.normal, StrategyOutcome { match_count: 2, operation_cost: 6 });
        assert_eq!(cmp.candidates, vec!["the"]);
        assert_eq!(cmp.trie.match_count, 2);
        // one candidate + "the".len()
        assert_eq!(cmp.trie.operation_cost, 4);
        assert_eq!(cmp.page_words, 6);
    }

    #[test]
    fn test_two_word_phrase() {
        let cmp = compare("Run Run away", "run away").unwrap();
        assert_eq!(cmp.normal.match_count, 1);
        assert_eq!(cmp.trie.match_count, 1);
        assert_eq!(cmp.candidates, vec!["run"]);
        assert_eq!(cmp.normal.operation_cost, 3);
        assert_eq!(cmp.trie.operation_cost, 1 + 3);
    }

    #[test]
    fn test_exact_count_is_literal() {
        assert_eq!(exact_count("a.b axb a.b", "a.b"), 2);
        assert_eq!(exact_count("cost (usd) (USD)", "(usd)"), 2);
        assert_eq!(exact_count("x+y x+y", "x+y"), 2);
    }

    #[test]
    fn test_exact_count_non_overlapping() {
        assert_eq!(exact_count("aaaa", "aa"), 2);
    }

    #[test]
    fn test_exact_count_is_substring_based() {
        // "the" inside "other" counts for normal search only
        let cmp = compare("The other theme", "the").unwrap();
        assert_eq!(cmp.normal.match_count, 3);
        assert_eq!(cmp.trie.match_count, 1);
        assert_eq!(cmp.candidates, vec!["the", "theme"]);
    }

    #[test]
    fn test_phrase_across_line_break() {
        let words = split_words("run\naway and RUN   AWAY");
        assert_eq!(phrase_window_count(&words, "run away"), 2);
    }

    #[test]
    fn test_phrase_longer_than_page() {
        let words = split_words("one two");
        assert_eq!(phrase_window_count(&words, "one two three"), 0);
        assert_eq!(phrase_window_count(&[], "one"), 0);
    }

    #[test]
    fn test_phrase_windows_overlap() {
        let words = split_words("ha ha ha");
        assert_eq!(phrase_window_count(&words, "ha ha"), 2);
    }

    #[test]
    fn test_missing_prefix() {
        let cmp = compare("alpha beta", "gamma").unwrap();
        assert!(cmp.candidates.is_empty());
        assert_eq!(cmp.trie, StrategyOutcome { match_count: 0, operation_cost: 5 });
        assert_eq!(cmp.normal.match_count, 0);
    }

    #[test]
    fn test_candidates_are_normalized() {
        let cmp = compare("CAF\u{00C9} cafe\u{0301} Caf\u{00E9}teria", "caf\u{00C9}").unwrap();
        assert_eq!(cmp.candidates, vec!["caf\u{00E9}", "caf\u{00E9}teria"]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let cmp = compare("the cat", "  cat \n").unwrap();
        assert_eq!(cmp.query, "cat");
        assert_eq!(cmp.normal.match_count, 1);
        assert_eq!(cmp.trie.match_count, 1);
    }

    #[test]
    fn test_empty_query_rejected() {
        assert_eq!(compare("text", "   "), Err(SearchError::EmptyQuery));
        assert_eq!(compare("text", ""), Err(SearchError::EmptyQuery));
    }

    #[test]
    fn test_empty_page() {
        let cmp = compare("", "word").unwrap();
        assert_eq!(cmp.page_words, 0);
        assert_eq!(cmp.normal, StrategyOutcome { match_count: 0, operation_cost: 0 });
        assert_eq!(cmp.trie, StrategyOutcome { match_count: 0, operation_cost: 4 });
    }

    #[test]
    fn test_cost_counts_chars_not_bytes() {
        let cmp = compare("\u{00FC}ber", "\u{00DC}ber").unwrap();
        assert_eq!(cmp.trie.operation_cost, 1 + 4);
    }

    #[test]
    fn test_complete() {
        let c = complete("Cat catalog dog CAT scatter", "CA");
        assert_eq!(c.prefix, "ca");
        assert_eq!(c.candidates, vec!["cat", "catalog"]);
        assert_eq!(c.trie_ops, 2 + 2);
        assert_eq!(c.linear_matches, vec!["Cat", "catalog", "CAT"]);
        assert_eq!(c.linear_ops, 5);
    }

    #[test]
    fn test_complete_empty_prefix() {
        let c = complete("b a b", "");
        assert_eq!(c.candidates, vec!["a", "b"]);
        assert_eq!(c.linear_matches.len(), 3);
    }

    #[test]
    fn test_build_page_tree_collapses_duplicates() {
        let tree = build_page_tree(&["The", "the", "THE", "cat"]);
        assert_eq!(tree.len(), 2);
        assert!(tree.contains("the"));
    }
}
