//! Classify page text into highlightable segments.
//!
//! The page is walked token by token. At each position a window the length
//! of the query is compared against the query (exact phrase) and against the
//! trie candidates (prefix). A marked window is emitted whole and skipped;
//! an unmarked position emits a single token.

use crate::utils::{split_words, window_text, word_count};
use serde::{Deserialize, Serialize};

/// Which strategy, if any, matched a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Matched by neither strategy
    Plain,
    /// Equals the query phrase
    Exact,
    /// Starts with a trie candidate
    Prefix,
    /// Both of the above
    Both,
}

impl MatchKind {
    fn classify(exact: bool, prefix: bool) -> Self {
        match (exact, prefix) {
            (true, true) => MatchKind::Both,
            (true, false) => MatchKind::Exact,
            (false, true) => MatchKind::Prefix,
            (false, false) => MatchKind::Plain,
        }
    }

    pub fn is_marked(self) -> bool {
        self != MatchKind::Plain
    }
}

/// A run of page tokens joined by single spaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub kind: MatchKind,
}

/// Split `page_text` into segments marked by match kind.
///
/// Joining the segment texts with spaces reproduces the page's tokens in
/// order. `candidates` are expected to be normalized trie completions.
pub fn highlight<S: AsRef<str>>(page_text: &str, query: &str, candidates: &[S]) -> Vec<Segment> {
    let words = split_words(page_text);
    let span = word_count(query).max(1);
    let target = query.trim().to_lowercase();

    let mut segments = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        let end = (i + span).min(words.len());
        let lowered = window_text(&words[i..end]);

        let exact = lowered == target;
        let prefix = candidates
            .iter()
            .any(|c| lowered.starts_with(c.as_ref()));

        let kind = MatchKind::classify(exact, prefix);
        if kind.is_marked() {
            segments.push(Segment {
                text: words[i..end].join(" "),
                kind,
            });
            i = end;
        } else {
            segments.push(Segment {
                text: words[i].to_string(),
                kind,
            });
            i += 1;
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(segments: &[Segment]) -> Vec<(&str, MatchKind)> {
        segments.iter().map(|s| (s.text.as_str(), s.kind)).collect()
    }

    #[test]
    fn test_single_word_query() {
        let segments = highlight("the cat sat on the mat", "the", &["the"]);
        assert_eq!(
            kinds(&segments),
            vec![
                ("the", MatchKind::Both),
                ("cat", MatchKind::Plain),
                ("sat", MatchKind::Plain),
                ("on", MatchKind::Plain),
                ("the", MatchKind::Both),
                ("mat", MatchKind::Plain),
            ]
        );
    }

    #[test]
    fn test_prefix_only_and_exact_only() {
        let segments = highlight("theme THE", "the", &["theme"]);
        assert_eq!(
            kinds(&segments),
            vec![("theme", MatchKind::Prefix), ("THE", MatchKind::Exact)]
        );
    }

    #[test]
    fn test_phrase_window_consumed() {
        let segments = highlight("Run Run away now", "run away", &["run"]);
        assert_eq!(
            kinds(&segments),
            vec![
                ("Run Run", MatchKind::Prefix),
                ("away", MatchKind::Plain),
                ("now", MatchKind::Plain),
            ]
        );
    }

    #[test]
    fn test_tokens_preserved() {
        let page = "a  b\nc d e";
        let segments = highlight(page, "x y", &[] as &[String]);
        let joined: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined.join(" "), "a b c d e");
        assert!(segments.iter().all(|s| s.kind == MatchKind::Plain));
    }

    #[test]
    fn test_empty_page() {
        assert!(highlight("", "word", &["word"]).is_empty());
    }
}
