use unicode_normalization::UnicodeNormalization;

/// Canonicalize a word for trie insertion and lookup.
///
/// Lowercases first, then applies NFKC so that case variants and
/// compatibility forms (ligatures, full-width letters, decomposed accents)
/// collapse onto the same trie path. The empty string maps to itself.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase().nfkc().collect()
}

/// Linear prefix filter over a word list.
///
/// This is the baseline the trie lookup is measured against: every word is
/// normalized and tested, in input order. Duplicates are kept.
pub fn normal_search<'a, S: AsRef<str>>(words: &'a [S], query: &str) -> Vec<&'a str> {
    let query = normalize_word(query);
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| normalize_word(w).starts_with(&query))
        .collect()
}
