#![no_main]

use libfuzzer_sys::fuzz_target;
use pagesearch::trie::PrefixTree;
use pagesearch::utils::normalize_word;

fuzz_target!(|input: (Vec<String>, String)| {
    let (words, prefix) = input;
    let normalized: Vec<String> = words.iter().map(|w| normalize_word(w)).collect();
    let tree: PrefixTree = normalized.iter().collect();

    let prefix = normalize_word(&prefix);
    let found = tree.search_prefix(&prefix);

    // Every result is a stored word with the prefix, and nothing is missed
    for word in &found {
        assert!(word.starts_with(&prefix));
        assert!(tree.contains(word));
    }
    let expected = normalized.iter().any(|w| w.starts_with(&prefix));
    assert_eq!(!found.is_empty(), expected);
});
