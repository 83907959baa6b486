/// Split page text into whitespace-delimited tokens.
///
/// Any Unicode whitespace separates tokens and runs of whitespace never
/// produce empty tokens, so `"a  b\n"` yields `["a", "b"]`.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of whitespace-delimited tokens in `text`
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Join a window of tokens with single spaces and lowercase it.
///
/// The sliding-window phrase count and the highlighter both compare through
/// this, so a window spanning a line break still equals a space-separated query.
pub fn window_text(window: &[&str]) -> String {
    window.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("the cat\tsat\n\non  the mat "), vec![
            "the", "cat", "sat", "on", "the", "mat"
        ]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_words("").is_empty());
        assert!(split_words(" \n\t").is_empty());
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("the cat sat on the mat"), 6);
    }

    #[test]
    fn test_window_text() {
        assert_eq!(window_text(&["Run", "Away"]), "run away");
        assert_eq!(window_text(&[]), "");
    }
}
