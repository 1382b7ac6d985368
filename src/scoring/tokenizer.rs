//! @ai:module:intent Text normalization and tokenization for BLEU scoring
//! @ai:module:layer domain
//! @ai:module:public_api Tokenizer
//! @ai:module:stateless true

use regex::Regex;

/// @ai:intent Normalizes translation text into lowercase word tokens
pub struct Tokenizer {
    link_regex: Regex,
    whitespace_regex: Regex,
}

impl Tokenizer {
    /// @ai:intent Create a new tokenizer with compiled patterns
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            link_regex: Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap(),
            whitespace_regex: Regex::new(r"\s+").unwrap(),
        }
    }

    /// @ai:intent Normalize text: strip markdown links, collapse whitespace, lowercase
    /// @ai:post result has no leading/trailing whitespace and no whitespace runs
    /// @ai:effects pure
    pub fn normalize(&self, text: &str) -> String {
        let without_links = self.link_regex.replace_all(text, "$1");
        let collapsed = self.whitespace_regex.replace_all(without_links.trim(), " ");
        collapsed.to_lowercase()
    }

    /// @ai:intent Split normalized text into word tokens
    /// @ai:post blank or whitespace-only input yields an empty sequence
    /// @ai:effects pure
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("The Cat SAT"),
            vec!["the", "cat", "sat"]
        );
    }

    #[test]
    fn test_tokenize_strips_markdown_links() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("[hello](http://x.com) world"),
            tokenizer.tokenize("hello world")
        );
    }

    #[test]
    fn test_tokenize_strips_multiple_links() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("[a](http://a) and [b c](https://b/c)"),
            vec!["a", "and", "b", "c"]
        );
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("  el \t gato\n\nse   sentó  "),
            vec!["el", "gato", "se", "sentó"]
        );
    }

    #[test]
    fn test_tokenize_blank_input_is_empty() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_retokenizing_normalized_text_is_noop() {
        let tokenizer = Tokenizer::new();
        let normalized = tokenizer.normalize("  The [cat](http://c)  SAT ");
        assert_eq!(tokenizer.normalize(&normalized), normalized);
        assert_eq!(
            tokenizer.tokenize(&normalized),
            tokenizer.tokenize("  The [cat](http://c)  SAT ")
        );
    }
}
