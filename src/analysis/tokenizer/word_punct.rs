//! Word/punctuation regex tokenizer.
//!
//! Splits text into runs of word characters and runs of punctuation, the
//! classic `\w+|[^\w\s]+` scheme. Offsets are reported in characters.

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{CharIndex, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{GhostwriterError, Result};

/// Default word/punctuation pattern.
pub const WORD_PUNCT_PATTERN: &str = r"\w+|[^\w\s]+";

/// A regex-based tokenizer extracting word runs and punctuation runs.
#[derive(Clone, Debug)]
pub struct WordPunctTokenizer {
    pattern: Arc<Regex>,
}

impl WordPunctTokenizer {
    /// Create a tokenizer with the default `\w+|[^\w\s]+` pattern.
    pub fn new() -> Self {
        // The default pattern is a compile-time constant known to be valid.
        Self::with_pattern(WORD_PUNCT_PATTERN).unwrap_or_else(|_| unreachable!())
    }

    /// Create a tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| GhostwriterError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordPunctTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Tokenize into a vector directly.
    pub fn tokenize_vec(&self, text: &str) -> Vec<Token> {
        let index = CharIndex::new(text);
        self.pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_spans(
                    mat.as_str(),
                    position,
                    (index.char_of_byte(mat.start()), index.char_of_byte(mat.end())),
                    (mat.start(), mat.end()),
                )
            })
            .collect()
    }
}

impl Default for WordPunctTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordPunctTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.tokenize_vec(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_punct"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;

    #[test]
    fn test_word_punct_tokenizer() {
        let tokenizer = WordPunctTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Good muffins cost $3.88").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Good", "muffins", "cost", "$", "3", ".", "88"]);
        assert_eq!(tokens[1].start_offset, 5);
        assert_eq!(tokens[1].end_offset, 12);
        assert_eq!(tokens[3].token_type, TokenType::Symbol);
    }

    #[test]
    fn test_punctuation_runs() {
        let tokenizer = WordPunctTokenizer::new();
        let tokens = tokenizer.tokenize_vec("wait... what?!");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["wait", "...", "what", "?!"]);
    }

    #[test]
    fn test_character_offsets() {
        let tokenizer = WordPunctTokenizer::new();
        let tokens = tokenizer.tokenize_vec("naïve café");
        assert_eq!(tokens[1].text, "café");
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 10);
        assert_eq!(tokens[1].byte_start, 7);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(WordPunctTokenizer::with_pattern("(").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordPunctTokenizer::new().name(), "word_punct");
    }
}
