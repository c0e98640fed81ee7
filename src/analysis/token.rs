//! Token types produced by the tokenizers.
//!
//! A [`Token`] is a slice of the input text with its position in the token
//! stream and its offsets. Offsets are kept twice: as character (Unicode
//! scalar value) offsets, which is what callers send and receive, and as byte
//! offsets, which is what Rust string slicing needs.
//!
//! # Examples
//!
//! ```
//! use ghostwriter::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.char_len(), 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// Character offset where this token starts in the original text
    pub start_offset: usize,

    /// Character offset where this token ends in the original text (exclusive)
    pub end_offset: usize,

    /// Byte offset where this token starts in the original text
    pub byte_start: usize,

    /// Byte offset where this token ends in the original text (exclusive)
    pub byte_end: usize,

    /// Token type classification
    pub token_type: TokenType,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphabetic or alphanumeric word
    Word,
    /// Numeric values
    Num,
    /// Punctuation marks
    Punctuation,
    /// Symbols (currency, math, emoji)
    Symbol,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// Classify a piece of text.
    pub fn detect(text: &str) -> TokenType {
        if text.is_empty() {
            return TokenType::Other;
        }
        if text
            .chars()
            .all(|c| c.is_numeric() || c == '.' || c == ',')
            && text.chars().any(|c| c.is_numeric())
        {
            return TokenType::Num;
        }
        if text.chars().any(|c| c.is_alphanumeric()) {
            return TokenType::Word;
        }
        if text.chars().all(is_punctuation) {
            return TokenType::Punctuation;
        }
        if text.chars().all(|c| !c.is_whitespace()) {
            return TokenType::Symbol;
        }
        TokenType::Other
    }
}

/// Punctuation test that also covers typographic quotes, dashes and ellipses.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        && !matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
        || matches!(
            c,
            '\u{2010}'..='\u{2027}' | '\u{00AB}' | '\u{00BB}' | '\u{00A1}' | '\u{00BF}'
        )
}

impl Token {
    /// Create a token for ASCII-only text where character and byte offsets coincide.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        let text = text.into();
        let token_type = TokenType::detect(&text);
        Token {
            text,
            position,
            start_offset,
            end_offset,
            byte_start: start_offset,
            byte_end: end_offset,
            token_type,
        }
    }

    /// Create a token with distinct character and byte offsets.
    pub fn with_spans<S: Into<String>>(
        text: S,
        position: usize,
        chars: (usize, usize),
        bytes: (usize, usize),
    ) -> Self {
        let text = text.into();
        let token_type = TokenType::detect(&text);
        Token {
            text,
            position,
            start_offset: chars.0,
            end_offset: chars.1,
            byte_start: bytes.0,
            byte_end: bytes.1,
            token_type,
        }
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the token is made only of punctuation.
    pub fn is_punctuation(&self) -> bool {
        self.token_type == TokenType::Punctuation
    }

    /// Clone this token with updated position.
    pub fn with_position(&self, position: usize) -> Self {
        let mut token = self.clone();
        token.position = position;
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Maps byte offsets of a string to character offsets.
///
/// Built once per text; lookups are O(log n) in the number of non-ASCII
/// characters and O(1) for pure ASCII text.
#[derive(Debug, Clone)]
pub struct CharIndex {
    /// Byte offsets of every character, plus the total length as sentinel.
    boundaries: Option<Vec<usize>>,
    len_bytes: usize,
}

impl CharIndex {
    /// Index the given text.
    pub fn new(text: &str) -> Self {
        let boundaries = if text.is_ascii() {
            None
        } else {
            let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
            boundaries.push(text.len());
            Some(boundaries)
        };
        CharIndex {
            boundaries,
            len_bytes: text.len(),
        }
    }

    /// Number of characters in the indexed text.
    pub fn char_len(&self) -> usize {
        match &self.boundaries {
            None => self.len_bytes,
            Some(boundaries) => boundaries.len() - 1,
        }
    }

    /// Character offset of a byte offset that lies on a char boundary.
    pub fn char_of_byte(&self, byte: usize) -> usize {
        match &self.boundaries {
            None => byte,
            Some(boundaries) => match boundaries.binary_search(&byte) {
                Ok(i) => i,
                Err(i) => i.saturating_sub(1),
            },
        }
    }

    /// Byte offset of a character offset; clamps to the end of the text.
    pub fn byte_of_char(&self, char_offset: usize) -> usize {
        match &self.boundaries {
            None => char_offset.min(self.len_bytes),
            Some(boundaries) => boundaries
                .get(char_offset)
                .copied()
                .unwrap_or(self.len_bytes),
        }
    }
}

/// Slice `text` by character offsets, clamping out-of-range ends.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let index = CharIndex::new(text);
    let start = index.byte_of_char(start);
    let end = index.byte_of_char(end).max(start);
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.byte_start, 6);
        assert_eq!(token.byte_end, 11);
        assert_eq!(token.token_type, TokenType::Word);
    }

    #[test]
    fn test_token_type_detection() {
        assert_eq!(TokenType::detect("fox"), TokenType::Word);
        assert_eq!(TokenType::detect("42"), TokenType::Num);
        assert_eq!(TokenType::detect("3.14"), TokenType::Num);
        assert_eq!(TokenType::detect("."), TokenType::Punctuation);
        assert_eq!(TokenType::detect("\u{201C}"), TokenType::Punctuation);
        assert_eq!(TokenType::detect("$"), TokenType::Symbol);
        assert_eq!(TokenType::detect(""), TokenType::Other);
    }

    #[test]
    fn test_char_index_ascii() {
        let index = CharIndex::new("hello");
        assert_eq!(index.char_len(), 5);
        assert_eq!(index.char_of_byte(3), 3);
        assert_eq!(index.byte_of_char(9), 5);
    }

    #[test]
    fn test_char_index_multibyte() {
        let text = "café au lait";
        let index = CharIndex::new(text);
        assert_eq!(index.char_len(), 12);
        // 'é' is two bytes long
        assert_eq!(index.byte_of_char(4), 5);
        assert_eq!(index.char_of_byte(5), 4);
        assert_eq!(char_slice(text, 0, 4), "café");
        assert_eq!(char_slice(text, 5, 7), "au");
    }

    #[test]
    fn test_token_display() {
        let token = Token::with_offsets("hello", 0, 0, 5);
        assert_eq!(format!("{token}"), "hello");
    }
}
