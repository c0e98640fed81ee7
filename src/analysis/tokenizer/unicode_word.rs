//! Unicode word tokenizer implementation.
//!
//! Splits text on Unicode word boundaries (UAX #29) and then applies the
//! English-specific adjustments the tagger expects: whitespace segments are
//! dropped, clitics are split off their host ("don't" becomes "do" + "n't"),
//! common abbreviations keep their trailing period and runs of periods become
//! a single ellipsis token. Punctuation is kept as tokens.
//!
//! # Examples
//!
//! ```
//! use ghostwriter::analysis::tokenizer::Tokenizer;
//! use ghostwriter::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Don't stop, Mr. Fox!").unwrap().collect();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Do", "n't", "stop", ",", "Mr.", "Fox", "!"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{CharIndex, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Abbreviations that keep their trailing period.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "inc", "ltd", "co", "corp",
    "mt", "e.g", "i.e", "a.m", "p.m", "u.s", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec",
];

/// Clitics split off the end of a word, apostrophe excluded.
const CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// A tokenizer that splits English text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

/// A raw segment: byte start, byte end.
type Segment = (usize, usize);

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    /// Byte length of the clitic at the end of `word`, if any.
    fn clitic_len(word: &str) -> Option<usize> {
        let lower = word.to_lowercase();
        let chars: Vec<char> = lower.chars().collect();
        let n = chars.len();

        // n't
        if n > 3 && chars[n - 1] == 't' && is_apostrophe(chars[n - 2]) && chars[n - 3] == 'n' {
            let tail: String = chars[n - 3..].iter().collect();
            return Some(tail.len());
        }

        let apostrophe = chars.iter().rposition(|&c| is_apostrophe(c))?;
        if apostrophe == 0 {
            return None;
        }
        let suffix: String = chars[apostrophe + 1..].iter().collect();
        if CLITICS.contains(&suffix.as_str()) {
            let tail: String = chars[apostrophe..].iter().collect();
            return Some(tail.len());
        }
        None
    }

    /// Split text into raw byte segments with the English adjustments applied.
    fn segments(text: &str) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::new();

        for (start, segment) in text.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }
            let end = start + segment.len();

            if segment == "." {
                if let Some(last) = segments.last_mut() {
                    let previous = &text[last.0..last.1];
                    let adjacent = last.1 == start;
                    if adjacent && previous.chars().all(|c| c == '.') {
                        last.1 = end;
                        continue;
                    }
                    if adjacent && ABBREVIATIONS.contains(&previous.to_lowercase().as_str()) {
                        last.1 = end;
                        continue;
                    }
                }
            }

            match Self::clitic_len(segment) {
                Some(tail) if tail < segment.len() => {
                    let split = end - tail;
                    segments.push((start, split));
                    segments.push((split, end));
                }
                _ => segments.push((start, end)),
            }
        }

        segments
    }

    /// Tokenize into a vector directly.
    pub fn tokenize_vec(&self, text: &str) -> Vec<Token> {
        let index = CharIndex::new(text);
        Self::segments(text)
            .into_iter()
            .enumerate()
            .map(|(position, (start, end))| {
                Token::with_spans(
                    &text[start..end],
                    position,
                    (index.char_of_byte(start), index.char_of_byte(end)),
                    (start, end),
                )
            })
            .collect()
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.tokenize_vec(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;

    fn texts(text: &str) -> Vec<String> {
        UnicodeWordTokenizer::new()
            .tokenize_vec(text)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_unicode_word_tokenizer() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello, world!").unwrap().collect();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].token_type, TokenType::Punctuation);
        assert_eq!(tokens[2].text, "world");
        assert_eq!(tokens[2].start_offset, 7);
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_clitics() {
        assert_eq!(texts("I can't go"), vec!["I", "ca", "n't", "go"]);
        assert_eq!(texts("the cat's toy"), vec!["the", "cat", "'s", "toy"]);
        assert_eq!(texts("they\u{2019}re here"), vec!["they", "\u{2019}re", "here"]);
        assert_eq!(texts("rock 'n' roll")[0], "rock");
    }

    #[test]
    fn test_abbreviations_and_ellipsis() {
        assert_eq!(texts("Mr. Smith left..."), vec!["Mr.", "Smith", "left", "..."]);
        assert_eq!(texts("e.g. this"), vec!["e.g.", "this"]);
        assert_eq!(texts("The end."), vec!["The", "end", "."]);
    }

    #[test]
    fn test_hyphenated_words() {
        assert_eq!(
            texts("a rather severe-looking woman"),
            vec!["a", "rather", "severe", "-", "looking", "woman"]
        );
    }

    #[test]
    fn test_character_offsets() {
        let tokens = UnicodeWordTokenizer::new().tokenize_vec("née à Paris");
        assert_eq!(tokens[2].text, "Paris");
        assert_eq!(tokens[2].start_offset, 6);
        assert_eq!(tokens[2].end_offset, 11);
        assert_eq!(tokens[2].byte_start, 8);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
    }
}
