//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of every analysis path: they split input
//! text into [`Token`](crate::analysis::token::Token)s carrying both
//! character and byte offsets.
//!
//! # Available Tokenizers
//!
//! - [`word_punct::WordPunctTokenizer`] - `\w+|[^\w\s]+` splitting, used by word frequency
//! - [`unicode_word::UnicodeWordTokenizer`] - UAX #29 word boundaries with clitic splitting, used by the tagger
//!
//! # Examples
//!
//! ```
//! use ghostwriter::analysis::tokenizer::Tokenizer;
//! use ghostwriter::analysis::tokenizer::word_punct::WordPunctTokenizer;
//!
//! let tokenizer = WordPunctTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared between
/// request handlers.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;
pub mod word_punct;

pub use unicode_word::UnicodeWordTokenizer;
pub use word_punct::WordPunctTokenizer;
