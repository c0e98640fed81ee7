//! Text analysis module for Ghostwriter.
//!
//! Low-level text processing shared by the tagger and the word-frequency
//! analyzer: tokens and offsets, tokenizers, stemming and stop words.

pub mod case;
pub mod stemmer;
pub mod stop;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use stemmer::{PorterStemmer, Stemmer};
pub use token::*;
pub use tokenizer::*;
