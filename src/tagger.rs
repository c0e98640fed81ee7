//! Part-of-speech tagging.
//!
//! The rest of the crate sees linguistic analysis only through the
//! [`Tagger`] trait: text in, [`TaggedDocument`] out. A tagged document holds
//! tokens with character offsets, lemma, coarse POS, fine Penn Treebank tag,
//! dependency label, sentence index and stop-word/punctuation/casing flags,
//! grouped into sentences.
//!
//! # Examples
//!
//! ```
//! use ghostwriter::tagger::{Pos, Tagger};
//! use ghostwriter::tagger::rules::RuleTagger;
//!
//! let tagger = RuleTagger::new();
//! let doc = tagger.tag("The quick brown fox jumps over the lazy dog").unwrap();
//! let quick = &doc.tokens()[1];
//! assert_eq!(quick.pos, Pos::Adj);
//! assert_eq!(quick.dep, "amod");
//! ```

pub mod lexicon;
pub mod rules;
pub mod sentence;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::token::CharIndex;
use crate::error::{GhostwriterError, Result};

/// Coarse part-of-speech (Universal Dependencies tag set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Adp,
    Det,
    Pron,
    Cconj,
    Sconj,
    Part,
    Num,
    Intj,
    Punct,
    Sym,
    X,
}

impl Pos {
    /// The tag name ("NOUN", "VERB", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Pos::Noun => "NOUN",
            Pos::Propn => "PROPN",
            Pos::Verb => "VERB",
            Pos::Aux => "AUX",
            Pos::Adj => "ADJ",
            Pos::Adv => "ADV",
            Pos::Adp => "ADP",
            Pos::Det => "DET",
            Pos::Pron => "PRON",
            Pos::Cconj => "CCONJ",
            Pos::Sconj => "SCONJ",
            Pos::Part => "PART",
            Pos::Num => "NUM",
            Pos::Intj => "INTJ",
            Pos::Punct => "PUNCT",
            Pos::Sym => "SYM",
            Pos::X => "X",
        }
    }

    /// Whether tokens of this class are looked up for synonyms.
    pub fn is_eligible(&self) -> bool {
        matches!(self, Pos::Noun | Pos::Propn | Pos::Verb | Pos::Adj | Pos::Adv)
    }

    /// Nouns, proper nouns and pronouns.
    pub fn is_nominal(&self) -> bool {
        matches!(self, Pos::Noun | Pos::Propn | Pos::Pron)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pos {
    type Err = GhostwriterError;

    fn from_str(s: &str) -> Result<Self> {
        let pos = match s.to_uppercase().as_str() {
            "NOUN" => Pos::Noun,
            "PROPN" => Pos::Propn,
            "VERB" => Pos::Verb,
            "AUX" => Pos::Aux,
            "ADJ" => Pos::Adj,
            "ADV" => Pos::Adv,
            "ADP" => Pos::Adp,
            "DET" => Pos::Det,
            "PRON" => Pos::Pron,
            "CCONJ" => Pos::Cconj,
            "SCONJ" => Pos::Sconj,
            "PART" => Pos::Part,
            "NUM" => Pos::Num,
            "INTJ" => Pos::Intj,
            "PUNCT" => Pos::Punct,
            "SYM" => Pos::Sym,
            "X" => Pos::X,
            other => {
                return Err(GhostwriterError::invalid_input(format!(
                    "Unknown part of speech: '{other}'"
                )));
            }
        };
        Ok(pos)
    }
}

/// A token with its linguistic annotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Position of the token in the document
    pub index: usize,
    pub text: String,
    /// Character offset of the first character
    pub start: usize,
    /// Character offset after the last character
    pub end: usize,
    pub lemma: String,
    pub pos: Pos,
    /// Fine-grained Penn Treebank tag
    pub tag: String,
    /// Dependency label
    pub dep: String,
    /// Index of the enclosing sentence
    pub sentence: usize,
    pub is_stop: bool,
    pub is_punct: bool,
    pub is_space: bool,
    pub is_title: bool,
    pub is_upper: bool,
    pub is_lower: bool,
}

impl TaggedToken {
    /// Length of the surface text in characters.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the token overlaps `[start, end)` under the anchor rule: the
    /// range starts inside the token, or the token starts inside the range.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        (self.start <= start && start < self.end) || (start <= self.start && self.start < end)
    }
}

/// A sentence as a token range and a character range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub start_token: usize,
    /// Exclusive
    pub end_token: usize,
    pub start_char: usize,
    /// Exclusive
    pub end_char: usize,
}

/// The tagger output for one text.
#[derive(Clone, Debug)]
pub struct TaggedDocument {
    text: String,
    index: CharIndex,
    tokens: Vec<TaggedToken>,
    sentences: Vec<Sentence>,
}

impl TaggedDocument {
    /// Assemble a document; tokens must be in text order with sentence indices set.
    pub fn new(text: &str, tokens: Vec<TaggedToken>, sentences: Vec<Sentence>) -> Self {
        TaggedDocument {
            text: text.to_string(),
            index: CharIndex::new(text),
            tokens,
            sentences,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.index.char_len()
    }

    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Slice the text by character offsets.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let start = self.index.byte_of_char(start);
        let end = self.index.byte_of_char(end).max(start);
        &self.text[start..end]
    }

    /// Tokens overlapping `[start, end)`, expanded to whole tokens.
    pub fn char_span(&self, start: usize, end: usize) -> &[TaggedToken] {
        let first = self.tokens.iter().position(|t| t.overlaps(start, end));
        match first {
            Some(first) => {
                let last = self.tokens[first..]
                    .iter()
                    .take_while(|t| t.start < end.max(start + 1))
                    .count();
                &self.tokens[first..first + last]
            }
            None => &[],
        }
    }

    /// The first token overlapping `[start, end)`.
    pub fn anchor(&self, start: usize, end: usize) -> Option<&TaggedToken> {
        self.tokens.iter().find(|t| t.overlaps(start, end))
    }

    /// The sentence containing `token`.
    pub fn sentence_of(&self, token: &TaggedToken) -> &Sentence {
        &self.sentences[token.sentence]
    }

    /// The tokens of a sentence.
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[TaggedToken] {
        &self.tokens[sentence.start_token..sentence.end_token]
    }

    /// The text of a sentence.
    pub fn sentence_text(&self, sentence: &Sentence) -> &str {
        self.slice(sentence.start_char, sentence.end_char)
    }
}

/// A part-of-speech tagger with sentence segmentation and lemmatization.
pub trait Tagger: Send + Sync {
    /// Analyze a text.
    fn tag(&self, text: &str) -> Result<TaggedDocument>;

    /// Get the name of this tagger.
    fn name(&self) -> &'static str;
}
