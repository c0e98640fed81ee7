//! Word frequency by stem.
//!
//! Groups the words of a text under their Porter stems, with the offsets of
//! every occurrence, plus n-grams of consecutive words keyed by their joined
//! stems. The text is either plain (one row per line) or a JSON list of
//! editor rows.
//!
//! # Examples
//!
//! ```
//! use ghostwriter::frequency::{FrequencyInput, FrequencyOptions, text_stemming};
//!
//! let input = FrequencyInput::from("The dog runs. Dogs are running!");
//! let (rows, frequency) = text_stemming(&input, &FrequencyOptions::default()).unwrap();
//! assert_eq!(rows, 1);
//! assert_eq!(frequency["dog"].count, 2);
//! assert_eq!(frequency["run"].count, 2);
//! ```

use std::collections::BTreeMap;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::stemmer::{PorterStemmer, Stemmer};
use crate::analysis::token::{Token, is_punctuation};
use crate::analysis::tokenizer::WordPunctTokenizer;
use crate::error::{GhostwriterError, Result};

/// Default longest n-gram.
pub const DEFAULT_N_WORDS_GRAM: usize = 2;

/// Default minimum word length, punctuation excluded.
pub const DEFAULT_MIN_LEN_WORDS: usize = 3;

/// A row of an editor document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRow {
    #[serde(rename = "idxRow")]
    pub idx_row: usize,
    pub text: String,
    #[serde(rename = "idxRowChild", default, skip_serializing_if = "Option::is_none")]
    pub idx_row_child: Option<usize>,
    #[serde(rename = "idxRowParent", default, skip_serializing_if = "Option::is_none")]
    pub idx_row_parent: Option<usize>,
}

/// Text to analyze.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrequencyInput {
    Rows(Vec<TextRow>),
    Text(String),
}

impl From<&str> for FrequencyInput {
    /// A JSON list of rows is read as rows; anything else as plain text.
    fn from(text: &str) -> Self {
        match serde_json::from_str::<Vec<TextRow>>(text) {
            Ok(rows) => FrequencyInput::Rows(rows),
            Err(_) => FrequencyInput::Text(text.to_string()),
        }
    }
}

impl FrequencyInput {
    fn into_rows(self) -> Vec<TextRow> {
        match self {
            FrequencyInput::Rows(rows) => rows,
            FrequencyInput::Text(text) => {
                if let Ok(rows) = serde_json::from_str::<Vec<TextRow>>(&text) {
                    return rows;
                }
                text.split('\n')
                    .enumerate()
                    .map(|(idx_row, line)| TextRow {
                        idx_row,
                        text: line.to_string(),
                        idx_row_child: None,
                        idx_row_parent: None,
                    })
                    .collect()
            }
        }
    }
}

/// Analysis settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyOptions {
    /// Longest n-gram counted; 1 counts single words only
    pub n_words_gram: usize,
    pub min_len_words: usize,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        FrequencyOptions {
            n_words_gram: DEFAULT_N_WORDS_GRAM,
            min_len_words: DEFAULT_MIN_LEN_WORDS,
        }
    }
}

/// One occurrence of a word or n-gram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOffset {
    pub word: String,
    pub offsets: [usize; 2],
    pub n_row: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_row_child: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_row_parent: Option<usize>,
}

/// All occurrences sharing a stem key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemBucket {
    pub count: usize,
    pub word_prefix: String,
    pub offsets_array: Vec<WordOffset>,
}

/// Stem key to its occurrences.
pub type WordFrequency = BTreeMap<String, StemBucket>;

/// Length of a word without punctuation and line breaks.
fn clean_len(word: &str) -> usize {
    word.chars()
        .filter(|&c| !is_punctuation(c) && c != '\n' && c != '\r')
        .count()
}

/// Occurrences in one row, in text order.
fn analyze_row(
    row: &TextRow,
    options: &FrequencyOptions,
    tokenizer: &WordPunctTokenizer,
    stemmer: &PorterStemmer,
) -> Vec<(String, WordOffset)> {
    let mut found = Vec::new();
    let mut run: Vec<(String, Token)> = Vec::with_capacity(options.n_words_gram);

    for token in tokenizer.tokenize_vec(&row.text) {
        if token.is_punctuation() || clean_len(&token.text) < options.min_len_words {
            run.clear();
            continue;
        }
        if run.len() == options.n_words_gram {
            run.remove(0);
        }
        run.push((stemmer.stem(&token.text), token));

        for size in 1..=run.len() {
            let gram = &run[run.len() - size..];
            let (first, last) = (&gram[0].1, &gram[size - 1].1);
            let key = gram
                .iter()
                .map(|(stem, _)| stem.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            found.push((
                key,
                WordOffset {
                    word: row.text[first.byte_start..last.byte_end].to_string(),
                    offsets: [first.start_offset, last.end_offset],
                    n_row: row.idx_row,
                    n_row_child: row.idx_row_child,
                    n_row_parent: row.idx_row_parent,
                },
            ));
        }
    }
    found
}

/// Count words and n-grams of `input` by stem.
///
/// Returns the number of rows and the stem buckets. Rows are analyzed in
/// parallel; each bucket lists its occurrences in row order.
pub fn text_stemming(input: &FrequencyInput, options: &FrequencyOptions) -> Result<(usize, WordFrequency)> {
    if options.n_words_gram == 0 {
        return Err(GhostwriterError::invalid_input("n_words_gram must be at least 1"));
    }
    let rows = input.clone().into_rows();
    let tokenizer = WordPunctTokenizer::new();
    let stemmer = PorterStemmer::new();

    let per_row: Vec<Vec<(String, WordOffset)>> = rows
        .par_iter()
        .map(|row| analyze_row(row, options, &tokenizer, &stemmer))
        .collect();

    let mut frequency = WordFrequency::new();
    for (key, offset) in per_row.into_iter().flatten() {
        let bucket = frequency.entry(key.clone()).or_insert_with(|| StemBucket {
            count: 0,
            word_prefix: key,
            offsets_array: Vec::new(),
        });
        bucket.count += 1;
        bucket.offsets_array.push(offset);
    }
    debug!("Stemmed {} rows into {} keys", rows.len(), frequency.len());
    Ok((rows.len(), frequency))
}
