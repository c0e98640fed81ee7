//! Phrase orchestration.
//!
//! Ties the tagger, the span resolver, the synonym resolver and the
//! inflection engine together: every eligible word of a selection is looked
//! up by lemma and POS, and its synonyms come back inflected for the word's
//! position in the text.

use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{GhostwriterError, Result};
use crate::inflection::InflectionEngine;
use crate::span::{self, ContextInfo, ContextSummary, Indices};
use crate::synonym::{SynonymGroup, SynonymResolver};
use crate::tagger::{TaggedDocument, TaggedToken, Tagger};

/// Tagger-level diagnostics for one word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugInfo {
    /// Offsets of the token in the full text
    pub token_indices: Indices,
    pub lemma: String,
}

/// Synonyms of one word of a phrase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSynonymResult {
    pub original_word: String,
    /// Offsets relative to the start of the selection
    pub original_indices: Indices,
    pub context_info: ContextSummary,
    pub synonym_groups: Vec<SynonymGroup>,
    pub debug_info: DebugInfo,
}

/// Synonyms of a single selected word, with its full context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResolution {
    pub original_word: String,
    pub original_indices: Indices,
    pub context_info: ContextInfo,
    pub synonym_groups: Vec<SynonymGroup>,
    pub debug_info: DebugInfo,
}

/// The sentence holding a word, with the word's offsets inside it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSplit {
    pub sentence: String,
    pub start_in_sentence: usize,
    pub end_in_sentence: usize,
}

/// Resolves inflected synonyms for words and phrases.
#[derive(Clone)]
pub struct PhraseOrchestrator {
    tagger: Arc<dyn Tagger>,
    resolver: SynonymResolver,
    inflection: InflectionEngine,
}

impl PhraseOrchestrator {
    pub fn new(tagger: Arc<dyn Tagger>, resolver: SynonymResolver, inflection: InflectionEngine) -> Self {
        PhraseOrchestrator {
            tagger,
            resolver,
            inflection,
        }
    }

    pub fn tagger(&self) -> &dyn Tagger {
        self.tagger.as_ref()
    }

    pub fn resolver(&self) -> &SynonymResolver {
        &self.resolver
    }

    pub fn inflection(&self) -> InflectionEngine {
        self.inflection
    }

    /// Senses of the token's lemma with every synonym inflected for it.
    pub fn synonym_groups(&self, context: &ContextInfo) -> Result<Vec<SynonymGroup>> {
        let senses = self
            .resolver
            .get_synonyms(&context.lemma, Some(context.pos.as_str()))?;
        Ok(senses
            .iter()
            .filter_map(|sense| {
                SynonymGroup::from_sense(sense, &context.lemma, |candidate| {
                    self.inflection.inflect(candidate, context)
                })
            })
            .collect())
    }

    /// Synonyms for every eligible word overlapping `[start, end)`, in text
    /// order. Words without synonyms are left out; a word whose lookup fails
    /// is logged and skipped.
    ///
    /// An empty or reversed selection has no words and yields an empty list.
    pub fn resolve_phrase(&self, text: &str, start: i64, end: i64) -> Result<Vec<WordSynonymResult>> {
        let len = text.chars().count();
        if start < 0 || end > len as i64 {
            return Err(GhostwriterError::invalid_range(start, end, len));
        }
        if start >= end {
            warn!("Could not create a valid token span from indices {start}-{end}");
            return Ok(Vec::new());
        }
        let (start, end) = (start as usize, end as usize);

        let doc = self.tagger.tag(text)?;
        let mut results = Vec::new();
        for token in span::eligible_tokens(&doc, start, end) {
            match self.word_result(&doc, token, start) {
                Ok(Some(result)) => results.push(result),
                Ok(None) => debug!("No synonyms for '{}'", token.text),
                Err(e) => warn!("Could not process token '{}': {e}", token.text),
            }
        }
        debug!(
            "Phrase {start}-{end}: {} of the selected words have synonyms",
            results.len()
        );
        Ok(results)
    }

    fn word_result(
        &self,
        doc: &TaggedDocument,
        token: &TaggedToken,
        origin: usize,
    ) -> Result<Option<WordSynonymResult>> {
        let context = ContextInfo::from_token(doc, token, Indices::of_token(token));
        let synonym_groups = self.synonym_groups(&context)?;
        if synonym_groups.is_empty() {
            return Ok(None);
        }
        Ok(Some(WordSynonymResult {
            original_word: token.text.clone(),
            original_indices: Indices::local(token, origin),
            context_info: context.summary(),
            synonym_groups,
            debug_info: DebugInfo {
                token_indices: Indices::of_token(token),
                lemma: context.lemma,
            },
        }))
    }

    /// Synonyms for the single word `word` at `[start, end)`.
    pub fn resolve_word(&self, text: &str, start: i64, end: i64, word: &str) -> Result<WordResolution> {
        let context = span::resolve_context(self.tagger.as_ref(), text, start, end, word)?;
        let synonym_groups = self.synonym_groups(&context)?;
        Ok(WordResolution {
            original_word: context.word.clone(),
            original_indices: context.original_indices,
            debug_info: DebugInfo {
                token_indices: Indices::new(context.char_start as i64, context.char_end as i64),
                lemma: context.lemma.clone(),
            },
            context_info: context,
            synonym_groups,
        })
    }

    /// The sentence containing `word` at `[start, end)`.
    pub fn split_text(&self, text: &str, start: i64, end: i64, word: &str) -> Result<SentenceSplit> {
        let (start, end) = span::validate_range(text.chars().count(), start, end)?;
        let doc = self.tagger.tag(text)?;
        let anchor = doc
            .anchor(start, end)
            .filter(|t| t.text == word)
            .ok_or_else(|| GhostwriterError::token_not_found(word, start as i64, end as i64))?;
        let sentence = doc.sentence_of(anchor);
        Ok(SentenceSplit {
            sentence: doc.sentence_text(sentence).to_string(),
            // a selection may begin in the gap before the sentence
            start_in_sentence: start.saturating_sub(sentence.start_char),
            end_in_sentence: end.saturating_sub(sentence.start_char),
        })
    }
}
