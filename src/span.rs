//! Span resolution.
//!
//! Maps a caller's character range onto the tagged text: validates the range,
//! finds the anchor token, and snapshots the token's grammatical context
//! (tags, sentence, a window of neighbouring words) as a [`ContextInfo`].
//!
//! Anchor rule: the first token `t` with `t.start <= start < t.end`, or
//! failing that, with `start <= t.start < end`.

use serde::{Deserialize, Serialize};

use crate::error::{GhostwriterError, Result};
use crate::tagger::{Pos, TaggedDocument, TaggedToken, Tagger};

/// Number of tokens kept on each side of the anchor in the context window.
pub const CONTEXT_RADIUS: usize = 5;

/// A start/end pair of character offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indices {
    pub start: i64,
    pub end: i64,
}

impl Indices {
    pub fn new(start: i64, end: i64) -> Self {
        Indices { start, end }
    }

    /// Offsets of a token.
    pub fn of_token(token: &TaggedToken) -> Self {
        Indices::new(token.start as i64, token.end as i64)
    }

    /// Offsets of a token relative to `origin`; negative when the token
    /// starts before it.
    pub fn local(token: &TaggedToken, origin: usize) -> Self {
        let start = token.start as i64 - origin as i64;
        Indices::new(start, start + token.char_len() as i64)
    }
}

/// Grammatical context of one token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextInfo {
    pub word: String,
    pub lemma: String,
    pub pos: Pos,
    /// Fine-grained tag
    pub tag: String,
    pub is_title: bool,
    pub is_upper: bool,
    pub is_lower: bool,
    pub dependency: String,
    pub context_sentence: String,
    pub context_words: Vec<String>,
    /// Position of the token among the sentence's non-space tokens
    pub sentence_position: Option<usize>,
    pub char_start: usize,
    pub char_end: usize,
    /// The range the caller asked for
    pub original_indices: Indices,
}

/// The context fields reported per word in phrase results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSummary {
    pub pos: Pos,
    pub sentence: String,
    pub grammatical_form: String,
    pub context_words: Vec<String>,
    pub dependency: String,
}

impl ContextInfo {
    /// Snapshot the context of `token` within `doc`.
    pub fn from_token(doc: &TaggedDocument, token: &TaggedToken, original: Indices) -> Self {
        let sentence = doc.sentence_of(token);
        let words: Vec<&TaggedToken> = doc
            .sentence_tokens(sentence)
            .iter()
            .filter(|t| !t.is_space)
            .collect();
        let position = words.iter().position(|t| t.index == token.index);
        let (from, to) = context_window(words.len(), position);

        ContextInfo {
            word: token.text.clone(),
            lemma: token.lemma.clone(),
            pos: token.pos,
            tag: token.tag.clone(),
            is_title: token.is_title,
            is_upper: token.is_upper,
            is_lower: token.is_lower,
            dependency: token.dep.clone(),
            context_sentence: doc.sentence_text(sentence).to_string(),
            context_words: words[from..to].iter().map(|t| t.text.clone()).collect(),
            sentence_position: position,
            char_start: token.start,
            char_end: token.end,
            original_indices: original,
        }
    }

    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            pos: self.pos,
            sentence: self.context_sentence.clone(),
            grammatical_form: self.tag.clone(),
            context_words: self.context_words.clone(),
            dependency: self.dependency.clone(),
        }
    }
}

/// Window `[from, to)` of ±[`CONTEXT_RADIUS`] tokens around `position` in a
/// sentence of `len` tokens; the whole sentence when the position is unknown.
pub fn context_window(len: usize, position: Option<usize>) -> (usize, usize) {
    match position {
        Some(p) => (p.saturating_sub(CONTEXT_RADIUS), (p + CONTEXT_RADIUS + 1).min(len)),
        None => (0, len),
    }
}

/// Check `[start, end)` against a text of `len` characters.
pub fn validate_range(len: usize, start: i64, end: i64) -> Result<(usize, usize)> {
    if start < 0 || end > len as i64 || start >= end {
        return Err(GhostwriterError::invalid_range(start, end, len));
    }
    Ok((start as usize, end as usize))
}

/// Whether a token takes part in phrase resolution.
pub fn is_eligible(token: &TaggedToken) -> bool {
    token.pos.is_eligible() && !token.is_stop && !token.is_punct
}

/// Eligible tokens overlapping `[start, end)`, in text order.
pub fn eligible_tokens(doc: &TaggedDocument, start: usize, end: usize) -> Vec<&TaggedToken> {
    doc.char_span(start, end)
        .iter()
        .filter(|t| is_eligible(t))
        .collect()
}

/// Find the anchor token of `[start, end)` in a tagged document and check it
/// reads `target_word`.
pub fn anchor_context(
    doc: &TaggedDocument,
    start: usize,
    end: usize,
    target_word: &str,
) -> Result<ContextInfo> {
    let original = Indices::new(start as i64, end as i64);
    match doc.anchor(start, end) {
        Some(token) if token.text == target_word => Ok(ContextInfo::from_token(doc, token, original)),
        _ => Err(GhostwriterError::token_not_found(
            target_word,
            start as i64,
            end as i64,
        )),
    }
}

/// Tag `text` and resolve the context of the word at `[start, end)`.
pub fn resolve_context(
    tagger: &dyn Tagger,
    text: &str,
    start: i64,
    end: i64,
    target_word: &str,
) -> Result<ContextInfo> {
    let (start, end) = validate_range(text.chars().count(), start, end)?;
    let doc = tagger.tag(text)?;
    anchor_context(&doc, start, end, target_word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::rules::RuleTagger;

    const FOX: &str = "The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_context_window() {
        assert_eq!(context_window(20, Some(10)), (5, 16));
        assert_eq!(context_window(20, Some(0)), (0, 6));
        assert_eq!(context_window(4, Some(0)), (0, 4));
        assert_eq!(context_window(8, Some(7)), (2, 8));
        assert_eq!(context_window(8, None), (0, 8));
    }

    #[test]
    fn test_validate_range() {
        assert_eq!(validate_range(10, 2, 5).unwrap(), (2, 5));
        assert!(validate_range(10, -1, 5).is_err());
        assert!(validate_range(10, 5, 11).is_err());
        assert!(validate_range(10, 5, 5).is_err());
        let err = validate_range(29, 100, 200).unwrap_err();
        assert!(matches!(err, GhostwriterError::InvalidRange { start: 100, end: 200, len: 29 }));
    }

    #[test]
    fn test_resolve_context() {
        let tagger = RuleTagger::new();
        let info = resolve_context(&tagger, FOX, 4, 9, "quick").unwrap();
        assert_eq!(info.word, "quick");
        assert_eq!(info.lemma, "quick");
        assert_eq!(info.pos, Pos::Adj);
        assert_eq!(info.tag, "JJ");
        assert_eq!(info.dependency, "amod");
        assert_eq!(info.context_sentence, FOX);
        assert_eq!(info.context_words, vec!["The", "quick", "brown", "fox", "jumps", "over", "the"]);
        assert_eq!(info.sentence_position, Some(1));
        assert_eq!((info.char_start, info.char_end), (4, 9));
        assert_eq!(info.original_indices, Indices::new(4, 9));
        assert!(info.is_lower && !info.is_title && !info.is_upper);
    }

    #[test]
    fn test_first_token_gets_a_window() {
        let tagger = RuleTagger::new();
        let info = resolve_context(&tagger, FOX, 0, 3, "The").unwrap();
        assert_eq!(info.sentence_position, Some(0));
        assert_eq!(info.context_words, vec!["The", "quick", "brown", "fox", "jumps", "over"]);
        assert!(info.is_title);
    }

    #[test]
    fn test_resolve_context_errors() {
        let tagger = RuleTagger::new();
        let short = "Test text that raises a 400.";
        assert!(matches!(
            resolve_context(&tagger, short, 100, 200, "raises"),
            Err(GhostwriterError::InvalidRange { .. })
        ));
        assert!(matches!(
            resolve_context(&tagger, FOX, 4, 9, "slow"),
            Err(GhostwriterError::TokenNotFound { .. })
        ));
        assert!(matches!(
            resolve_context(&tagger, "two  spaces", 3, 5, "spaces"),
            Err(GhostwriterError::TokenNotFound { .. })
        ));
    }

    #[test]
    fn test_anchor_inside_token() {
        let tagger = RuleTagger::new();
        let info = resolve_context(&tagger, FOX, 6, 8, "quick").unwrap();
        assert_eq!(info.char_start, 4);
    }

    #[test]
    fn test_window_stays_in_sentence() {
        let tagger = RuleTagger::new();
        let text = "I slept. The quick brown fox jumps.";
        let info = resolve_context(&tagger, text, 13, 18, "quick").unwrap();
        assert_eq!(info.context_sentence, "The quick brown fox jumps.");
        assert_eq!(info.context_words.first().map(String::as_str), Some("The"));
        assert_eq!(info.context_words.last().map(String::as_str), Some("."));
    }

    #[test]
    fn test_eligible_tokens_and_local_indices() {
        let doc = RuleTagger::new().tag(FOX).unwrap();
        let words: Vec<&str> = eligible_tokens(&doc, 0, 19).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["quick", "brown", "fox"]);

        let fox = eligible_tokens(&doc, 18, 19)[0];
        assert_eq!(fox.text, "fox");
        assert_eq!(Indices::local(fox, 18), Indices::new(-2, 1));
    }

    #[test]
    fn test_summary() {
        let tagger = RuleTagger::new();
        let summary = resolve_context(&tagger, FOX, 16, 19, "fox").unwrap().summary();
        assert_eq!(summary.grammatical_form, "NN");
        assert_eq!(summary.sentence, FOX);
        assert_eq!(summary.dependency, "nsubj");
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["pos"], "NOUN");
    }
}
