//! Re-inflection of candidate synonyms.
//!
//! A candidate arrives in its dictionary form ("write", "kid", "large") and
//! leaves matching the original token: same case pattern, and the same
//! number, tense or degree when the token's tag calls for it.
//!
//! # Examples
//!
//! ```
//! use ghostwriter::inflection::InflectionEngine;
//!
//! let engine = InflectionEngine::new();
//! assert_eq!(engine.inflect_tag("write", "VERB", "VBD"), Some("wrote".to_string()));
//! assert_eq!(engine.inflect_tag("kid", "NOUN", "NNS"), Some("kids".to_string()));
//! assert_eq!(engine.inflect_tag("kid", "NOUN", "NN"), None);
//! ```

use log::debug;

use crate::analysis::case::CasePattern;
use crate::morphology;
use crate::span::ContextInfo;
use crate::tagger::Pos;

/// Which morphological operation a (POS, tag) pair asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Inflection {
    Plural,
    Past,
    Participle,
    ThirdPerson,
    Gerund,
    Comparative,
    Superlative,
}

impl Inflection {
    fn for_tag(pos: Pos, tag: &str) -> Option<Self> {
        let inflection = match (pos, tag) {
            (Pos::Noun, "NNS" | "NNPS") => Inflection::Plural,
            (Pos::Verb, "VBD") => Inflection::Past,
            (Pos::Verb, "VBN") => Inflection::Participle,
            (Pos::Verb, "VBZ") => Inflection::ThirdPerson,
            (Pos::Verb, "VBG") => Inflection::Gerund,
            (Pos::Adj, "JJR") => Inflection::Comparative,
            (Pos::Adj, "JJS") => Inflection::Superlative,
            _ => return None,
        };
        Some(inflection)
    }

    fn apply(self, word: &str) -> String {
        match self {
            Inflection::Plural => morphology::pluralize(word),
            Inflection::Past => morphology::past_tense(word),
            Inflection::Participle => morphology::past_participle(word),
            Inflection::ThirdPerson => morphology::third_person(word),
            Inflection::Gerund => morphology::present_participle(word),
            Inflection::Comparative => morphology::comparative(word),
            Inflection::Superlative => morphology::superlative(word),
        }
    }
}

/// The case pattern of the original token, from its flags.
fn case_pattern(context: &ContextInfo) -> CasePattern {
    if context.is_title {
        CasePattern::Title
    } else if context.is_upper {
        CasePattern::Upper
    } else if context.is_lower {
        CasePattern::Lower
    } else {
        CasePattern::Mixed
    }
}

/// Inflects candidate synonyms to fit an original token.
#[derive(Clone, Copy, Debug)]
pub struct InflectionEngine {
    enabled: bool,
}

impl Default for InflectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InflectionEngine {
    pub fn new() -> Self {
        InflectionEngine { enabled: true }
    }

    /// An engine that returns every candidate unchanged.
    pub fn disabled() -> Self {
        InflectionEngine { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Inflect `candidate` to match the token described by `context`.
    ///
    /// Only the first word of a multi-word candidate is inflected; the rest
    /// is kept as is. When no inflection applies, the cased candidate is
    /// returned.
    pub fn inflect(&self, candidate: &str, context: &ContextInfo) -> String {
        if !self.enabled {
            return candidate.to_string();
        }
        let cased = case_pattern(context).apply(candidate);
        let Some(inflection) = Inflection::for_tag(context.pos, &context.tag) else {
            return cased;
        };

        let (first, rest) = match cased.find(char::is_whitespace) {
            Some(at) => cased.split_at(at),
            None => (cased.as_str(), ""),
        };
        let inflected = inflection.apply(&first.to_lowercase());
        if inflected.is_empty() {
            debug!("No {inflection:?} form for '{first}'");
            return cased;
        }
        format!("{}{rest}", CasePattern::of(first).apply(&inflected))
    }

    /// Inflect a lowercase base form for a POS and tag given by name, or
    /// `None` when the pair is not inflected.
    pub fn inflect_tag(&self, candidate: &str, pos: &str, tag: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let pos: Pos = pos.parse().ok()?;
        let inflection = Inflection::for_tag(pos, tag)?;
        let inflected = inflection.apply(&candidate.to_lowercase());
        (!inflected.is_empty()).then_some(inflected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Indices;

    fn context(word: &str, pos: Pos, tag: &str) -> ContextInfo {
        ContextInfo {
            word: word.to_string(),
            lemma: word.to_lowercase(),
            pos,
            tag: tag.to_string(),
            is_title: crate::analysis::case::is_title(word),
            is_upper: crate::analysis::case::is_upper(word),
            is_lower: crate::analysis::case::is_lower(word),
            dependency: "ROOT".to_string(),
            context_sentence: word.to_string(),
            context_words: vec![word.to_string()],
            sentence_position: Some(0),
            char_start: 0,
            char_end: word.chars().count(),
            original_indices: Indices::new(0, word.chars().count() as i64),
        }
    }

    #[test]
    fn test_verb_forms() {
        let engine = InflectionEngine::new();
        assert_eq!(engine.inflect("write", &context("typed", Pos::Verb, "VBD")), "wrote");
        assert_eq!(engine.inflect("write", &context("typing", Pos::Verb, "VBG")), "writing");
        assert_eq!(engine.inflect("write", &context("types", Pos::Verb, "VBZ")), "writes");
        assert_eq!(engine.inflect("write", &context("typed", Pos::Verb, "VBN")), "written");
        assert_eq!(engine.inflect("overtake", &context("passed", Pos::Verb, "VBD")), "overtook");
        assert_eq!(engine.inflect("write", &context("type", Pos::Verb, "VB")), "write");
    }

    #[test]
    fn test_nouns_and_adjectives() {
        let engine = InflectionEngine::new();
        assert_eq!(engine.inflect("kid", &context("children", Pos::Noun, "NNS")), "kids");
        assert_eq!(engine.inflect("child", &context("kids", Pos::Noun, "NNS")), "children");
        assert_eq!(engine.inflect("large", &context("bigger", Pos::Adj, "JJR")), "larger");
        assert_eq!(engine.inflect("large", &context("biggest", Pos::Adj, "JJS")), "largest");
        assert_eq!(engine.inflect("kid", &context("child", Pos::Noun, "NN")), "kid");
    }

    #[test]
    fn test_casing() {
        let engine = InflectionEngine::new();
        assert_eq!(engine.inflect("write", &context("TYPED", Pos::Verb, "VBD")), "WROTE");
        assert_eq!(engine.inflect("write", &context("Typed", Pos::Verb, "VBD")), "Wrote");
        assert_eq!(engine.inflect("Speedy", &context("quick", Pos::Adj, "JJ")), "speedy");
        assert_eq!(engine.inflect("give chase", &context("Hunt", Pos::Verb, "VB")), "Give Chase");
        assert_eq!(engine.inflect("fast", &context("iPhone", Pos::Noun, "NN")), "fast");
    }

    #[test]
    fn test_multi_word_candidates() {
        let engine = InflectionEngine::new();
        assert_eq!(engine.inflect("give chase", &context("hunted", Pos::Verb, "VBD")), "gave chase");
        assert_eq!(engine.inflect("have on", &context("WEARING", Pos::Verb, "VBG")), "HAVING ON");
    }

    #[test]
    fn test_auxiliaries_are_not_inflected() {
        let engine = InflectionEngine::new();
        assert_eq!(engine.inflect("be", &context("was", Pos::Aux, "VBD")), "be");
    }

    #[test]
    fn test_disabled_engine() {
        let engine = InflectionEngine::disabled();
        assert!(!engine.is_enabled());
        assert_eq!(engine.inflect("write", &context("TYPED", Pos::Verb, "VBD")), "write");
        assert_eq!(engine.inflect_tag("write", "VERB", "VBD"), None);
    }

    #[test]
    fn test_inflect_tag() {
        let engine = InflectionEngine::new();
        assert_eq!(engine.inflect_tag("child", "NOUN", "NNS"), Some("children".to_string()));
        assert_eq!(engine.inflect_tag("write", "noun", "VBD"), None);
        assert_eq!(engine.inflect_tag("write", "FOO", "VBD"), None);
    }
}
