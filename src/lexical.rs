//! Offline lexical databases.
//!
//! A lexical database answers "which senses does this word have" with
//! WordNet-style synsets: an id, a part of speech, a gloss split into a
//! definition and examples, and the lemma names that share the meaning.
//!
//! Two implementations ship with the crate:
//!
//! - [`wordnet::WordNetDatabase`] reads a Princeton WordNet dictionary
//!   directory (`data.*`, optionally `index.*` and `*.exc`);
//! - [`json::JsonThesaurus`] reads a compact JSON thesaurus, and provides the
//!   embedded default used when nothing else is configured.
//!
//! Both keep their synsets in a [`SenseIndex`]. [`morphy`] adds WordNet's
//! base-form detection on top of any database.
//!
//! Lookups filtered to `ADJ` match head adjectives (`a`) and satellite
//! adjectives (`s`) alike, so they return more senses than filtering on `a`
//! alone.

pub mod json;
pub mod morphy;
pub mod wordnet;

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{GhostwriterError, Result};
use crate::tagger::Pos;

/// WordNet part of speech.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WordNetPos {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "s")]
    Satellite,
    #[serde(rename = "r")]
    Adverb,
}

impl WordNetPos {
    pub const ALL: [WordNetPos; 5] = [
        WordNetPos::Noun,
        WordNetPos::Verb,
        WordNetPos::Adjective,
        WordNetPos::Satellite,
        WordNetPos::Adverb,
    ];

    /// The one-letter WordNet code.
    pub fn as_str(&self) -> &'static str {
        match self {
            WordNetPos::Noun => "n",
            WordNetPos::Verb => "v",
            WordNetPos::Adjective => "a",
            WordNetPos::Satellite => "s",
            WordNetPos::Adverb => "r",
        }
    }

    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "n" => Some(WordNetPos::Noun),
            "v" => Some(WordNetPos::Verb),
            "a" => Some(WordNetPos::Adjective),
            "s" => Some(WordNetPos::Satellite),
            "r" => Some(WordNetPos::Adverb),
            _ => None,
        }
    }

    /// WordNet classes matching a coarse tag; satellites count as adjectives.
    pub fn for_pos(pos: Pos) -> Option<&'static [WordNetPos]> {
        match pos {
            Pos::Noun => Some(&[WordNetPos::Noun]),
            Pos::Verb => Some(&[WordNetPos::Verb]),
            Pos::Adj => Some(&[WordNetPos::Adjective, WordNetPos::Satellite]),
            Pos::Adv => Some(&[WordNetPos::Adverb]),
            _ => None,
        }
    }

    /// Class whose detachment rules and exception list apply.
    pub fn morphological_class(&self) -> WordNetPos {
        match self {
            WordNetPos::Satellite => WordNetPos::Adjective,
            other => *other,
        }
    }
}

impl fmt::Display for WordNetPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictSense {
    pub id: String,
    pub pos: WordNetPos,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    /// Lemma names, multi-word lemmas joined by underscores.
    pub lemmas: Vec<String>,
}

/// Identification of a loaded database.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    pub name: String,
    pub version: String,
    pub lang: String,
    /// Number of synsets
    pub senses: usize,
}

/// A synonym/definition database indexed by word.
pub trait LexicalDatabase: Send + Sync {
    /// Senses of `word`, exact match only.
    fn senses(&self, word: &str) -> Result<Vec<DictSense>>;

    /// Whether `lemma` names at least one synset of class `pos`.
    fn has_lemma(&self, lemma: &str, pos: WordNetPos) -> bool;

    /// Irregular base forms of `word` listed by the database itself.
    fn exceptions(&self, _word: &str, _pos: WordNetPos) -> Vec<String> {
        Vec::new()
    }

    fn info(&self) -> DatabaseInfo;
}

/// Normalize a query word to index-key form.
pub fn lemma_key(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}

/// In-memory synset store with a lemma index.
#[derive(Clone, Debug, Default)]
pub struct SenseIndex {
    senses: Vec<DictSense>,
    by_lemma: AHashMap<String, Vec<usize>>,
}

impl SenseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a synset; it is indexed under each of its lemmas in order.
    pub fn insert(&mut self, sense: DictSense) -> Result<usize> {
        if sense.lemmas.is_empty() {
            return Err(GhostwriterError::lookup(format!(
                "Synset '{}' has no lemmas",
                sense.id
            )));
        }
        let position = self.senses.len();
        for lemma in &sense.lemmas {
            let entry = self.by_lemma.entry(lemma_key(lemma)).or_default();
            if !entry.contains(&position) {
                entry.push(position);
            }
        }
        self.senses.push(sense);
        Ok(position)
    }

    /// Move `positions` to the front of a lemma's sense list, in that order.
    ///
    /// Positions not indexed under the lemma are ignored; the remaining senses
    /// keep their relative order after the moved ones.
    pub fn set_order(&mut self, lemma: &str, positions: &[usize]) {
        let Some(current) = self.by_lemma.get_mut(&lemma_key(lemma)) else {
            return;
        };
        let mut ordered: Vec<usize> = Vec::with_capacity(current.len());
        for &position in positions.iter().chain(current.iter()) {
            if current.contains(&position) && !ordered.contains(&position) {
                ordered.push(position);
            }
        }
        *current = ordered;
    }

    pub fn lookup(&self, word: &str) -> Vec<DictSense> {
        self.by_lemma
            .get(&lemma_key(word))
            .map(|positions| positions.iter().map(|&p| self.senses[p].clone()).collect())
            .unwrap_or_default()
    }

    pub fn has_lemma(&self, lemma: &str, pos: WordNetPos) -> bool {
        self.by_lemma.get(&lemma_key(lemma)).is_some_and(|positions| {
            positions.iter().any(|&p| {
                let sense_pos = self.senses[p].pos;
                sense_pos == pos || sense_pos.morphological_class() == pos.morphological_class()
            })
        })
    }

    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sense(id: &str, pos: WordNetPos, lemmas: &[&str]) -> DictSense {
        DictSense {
            id: id.to_string(),
            pos,
            definition: format!("definition of {id}"),
            examples: vec![],
            lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_wordnet_pos() {
        assert_eq!(WordNetPos::for_pos(Pos::Adj).unwrap().len(), 2);
        assert!(WordNetPos::for_pos(Pos::Propn).is_none());
        assert_eq!(WordNetPos::from_letter("s"), Some(WordNetPos::Satellite));
        assert_eq!(WordNetPos::Satellite.morphological_class(), WordNetPos::Adjective);
        assert_eq!(serde_json::to_string(&WordNetPos::Adverb).unwrap(), "\"r\"");
    }

    #[test]
    fn test_sense_index() {
        let mut index = SenseIndex::new();
        index.insert(sense("glad.a.01", WordNetPos::Adjective, &["glad", "happy"])).unwrap();
        index.insert(sense("set_phrase.n.01", WordNetPos::Noun, &["set_phrase", "idiom"])).unwrap();
        assert!(index.insert(sense("empty", WordNetPos::Noun, &[])).is_err());

        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("Happy")[0].id, "glad.a.01");
        assert_eq!(index.lookup("set phrase").len(), 1);
        assert!(index.lookup("sad").is_empty());
        assert!(index.has_lemma("happy", WordNetPos::Satellite));
        assert!(!index.has_lemma("happy", WordNetPos::Noun));
    }

    #[test]
    fn test_set_order() {
        let mut index = SenseIndex::new();
        index.insert(sense("a", WordNetPos::Noun, &["run"])).unwrap();
        index.insert(sense("b", WordNetPos::Verb, &["run"])).unwrap();
        index.set_order("run", &[1, 7]);
        index.set_order("walk", &[0]);
        let ids: Vec<String> = index.lookup("run").into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
