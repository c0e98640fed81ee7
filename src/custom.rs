//! User-defined synonym overlay.
//!
//! The store maps a word to its declared relations (`"synonym"`,
//! `"antonym"`, any other relation name) and keeps an inverted index from
//! every related word back to the words that declared it, so a lookup works
//! in both directions. Both maps live behind one lock: an add or a delete is
//! atomic with respect to readers.
//!
//! Entries live for the lifetime of the process and are never persisted.

use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{GhostwriterError, Result};

/// Relation name used for synonyms.
pub const SYNONYM: &str = "synonym";

/// One relation declared for a word, as submitted by a caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(rename = "type")]
    pub relation_type: String,
    pub words: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl Relation {
    pub fn new<S: Into<String>>(relation_type: S, words: Vec<String>, definition: Option<String>) -> Self {
        Relation {
            relation_type: relation_type.into(),
            words,
            definition,
        }
    }

    /// A synonym relation without definition.
    pub fn synonyms<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Relation::new(SYNONYM, words.into_iter().map(Into::into).collect(), None)
    }
}

/// A stored group of related words sharing one definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationGroup {
    pub words: Vec<String>,
    pub definition: Option<String>,
}

/// Relation name to groups, for one word.
pub type CustomEntry = BTreeMap<String, Vec<RelationGroup>>;

#[derive(Debug, Default)]
struct CustomLexicon {
    entries: AHashMap<String, CustomEntry>,
    inverted: AHashMap<String, BTreeSet<String>>,
}

/// In-memory bidirectional custom lexicon.
#[derive(Debug, Default)]
pub struct CustomSynonymStore {
    inner: RwLock<CustomLexicon>,
}

impl CustomSynonymStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare relations for `word`. Groups accumulate under their relation name.
    pub fn add_entry(&self, word: &str, relations: &[Relation]) {
        let mut guard = self.inner.write();
        Self::add_locked(&mut guard, &word.to_lowercase(), relations);
    }

    fn add_locked(lexicon: &mut CustomLexicon, word: &str, relations: &[Relation]) {
        let CustomLexicon { entries, inverted } = lexicon;
        let entry = entries.entry(word.to_string()).or_default();

        for relation in relations {
            let group = RelationGroup {
                words: relation
                    .words
                    .iter()
                    .map(|w| w.trim().to_lowercase())
                    .collect(),
                definition: relation.definition.clone(),
            };
            for related in &group.words {
                inverted
                    .entry(related.clone())
                    .or_default()
                    .insert(word.to_string());
            }
            entry
                .entry(relation.relation_type.clone())
                .or_default()
                .push(group);
        }
        debug!("Added {} custom relation(s) for '{word}'", relations.len());
    }

    /// Remove every relation declared for `word`.
    pub fn delete_entry(&self, word: &str) -> Result<()> {
        let word = word.to_lowercase();
        let mut guard = self.inner.write();
        let CustomLexicon { entries, inverted } = &mut *guard;

        let entry = entries.remove(&word).ok_or_else(|| {
            GhostwriterError::not_found(format!("No custom synonyms found for word '{word}'."))
        })?;
        for related in entry.values().flatten().flat_map(|group| &group.words) {
            if let Some(declaring) = inverted.get_mut(related) {
                declaring.remove(&word);
                if declaring.is_empty() {
                    inverted.remove(related);
                }
            }
        }
        debug!("Deleted custom entry for '{word}'");
        Ok(())
    }

    /// Groups declared for `word` under `relation_type`; empty when none.
    pub fn get_related(&self, word: &str, relation_type: &str) -> Vec<RelationGroup> {
        self.inner
            .read()
            .entries
            .get(&word.to_lowercase())
            .and_then(|entry| entry.get(relation_type))
            .cloned()
            .unwrap_or_default()
    }

    /// Words that declared `related_word` in any relation, sorted.
    pub fn reverse_lookup(&self, related_word: &str) -> BTreeSet<String> {
        self.inner
            .read()
            .inverted
            .get(&related_word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    /// Add synonyms for `word`, skipping blanks, duplicates and words
    /// already registered. Returns the synonyms actually added.
    pub fn register_synonyms(&self, word: &str, synonyms: &[String]) -> Vec<String> {
        let word = word.to_lowercase();
        let mut guard = self.inner.write();
        let existing: BTreeSet<&str> = guard
            .entries
            .get(&word)
            .and_then(|entry| entry.get(SYNONYM))
            .into_iter()
            .flatten()
            .flat_map(|group| group.words.iter().map(String::as_str))
            .collect();

        let mut added: Vec<String> = Vec::new();
        for synonym in synonyms {
            let synonym = synonym.trim().to_lowercase();
            if synonym.is_empty() || existing.contains(synonym.as_str()) || added.contains(&synonym) {
                continue;
            }
            added.push(synonym);
        }

        if !added.is_empty() {
            Self::add_locked(&mut guard, &word, &[Relation::synonyms(added.clone())]);
        }
        added
    }

    /// All relations declared for `word`.
    pub fn entry(&self, word: &str) -> Option<CustomEntry> {
        self.inner.read().entries.get(&word.to_lowercase()).cloned()
    }

    /// Number of words with declared relations.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn happy_relations() -> Vec<Relation> {
        vec![
            Relation::new(SYNONYM, words(&["joy", "cheer"]), Some("definition of happy".into())),
            Relation::new("antonym", words(&["sad", "sadness"]), Some("definition of sad".into())),
            Relation::new(
                SYNONYM,
                words(&["content", "cheerful", "joyful"]),
                Some("another definition of happy".into()),
            ),
        ]
    }

    #[test]
    fn test_add_entry() {
        let store = CustomSynonymStore::new();
        assert!(store.is_empty());
        store.add_entry("Happy", &happy_relations());

        let synonyms = store.get_related("happy", SYNONYM);
        assert_eq!(synonyms.len(), 2);
        assert_eq!(synonyms[0].words, words(&["joy", "cheer"]));
        assert_eq!(synonyms[1].definition.as_deref(), Some("another definition of happy"));
        assert_eq!(store.get_related("HAPPY", "antonym")[0].words, words(&["sad", "sadness"]));
        assert!(store.get_related("happy", "hypernym").is_empty());
        assert!(store.get_related("sad", SYNONYM).is_empty());

        for related in ["joy", "cheer", "sad", "sadness", "content", "cheerful", "joyful"] {
            assert_eq!(store.reverse_lookup(related), BTreeSet::from(["happy".to_string()]));
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_related_words_are_normalized() {
        let store = CustomSynonymStore::new();
        store.add_entry("big", &[Relation::synonyms(["  Large ", "HUGE"])]);
        assert_eq!(store.get_related("big", SYNONYM)[0].words, words(&["large", "huge"]));
        assert!(store.reverse_lookup("Large").contains("big"));
    }

    #[test]
    fn test_delete_entry_restores_index() {
        let store = CustomSynonymStore::new();
        store.add_entry("happy", &happy_relations());
        store.add_entry("text", &[Relation::new(SYNONYM, words(&["word", "sentence"]), None)]);
        store.add_entry("glad", &[Relation::synonyms(["joy"])]);
        assert_eq!(store.reverse_lookup("joy").len(), 2);

        store.delete_entry("TEXT").unwrap();
        assert!(store.entry("text").is_none());
        assert!(store.reverse_lookup("word").is_empty());
        assert!(store.reverse_lookup("sentence").is_empty());
        assert_eq!(store.get_related("happy", SYNONYM).len(), 2);

        store.delete_entry("happy").unwrap();
        assert_eq!(store.reverse_lookup("joy"), BTreeSet::from(["glad".to_string()]));
        assert!(store.reverse_lookup("cheer").is_empty());
        assert!(store.inner.read().inverted.values().all(|set| !set.is_empty()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_missing_entry() {
        let store = CustomSynonymStore::new();
        let err = store.delete_entry("ghost").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_register_synonyms() {
        let store = CustomSynonymStore::new();
        let added = store.register_synonyms("happy", &words(&["Joy", "", "joy", "cheer "]));
        assert_eq!(added, words(&["joy", "cheer"]));

        let added = store.register_synonyms("happy", &words(&["cheer", "glee"]));
        assert_eq!(added, words(&["glee"]));
        assert!(store.register_synonyms("happy", &words(&["JOY"])).is_empty());

        let groups = store.get_related("happy", SYNONYM);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.definition.is_none()));
    }

    #[test]
    fn test_relation_json_shape() {
        let relation: Relation =
            serde_json::from_str(r#"{"type": "synonym", "words": ["joy"]}"#).unwrap();
        assert_eq!(relation.relation_type, SYNONYM);
        assert!(relation.definition.is_none());

        let store = CustomSynonymStore::new();
        store.add_entry("happy", &[relation]);
        let json = serde_json::to_value(store.entry("happy").unwrap()).unwrap();
        assert_eq!(json["synonym"][0]["words"][0], "joy");
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        let store = Arc::new(CustomSynonymStore::new());
        let writers: Vec<_> = (0..4)
            .map(|n| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..50 {
                        let word = format!("word{n}_{i}");
                        store.add_entry(&word, &[Relation::synonyms(["shared"])]);
                        if i % 2 == 0 {
                            store.delete_entry(&word).unwrap();
                        }
                    }
                })
            })
            .collect();
        for handle in writers {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 100);
        assert_eq!(store.reverse_lookup("shared").len(), 100);
    }

    #[test]
    fn test_concurrent_registrations_do_not_duplicate() {
        for _ in 0..50 {
            let store = Arc::new(CustomSynonymStore::new());
            let barrier = Arc::new(std::sync::Barrier::new(8));
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let store = Arc::clone(&store);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        store.register_synonyms("happy", &words(&["joy"]))
                    })
                })
                .collect();
            let added: usize = handles.into_iter().map(|h| h.join().unwrap().len()).sum();
            assert_eq!(added, 1);

            let stored: Vec<String> = store
                .get_related("happy", SYNONYM)
                .into_iter()
                .flat_map(|group| group.words)
                .collect();
            assert_eq!(stored, vec!["joy"]);
        }
    }
}
