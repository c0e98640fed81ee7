//! Synonym resolution.
//!
//! [`SynonymResolver::get_synonyms`] merges two sources for one word:
//!
//! 1. the [`CustomSynonymStore`], in both directions: the words declared as
//!    synonyms *of* the word, and the words that declared the word as *their*
//!    synonym;
//! 2. a [`LexicalDatabase`], one sense per synset, optionally restricted to a
//!    part of speech.
//!
//! Custom senses always come first. [`SynonymGroup`] is the response-level
//! form of a sense once every synonym has been inflected for its context.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::custom::{CustomSynonymStore, SYNONYM};
use crate::error::{GhostwriterError, Result};
use crate::lexical::{LexicalDatabase, WordNetPos, morphy};
use crate::tagger::Pos;

/// Definition of the sense built from directly declared custom synonyms.
pub const CUSTOM_DEFINITION: &str = "User-defined synonym.";

/// Maximum number of examples kept per sense.
pub const MAX_EXAMPLES: usize = 2;

/// One synonym of a sense.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseSynonym {
    pub synonym: String,
    pub is_custom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl SenseSynonym {
    pub fn dictionary<S: Into<String>>(synonym: S) -> Self {
        SenseSynonym {
            synonym: synonym.into(),
            is_custom: false,
            definition: None,
        }
    }

    pub fn custom<S: Into<String>>(synonym: S, definition: Option<String>) -> Self {
        SenseSynonym {
            synonym: synonym.into(),
            is_custom: true,
            definition,
        }
    }
}

/// One meaning of a word with its synonyms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sense {
    definition: String,
    examples: Vec<String>,
    pos: Option<String>,
    synonyms: Vec<SenseSynonym>,
}

impl Sense {
    /// Build a sense; the definition and the synonym list must not be empty.
    /// Examples beyond [`MAX_EXAMPLES`] are dropped.
    pub fn new<S: Into<String>>(
        definition: S,
        mut examples: Vec<String>,
        pos: Option<String>,
        synonyms: Vec<SenseSynonym>,
    ) -> Result<Self> {
        let definition = definition.into();
        if definition.trim().is_empty() {
            return Err(GhostwriterError::invalid_input("sense definition is empty"));
        }
        if synonyms.is_empty() {
            return Err(GhostwriterError::invalid_input(format!(
                "sense '{definition}' has no synonyms"
            )));
        }
        examples.truncate(MAX_EXAMPLES);
        Ok(Sense {
            definition,
            examples,
            pos,
            synonyms,
        })
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    pub fn synonyms(&self) -> &[SenseSynonym] {
        &self.synonyms
    }

    pub fn is_custom(&self) -> bool {
        self.synonyms.iter().all(|s| s.is_custom)
    }
}

/// A synonym adapted to the original token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub base_form: String,
    pub inflected_form: String,
    /// Whether inflection changed the word
    pub matches_context: bool,
    pub is_custom: bool,
}

/// A sense with its synonyms inflected for the original token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymGroup {
    pub definition: String,
    pub examples: Vec<String>,
    pub wordnet_pos: Option<String>,
    pub synonyms: Vec<SynonymEntry>,
}

impl SynonymGroup {
    /// Inflect every synonym of `sense`, leaving out those equal to `word`.
    ///
    /// Returns `None` when no synonym remains.
    pub fn from_sense<F>(sense: &Sense, word: &str, inflect: F) -> Option<Self>
    where
        F: Fn(&str) -> String,
    {
        let word = word.to_lowercase();
        let synonyms: Vec<SynonymEntry> = sense
            .synonyms()
            .iter()
            .filter(|s| s.synonym.to_lowercase() != word)
            .map(|s| {
                let inflected = inflect(&s.synonym);
                let inflected = if inflected.is_empty() {
                    s.synonym.clone()
                } else {
                    inflected
                };
                SynonymEntry {
                    matches_context: inflected.to_lowercase() != s.synonym.to_lowercase(),
                    base_form: s.synonym.clone(),
                    inflected_form: inflected,
                    is_custom: s.is_custom,
                }
            })
            .collect();

        if synonyms.is_empty() {
            return None;
        }
        Some(SynonymGroup {
            definition: sense.definition().to_string(),
            examples: sense.examples().to_vec(),
            wordnet_pos: sense.pos().map(str::to_string),
            synonyms,
        })
    }
}

/// Resolver settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverOptions {
    /// Keep a single custom sense, the reverse match replacing the direct one.
    pub legacy_custom_overwrite: bool,
}

/// Custom senses of a word: `(direct, reverse)`.
pub type CustomSenses = (Option<Sense>, Option<Sense>);

/// Merges custom and dictionary synonyms for one word.
#[derive(Clone)]
pub struct SynonymResolver {
    custom: Arc<CustomSynonymStore>,
    database: Option<Arc<dyn LexicalDatabase>>,
    options: ResolverOptions,
}

impl SynonymResolver {
    pub fn new(
        custom: Arc<CustomSynonymStore>,
        database: Option<Arc<dyn LexicalDatabase>>,
        options: ResolverOptions,
    ) -> Self {
        SynonymResolver {
            custom,
            database,
            options,
        }
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// All senses of `word`, custom senses first. `pos_tag` is a coarse tag
    /// ("NOUN", "VERB", "ADJ", "ADV"); other values do not filter.
    pub fn get_synonyms(&self, word: &str, pos_tag: Option<&str>) -> Result<Vec<Sense>> {
        let (direct, reverse) = self.custom_senses(word, pos_tag);
        let mut senses: Vec<Sense> = if self.options.legacy_custom_overwrite {
            reverse.or(direct).into_iter().collect()
        } else {
            direct.into_iter().chain(reverse).collect()
        };
        senses.extend(self.dictionary_senses(word, pos_tag)?);
        Ok(senses)
    }

    /// Direct and reverse custom senses.
    pub fn custom_senses(&self, word: &str, pos_tag: Option<&str>) -> CustomSenses {
        let word = word.to_lowercase();
        let pos = pos_tag.map(str::to_string);

        let mut direct: Vec<SenseSynonym> = Vec::new();
        for group in self.custom.get_related(&word, SYNONYM) {
            for synonym in group.words {
                // first declaration wins
                if direct.iter().all(|s| s.synonym != synonym) {
                    direct.push(SenseSynonym::custom(synonym, group.definition.clone()));
                }
            }
        }
        let direct = Sense::new(CUSTOM_DEFINITION, Vec::new(), pos.clone(), direct).ok();
        if direct.is_some() {
            debug!("Found direct custom synonyms for '{word}'");
        }

        let reverse: Vec<SenseSynonym> = self
            .custom
            .reverse_lookup(&word)
            .into_iter()
            .map(|w| SenseSynonym::custom(w, None))
            .collect();
        let reverse = Sense::new(
            format!("User-defined synonym (reverse match for \"{word}\")."),
            Vec::new(),
            pos,
            reverse,
        )
        .ok();
        if reverse.is_some() {
            debug!("Found reverse custom match for '{word}'");
        }

        (direct, reverse)
    }

    /// Senses from the lexical database; empty when none is loaded.
    pub fn dictionary_senses(&self, word: &str, pos_tag: Option<&str>) -> Result<Vec<Sense>> {
        let Some(database) = &self.database else {
            debug!("No lexical database loaded, skipping dictionary lookup for '{word}'");
            return Ok(Vec::new());
        };

        let classes = pos_tag
            .and_then(|tag| tag.parse::<Pos>().ok())
            .and_then(WordNetPos::for_pos);
        let found = morphy::lookup(database.as_ref(), word, classes).map_err(|e| match e {
            GhostwriterError::Lookup(_) => e,
            other => GhostwriterError::lookup(other.to_string()),
        })?;

        let word_lower = word.to_lowercase();
        let mut senses = Vec::with_capacity(found.len());
        for dict_sense in found {
            let names: BTreeSet<String> = dict_sense
                .lemmas
                .iter()
                .map(|lemma| lemma.replace('_', " "))
                .filter(|name| name.to_lowercase() != word_lower)
                .collect();
            if names.is_empty() {
                continue;
            }
            let synonyms = names.into_iter().map(SenseSynonym::dictionary).collect();
            match Sense::new(
                dict_sense.definition,
                dict_sense.examples,
                Some(dict_sense.pos.to_string()),
                synonyms,
            ) {
                Ok(sense) => senses.push(sense),
                Err(e) => debug!("Skipping synset {}: {e}", dict_sense.id),
            }
        }
        Ok(senses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom::Relation;
    use crate::lexical::json::JsonThesaurus;

    fn resolver(options: ResolverOptions) -> (Arc<CustomSynonymStore>, SynonymResolver) {
        let custom = Arc::new(CustomSynonymStore::new());
        let database: Arc<dyn LexicalDatabase> = Arc::new(JsonThesaurus::embedded().unwrap());
        let resolver = SynonymResolver::new(Arc::clone(&custom), Some(database), options);
        (custom, resolver)
    }

    fn names(sense: &Sense) -> Vec<&str> {
        sense.synonyms().iter().map(|s| s.synonym.as_str()).collect()
    }

    #[test]
    fn test_sense_validation() {
        assert!(Sense::new("", vec![], None, vec![SenseSynonym::dictionary("a")]).is_err());
        assert!(Sense::new("a meaning", vec![], None, vec![]).is_err());
        let sense = Sense::new(
            "a meaning",
            vec!["one".into(), "two".into(), "three".into()],
            Some("n".into()),
            vec![SenseSynonym::dictionary("word")],
        )
        .unwrap();
        assert_eq!(sense.examples().len(), 2);
        assert_eq!(sense.pos(), Some("n"));
        assert!(!sense.is_custom());
    }

    #[test]
    fn test_dictionary_senses() {
        let (_, resolver) = resolver(ResolverOptions::default());
        let senses = resolver.get_synonyms("happy", Some("ADJ")).unwrap();
        assert!(!senses.is_empty());
        for sense in &senses {
            assert!(matches!(sense.pos(), Some("a") | Some("s")));
            assert!(names(sense).iter().all(|n| n.to_lowercase() != "happy"));
            let mut sorted = names(sense);
            sorted.sort();
            assert_eq!(names(sense), sorted);
            assert!(sense.examples().len() <= MAX_EXAMPLES);
        }
        assert!(senses.iter().any(|s| names(s).contains(&"glad")));
    }

    #[test]
    fn test_pos_filter_and_underscores() {
        let (_, resolver) = resolver(ResolverOptions::default());
        let verbs = resolver.get_synonyms("dog", Some("VERB")).unwrap();
        assert!(verbs.iter().all(|s| s.pos() == Some("v")));
        assert!(names(&verbs[0]).contains(&"give chase"));

        let unfiltered = resolver.get_synonyms("dog", Some("PROPN")).unwrap();
        assert!(unfiltered.len() > verbs.len());
        assert_eq!(unfiltered.len(), resolver.get_synonyms("dog", None).unwrap().len());
    }

    #[test]
    fn test_unknown_word() {
        let (_, resolver) = resolver(ResolverOptions::default());
        assert!(resolver.get_synonyms("qwertyuiop", Some("NOUN")).unwrap().is_empty());
    }

    #[test]
    fn test_custom_override_comes_first() {
        let (custom, resolver) = resolver(ResolverOptions::default());
        custom.add_entry(
            "happy",
            &[Relation::new(SYNONYM, vec!["joy".into()], Some("custom joy".into()))],
        );

        let senses = resolver.get_synonyms("happy", Some("ADJ")).unwrap();
        assert_eq!(senses[0].definition(), CUSTOM_DEFINITION);
        assert_eq!(senses[0].pos(), Some("ADJ"));
        assert!(senses[0].is_custom());
        assert_eq!(senses[0].synonyms()[0].definition.as_deref(), Some("custom joy"));
        assert!(senses[1..].iter().all(|s| !s.is_custom()));
    }

    #[test]
    fn test_repeated_custom_synonyms_are_merged() {
        let (custom, resolver) = resolver(ResolverOptions::default());
        custom.add_entry(
            "happy",
            &[Relation::new(SYNONYM, vec!["joy".into(), "glee".into()], Some("first".into()))],
        );
        custom.add_entry(
            "happy",
            &[Relation::new(SYNONYM, vec!["joy".into()], Some("second".into()))],
        );

        let (direct, _) = resolver.custom_senses("happy", None);
        let direct = direct.unwrap();
        assert_eq!(names(&direct), vec!["joy", "glee"]);
        assert_eq!(direct.synonyms()[0].definition.as_deref(), Some("first"));
    }

    #[test]
    fn test_reverse_lookup() {
        let (custom, resolver) = resolver(ResolverOptions::default());
        custom.add_entry("happy", &[Relation::synonyms(["joy"])]);
        custom.add_entry("glad", &[Relation::synonyms(["joy"])]);

        let senses = resolver.get_synonyms("joy", Some("NOUN")).unwrap();
        assert_eq!(
            senses[0].definition(),
            "User-defined synonym (reverse match for \"joy\")."
        );
        assert_eq!(names(&senses[0]), vec!["glad", "happy"]);
        assert!(senses.len() > 1);
    }

    #[test]
    fn test_direct_and_reverse_senses() {
        let (custom, resolver) = resolver(ResolverOptions::default());
        custom.add_entry("joy", &[Relation::synonyms(["delight"])]);
        custom.add_entry("happy", &[Relation::synonyms(["joy"])]);

        let senses = resolver.get_synonyms("joy", None).unwrap();
        assert_eq!(senses[0].definition(), CUSTOM_DEFINITION);
        assert_eq!(names(&senses[0]), vec!["delight"]);
        assert_eq!(names(&senses[1]), vec!["happy"]);

        let (direct, reverse) = resolver.custom_senses("JOY", None);
        assert!(direct.is_some() && reverse.is_some());
    }

    #[test]
    fn test_legacy_overwrite_keeps_one_custom_sense() {
        let (custom, resolver) = resolver(ResolverOptions {
            legacy_custom_overwrite: true,
        });
        custom.add_entry("joy", &[Relation::synonyms(["delight"])]);
        custom.add_entry("happy", &[Relation::synonyms(["joy"])]);

        let senses = resolver.get_synonyms("joy", None).unwrap();
        assert_eq!(names(&senses[0]), vec!["happy"]);
        assert!(!senses[1].is_custom());

        custom.delete_entry("happy").unwrap();
        let senses = resolver.get_synonyms("joy", None).unwrap();
        assert_eq!(names(&senses[0]), vec!["delight"]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let (custom, resolver) = resolver(ResolverOptions::default());
        custom.add_entry("quick", &[Relation::synonyms(["rapid"])]);
        let first = resolver.get_synonyms("quick", Some("ADJ")).unwrap();
        let second = resolver.get_synonyms("quick", Some("ADJ")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_without_database() {
        let custom = Arc::new(CustomSynonymStore::new());
        custom.add_entry("happy", &[Relation::synonyms(["joy"])]);
        let resolver = SynonymResolver::new(custom, None, ResolverOptions::default());
        let senses = resolver.get_synonyms("happy", None).unwrap();
        assert_eq!(senses.len(), 1);
    }

    #[test]
    fn test_group_from_sense() {
        let sense = Sense::new(
            "a meaning",
            vec![],
            Some("v".into()),
            vec![
                SenseSynonym::dictionary("Write"),
                SenseSynonym::dictionary("compose"),
                SenseSynonym::custom("pen", None),
            ],
        )
        .unwrap();
        let group = SynonymGroup::from_sense(&sense, "write", |s| format!("{s}d")).unwrap();
        assert_eq!(group.wordnet_pos.as_deref(), Some("v"));
        assert_eq!(group.synonyms.len(), 2);
        assert_eq!(group.synonyms[0].inflected_form, "composed");
        assert!(group.synonyms[0].matches_context);
        assert!(group.synonyms[1].is_custom);

        let unchanged = SynonymGroup::from_sense(&sense, "write", str::to_string).unwrap();
        assert!(unchanged.synonyms.iter().all(|s| !s.matches_context));

        let only_self = Sense::new("x", vec![], None, vec![SenseSynonym::dictionary("word")]).unwrap();
        assert!(SynonymGroup::from_sense(&only_self, "WORD", str::to_string).is_none());
    }
}
