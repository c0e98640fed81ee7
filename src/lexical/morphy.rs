//! WordNet-style base-form detection.
//!
//! A surface form is reduced to the base forms a database knows for a given
//! class: first the form itself, then its irregular exceptions (from the
//! database's own lists and the crate's irregular tables) or, when it has
//! none, the results of the class's detachment rules.

use std::iter;

use log::debug;

use crate::error::Result;
use crate::lexical::{DictSense, LexicalDatabase, WordNetPos, lemma_key};
use crate::morphology::irregular::{ADJECTIVES_BY_DEGREE, SINGULARS, VERBS_BY_PARTICIPLE, VERBS_BY_PAST};

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules(class: WordNetPos) -> &'static [(&'static str, &'static str)] {
    match class {
        WordNetPos::Noun => NOUN_RULES,
        WordNetPos::Verb => VERB_RULES,
        WordNetPos::Adjective | WordNetPos::Satellite => ADJECTIVE_RULES,
        WordNetPos::Adverb => &[],
    }
}

/// Irregular base forms from the crate's inflection tables.
fn builtin_exceptions(word: &str, class: WordNetPos) -> Vec<String> {
    let found: Vec<&str> = match class {
        WordNetPos::Noun => SINGULARS.get(word).copied().into_iter().collect(),
        WordNetPos::Verb => VERBS_BY_PAST
            .get(word)
            .into_iter()
            .chain(VERBS_BY_PARTICIPLE.get(word))
            .copied()
            .collect(),
        WordNetPos::Adjective | WordNetPos::Satellite => {
            ADJECTIVES_BY_DEGREE.get(word).copied().into_iter().collect()
        }
        WordNetPos::Adverb => Vec::new(),
    };
    found.into_iter().map(str::to_string).collect()
}

/// Apply detachment rules: `churches` to `church`, `hoping` to `hope`/`hop`.
pub fn detach(word: &str, class: WordNetPos) -> Vec<String> {
    rules(class)
        .iter()
        .filter_map(|(suffix, ending)| {
            let stem = word.strip_suffix(suffix)?;
            (!stem.is_empty()).then(|| format!("{stem}{ending}"))
        })
        .collect()
}

/// Base forms of `word` that `db` knows for class `pos`, most direct first.
pub fn base_forms(db: &dyn LexicalDatabase, word: &str, pos: WordNetPos) -> Vec<String> {
    let word = lemma_key(word);
    let class = pos.morphological_class();

    let mut exceptions = db.exceptions(&word, class);
    exceptions.extend(builtin_exceptions(&word, class));
    let derived = if exceptions.is_empty() {
        detach(&word, class)
    } else {
        exceptions
    };

    let mut forms: Vec<String> = Vec::new();
    for candidate in iter::once(word).chain(derived) {
        if !forms.contains(&candidate) && db.has_lemma(&candidate, pos) {
            forms.push(candidate);
        }
    }
    forms
}

/// Senses of `word` restricted to `classes`, falling back to base forms when
/// the exact lookup has no match.
pub fn lookup(
    db: &dyn LexicalDatabase,
    word: &str,
    classes: Option<&[WordNetPos]>,
) -> Result<Vec<DictSense>> {
    let accepts = |sense: &DictSense| classes.is_none_or(|classes| classes.contains(&sense.pos));

    let exact: Vec<DictSense> = db.senses(word)?.into_iter().filter(accepts).collect();
    if !exact.is_empty() {
        return Ok(exact);
    }

    let key = lemma_key(word);
    let mut senses: Vec<DictSense> = Vec::new();
    for &pos in classes.unwrap_or(&WordNetPos::ALL) {
        for base in base_forms(db, &key, pos) {
            if base == key {
                continue;
            }
            for sense in db.senses(&base)? {
                if sense.pos == pos && !senses.iter().any(|s| s.id == sense.id) {
                    senses.push(sense);
                }
            }
        }
    }
    if !senses.is_empty() {
        debug!("Resolved '{word}' through base forms: {} sense(s)", senses.len());
    }
    Ok(senses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::json::JsonThesaurus;

    fn thesaurus() -> JsonThesaurus {
        JsonThesaurus::embedded().unwrap()
    }

    #[test]
    fn test_detach() {
        assert_eq!(detach("churches", WordNetPos::Noun), vec!["churche", "church"]);
        assert_eq!(detach("hoping", WordNetPos::Verb), vec!["hope", "hop"]);
        assert!(detach("quickly", WordNetPos::Adverb).is_empty());
    }

    #[test]
    fn test_base_forms() {
        let db = thesaurus();
        assert_eq!(base_forms(&db, "foxes", WordNetPos::Noun), vec!["fox"]);
        assert_eq!(base_forms(&db, "looking", WordNetPos::Verb), vec!["look"]);
        assert_eq!(base_forms(&db, "wrote", WordNetPos::Verb), vec!["write"]);
        assert_eq!(base_forms(&db, "children", WordNetPos::Noun), vec!["child"]);
        assert_eq!(base_forms(&db, "larger", WordNetPos::Adjective), vec!["large"]);
        assert_eq!(base_forms(&db, "look", WordNetPos::Verb), vec!["look"]);
        assert!(base_forms(&db, "zzz", WordNetPos::Noun).is_empty());
    }

    #[test]
    fn test_lookup_prefers_exact_match() {
        let db = thesaurus();
        let senses = lookup(&db, "look", Some(&[WordNetPos::Verb])).unwrap();
        assert!(!senses.is_empty());
        assert!(senses.iter().all(|s| s.pos == WordNetPos::Verb));
    }

    #[test]
    fn test_lookup_falls_back_to_base_forms() {
        let db = thesaurus();
        assert!(db.senses("wearing").unwrap().is_empty());
        let senses = lookup(&db, "wearing", Some(&[WordNetPos::Verb])).unwrap();
        assert!(senses.iter().any(|s| s.lemmas.contains(&"have_on".to_string())));

        let senses = lookup(&db, "dogs", None).unwrap();
        assert!(senses.iter().any(|s| s.pos == WordNetPos::Noun));
        assert!(senses.iter().any(|s| s.pos == WordNetPos::Verb));
        assert!(lookup(&db, "dogs", Some(&[WordNetPos::Adverb])).unwrap().is_empty());
    }
}
