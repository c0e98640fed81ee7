//! English morphology.
//!
//! Rule-based inflection (plural, verb forms, comparison) and the reverse
//! lemmatization used by the tagger. All functions expect lowercase input;
//! callers are responsible for restoring casing.
//!
//! # Examples
//!
//! ```
//! use ghostwriter::morphology::{pluralize, past_tense, comparative};
//!
//! assert_eq!(pluralize("child"), "children");
//! assert_eq!(past_tense("overtake"), "overtook");
//! assert_eq!(comparative("large"), "larger");
//! ```

pub mod irregular;

use irregular::{
    ADJECTIVES_BY_DEGREE, DOUBLING_VERBS, INVARIANT_SET, IRREGULAR_ADJECTIVES, PLURALS,
    REGULAR_MAN_NOUNS, SINGULARS, VERBS_BY_BASE, VERBS_BY_PARTICIPLE, VERBS_BY_PAST,
    split_compound,
};

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

fn last_chars(word: &str, n: usize) -> Vec<char> {
    let chars: Vec<char> = word.chars().collect();
    chars[chars.len().saturating_sub(n)..].to_vec()
}

/// Ends with a consonant followed by `y` ("try", "happy").
fn ends_consonant_y(word: &str) -> bool {
    match last_chars(word, 2).as_slice() {
        [c, 'y'] => is_consonant(*c),
        _ => false,
    }
}

/// Approximate syllable count: vowel groups minus a silent final `e`.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let mut count = 0;
    let mut previous_vowel = false;
    for (i, &c) in chars.iter().enumerate() {
        let vowel = is_vowel(c) || (c == 'y' && i > 0);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }
    let silent_e = word.ends_with('e') && !word.ends_with("le") && !word.ends_with("ee");
    if silent_e && count > 1 {
        count -= 1;
    }
    count.max(1)
}

/// Whether the final consonant doubles before a vowel suffix ("stop" to "stopping").
pub fn doubles_final_consonant(word: &str) -> bool {
    if DOUBLING_VERBS.contains(&word) {
        return true;
    }
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n < 3 || count_syllables(word) != 1 {
        return false;
    }
    let (c1, v, c2) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    is_consonant(c1) && is_vowel(v) && is_consonant(c2) && !matches!(c2, 'w' | 'x' | 'y')
}

fn doubled(word: &str) -> String {
    match word.chars().last() {
        Some(c) => format!("{word}{c}"),
        None => String::new(),
    }
}

/// Plural of a noun.
pub fn pluralize(noun: &str) -> String {
    if noun.is_empty() || INVARIANT_SET.contains(noun) {
        return noun.to_string();
    }
    if let Some(plural) = PLURALS.get(noun) {
        return (*plural).to_string();
    }
    if let Some(stem) = noun.strip_suffix("woman") {
        return format!("{stem}women");
    }
    if let Some(stem) = noun.strip_suffix("man")
        && !REGULAR_MAN_NOUNS.contains(&noun)
        && stem.len() >= 3
    {
        return format!("{stem}men");
    }
    if let Some(stem) = noun.strip_suffix("sis") {
        return format!("{stem}ses");
    }
    if ends_consonant_y(noun) {
        return format!("{}ies", &noun[..noun.len() - 1]);
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| noun.ends_with(s)) {
        return format!("{noun}es");
    }
    format!("{noun}s")
}

/// Singular of a plural noun; words that do not look plural are returned unchanged.
pub fn singularize(noun: &str) -> String {
    if INVARIANT_SET.contains(noun) {
        return noun.to_string();
    }
    if let Some(singular) = SINGULARS.get(noun) {
        return (*singular).to_string();
    }
    if let Some(stem) = noun.strip_suffix("women") {
        return format!("{stem}woman");
    }
    if let Some(stem) = noun.strip_suffix("men")
        && stem.len() >= 3
    {
        return format!("{stem}man");
    }
    if let Some(stem) = noun.strip_suffix("ies")
        && stem.len() >= 2
    {
        return format!("{stem}y");
    }
    if ["sses", "ches", "shes", "xes", "zzes"].iter().any(|s| noun.ends_with(s)) {
        return noun[..noun.len() - 2].to_string();
    }
    if noun.ends_with("ss") || noun.ends_with("us") || noun.ends_with("is") {
        return noun.to_string();
    }
    match noun.strip_suffix('s') {
        Some(stem) if stem.len() >= 2 => stem.to_string(),
        _ => noun.to_string(),
    }
}

/// Irregular `(past, participle)` of a verb, compounds included.
fn irregular_forms(verb: &str) -> Option<(String, String)> {
    if let Some(&(past, participle)) = VERBS_BY_BASE.get(verb) {
        return Some((past.to_string(), participle.to_string()));
    }
    let (prefix, base) = split_compound(verb)?;
    let &(past, participle) = VERBS_BY_BASE.get(base)?;
    Some((format!("{prefix}{past}"), format!("{prefix}{participle}")))
}

fn regular_past(verb: &str) -> String {
    if verb.ends_with('e') {
        format!("{verb}d")
    } else if ends_consonant_y(verb) {
        format!("{}ied", &verb[..verb.len() - 1])
    } else if verb.ends_with('c') {
        format!("{verb}ked")
    } else if doubles_final_consonant(verb) {
        format!("{}ed", doubled(verb))
    } else {
        format!("{verb}ed")
    }
}

/// Simple past (VBD).
pub fn past_tense(verb: &str) -> String {
    match irregular_forms(verb) {
        Some((past, _)) => past,
        None => regular_past(verb),
    }
}

/// Past participle (VBN).
pub fn past_participle(verb: &str) -> String {
    match irregular_forms(verb) {
        Some((_, participle)) => participle,
        None => regular_past(verb),
    }
}

/// Present participle / gerund (VBG).
pub fn present_participle(verb: &str) -> String {
    if verb == "be" {
        return "being".to_string();
    }
    if let Some(stem) = verb.strip_suffix("ie") {
        return format!("{stem}ying");
    }
    if verb.ends_with("ee") || verb.ends_with("ye") || verb.ends_with("oe") {
        return format!("{verb}ing");
    }
    if let Some(stem) = verb.strip_suffix('e')
        && stem.len() >= 2
    {
        return format!("{stem}ing");
    }
    if verb.ends_with('c') {
        return format!("{verb}king");
    }
    if doubles_final_consonant(verb) {
        return format!("{}ing", doubled(verb));
    }
    format!("{verb}ing")
}

/// Third person singular present (VBZ).
pub fn third_person(verb: &str) -> String {
    match verb {
        "be" => return "is".to_string(),
        "have" => return "has".to_string(),
        _ => {}
    }
    if ends_consonant_y(verb) {
        return format!("{}ies", &verb[..verb.len() - 1]);
    }
    if ["s", "x", "z", "ch", "sh", "o"].iter().any(|s| verb.ends_with(s)) {
        return format!("{verb}es");
    }
    format!("{verb}s")
}

/// Whether an adjective compares with "more"/"most" instead of a suffix.
fn is_periphrastic(adjective: &str) -> bool {
    match count_syllables(adjective) {
        1 => false,
        2 => !(ends_consonant_y(adjective)
            || adjective.ends_with("le")
            || adjective.ends_with("er")
            || adjective.ends_with("ow")),
        _ => true,
    }
}

fn compare(adjective: &str, suffix: &str, periphrasis: &str) -> String {
    if is_periphrastic(adjective) {
        return format!("{periphrasis} {adjective}");
    }
    if ends_consonant_y(adjective) {
        return format!("{}i{suffix}", &adjective[..adjective.len() - 1]);
    }
    if adjective.ends_with('e') {
        return format!("{adjective}{}", &suffix[1..]);
    }
    if doubles_final_consonant(adjective) {
        return format!("{}{suffix}", doubled(adjective));
    }
    format!("{adjective}{suffix}")
}

/// Comparative (JJR).
pub fn comparative(adjective: &str) -> String {
    match IRREGULAR_ADJECTIVES.iter().find(|(base, _, _)| *base == adjective) {
        Some((_, comparative, _)) => (*comparative).to_string(),
        None => compare(adjective, "er", "more"),
    }
}

/// Superlative (JJS).
pub fn superlative(adjective: &str) -> String {
    match IRREGULAR_ADJECTIVES.iter().find(|(base, _, _)| *base == adjective) {
        Some((_, _, superlative)) => (*superlative).to_string(),
        None => compare(adjective, "est", "most"),
    }
}

/// Whether a stripped stem most likely lost a silent `e` ("lik" from "liked").
fn needs_silent_e(stem: &str) -> bool {
    let tail = last_chars(stem, 3);
    match tail.as_slice() {
        [.., 'v'] | [.., 'c'] | [.., 'r', 'g'] | [.., 'd', 'g'] => true,
        [.., c, 'u', 'r'] => is_consonant(*c),
        [.., 'i', 'z'] | [.., 'y', 's'] | [.., 'y', 'z'] | [.., 'a', 't'] => count_syllables(stem) > 1,
        [.., c, 'l'] => matches!(c, 'b' | 'p' | 't' | 'd' | 'g' | 'k' | 'f' | 'z'),
        [.., v, 's'] => stem == "us" || stem.ends_with("aus") || (is_vowel(*v) && *v != 'u'),
        [c1, v, c2] => {
            is_consonant(*c1)
                && is_vowel(*v)
                && is_consonant(*c2)
                && !matches!(c2, 'w' | 'x' | 'y')
                && count_syllables(stem) == 1
        }
        _ => false,
    }
}

/// Rebuild a base form from a stem left after removing "ed"/"ing"/"er"/"est".
fn restore_stem(stem: &str, is_known: &dyn Fn(&str) -> bool) -> String {
    if is_known(stem) {
        return stem.to_string();
    }
    let with_e = format!("{stem}e");
    if is_known(&with_e) {
        return with_e;
    }
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n >= 3 && chars[n - 1] == chars[n - 2] && matches!(chars[n - 1], 'b' | 'd' | 'g' | 'm' | 'n' | 'p' | 'r' | 't')
    {
        let single = &stem[..stem.len() - 1];
        if is_known(single) || doubles_final_consonant(single) {
            return single.to_string();
        }
    }
    if needs_silent_e(stem) {
        return with_e;
    }
    stem.to_string()
}

/// Verb form of a surface word, used to pick a lemma.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerbForm {
    Past,
    Participle,
    Gerund,
    ThirdPerson,
}

/// Base form of an inflected verb.
///
/// `is_known` answers whether a candidate base form is a known verb; it is
/// consulted before the spelling heuristics.
pub fn verb_lemma(word: &str, form: VerbForm, is_known: &dyn Fn(&str) -> bool) -> String {
    match word {
        "am" | "is" | "are" | "was" | "were" | "been" | "being" | "'s" | "'re" | "'m" => {
            return "be".to_string();
        }
        "has" | "had" | "'ve" | "'d" => return "have".to_string(),
        "does" | "did" | "done" => return "do".to_string(),
        _ => {}
    }

    match form {
        VerbForm::Past | VerbForm::Participle => {
            let primary = if form == VerbForm::Past { &*VERBS_BY_PAST } else { &*VERBS_BY_PARTICIPLE };
            let secondary = if form == VerbForm::Past { &*VERBS_BY_PARTICIPLE } else { &*VERBS_BY_PAST };
            if let Some(base) = primary.get(word).or_else(|| secondary.get(word)) {
                return (*base).to_string();
            }
            if let Some(lemma) = irregular_compound_lemma(word) {
                return lemma;
            }
            if let Some(stem) = word.strip_suffix("ied")
                && stem.len() >= 2
            {
                return format!("{stem}y");
            }
            if let Some(stem) = word.strip_suffix("cked")
                && stem.ends_with('i')
                && count_syllables(stem) >= 2
                && !is_known(&format!("{stem}ck"))
            {
                return format!("{stem}c");
            }
            match word.strip_suffix("ed") {
                Some(stem) if stem.len() >= 2 => restore_stem(stem, is_known),
                _ => word.to_string(),
            }
        }
        VerbForm::Gerund => {
            if let Some(stem) = word.strip_suffix("ying")
                && stem.len() == 1
            {
                return format!("{stem}ie");
            }
            match word.strip_suffix("ing") {
                Some(stem) if stem.len() >= 2 => restore_stem(stem, is_known),
                _ => word.to_string(),
            }
        }
        VerbForm::ThirdPerson => {
            if let Some(stem) = word.strip_suffix("ies")
                && stem.len() >= 2
            {
                return format!("{stem}y");
            }
            if ["sses", "ches", "shes", "xes", "zzes", "oes"].iter().any(|s| word.ends_with(s)) {
                return word[..word.len() - 2].to_string();
            }
            match word.strip_suffix('s') {
                Some(stem) if !stem.is_empty() => stem.to_string(),
                _ => word.to_string(),
            }
        }
    }
}

/// Lemma of a prefixed irregular form ("overtook" to "overtake").
fn irregular_compound_lemma(word: &str) -> Option<String> {
    irregular::VERB_PREFIXES.iter().find_map(|prefix| {
        let rest = word.strip_prefix(prefix)?;
        if rest.len() < 2 {
            return None;
        }
        let base = VERBS_BY_PAST.get(rest).or_else(|| VERBS_BY_PARTICIPLE.get(rest))?;
        Some(format!("{prefix}{base}"))
    })
}

/// Base form of a comparative or superlative adjective.
pub fn adjective_lemma(word: &str, is_known: &dyn Fn(&str) -> bool) -> String {
    if let Some(base) = ADJECTIVES_BY_DEGREE.get(word) {
        return (*base).to_string();
    }
    let stem = word
        .strip_suffix("est")
        .or_else(|| word.strip_suffix("er"))
        .filter(|stem| stem.len() >= 2);
    let Some(stem) = stem else {
        return word.to_string();
    };
    if let Some(y_stem) = stem.strip_suffix('i') {
        return format!("{y_stem}y");
    }
    restore_stem(stem, is_known)
}
