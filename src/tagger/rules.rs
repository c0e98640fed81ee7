//! Rule-based English tagger.
//!
//! Tagging runs sentence by sentence in four passes:
//!
//! 1. every token gets its candidate readings from the lexicon, the
//!    irregular-form tables and the morphology rules, or from suffix
//!    heuristics when the word is unknown;
//! 2. a left-to-right pass picks one reading per token using the reading
//!    already chosen for the previous token and the candidates of the next;
//! 3. fix-ups settle finite versus base verbs and auxiliary versus main
//!    "have"/"do";
//! 4. dependency labels are assigned from the tag sequence.

use std::cmp::Reverse;
use std::path::Path;

use log::debug;

use crate::analysis::case;
use crate::analysis::stop::is_stop_word;
use crate::analysis::token::{Token, TokenType};
use crate::analysis::tokenizer::UnicodeWordTokenizer;
use crate::error::Result;
use crate::morphology::irregular::{
    ADJECTIVES_BY_DEGREE, IRREGULAR_ADJECTIVES, SINGULARS, VERBS_BY_PARTICIPLE, VERBS_BY_PAST,
};
use crate::morphology::{VerbForm, adjective_lemma, singularize, verb_lemma};
use crate::tagger::lexicon::{Lexicon, Reading};
use crate::tagger::sentence::split_sentences;
use crate::tagger::{Pos, Sentence, TaggedDocument, TaggedToken, Tagger};

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ish", "ical", "ary", "ic", "al",
];
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ship", "hood", "ance", "ence", "er",
    "or", "ure", "age",
];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ate"];

/// Rule-based English part-of-speech tagger.
#[derive(Clone, Debug, Default)]
pub struct RuleTagger {
    tokenizer: UnicodeWordTokenizer,
    lexicon: Lexicon,
}

/// What the scorer knows about a token's neighbourhood.
struct Context<'a> {
    prev: Option<&'a Reading>,
    /// Previous reading that is not an adverb or a negation.
    core: Option<&'a Reading>,
    next: &'a [Reading],
    initial: bool,
}

fn is_modifier(reading: &Reading) -> bool {
    reading.pos == Pos::Adv || (reading.pos == Pos::Part && reading.tag == "RB")
}

fn punctuation_tag(text: &str) -> &'static str {
    match text {
        "," => ",",
        ":" | ";" | "\u{2014}" | "--" => ":",
        "-" | "\u{2010}" | "\u{2013}" => "HYPH",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        "\"" | "\u{201C}" | "`" | "``" => "``",
        "'" | "\u{201D}" | "\u{2018}" | "\u{2019}" | "''" => "''",
        t if t.chars().all(|c| matches!(c, '.' | '!' | '?' | '\u{2026}')) => ".",
        _ => "NFP",
    }
}

impl RuleTagger {
    /// Create a tagger with the built-in lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::new())
    }

    /// Create a tagger with a prepared lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        RuleTagger {
            tokenizer: UnicodeWordTokenizer::new(),
            lexicon,
        }
    }

    /// Create a tagger whose built-in lexicon is extended from a file.
    pub fn from_lexicon_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut lexicon = Lexicon::new();
        lexicon.load_file(path)?;
        Ok(Self::with_lexicon(lexicon))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Candidate readings of a token, most likely first.
    fn readings(&self, token: &Token, initial: bool) -> Vec<Reading> {
        let text = token.text.as_str();
        match token.token_type {
            TokenType::Punctuation => vec![Reading::new(Pos::Punct, punctuation_tag(text), text)],
            TokenType::Num => vec![Reading::new(Pos::Num, "CD", text)],
            TokenType::Symbol => {
                let tag = if text.chars().all(|c| matches!(c, '$' | '\u{20AC}' | '\u{00A3}' | '\u{00A5}')) {
                    "$"
                } else {
                    "SYM"
                };
                vec![Reading::new(Pos::Sym, tag, text)]
            }
            TokenType::Other => vec![Reading::new(Pos::X, "XX", text)],
            TokenType::Word => self.word_readings(text, initial),
        }
    }

    fn word_readings(&self, text: &str, initial: bool) -> Vec<Reading> {
        let lower = text.to_lowercase();
        let mut readings = Vec::new();

        if let Some(extra) = self.lexicon.extra(&lower) {
            readings.extend(extra.iter().cloned());
        }
        let mut auxiliary = false;
        if let Some(closed) = self.lexicon.closed(&lower) {
            auxiliary = closed.iter().any(|r| r.pos == Pos::Aux);
            readings.extend(closed.iter().cloned());
        }
        // main-verb uses of auxiliaries are settled in `finalize`
        if !auxiliary {
            readings.extend(self.open_readings(&lower));
        }

        if readings.is_empty() {
            readings = self.guess(text, &lower, initial);
        }
        readings
    }

    /// Readings from the open-class vocabulary, directly or through morphology.
    fn open_readings(&self, lower: &str) -> Vec<Reading> {
        let lexicon = &self.lexicon;
        let known_verb = |w: &str| lexicon.is_base(w, Pos::Verb);
        let known_adjective = |w: &str| lexicon.is_base(w, Pos::Adj);
        let mut readings = Vec::new();

        for &pos in lexicon.open_classes(lower) {
            let tag = match pos {
                Pos::Adj => "JJ",
                Pos::Noun => "NN",
                Pos::Verb => "VB",
                _ => "RB",
            };
            readings.push(Reading::new(pos, tag, lower));
        }

        if let Some(singular) = SINGULARS.get(lower) {
            readings.push(Reading::new(Pos::Noun, "NNS", *singular));
        }
        if let Some(base) = VERBS_BY_PAST.get(lower)
            && *base != lower
        {
            readings.push(Reading::new(Pos::Verb, "VBD", *base));
        }
        if let Some(base) = VERBS_BY_PARTICIPLE.get(lower)
            && *base != lower
        {
            readings.push(Reading::new(Pos::Verb, "VBN", *base));
        }
        if let Some(base) = ADJECTIVES_BY_DEGREE.get(lower) {
            let comparative = IRREGULAR_ADJECTIVES.iter().any(|(_, c, _)| *c == lower);
            readings.push(Reading::new(Pos::Adj, if comparative { "JJR" } else { "JJS" }, *base));
        }

        if lower.len() > 2 && lower.ends_with('s') {
            let singular = singularize(lower);
            if singular != lower && lexicon.is_base(&singular, Pos::Noun) {
                readings.push(Reading::new(Pos::Noun, "NNS", singular));
            }
            let base = verb_lemma(lower, VerbForm::ThirdPerson, &known_verb);
            if base != lower && known_verb(&base) {
                readings.push(Reading::new(Pos::Verb, "VBZ", base));
            }
        }
        if lower.ends_with("ed") {
            let base = verb_lemma(lower, VerbForm::Past, &known_verb);
            if known_verb(&base) {
                readings.push(Reading::new(Pos::Verb, "VBD", base.clone()));
                readings.push(Reading::new(Pos::Verb, "VBN", base));
            }
        }
        if lower.ends_with("ing") {
            let base = verb_lemma(lower, VerbForm::Gerund, &known_verb);
            if known_verb(&base) {
                readings.push(Reading::new(Pos::Verb, "VBG", base));
            }
        }
        if lower.ends_with("er") || lower.ends_with("est") {
            let base = adjective_lemma(lower, &known_adjective);
            if base != lower && known_adjective(&base) {
                let tag = if lower.ends_with("er") { "JJR" } else { "JJS" };
                readings.push(Reading::new(Pos::Adj, tag, base));
            }
        }
        if lower.len() > 4
            && let Some(stem) = lower.strip_suffix("ly")
        {
            let base = match stem.strip_suffix('i') {
                Some(y_stem) => format!("{y_stem}y"),
                None => stem.to_string(),
            };
            if known_adjective(&base) {
                readings.push(Reading::new(Pos::Adv, "RB", lower));
            }
        }

        readings
    }

    /// Readings for a word the lexicon does not know.
    fn guess(&self, text: &str, lower: &str, initial: bool) -> Vec<Reading> {
        let unknown = |_: &str| false;
        let capitalized = text.chars().next().is_some_and(char::is_uppercase);
        let length = lower.chars().count();

        if (capitalized && !initial) || (case::is_upper(text) && length > 1) {
            return vec![Reading::new(Pos::Propn, "NNP", text)];
        }
        if length > 4 && lower.ends_with("ly") {
            return vec![Reading::new(Pos::Adv, "RB", lower)];
        }
        if length > 5 && lower.ends_with("ing") {
            let lemma = verb_lemma(lower, VerbForm::Gerund, &unknown);
            return vec![Reading::new(Pos::Verb, "VBG", lemma)];
        }
        if length > 4 && lower.ends_with("ed") {
            let lemma = verb_lemma(lower, VerbForm::Past, &unknown);
            return vec![
                Reading::new(Pos::Verb, "VBD", lemma.clone()),
                Reading::new(Pos::Verb, "VBN", lemma),
            ];
        }
        let has_suffix = |suffixes: &[&str]| {
            suffixes
                .iter()
                .any(|s| lower.ends_with(s) && length > s.len() + 2)
        };
        if has_suffix(ADJECTIVE_SUFFIXES) {
            return vec![Reading::new(Pos::Adj, "JJ", lower)];
        }
        if has_suffix(NOUN_SUFFIXES) {
            return vec![Reading::new(Pos::Noun, "NN", lower)];
        }
        if has_suffix(VERB_SUFFIXES) {
            return vec![Reading::new(Pos::Verb, "VB", lower)];
        }
        if length > 3
            && lower.ends_with('s')
            && !(lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is"))
        {
            return vec![Reading::new(Pos::Noun, "NNS", singularize(lower))];
        }
        vec![Reading::new(Pos::Noun, "NN", lower)]
    }

    /// Pick one reading per token of a sentence.
    fn tag_sentence(&self, tokens: &[Token]) -> Vec<Reading> {
        let first_word = tokens
            .iter()
            .position(|t| t.token_type != TokenType::Punctuation)
            .unwrap_or(0);
        let candidates: Vec<Vec<Reading>> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| self.readings(token, i <= first_word))
            .collect();

        let mut chosen: Vec<Reading> = Vec::with_capacity(tokens.len());
        for (i, options) in candidates.iter().enumerate() {
            let best = {
                let context = Context {
                    prev: chosen.last(),
                    core: chosen.iter().rev().find(|r| !is_modifier(r)),
                    next: candidates.get(i + 1).map(Vec::as_slice).unwrap_or(&[]),
                    initial: i <= first_word,
                };
                options
                    .iter()
                    .enumerate()
                    .max_by_key(|(index, reading)| (score(reading, &context) - *index as i32, Reverse(*index)))
                    .map(|(_, reading)| reading.clone())
            };
            match best {
                Some(reading) => chosen.push(reading),
                None => chosen.push(Reading::new(Pos::X, "XX", tokens[i].text.as_str())),
            }
        }

        finalize(&mut chosen, first_word);
        chosen
    }
}

/// Contextual preference for a reading; higher is better.
fn score(reading: &Reading, context: &Context<'_>) -> i32 {
    let prev = context.prev;
    let prev_pos = prev.map(|p| p.pos);
    let prev_tag = prev.map_or("", |p| p.tag.as_str());
    let prev_lemma = prev.map_or("", |p| p.lemma.as_str());
    let core_aux = context
        .core
        .filter(|c| c.pos == Pos::Aux)
        .map(|c| c.lemma.as_str());

    let next_has = |pos: Pos| context.next.iter().any(|r| r.pos == pos);
    let next_nominal =
        next_has(Pos::Noun) || next_has(Pos::Adj) || next_has(Pos::Propn) || next_has(Pos::Num);
    let after_determiner = matches!(prev_pos, Some(Pos::Det | Pos::Num | Pos::Adj))
        || matches!(prev_tag, "PRP$" | "POS");
    let after_nominal = matches!(prev_tag, "PRP" | "NN" | "NNS" | "NNP" | "NNPS");
    let after_infinitive =
        matches!(prev_tag, "MD" | "TO") || (prev_pos == Some(Pos::Aux) && prev_lemma == "do");

    let mut score = 0;
    match (reading.pos, reading.tag.as_str()) {
        (Pos::Noun, _) => {
            if after_determiner {
                score += 3;
            }
            if prev_pos == Some(Pos::Adp) {
                score += 2;
            }
            if after_infinitive {
                score -= 3;
            }
            if prev_tag == "PRP" {
                score -= 2;
            }
        }
        (Pos::Verb, "VB") => {
            if after_infinitive {
                score += 4;
            }
            if matches!(prev_tag, "PRP" | "NNS") {
                score += 3;
            }
            if context.initial {
                score += 2;
            }
            if after_determiner {
                score -= 3;
            }
            if prev_pos == Some(Pos::Adp) {
                score -= 1;
            }
        }
        (Pos::Verb, "VBZ") => {
            let singular_subject = matches!(prev_tag, "NN" | "NNP")
                || (prev_tag == "PRP" && matches!(prev_lemma, "he" | "she" | "it"));
            if singular_subject {
                score += 3;
            }
            if after_determiner {
                score -= 3;
            }
        }
        (Pos::Verb, "VBD") => {
            if after_nominal {
                score += 2;
            }
            if matches!(core_aux, Some("be" | "have")) {
                score -= 3;
            }
            if after_determiner {
                score -= 2;
            }
        }
        (Pos::Verb, "VBN") => {
            if matches!(core_aux, Some("be" | "have")) {
                score += 4;
            } else {
                score -= 1;
            }
        }
        (Pos::Verb, "VBG") => {
            if core_aux == Some("be") {
                score += 2;
            }
        }
        (Pos::Adj, _) => {
            if next_has(Pos::Noun) {
                score += 2;
            }
            if core_aux == Some("be") {
                score += 2;
            }
        }
        (Pos::Adv, _) => {
            if matches!(prev_pos, Some(Pos::Verb | Pos::Aux)) && !next_has(Pos::Noun) {
                score += 2;
            }
        }
        (Pos::Det, _) => {
            if next_has(Pos::Noun) || next_has(Pos::Adj) {
                score += 2;
            }
        }
        (Pos::Pron, "PRP$") => {
            if next_nominal {
                score += 2;
            } else {
                score -= 2;
            }
        }
        (Pos::Pron, "EX") => {
            if context.next.iter().any(|r| r.pos == Pos::Aux && r.lemma == "be") {
                score += 3;
            } else {
                score -= 3;
            }
        }
        (Pos::Part, "TO") => {
            if context.next.iter().any(|r| r.pos == Pos::Verb && r.tag == "VB") {
                score += 2;
            } else {
                score -= 2;
            }
        }
        (Pos::Part, "POS") => {
            if matches!(prev_pos, Some(Pos::Noun | Pos::Propn)) && next_nominal {
                score += 3;
            } else {
                score -= 3;
            }
        }
        (Pos::Adp, _) if reading.lemma == "like" => {
            if matches!(prev_tag, "PRP" | "NNS") {
                score -= 3;
            }
        }
        (Pos::Propn, _) => score += 3,
        _ => {}
    }
    score
}

/// Settle verb finiteness and auxiliary use once every token has a reading.
fn finalize(chosen: &mut [Reading], first_word: usize) {
    for i in 0..chosen.len() {
        let core = (0..i).rev().find(|&j| !is_modifier(&chosen[j]));
        let after_aux = |lemma: &str| {
            core.is_some_and(|j| chosen[j].pos == Pos::Aux && chosen[j].lemma == lemma)
        };
        let after_have = after_aux("have");
        let infinitive = after_aux("do")
            || core.is_some_and(|j| matches!(chosen[j].tag.as_str(), "MD" | "TO"));

        if chosen[i].pos == Pos::Aux && chosen[i].lemma == "have" && after_have {
            chosen[i] = Reading::new(Pos::Verb, "VBN", "have");
        } else if chosen[i].pos == Pos::Verb && chosen[i].tag == "VB" && i > first_word && !infinitive
        {
            chosen[i].tag = "VBP".to_string();
        }
    }

    for i in 0..chosen.len() {
        if chosen[i].pos == Pos::Aux && matches!(chosen[i].lemma.as_str(), "have" | "do") {
            let next = chosen[i + 1..].iter().find(|r| !is_modifier(r));
            if !next.is_some_and(|r| matches!(r.pos, Pos::Verb | Pos::Aux)) {
                chosen[i].pos = Pos::Verb;
            }
        }
    }
}

fn build_token(token: &Token, reading: Reading, sentence: usize) -> TaggedToken {
    let text = token.text.as_str();
    let lemma = match reading.pos {
        Pos::Propn | Pos::Punct | Pos::Num | Pos::Sym => text.to_string(),
        _ => reading.lemma,
    };
    TaggedToken {
        index: token.position,
        text: text.to_string(),
        start: token.start_offset,
        end: token.end_offset,
        lemma,
        pos: reading.pos,
        tag: reading.tag,
        dep: String::new(),
        sentence,
        is_stop: is_stop_word(text),
        is_punct: reading.pos == Pos::Punct,
        is_space: false,
        is_title: case::is_title(text),
        is_upper: case::is_upper(text),
        is_lower: case::is_lower(text),
    }
}

fn is_noun(token: &TaggedToken) -> bool {
    matches!(token.pos, Pos::Noun | Pos::Propn)
}

fn is_hyphen(token: &TaggedToken) -> bool {
    token.tag == "HYPH"
}

/// Index of the sentence head.
fn find_root(tokens: &[TaggedToken]) -> usize {
    tokens
        .iter()
        .position(|t| t.pos == Pos::Verb && matches!(t.tag.as_str(), "VBD" | "VBZ" | "VBP"))
        .or_else(|| tokens.iter().position(|t| t.pos == Pos::Verb))
        .or_else(|| tokens.iter().position(|t| t.pos == Pos::Aux && t.tag != "MD"))
        .or_else(|| tokens.iter().position(|t| t.pos.is_nominal()))
        .unwrap_or(0)
}

/// Whether `tokens[j]` belongs to the noun phrase ending at `tokens[j + 1..]`.
fn is_np_internal(tokens: &[TaggedToken], j: usize) -> bool {
    let token = &tokens[j];
    match token.pos {
        Pos::Det | Pos::Adj | Pos::Num | Pos::Adv => true,
        Pos::Pron => token.tag == "PRP$",
        Pos::Part => token.tag == "POS",
        Pos::Punct => is_hyphen(token),
        Pos::Noun | Pos::Propn => tokens.get(j + 1).is_some_and(is_noun),
        Pos::Verb => {
            matches!(token.tag.as_str(), "VBG" | "VBN") && j > 0 && is_hyphen(&tokens[j - 1])
        }
        _ => false,
    }
}

fn nominal_label(tokens: &[TaggedToken], i: usize) -> &'static str {
    let token = &tokens[i];
    if token.pos != Pos::Pron && tokens.get(i + 1).is_some_and(is_noun) {
        return "compound";
    }

    let next_core = tokens[i + 1..].iter().find(|t| t.pos != Pos::Adv);
    if next_core.is_some_and(|t| matches!(t.pos, Pos::Verb | Pos::Aux)) {
        return "nsubj";
    }

    let mut j = i;
    while j > 0 && is_np_internal(tokens, j - 1) {
        j -= 1;
    }
    match j.checked_sub(1).map(|g| &tokens[g]) {
        Some(governor) if governor.pos == Pos::Adp => "pobj",
        Some(governor) if governor.pos == Pos::Aux && governor.lemma == "be" => "attr",
        Some(governor) if matches!(governor.pos, Pos::Verb | Pos::Aux) => "dobj",
        _ if matches!(token.tag.as_str(), "WP" | "WDT") => "nsubj",
        _ => "dep",
    }
}

fn adjective_label(tokens: &[TaggedToken], i: usize) -> &'static str {
    for token in &tokens[i + 1..] {
        if is_noun(token) {
            return "amod";
        }
        let skippable = matches!(token.pos, Pos::Adj | Pos::Adv | Pos::Num | Pos::Cconj)
            || is_hyphen(token)
            || token.tag == ","
            || (token.pos == Pos::Verb && matches!(token.tag.as_str(), "VBG" | "VBN"));
        if !skippable {
            break;
        }
    }
    if tokens[..i]
        .iter()
        .any(|t| matches!(t.pos, Pos::Aux | Pos::Verb))
    {
        "acomp"
    } else {
        "dep"
    }
}

fn verb_label(tokens: &[TaggedToken], i: usize) -> &'static str {
    let token = &tokens[i];
    let participle = matches!(token.tag.as_str(), "VBG" | "VBN");
    if participle && (i > 0 && is_hyphen(&tokens[i - 1])) {
        return "amod";
    }
    if participle && tokens.get(i + 1).is_some_and(is_noun) && i > 0 && tokens[i - 1].pos == Pos::Det {
        return "amod";
    }

    let previous = tokens[..i]
        .iter()
        .rev()
        .find(|t| !matches!(t.pos, Pos::Adv | Pos::Aux) && !(t.pos == Pos::Part && t.tag == "RB"));
    match previous {
        Some(p) if p.pos == Pos::Cconj => "conj",
        Some(p) if p.tag == "TO" => "xcomp",
        Some(p) if matches!(p.tag.as_str(), "WP" | "WDT") || (p.pos == Pos::Sconj && p.lemma == "that") => {
            "relcl"
        }
        Some(p) if p.pos == Pos::Sconj => "advcl",
        _ => "ccomp",
    }
}

fn dependency_label(tokens: &[TaggedToken], i: usize) -> &'static str {
    let token = &tokens[i];
    match token.pos {
        Pos::Punct => "punct",
        Pos::Det if token.tag == "PDT" => "predet",
        Pos::Det => "det",
        Pos::Num if tokens.get(i + 1).is_some_and(is_noun) => "nummod",
        Pos::Adj => adjective_label(tokens, i),
        Pos::Adv => "advmod",
        Pos::Adp => "prep",
        Pos::Part if token.tag == "TO" => "aux",
        Pos::Part if token.tag == "POS" => "case",
        Pos::Part => "neg",
        Pos::Aux => {
            let next_verb = tokens[i + 1..].iter().find(|t| !matches!(t.pos, Pos::Adv | Pos::Part));
            if token.lemma == "be" && next_verb.is_some_and(|t| t.pos == Pos::Verb && t.tag == "VBN") {
                "auxpass"
            } else {
                "aux"
            }
        }
        Pos::Cconj => "cc",
        Pos::Sconj => "mark",
        Pos::Intj => "intj",
        Pos::Pron if token.tag == "PRP$" => "poss",
        Pos::Noun | Pos::Propn | Pos::Pron | Pos::Num => nominal_label(tokens, i),
        Pos::Verb => verb_label(tokens, i),
        Pos::Sym | Pos::X => "dep",
    }
}

/// Label every token of one sentence.
fn assign_dependencies(tokens: &mut [TaggedToken]) {
    if tokens.is_empty() {
        return;
    }
    let root = find_root(tokens);
    let labels: Vec<&'static str> = (0..tokens.len())
        .map(|i| if i == root { "ROOT" } else { dependency_label(tokens, i) })
        .collect();
    for (token, label) in tokens.iter_mut().zip(labels) {
        token.dep = label.to_string();
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Result<TaggedDocument> {
        let tokens = self.tokenizer.tokenize_vec(text);
        let ranges = split_sentences(text, &tokens);

        let mut tagged = Vec::with_capacity(tokens.len());
        let mut sentences = Vec::with_capacity(ranges.len());
        for (sentence_index, &(start, end)) in ranges.iter().enumerate() {
            let slice = &tokens[start..end];
            let readings = self.tag_sentence(slice);
            let mut sentence_tokens: Vec<TaggedToken> = slice
                .iter()
                .zip(readings)
                .map(|(token, reading)| build_token(token, reading, sentence_index))
                .collect();
            assign_dependencies(&mut sentence_tokens);

            sentences.push(Sentence {
                start_token: start,
                end_token: end,
                start_char: slice[0].start_offset,
                end_char: slice[slice.len() - 1].end_offset,
            });
            tagged.extend(sentence_tokens);
        }

        debug!(
            "Tagged {} tokens in {} sentences",
            tagged.len(),
            sentences.len()
        );
        Ok(TaggedDocument::new(text, tagged, sentences))
    }

    fn name(&self) -> &'static str {
        "rule_english"
    }
}
