//! Irregular English word forms.
//!
//! Forward tables (base form to inflected forms) plus lazily built reverse
//! maps used for lemmatization.

use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};

/// `(base, past, past participle)`.
pub const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("arise", "arose", "arisen"),
    ("awake", "awoke", "awoken"),
    ("be", "was", "been"),
    ("bear", "bore", "borne"),
    ("beat", "beat", "beaten"),
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("bend", "bent", "bent"),
    ("bet", "bet", "bet"),
    ("bid", "bid", "bid"),
    ("bind", "bound", "bound"),
    ("bite", "bit", "bitten"),
    ("bleed", "bled", "bled"),
    ("blow", "blew", "blown"),
    ("break", "broke", "broken"),
    ("breed", "bred", "bred"),
    ("bring", "brought", "brought"),
    ("build", "built", "built"),
    ("burst", "burst", "burst"),
    ("buy", "bought", "bought"),
    ("cast", "cast", "cast"),
    ("catch", "caught", "caught"),
    ("choose", "chose", "chosen"),
    ("cling", "clung", "clung"),
    ("come", "came", "come"),
    ("cost", "cost", "cost"),
    ("creep", "crept", "crept"),
    ("cut", "cut", "cut"),
    ("deal", "dealt", "dealt"),
    ("dig", "dug", "dug"),
    ("do", "did", "done"),
    ("draw", "drew", "drawn"),
    ("drink", "drank", "drunk"),
    ("drive", "drove", "driven"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("feed", "fed", "fed"),
    ("feel", "felt", "felt"),
    ("fight", "fought", "fought"),
    ("find", "found", "found"),
    ("flee", "fled", "fled"),
    ("fling", "flung", "flung"),
    ("fly", "flew", "flown"),
    ("forbid", "forbade", "forbidden"),
    ("forget", "forgot", "forgotten"),
    ("forgive", "forgave", "forgiven"),
    ("forgo", "forwent", "forgone"),
    ("freeze", "froze", "frozen"),
    ("get", "got", "got"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("grind", "ground", "ground"),
    ("grow", "grew", "grown"),
    ("hang", "hung", "hung"),
    ("have", "had", "had"),
    ("hear", "heard", "heard"),
    ("hide", "hid", "hidden"),
    ("hit", "hit", "hit"),
    ("hold", "held", "held"),
    ("hurt", "hurt", "hurt"),
    ("keep", "kept", "kept"),
    ("kneel", "knelt", "knelt"),
    ("know", "knew", "known"),
    ("lay", "laid", "laid"),
    ("lead", "led", "led"),
    ("leave", "left", "left"),
    ("lend", "lent", "lent"),
    ("let", "let", "let"),
    ("lie", "lay", "lain"),
    ("light", "lit", "lit"),
    ("lose", "lost", "lost"),
    ("make", "made", "made"),
    ("mean", "meant", "meant"),
    ("meet", "met", "met"),
    ("pay", "paid", "paid"),
    ("put", "put", "put"),
    ("quit", "quit", "quit"),
    ("read", "read", "read"),
    ("ride", "rode", "ridden"),
    ("ring", "rang", "rung"),
    ("rise", "rose", "risen"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("seek", "sought", "sought"),
    ("sell", "sold", "sold"),
    ("send", "sent", "sent"),
    ("set", "set", "set"),
    ("sew", "sewed", "sewn"),
    ("shake", "shook", "shaken"),
    ("shed", "shed", "shed"),
    ("shine", "shone", "shone"),
    ("shoot", "shot", "shot"),
    ("show", "showed", "shown"),
    ("shrink", "shrank", "shrunk"),
    ("shut", "shut", "shut"),
    ("sing", "sang", "sung"),
    ("sink", "sank", "sunk"),
    ("sit", "sat", "sat"),
    ("slay", "slew", "slain"),
    ("sleep", "slept", "slept"),
    ("slide", "slid", "slid"),
    ("sling", "slung", "slung"),
    ("slit", "slit", "slit"),
    ("speak", "spoke", "spoken"),
    ("speed", "sped", "sped"),
    ("spend", "spent", "spent"),
    ("spin", "spun", "spun"),
    ("spit", "spat", "spat"),
    ("split", "split", "split"),
    ("spread", "spread", "spread"),
    ("spring", "sprang", "sprung"),
    ("stand", "stood", "stood"),
    ("steal", "stole", "stolen"),
    ("stick", "stuck", "stuck"),
    ("sting", "stung", "stung"),
    ("stink", "stank", "stunk"),
    ("stride", "strode", "stridden"),
    ("strike", "struck", "struck"),
    ("string", "strung", "strung"),
    ("strive", "strove", "striven"),
    ("swear", "swore", "sworn"),
    ("sweep", "swept", "swept"),
    ("swell", "swelled", "swollen"),
    ("swim", "swam", "swum"),
    ("swing", "swung", "swung"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tear", "tore", "torn"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("throw", "threw", "thrown"),
    ("thrust", "thrust", "thrust"),
    ("tread", "trod", "trodden"),
    ("wake", "woke", "woken"),
    ("wear", "wore", "worn"),
    ("weave", "wove", "woven"),
    ("weep", "wept", "wept"),
    ("win", "won", "won"),
    ("wind", "wound", "wound"),
    ("wring", "wrung", "wrung"),
    ("write", "wrote", "written"),
];

/// Prefixes that form compounds of irregular verbs ("overtake", "undergo").
pub const VERB_PREFIXES: &[&str] = &[
    "over", "under", "out", "with", "fore", "mis", "re", "un", "up", "be",
];

/// Verbs of more than one syllable that double their final consonant.
pub const DOUBLING_VERBS: &[&str] = &[
    "admit", "begin", "commit", "compel", "control", "equip", "excel", "expel", "forget",
    "occur", "omit", "patrol", "permit", "prefer", "propel", "rebel", "refer", "regret", "repel",
    "submit", "transfer", "upset",
];

/// `(singular, plural)`.
pub const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("person", "people"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("ox", "oxen"),
    ("datum", "data"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("medium", "media"),
    ("curriculum", "curricula"),
    ("bacterium", "bacteria"),
    ("memorandum", "memoranda"),
    ("cactus", "cacti"),
    ("fungus", "fungi"),
    ("nucleus", "nuclei"),
    ("stimulus", "stimuli"),
    ("radius", "radii"),
    ("alumnus", "alumni"),
    ("syllabus", "syllabi"),
    ("appendix", "appendices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("leaf", "leaves"),
    ("loaf", "loaves"),
    ("thief", "thieves"),
    ("wife", "wives"),
    ("knife", "knives"),
    ("life", "lives"),
    ("half", "halves"),
    ("calf", "calves"),
    ("self", "selves"),
    ("shelf", "shelves"),
    ("wolf", "wolves"),
    ("elf", "elves"),
    ("sheaf", "sheaves"),
    ("hoof", "hooves"),
    ("scarf", "scarves"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
    ("veto", "vetoes"),
    ("torpedo", "torpedoes"),
    ("embargo", "embargoes"),
    ("volcano", "volcanoes"),
    ("quiz", "quizzes"),
];

/// Nouns whose plural equals the singular.
pub const INVARIANT_NOUNS: &[&str] = &[
    "aircraft", "bison", "chassis", "corps", "deer", "fish", "headquarters", "means", "moose",
    "offspring", "salmon", "series", "sheep", "spacecraft", "species", "swine", "trout",
];

/// Words ending in "man" that pluralize regularly.
pub const REGULAR_MAN_NOUNS: &[&str] = &[
    "human", "german", "roman", "shaman", "talisman", "caiman", "ottoman",
];

/// `(base, comparative, superlative)`.
pub const IRREGULAR_ADJECTIVES: &[(&str, &str, &str)] = &[
    ("good", "better", "best"),
    ("well", "better", "best"),
    ("bad", "worse", "worst"),
    ("ill", "worse", "worst"),
    ("far", "farther", "farthest"),
    ("little", "less", "least"),
    ("many", "more", "most"),
    ("much", "more", "most"),
];

/// Irregular verb entry by base form.
pub static VERBS_BY_BASE: LazyLock<AHashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        IRREGULAR_VERBS
            .iter()
            .map(|&(base, past, participle)| (base, (past, participle)))
            .collect()
    });

/// Base form by irregular past tense; the first table entry wins.
pub static VERBS_BY_PAST: LazyLock<AHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = AHashMap::new();
    for &(base, past, _) in IRREGULAR_VERBS {
        map.entry(past).or_insert(base);
    }
    map
});

/// Base form by irregular past participle; the first table entry wins.
pub static VERBS_BY_PARTICIPLE: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut map = AHashMap::new();
        for &(base, _, participle) in IRREGULAR_VERBS {
            map.entry(participle).or_insert(base);
        }
        map
    });

/// Plural by singular.
pub static PLURALS: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_PLURALS.iter().copied().collect());

/// Singular by plural.
pub static SINGULARS: LazyLock<AHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    IRREGULAR_PLURALS
        .iter()
        .map(|&(singular, plural)| (plural, singular))
        .collect()
});

/// Invariant nouns as a set.
pub static INVARIANT_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| INVARIANT_NOUNS.iter().copied().collect());

/// Base adjective by comparative or superlative; the first table entry wins.
pub static ADJECTIVES_BY_DEGREE: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut map = AHashMap::new();
        for &(base, comparative, superlative) in IRREGULAR_ADJECTIVES {
            map.entry(comparative).or_insert(base);
            map.entry(superlative).or_insert(base);
        }
        map
    });

/// Split an irregular prefix compound into `(prefix, irregular base)`.
pub fn split_compound(verb: &str) -> Option<(&str, &'static str)> {
    VERB_PREFIXES.iter().find_map(|prefix| {
        let rest = verb.strip_prefix(prefix)?;
        if rest.len() < 2 {
            return None;
        }
        VERBS_BY_BASE
            .get_key_value(rest)
            .map(|(&base, _)| (&verb[..prefix.len()], base))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_maps() {
        assert_eq!(VERBS_BY_PAST.get("wrote"), Some(&"write"));
        assert_eq!(VERBS_BY_PARTICIPLE.get("gone"), Some(&"go"));
        // "lay" is the past of "lie"
        assert_eq!(VERBS_BY_PAST.get("lay"), Some(&"lie"));
        assert_eq!(SINGULARS.get("children"), Some(&"child"));
        assert_eq!(ADJECTIVES_BY_DEGREE.get("better"), Some(&"good"));
    }

    #[test]
    fn test_split_compound() {
        assert_eq!(split_compound("overtake"), Some(("over", "take")));
        assert_eq!(split_compound("understand"), Some(("under", "stand")));
        assert_eq!(split_compound("bet"), None);
        assert_eq!(split_compound("walk"), None);
    }
}
