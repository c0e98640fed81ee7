//! Word lists for the rule-based tagger.
//!
//! Three layers, consulted in order:
//!
//! 1. extra entries loaded from a lexicon file (`word<TAB>POS<TAB>TAG[<TAB>LEMMA]`),
//! 2. closed-class words with fixed readings (determiners, pronouns,
//!    auxiliaries, prepositions, conjunctions, particles),
//! 3. an open-class seed vocabulary of base forms per coarse class.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::{debug, info};

use crate::error::{GhostwriterError, Result};
use crate::tagger::Pos;

/// One possible analysis of a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reading {
    pub pos: Pos,
    pub tag: String,
    pub lemma: String,
}

impl Reading {
    pub fn new<T: Into<String>, L: Into<String>>(pos: Pos, tag: T, lemma: L) -> Self {
        Reading {
            pos,
            tag: tag.into(),
            lemma: lemma.into(),
        }
    }
}

/// `(word, pos, tag, lemma)`; several rows for one word are alternative readings.
const CLOSED_CLASS: &[(&str, Pos, &str, &str)] = &[
    // determiners
    ("the", Pos::Det, "DT", "the"),
    ("a", Pos::Det, "DT", "a"),
    ("an", Pos::Det, "DT", "an"),
    ("this", Pos::Det, "DT", "this"),
    ("that", Pos::Sconj, "IN", "that"),
    ("that", Pos::Det, "DT", "that"),
    ("these", Pos::Det, "DT", "these"),
    ("those", Pos::Det, "DT", "those"),
    ("every", Pos::Det, "DT", "every"),
    ("each", Pos::Det, "DT", "each"),
    ("some", Pos::Det, "DT", "some"),
    ("any", Pos::Det, "DT", "any"),
    ("no", Pos::Det, "DT", "no"),
    ("all", Pos::Det, "DT", "all"),
    ("both", Pos::Det, "DT", "both"),
    ("either", Pos::Det, "DT", "either"),
    ("neither", Pos::Det, "DT", "neither"),
    ("another", Pos::Det, "DT", "another"),
    ("such", Pos::Adj, "PDT", "such"),
    ("many", Pos::Adj, "JJ", "many"),
    ("much", Pos::Adj, "JJ", "much"),
    ("few", Pos::Adj, "JJ", "few"),
    ("several", Pos::Adj, "JJ", "several"),
    ("more", Pos::Adj, "JJR", "more"),
    ("most", Pos::Adj, "JJS", "most"),
    ("less", Pos::Adj, "JJR", "less"),
    ("least", Pos::Adj, "JJS", "least"),
    // pronouns
    ("i", Pos::Pron, "PRP", "I"),
    ("you", Pos::Pron, "PRP", "you"),
    ("he", Pos::Pron, "PRP", "he"),
    ("she", Pos::Pron, "PRP", "she"),
    ("it", Pos::Pron, "PRP", "it"),
    ("we", Pos::Pron, "PRP", "we"),
    ("they", Pos::Pron, "PRP", "they"),
    ("me", Pos::Pron, "PRP", "I"),
    ("him", Pos::Pron, "PRP", "he"),
    ("her", Pos::Pron, "PRP$", "her"),
    ("her", Pos::Pron, "PRP", "she"),
    ("us", Pos::Pron, "PRP", "we"),
    ("them", Pos::Pron, "PRP", "they"),
    ("my", Pos::Pron, "PRP$", "my"),
    ("your", Pos::Pron, "PRP$", "your"),
    ("his", Pos::Pron, "PRP$", "his"),
    ("its", Pos::Pron, "PRP$", "its"),
    ("our", Pos::Pron, "PRP$", "our"),
    ("their", Pos::Pron, "PRP$", "their"),
    ("mine", Pos::Pron, "PRP", "mine"),
    ("yours", Pos::Pron, "PRP", "yours"),
    ("hers", Pos::Pron, "PRP", "hers"),
    ("ours", Pos::Pron, "PRP", "ours"),
    ("theirs", Pos::Pron, "PRP", "theirs"),
    ("myself", Pos::Pron, "PRP", "myself"),
    ("yourself", Pos::Pron, "PRP", "yourself"),
    ("himself", Pos::Pron, "PRP", "himself"),
    ("herself", Pos::Pron, "PRP", "herself"),
    ("itself", Pos::Pron, "PRP", "itself"),
    ("ourselves", Pos::Pron, "PRP", "ourselves"),
    ("themselves", Pos::Pron, "PRP", "themselves"),
    ("someone", Pos::Pron, "NN", "someone"),
    ("somebody", Pos::Pron, "NN", "somebody"),
    ("something", Pos::Pron, "NN", "something"),
    ("anyone", Pos::Pron, "NN", "anyone"),
    ("anything", Pos::Pron, "NN", "anything"),
    ("everyone", Pos::Pron, "NN", "everyone"),
    ("everything", Pos::Pron, "NN", "everything"),
    ("nobody", Pos::Pron, "NN", "nobody"),
    ("nothing", Pos::Pron, "NN", "nothing"),
    ("who", Pos::Pron, "WP", "who"),
    ("whom", Pos::Pron, "WP", "whom"),
    ("whose", Pos::Det, "WP$", "whose"),
    ("what", Pos::Pron, "WP", "what"),
    ("which", Pos::Det, "WDT", "which"),
    // auxiliaries
    ("be", Pos::Aux, "VB", "be"),
    ("am", Pos::Aux, "VBP", "be"),
    ("is", Pos::Aux, "VBZ", "be"),
    ("are", Pos::Aux, "VBP", "be"),
    ("was", Pos::Aux, "VBD", "be"),
    ("were", Pos::Aux, "VBD", "be"),
    ("been", Pos::Aux, "VBN", "be"),
    ("being", Pos::Aux, "VBG", "be"),
    ("have", Pos::Aux, "VBP", "have"),
    ("has", Pos::Aux, "VBZ", "have"),
    ("had", Pos::Aux, "VBD", "have"),
    ("having", Pos::Aux, "VBG", "have"),
    ("do", Pos::Aux, "VBP", "do"),
    ("does", Pos::Aux, "VBZ", "do"),
    ("did", Pos::Aux, "VBD", "do"),
    ("can", Pos::Aux, "MD", "can"),
    ("could", Pos::Aux, "MD", "could"),
    ("will", Pos::Aux, "MD", "will"),
    ("would", Pos::Aux, "MD", "would"),
    ("shall", Pos::Aux, "MD", "shall"),
    ("should", Pos::Aux, "MD", "should"),
    ("may", Pos::Aux, "MD", "may"),
    ("might", Pos::Aux, "MD", "might"),
    ("must", Pos::Aux, "MD", "must"),
    ("ca", Pos::Aux, "MD", "can"),
    ("wo", Pos::Aux, "MD", "will"),
    ("'s", Pos::Aux, "VBZ", "be"),
    ("'s", Pos::Part, "POS", "'s"),
    ("'re", Pos::Aux, "VBP", "be"),
    ("'m", Pos::Aux, "VBP", "be"),
    ("'ve", Pos::Aux, "VBP", "have"),
    ("'ll", Pos::Aux, "MD", "will"),
    ("'d", Pos::Aux, "MD", "would"),
    // particles and negation
    ("not", Pos::Part, "RB", "not"),
    ("n't", Pos::Part, "RB", "not"),
    ("to", Pos::Adp, "IN", "to"),
    ("to", Pos::Part, "TO", "to"),
    // prepositions
    ("of", Pos::Adp, "IN", "of"),
    ("in", Pos::Adp, "IN", "in"),
    ("on", Pos::Adp, "IN", "on"),
    ("at", Pos::Adp, "IN", "at"),
    ("by", Pos::Adp, "IN", "by"),
    ("for", Pos::Adp, "IN", "for"),
    ("with", Pos::Adp, "IN", "with"),
    ("from", Pos::Adp, "IN", "from"),
    ("into", Pos::Adp, "IN", "into"),
    ("onto", Pos::Adp, "IN", "onto"),
    ("over", Pos::Adp, "IN", "over"),
    ("under", Pos::Adp, "IN", "under"),
    ("about", Pos::Adp, "IN", "about"),
    ("after", Pos::Adp, "IN", "after"),
    ("before", Pos::Adp, "IN", "before"),
    ("between", Pos::Adp, "IN", "between"),
    ("through", Pos::Adp, "IN", "through"),
    ("during", Pos::Adp, "IN", "during"),
    ("without", Pos::Adp, "IN", "without"),
    ("within", Pos::Adp, "IN", "within"),
    ("against", Pos::Adp, "IN", "against"),
    ("among", Pos::Adp, "IN", "among"),
    ("around", Pos::Adp, "IN", "around"),
    ("across", Pos::Adp, "IN", "across"),
    ("behind", Pos::Adp, "IN", "behind"),
    ("beyond", Pos::Adp, "IN", "beyond"),
    ("below", Pos::Adp, "IN", "below"),
    ("above", Pos::Adp, "IN", "above"),
    ("near", Pos::Adp, "IN", "near"),
    ("toward", Pos::Adp, "IN", "toward"),
    ("towards", Pos::Adp, "IN", "towards"),
    ("upon", Pos::Adp, "IN", "upon"),
    ("off", Pos::Adp, "IN", "off"),
    ("up", Pos::Adp, "IN", "up"),
    ("down", Pos::Adp, "IN", "down"),
    ("out", Pos::Adp, "IN", "out"),
    ("like", Pos::Adp, "IN", "like"),
    ("per", Pos::Adp, "IN", "per"),
    ("via", Pos::Adp, "IN", "via"),
    // conjunctions
    ("and", Pos::Cconj, "CC", "and"),
    ("or", Pos::Cconj, "CC", "or"),
    ("but", Pos::Cconj, "CC", "but"),
    ("nor", Pos::Cconj, "CC", "nor"),
    ("because", Pos::Sconj, "IN", "because"),
    ("although", Pos::Sconj, "IN", "although"),
    ("though", Pos::Sconj, "IN", "though"),
    ("if", Pos::Sconj, "IN", "if"),
    ("while", Pos::Sconj, "IN", "while"),
    ("whereas", Pos::Sconj, "IN", "whereas"),
    ("unless", Pos::Sconj, "IN", "unless"),
    ("until", Pos::Sconj, "IN", "until"),
    ("since", Pos::Sconj, "IN", "since"),
    ("as", Pos::Sconj, "IN", "as"),
    ("whether", Pos::Sconj, "IN", "whether"),
    ("than", Pos::Sconj, "IN", "than"),
    // closed-class adverbs
    ("very", Pos::Adv, "RB", "very"),
    ("too", Pos::Adv, "RB", "too"),
    ("also", Pos::Adv, "RB", "also"),
    ("just", Pos::Adv, "RB", "just"),
    ("only", Pos::Adv, "RB", "only"),
    ("quite", Pos::Adv, "RB", "quite"),
    ("rather", Pos::Adv, "RB", "rather"),
    ("so", Pos::Adv, "RB", "so"),
    ("then", Pos::Adv, "RB", "then"),
    ("now", Pos::Adv, "RB", "now"),
    ("here", Pos::Adv, "RB", "here"),
    ("there", Pos::Pron, "EX", "there"),
    ("there", Pos::Adv, "RB", "there"),
    ("never", Pos::Adv, "RB", "never"),
    ("always", Pos::Adv, "RB", "always"),
    ("often", Pos::Adv, "RB", "often"),
    ("sometimes", Pos::Adv, "RB", "sometimes"),
    ("still", Pos::Adv, "RB", "still"),
    ("already", Pos::Adv, "RB", "already"),
    ("again", Pos::Adv, "RB", "again"),
    ("even", Pos::Adv, "RB", "even"),
    ("ever", Pos::Adv, "RB", "ever"),
    ("soon", Pos::Adv, "RB", "soon"),
    ("perhaps", Pos::Adv, "RB", "perhaps"),
    ("maybe", Pos::Adv, "RB", "maybe"),
    ("almost", Pos::Adv, "RB", "almost"),
    ("instead", Pos::Adv, "RB", "instead"),
    ("however", Pos::Adv, "RB", "however"),
    ("away", Pos::Adv, "RB", "away"),
    ("together", Pos::Adv, "RB", "together"),
    ("yet", Pos::Adv, "RB", "yet"),
    ("how", Pos::Adv, "WRB", "how"),
    ("when", Pos::Adv, "WRB", "when"),
    ("where", Pos::Adv, "WRB", "where"),
    ("why", Pos::Adv, "WRB", "why"),
    // interjections
    ("oh", Pos::Intj, "UH", "oh"),
    ("yes", Pos::Intj, "UH", "yes"),
    ("hello", Pos::Intj, "UH", "hello"),
    ("hi", Pos::Intj, "UH", "hi"),
    ("wow", Pos::Intj, "UH", "wow"),
    ("please", Pos::Intj, "UH", "please"),
    // number words
    ("one", Pos::Num, "CD", "one"),
    ("two", Pos::Num, "CD", "two"),
    ("three", Pos::Num, "CD", "three"),
    ("four", Pos::Num, "CD", "four"),
    ("five", Pos::Num, "CD", "five"),
    ("six", Pos::Num, "CD", "six"),
    ("seven", Pos::Num, "CD", "seven"),
    ("eight", Pos::Num, "CD", "eight"),
    ("nine", Pos::Num, "CD", "nine"),
    ("ten", Pos::Num, "CD", "ten"),
    ("hundred", Pos::Num, "CD", "hundred"),
    ("thousand", Pos::Num, "CD", "thousand"),
    ("million", Pos::Num, "CD", "million"),
];

const SEED_NOUNS: &str = "
    answer area art back body book business car case cat change cheer child city community
    company content country day dog door education end eye face fact family father fox
    friend game garden girl glass government group guy hand happiness head health history
    home hope hour house hunt idea information issue job joy kid kind law level life light
    line look lot love man marking member minute moment money month morning mother music name
    night number office paper parent party person phrase piano place plan play point power
    president problem program question reason result right road room run school sentence
    shape side sky smile story street student study sun system table teacher team text thing
    time tree water way week window wish woman word work world year
";

const SEED_VERBS: &str = "
    add allow appear ask become begin believe bring build buy call carry change chase cheer
    close come consider continue create cry cut decide describe die do drink eat end expect
    fall feel find follow get give go grow happen hear help hold hope hunt include jump keep
    kill know laugh lead learn leave let like live look lose love make mean meet move need
    offer open pass pay play provide pull put raise reach read remain remember report require
    run say see seem sell send serve set show sit sleep smile speak spend stand start stay
    stop study suggest take talk tell think try turn understand use wait walk want watch
    wear whisper win wish work write
";

const SEED_ADJECTIVES: &str = "
    able angry bad beautiful big blue bright brown calm certain cheerful clear close cold
    common content dark dead deep different difficult early easy fast fine free full glad
    good great green happy hard heavy high hot huge important joyful kind large last late
    lazy light little long loud main new nice old open poor possible pretty quick quiet ready
    real red rich right sad same serious severe short simple slow small smart soft special
    square strong sure tall true warm whole wide wrong young
";

const SEED_ADVERBS: &str = "fast hard well back far late early";

/// The tagger's vocabulary.
#[derive(Clone, Debug)]
pub struct Lexicon {
    extra: AHashMap<String, Vec<Reading>>,
    closed: AHashMap<&'static str, Vec<Reading>>,
    open: AHashMap<&'static str, Vec<Pos>>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Build the built-in lexicon.
    pub fn new() -> Self {
        let mut closed: AHashMap<&'static str, Vec<Reading>> = AHashMap::new();
        for &(word, pos, tag, lemma) in CLOSED_CLASS {
            closed
                .entry(word)
                .or_default()
                .push(Reading::new(pos, tag, lemma));
        }
        for (apostrophe, ascii) in [
            ("\u{2019}s", "'s"),
            ("\u{2019}re", "'re"),
            ("\u{2019}m", "'m"),
            ("\u{2019}ve", "'ve"),
            ("\u{2019}ll", "'ll"),
            ("\u{2019}d", "'d"),
            ("n\u{2019}t", "n't"),
        ] {
            if let Some(readings) = closed.get(ascii).cloned() {
                closed.insert(apostrophe, readings);
            }
        }

        let mut open: AHashMap<&'static str, Vec<Pos>> = AHashMap::new();
        for (list, pos) in [
            (SEED_ADJECTIVES, Pos::Adj),
            (SEED_NOUNS, Pos::Noun),
            (SEED_VERBS, Pos::Verb),
            (SEED_ADVERBS, Pos::Adv),
        ] {
            for word in list.split_whitespace() {
                open.entry(word).or_default().push(pos);
            }
        }

        Lexicon {
            extra: AHashMap::new(),
            closed,
            open,
        }
    }

    /// Merge entries from a `word<TAB>POS<TAB>TAG[<TAB>LEMMA]` file.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let count = self.load_str(&content)?;
        info!("Loaded {count} tagger lexicon entries from {}", path.display());
        Ok(count)
    }

    /// Merge entries from lexicon file content.
    pub fn load_str(&mut self, content: &str) -> Result<usize> {
        let mut count = 0;
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            if fields.len() < 3 || fields[0].is_empty() {
                return Err(GhostwriterError::analysis(format!(
                    "Malformed lexicon line {}: expected word, POS and tag",
                    number + 1
                )));
            }
            let pos: Pos = fields[1].parse().map_err(|_| {
                GhostwriterError::analysis(format!(
                    "Malformed lexicon line {}: unknown POS '{}'",
                    number + 1,
                    fields[1]
                ))
            })?;
            let word = fields[0].to_lowercase();
            let lemma = fields.get(3).map_or_else(|| word.clone(), |l| l.to_string());
            self.extra
                .entry(word)
                .or_default()
                .push(Reading::new(pos, fields[2], lemma));
            count += 1;
        }
        debug!("Parsed {count} lexicon entries");
        Ok(count)
    }

    /// Readings from the lexicon file.
    pub fn extra(&self, word: &str) -> Option<&[Reading]> {
        self.extra.get(word).map(Vec::as_slice)
    }

    /// Readings of a closed-class word.
    pub fn closed(&self, word: &str) -> Option<&[Reading]> {
        self.closed.get(word).map(Vec::as_slice)
    }

    /// Open classes a base form belongs to, most frequent first.
    pub fn open_classes(&self, word: &str) -> &[Pos] {
        self.open.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `word` is a known base form of class `pos`.
    pub fn is_base(&self, word: &str, pos: Pos) -> bool {
        self.open_classes(word).contains(&pos)
            || self
                .extra
                .get(word)
                .is_some_and(|readings| readings.iter().any(|r| r.pos == pos && r.lemma == word))
    }
}
