//! Stemming algorithms for reducing words to their root forms.

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Porter stemming algorithm implementation.
///
/// Follows the five steps of the original algorithm. Words are lowercased
/// first; words of two characters or fewer are returned lowercased.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the character at `pos` is a vowel.
    fn is_vowel(word: &[char], pos: usize) -> bool {
        match word[pos] {
            'a' | 'e' | 'i' | 'o' | 'u' => true,
            'y' => pos > 0 && !Self::is_vowel(word, pos - 1),
            _ => false,
        }
    }

    /// Calculate the measure of a word (number of VC sequences).
    fn measure(word: &[char]) -> usize {
        let n = word.len();
        let mut m = 0;
        let mut i = 0;

        while i < n && !Self::is_vowel(word, i) {
            i += 1;
        }

        while i < n {
            while i < n && Self::is_vowel(word, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            m += 1;
            while i < n && !Self::is_vowel(word, i) {
                i += 1;
            }
        }

        m
    }

    fn contains_vowel(word: &[char]) -> bool {
        (0..word.len()).any(|i| Self::is_vowel(word, i))
    }

    fn ends_with(word: &[char], suffix: &str) -> bool {
        let suffix: Vec<char> = suffix.chars().collect();
        word.len() >= suffix.len() && word[word.len() - suffix.len()..] == suffix[..]
    }

    fn ends_with_double_consonant(word: &[char]) -> bool {
        let len = word.len();
        len >= 2 && word[len - 1] == word[len - 2] && !Self::is_vowel(word, len - 1)
    }

    /// Consonant-vowel-consonant ending where the last consonant is not w, x or y.
    fn ends_cvc(word: &[char]) -> bool {
        let len = word.len();
        len >= 3
            && !Self::is_vowel(word, len - 3)
            && Self::is_vowel(word, len - 2)
            && !Self::is_vowel(word, len - 1)
            && !matches!(word[len - 1], 'w' | 'x' | 'y')
    }

    fn stem_of<'a>(word: &'a [char], suffix: &str) -> &'a [char] {
        &word[..word.len() - suffix.chars().count()]
    }

    /// Replace the first matching suffix when the remaining stem has measure > 0.
    fn replace_first(word: Vec<char>, rules: &[(&str, &str)]) -> Vec<char> {
        for (old_suffix, new_suffix) in rules {
            if Self::ends_with(&word, old_suffix) {
                let stem = Self::stem_of(&word, old_suffix);
                if Self::measure(stem) > 0 {
                    let mut replaced = stem.to_vec();
                    replaced.extend(new_suffix.chars());
                    return replaced;
                }
                return word;
            }
        }
        word
    }

    fn step1a(word: Vec<char>) -> Vec<char> {
        if Self::ends_with(&word, "sses") || Self::ends_with(&word, "ies") {
            word[..word.len() - 2].to_vec()
        } else if Self::ends_with(&word, "ss") {
            word
        } else if Self::ends_with(&word, "s") {
            word[..word.len() - 1].to_vec()
        } else {
            word
        }
    }

    fn step1b(word: Vec<char>) -> Vec<char> {
        if Self::ends_with(&word, "eed") {
            if Self::measure(Self::stem_of(&word, "eed")) > 0 {
                return word[..word.len() - 1].to_vec();
            }
            return word;
        }

        let stripped = ["ed", "ing"].iter().find_map(|suffix| {
            if Self::ends_with(&word, suffix) {
                let stem = Self::stem_of(&word, suffix);
                Self::contains_vowel(stem).then(|| stem.to_vec())
            } else {
                None
            }
        });

        let Some(mut stem) = stripped else {
            return word;
        };

        if Self::ends_with(&stem, "at") || Self::ends_with(&stem, "bl") || Self::ends_with(&stem, "iz")
        {
            stem.push('e');
        } else if Self::ends_with_double_consonant(&stem)
            && !matches!(stem.last(), Some('l') | Some('s') | Some('z'))
        {
            stem.pop();
        } else if Self::measure(&stem) == 1 && Self::ends_cvc(&stem) {
            stem.push('e');
        }
        stem
    }

    fn step1c(mut word: Vec<char>) -> Vec<char> {
        let len = word.len();
        if len > 1 && word[len - 1] == 'y' && Self::contains_vowel(&word[..len - 1]) {
            word[len - 1] = 'i';
        }
        word
    }

    fn step2(word: Vec<char>) -> Vec<char> {
        const RULES: &[(&str, &str)] = &[
            ("ational", "ate"),
            ("tional", "tion"),
            ("enci", "ence"),
            ("anci", "ance"),
            ("izer", "ize"),
            ("abli", "able"),
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
            ("ization", "ize"),
            ("ation", "ate"),
            ("ator", "ate"),
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
            ("aliti", "al"),
            ("iviti", "ive"),
            ("biliti", "ble"),
        ];
        Self::replace_first(word, RULES)
    }

    fn step3(word: Vec<char>) -> Vec<char> {
        const RULES: &[(&str, &str)] = &[
            ("icate", "ic"),
            ("ative", ""),
            ("alize", "al"),
            ("iciti", "ic"),
            ("ical", "ic"),
            ("ful", ""),
            ("ness", ""),
        ];
        Self::replace_first(word, RULES)
    }

    fn step4(word: Vec<char>) -> Vec<char> {
        const SUFFIXES: &[&str] = &[
            "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
            "ou", "ism", "ate", "iti", "ous", "ive", "ize",
        ];

        for suffix in SUFFIXES {
            if Self::ends_with(&word, suffix) {
                let stem = Self::stem_of(&word, suffix);
                let allowed = *suffix != "ion" || matches!(stem.last(), Some('s') | Some('t'));
                if allowed && Self::measure(stem) > 1 {
                    return stem.to_vec();
                }
                return word;
            }
        }
        word
    }

    fn step5(word: Vec<char>) -> Vec<char> {
        let mut word = word;
        if word.last() == Some(&'e') {
            let stem = &word[..word.len() - 1];
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                word.pop();
            }
        }

        if Self::ends_with(&word, "ll") && Self::measure(&word) > 1 {
            word.pop();
        }
        word
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if lower.chars().count() <= 2 {
            return lower;
        }

        let word: Vec<char> = lower.chars().collect();
        let word = Self::step1a(word);
        let word = Self::step1b(word);
        let word = Self::step1c(word);
        let word = Self::step2(word);
        let word = Self::step3(word);
        let word = Self::step4(word);
        Self::step5(word).into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("died"), "di");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("disabled"), "disabl");
        assert_eq!(stemmer.stem("measuring"), "measur");
        assert_eq!(stemmer.stem("itemization"), "item");
        assert_eq!(stemmer.stem("sensational"), "sensat");
        assert_eq!(stemmer.stem("traditional"), "tradit");
    }

    #[test]
    fn test_word_forms_share_stem() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("Connection"), stemmer.stem("connected"));
        assert_eq!(stemmer.stem("connecting"), "connect");
        assert_eq!(stemmer.stem("happy"), "happi");
        assert_eq!(stemmer.stem("happiness"), "happi");
        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("hopping"), "hop");
        assert_eq!(stemmer.stem("filing"), "file");
    }

    #[test]
    fn test_short_and_non_ascii_words() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("Is"), "is");
        assert_eq!(stemmer.stem("cafés"), "café");
    }

    #[test]
    fn test_porter_measure() {
        assert_eq!(PorterStemmer::measure(&chars("tree")), 0);
        assert_eq!(PorterStemmer::measure(&chars("trees")), 1);
        assert_eq!(PorterStemmer::measure(&chars("trouble")), 1);
        assert_eq!(PorterStemmer::measure(&chars("troubles")), 2);
    }

    #[test]
    fn test_porter_vowel_detection() {
        let word = chars("trouble");

        assert!(!PorterStemmer::is_vowel(&word, 0)); // t
        assert!(!PorterStemmer::is_vowel(&word, 1)); // r
        assert!(PorterStemmer::is_vowel(&word, 2)); // o
        assert!(PorterStemmer::is_vowel(&word, 3)); // u
        assert!(!PorterStemmer::is_vowel(&word, 4)); // b
        assert!(!PorterStemmer::is_vowel(&word, 5)); // l
        assert!(PorterStemmer::is_vowel(&word, 6)); // e
    }
}
