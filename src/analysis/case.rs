//! Letter-case classification and conversion.
//!
//! The predicates follow the usual string semantics: a word is upper (lower)
//! when it has at least one cased letter and every cased letter is upper
//! (lower); it is title when every alphabetic run starts with an uppercase
//! letter followed only by lowercase letters.

use serde::{Deserialize, Serialize};

/// Whether all cased characters are uppercase (and there is at least one).
pub fn is_upper(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Whether all cased characters are lowercase (and there is at least one).
pub fn is_lower(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    cased
}

/// Whether every run of letters is capitalized ("Wrote", "Severe-Looking").
pub fn is_title(text: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }
    cased
}

/// Title-case each word: the first letter of every alphabetic run is
/// uppercased and the rest lowercased. Apostrophes do not start a new run.
pub fn to_title(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            in_word = in_word && (c == '\'' || c == '\u{2019}');
            result.push(c);
        }
    }
    result
}

/// The case pattern of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePattern {
    Title,
    Upper,
    Lower,
    Mixed,
}

impl CasePattern {
    /// Classify a word. Title takes precedence over upper, so "I" is title.
    pub fn of(text: &str) -> Self {
        if is_title(text) {
            CasePattern::Title
        } else if is_upper(text) {
            CasePattern::Upper
        } else if is_lower(text) {
            CasePattern::Lower
        } else {
            CasePattern::Mixed
        }
    }

    /// Apply this pattern to `text`; `Mixed` leaves it unchanged.
    pub fn apply(self, text: &str) -> String {
        match self {
            CasePattern::Title => to_title(text),
            CasePattern::Upper => text.to_uppercase(),
            CasePattern::Lower => text.to_lowercase(),
            CasePattern::Mixed => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(is_title("Wrote"));
        assert!(is_title("Severe-Looking"));
        assert!(!is_title("WROTE"));
        assert!(is_title("I"));
        assert!(is_upper("WROTE"));
        assert!(!is_upper("123"));
        assert!(is_lower("wrote"));
        assert!(!is_lower("Wrote"));
    }

    #[test]
    fn test_to_title() {
        assert_eq!(to_title("wrote"), "Wrote");
        assert_eq!(to_title("more severe"), "More Severe");
        assert_eq!(to_title("don't"), "Don't");
        assert_eq!(to_title("SEVERE-looking"), "Severe-Looking");
    }

    #[test]
    fn test_case_pattern() {
        assert_eq!(CasePattern::of("Looked"), CasePattern::Title);
        assert_eq!(CasePattern::of("LOOKED"), CasePattern::Upper);
        assert_eq!(CasePattern::of("looked"), CasePattern::Lower);
        assert_eq!(CasePattern::of("iPhone"), CasePattern::Mixed);
        assert_eq!(CasePattern::Upper.apply("wrote"), "WROTE");
    }
}
