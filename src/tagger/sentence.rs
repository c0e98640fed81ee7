//! Sentence segmentation over tokenized text.
//!
//! A sentence ends after a token made only of terminal punctuation (`.`, `!`,
//! `?`, `…`) plus any closing quotes or brackets that follow it, or at a blank
//! line between two tokens.

use crate::analysis::token::Token;

fn is_terminal(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| matches!(c, '.' | '!' | '?' | '\u{2026}'))
}

fn is_closing(text: &str) -> bool {
    matches!(
        text,
        "\"" | "'" | ")" | "]" | "}" | "\u{201D}" | "\u{2019}" | "\u{00BB}"
    )
}

/// Split tokens into sentences, returned as half-open token ranges.
///
/// Every token belongs to exactly one range; an empty token list yields no
/// sentences.
pub fn split_sentences(text: &str, tokens: &[Token]) -> Vec<(usize, usize)> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < tokens.len() {
        let mut end = None;

        if is_terminal(&tokens[i].text) {
            let mut j = i + 1;
            while j < tokens.len() && is_closing(&tokens[j].text) {
                j += 1;
            }
            end = Some(j);
        } else if let Some(next) = tokens.get(i + 1) {
            let gap = &text[tokens[i].byte_end..next.byte_start];
            if gap.matches('\n').count() >= 2 {
                end = Some(i + 1);
            }
        }

        match end {
            Some(j) => {
                sentences.push((start, j));
                start = j;
                i = j;
            }
            None => i += 1,
        }
    }

    if start < tokens.len() {
        sentences.push((start, tokens.len()));
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::UnicodeWordTokenizer;

    fn sentences(text: &str) -> Vec<String> {
        let tokens = UnicodeWordTokenizer::new().tokenize_vec(text);
        split_sentences(text, &tokens)
            .into_iter()
            .map(|(start, end)| text[tokens[start].byte_start..tokens[end - 1].byte_end].to_string())
            .collect()
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            sentences("The cat sat. Mr. Fox left! Did he?"),
            vec!["The cat sat.", "Mr. Fox left!", "Did he?"]
        );
    }

    #[test]
    fn test_closing_quotes_stay_with_sentence() {
        assert_eq!(
            sentences("He said \"stop.\" Then he left"),
            vec!["He said \"stop.\"", "Then he left"]
        );
    }

    #[test]
    fn test_blank_line_ends_sentence() {
        assert_eq!(sentences("A title\n\nSome text"), vec!["A title", "Some text"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sentences("   ").is_empty());
    }
}
