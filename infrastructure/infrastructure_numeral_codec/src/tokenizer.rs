//! Word Tokenizer
//!
//! Splits English number-word text into classified tokens for the reverse
//! codec. Input is lowercased and split on whitespace; a hyphenated token
//! is a `tens-ones` compound whose halves are resolved independently and
//! summed. Every token must fall into one of the recognized classes, or
//! tokenization fails naming the offending token.

use crate::common::DecodeError;
use entities_vocabulary::{scale_index, small_number_value, tens_value};

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A partial-group numeral: ones/teens word, tens word, or a
    /// hyphenated compound, carrying its value (0-99)
    Number(u32),
    /// The literal "hundred"
    Hundred,
    /// A scale word, carrying its power-of-1000 index (1-70)
    Scale(usize),
}

/// Resolve a hyphenated `tens-ones` compound ("twenty-three").
///
/// The left half must be a tens word (20-90) and the right half a ones
/// word (1-9). Anything else is unrecognized.
fn classify_compound(word: &str) -> Option<TokenKind> {
    let (left, right) = word.split_once('-')?;
    let tens = tens_value(left)?;
    let ones = small_number_value(right).filter(|v| (1..=9u32).contains(v))?;
    Some(TokenKind::Number(tens + ones))
}

fn classify(word: &str) -> Option<TokenKind> {
    if word == "hundred" {
        return Some(TokenKind::Hundred);
    }
    if word.contains('-') {
        return classify_compound(word);
    }
    if let Some(value) = small_number_value(word) {
        return Some(TokenKind::Number(value));
    }
    if let Some(value) = tens_value(word) {
        return Some(TokenKind::Number(value));
    }
    if let Some(k) = scale_index(word) {
        return Some(TokenKind::Scale(k));
    }
    None
}

/// Tokenize number-word text into classified tokens.
///
/// # Arguments
///
/// * `text` - English number words, any casing, whitespace separated
///
/// # Returns
///
/// * `Ok(Vec<TokenKind>)` - One classified token per word
/// * `Err(DecodeError)` - An unclassifiable token, carried in the error
pub fn tokenize(text: &str) -> Result<Vec<TokenKind>, DecodeError> {
    let mut tokens = Vec::new();

    for raw in text.split_whitespace() {
        let word = raw.to_ascii_lowercase();
        match classify(&word) {
            Some(kind) => tokens.push(kind),
            None => return Err(DecodeError::UnknownToken(word)),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_small_numbers() {
        let tokens = tokenize("one two nineteen zero").unwrap();
        assert_eq!(
            tokens,
            vec![
                TokenKind::Number(1),
                TokenKind::Number(2),
                TokenKind::Number(19),
                TokenKind::Number(0),
            ]
        );
    }

    #[test]
    fn test_tokenize_tens_and_compounds() {
        let tokens = tokenize("twenty twenty-three ninety-nine").unwrap();
        assert_eq!(
            tokens,
            vec![
                TokenKind::Number(20),
                TokenKind::Number(23),
                TokenKind::Number(99),
            ]
        );
    }

    #[test]
    fn test_tokenize_hundred_and_scales() {
        let tokens = tokenize("one hundred thousand").unwrap();
        assert_eq!(
            tokens,
            vec![
                TokenKind::Number(1),
                TokenKind::Hundred,
                TokenKind::Scale(1),
            ]
        );
    }

    #[test]
    fn test_tokenize_is_case_insensitive() {
        let tokens = tokenize("One HUNDRED Twenty-Three Million").unwrap();
        assert_eq!(
            tokens,
            vec![
                TokenKind::Number(1),
                TokenKind::Hundred,
                TokenKind::Number(23),
                TokenKind::Scale(2),
            ]
        );
    }

    #[test]
    fn test_unknown_token_is_reported() {
        let err = tokenize("one hundred flibbertigibbet").unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownToken("flibbertigibbet".to_string())
        );
    }

    #[test]
    fn test_malformed_compounds_are_rejected() {
        // Teens cannot form the right half; bare hyphens resolve nothing.
        assert!(tokenize("twenty-ten").is_err());
        assert!(tokenize("ten-three").is_err());
        assert!(tokenize("twenty-").is_err());
        assert!(tokenize("-three").is_err());
    }

    #[test]
    fn test_punctuation_is_not_tolerated() {
        let err = tokenize("seventy-eight.").unwrap_err();
        assert_eq!(err, DecodeError::UnknownToken("seventy-eight.".to_string()));
    }

    #[test]
    fn test_empty_text_yields_no_tokens() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("   \t\n ").unwrap(), vec![]);
    }
}
