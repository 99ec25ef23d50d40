//! Forward Codec
//!
//! Converts a decimal digit string (up to 213 digits) into its English
//! long-form word representation. The digit string is split into base-1000
//! triplets, each triplet is rendered and tagged with the scale word for
//! its position, zero groups are suppressed entirely, and the joined
//! phrase is Title-Cased per word.

use crate::common::EncodeError;
use crate::triplet::Triplet;
use entities_vocabulary::{scale_word, MAX_DIGITS};

/// Title-case one already-lowercase word: first letter uppercased, the
/// rest untouched. Hyphenated compounds capitalize only the leading half
/// ("twenty-three" becomes "Twenty-three").
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Encode a digit string into English number words.
///
/// Leading zeros carry no magnitude and are stripped; an all-zero input
/// encodes as `"Zero"`. The magnitude check applies to the raw input
/// length, before stripping.
///
/// # Arguments
///
/// * `digits` - Decimal numeral as an ASCII digit string, most significant
///   digit first, 1-213 digits, no sign
///
/// # Returns
///
/// * `Ok(String)` - Title-Cased word representation
/// * `Err(EncodeError)` - Empty input, a non-digit character, or more than
///   213 digits
pub fn encode(digits: &str) -> Result<String, EncodeError> {
    if digits.is_empty() {
        return Err(EncodeError::EmptyInput);
    }
    if digits.len() > MAX_DIGITS {
        return Err(EncodeError::MagnitudeExceeded(digits.len()));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(EncodeError::InvalidDigit(bad));
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(capitalize(entities_vocabulary::ZERO_WORD));
    }

    // Left-pad to a whole number of triplets.
    let padding = (3 - significant.len() % 3) % 3;
    let mut padded: Vec<u8> = Vec::with_capacity(padding + significant.len());
    padded.resize(padding, 0);
    padded.extend(significant.bytes().map(|b| b - b'0'));

    let group_count = padded.len() / 3;
    let mut words: Vec<String> = Vec::new();

    for (i, group) in padded.chunks_exact(3).enumerate() {
        let triplet = Triplet::from_digits(group[0], group[1], group[2]);
        if triplet.is_zero() {
            // Zero groups contribute neither phrase nor scale word.
            continue;
        }
        let scale = group_count - 1 - i;
        words.push(triplet.render());
        if let Some(name) = scale_word(scale) {
            words.push(name.to_string());
        }
    }

    let titled: Vec<String> = words
        .iter()
        .flat_map(|phrase| phrase.split_whitespace())
        .map(capitalize)
        .collect();

    Ok(titled.join(" "))
}
