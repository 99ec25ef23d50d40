//! Integration tests for entities_vocabulary crate
//!
//! These tests verify that the word tables agree with their reverse
//! lookups and that the scale ladder covers the full supported range.

use entities_vocabulary::*;

#[test]
fn test_forward_and_reverse_agree_for_small_numbers() {
    for value in 1..=19 {
        let word = ones_word(value).unwrap();
        assert_eq!(small_number_value(word), Some(value as u32));
    }
}

#[test]
fn test_forward_and_reverse_agree_for_tens() {
    for tens_digit in 2..=9 {
        let word = tens_word(tens_digit).unwrap();
        assert_eq!(tens_value(word), Some(tens_digit as u32 * 10));
    }
}

#[test]
fn test_forward_and_reverse_agree_for_scales() {
    for k in 1..=MAX_SCALE_INDEX {
        let word = scale_word(k).unwrap();
        assert!(!word.is_empty());
        assert_eq!(scale_index(word), Some(k));
    }
}

#[test]
fn test_zero_word_is_not_in_the_ones_table() {
    // Index 0 is the filler; "zero" resolves through the reverse lookup only.
    assert_eq!(ones_word(0), Some(""));
    assert_eq!(small_number_value(ZERO_WORD), Some(0));
}

#[test]
fn test_supported_magnitude_constants() {
    // 213 digits form 71 triplets; the most significant carries index 70.
    assert_eq!(MAX_DIGITS, 213);
    assert_eq!(MAX_SCALE_INDEX, 70);
    assert_eq!((MAX_DIGITS + 2) / 3 - 1, MAX_SCALE_INDEX);
}

#[test]
fn test_known_scale_milestones() {
    assert_eq!(scale_word(3), Some("billion"));
    assert_eq!(scale_word(15), Some("quattuordecillion"));
    assert_eq!(scale_word(21), Some("vigintillion"));
    assert_eq!(scale_word(31), Some("trigintillion"));
    assert_eq!(scale_word(41), Some("quadragintillion"));
    assert_eq!(scale_word(51), Some("quinquagintillion"));
    assert_eq!(scale_word(61), Some("sexagintillion"));
}

#[test]
fn test_tables_are_lowercase() {
    let all = ONES_AND_TEENS.iter().chain(TENS.iter()).chain(SCALES.iter());
    for word in all {
        assert_eq!(word.to_ascii_lowercase(), *word);
    }
}
