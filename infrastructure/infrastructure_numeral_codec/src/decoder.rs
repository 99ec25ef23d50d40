//! Reverse Codec
//!
//! Reconstructs the integer value of English number-word text. Tokens are
//! folded left to right into an accumulator of two parts: a pending
//! partial-group value (0-999, built from hundreds/tens/ones words) and a
//! running total of completed, scale-weighted groups. A scale word closes
//! the pending group and folds it into the total; whatever remains pending
//! at end of input is the units group.
//!
//! Decoded values reach 10^212, so the total is a malachite `Integer`.

use crate::common::DecodeError;
use crate::tokenizer::{tokenize, TokenKind};
use malachite::Integer;

/// 1000^k as an arbitrary-precision integer.
fn scale_weight(k: usize) -> Integer {
    let mut weight = Integer::from(1u32);
    for _ in 0..k {
        weight *= Integer::from(1000u32);
    }
    weight
}

/// Decode English number words into an integer.
///
/// Casing is ignored. A bare "hundred" means 100, and a scale word with no
/// preceding numeral multiplies an implicit 1, so "thousand two hundred"
/// decodes to 1200.
///
/// # Arguments
///
/// * `text` - English number words, whitespace separated
///
/// # Returns
///
/// * `Ok(Integer)` - The decoded value
/// * `Err(DecodeError)` - Empty input or an unrecognized token
pub fn decode(text: &str) -> Result<Integer, DecodeError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let mut total = Integer::from(0u32);
    let mut pending: Option<Integer> = None;

    for token in tokens {
        match token {
            TokenKind::Hundred => {
                // Pending stays arbitrary precision so that degenerate
                // inputs with stacked "hundred" tokens cannot overflow.
                let base = pending.take().unwrap_or_else(|| Integer::from(1u32));
                pending = Some(base * Integer::from(100u32));
            }
            TokenKind::Number(value) => {
                let base = pending.take().unwrap_or_else(|| Integer::from(0u32));
                pending = Some(base + Integer::from(value));
            }
            TokenKind::Scale(k) => {
                let group = pending.take().unwrap_or_else(|| Integer::from(1u32));
                total += group * scale_weight(k);
            }
        }
    }

    if let Some(value) = pending {
        total += value;
    }

    Ok(total)
}
