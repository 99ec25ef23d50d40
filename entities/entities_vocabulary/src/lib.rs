//! Entities Layer: Number-Word Vocabulary
//!
//! Read-only vocabulary for the English long-form rendering of decimal
//! numerals, shared by both directions of the numeral codec.
//!
//! ## Overview
//!
//! The `entities_vocabulary` crate is the leaf data layer of the numeral
//! words codec. It holds the fixed word tables (ones/teens, tens multiples,
//! and the scale names up to 10^210) together with forward lookups (index
//! to word, used when encoding) and reverse lookups (word to value, used
//! when decoding). The tables are process-lifetime static data; the reverse
//! scale index is built lazily, once, behind a `OnceLock`.
//!
//! ## See Also
//!
//! - `infrastructure_numeral_codec`: the codec algorithms built on these
//!   tables.

mod words;

pub use words::{
    ones_word, scale_index, scale_word, small_number_value, tens_value,
    tens_word, MAX_DIGITS, MAX_SCALE_INDEX, ONES_AND_TEENS, SCALES, TENS,
    ZERO_WORD,
};
