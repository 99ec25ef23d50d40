//! Infrastructure Layer: Numeral Words Codec
//!
//! Bidirectional codec between decimal numerals (digit strings up to 213
//! digits, values up to 10^212) and their English long-form word
//! representation.
//!
//! ## Overview
//!
//! The `infrastructure_numeral_codec` crate holds both directions of the
//! codec. The forward direction ([`encode`]) groups a digit string into
//! base-1000 triplets, renders each group, attaches the scale word for its
//! position, and Title-Cases the result. The reverse direction ([`decode`])
//! tokenizes English number words and folds them into an arbitrary
//! precision integer.
//!
//! Both directions are pure functions over immutable inputs; the only
//! shared state is the read-only vocabulary in `entities_vocabulary`, so
//! they are safe to call concurrently without synchronization.
//!
//! ## Modules
//!
//! - **[`triplet`]**: rendering of one base-1000 group (0-999) as a phrase.
//! - **[`encoder`]**: the forward codec, digit string to words.
//! - **[`tokenizer`]**: classification of number-word tokens.
//! - **[`decoder`]**: the reverse codec, words to integer.
//!
//! ## See Also
//!
//! - `entities_vocabulary`: the word tables both directions share.

mod common;

pub mod decoder;
pub mod encoder;
pub mod tokenizer;
pub mod triplet;

pub use decoder::decode;
pub use encoder::encode;

// Re-export error types for convenience
pub use common::{DecodeError, EncodeError};
