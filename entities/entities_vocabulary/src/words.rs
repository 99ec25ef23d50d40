//! Number-Word Tables
//!
//! Static vocabulary for the English long-scale rendering of decimal
//! numerals: ones/teens names, tens-multiple names, and the scale names
//! for every power of 1000 up to 10^210. All entries are lowercase; callers
//! that need display casing apply it on output.
//!
//! Index 0 of [`ONES_AND_TEENS`] and of [`TENS`] is the empty string. It is
//! a filler used when composing phrases, never a word that is emitted on
//! its own. The standalone word for the value zero is [`ZERO_WORD`], which
//! the reverse lookup accepts explicitly.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Maximum digit count a numeral may have (values up to 10^212).
pub const MAX_DIGITS: usize = 213;

/// Highest power-of-1000 index with a named scale (10^210).
pub const MAX_SCALE_INDEX: usize = 70;

/// The standalone word for the value zero.
pub const ZERO_WORD: &str = "zero";

/// Names for 0-19. Index 0 is the empty filler string.
pub static ONES_AND_TEENS: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight",
    "nine", "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen",
    "sixteen", "seventeen", "eighteen", "nineteen",
];

/// Names for the tens multiples, indexed by the tens digit. Indices 0 and 1
/// are empty fillers (0x has no tens word, 1x is a teen).
pub static TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy",
    "eighty", "ninety",
];

/// Scale names indexed by power-of-1000: index k names 10^(3k).
/// Index 0 is the empty units group.
pub static SCALES: [&str; 71] = [
    "",
    "thousand",              // 10^3
    "million",               // 10^6
    "billion",               // 10^9
    "trillion",              // 10^12
    "quadrillion",           // 10^15
    "quintillion",           // 10^18
    "sextillion",            // 10^21
    "septillion",            // 10^24
    "octillion",             // 10^27
    "nonillion",             // 10^30
    "decillion",             // 10^33
    "undecillion",           // 10^36
    "duodecillion",          // 10^39
    "tredecillion",          // 10^42
    "quattuordecillion",     // 10^45
    "quindecillion",         // 10^48
    "sexdecillion",          // 10^51
    "septendecillion",       // 10^54
    "octodecillion",         // 10^57
    "novemdecillion",        // 10^60
    "vigintillion",          // 10^63
    "unvigintillion",        // 10^66
    "duovigintillion",       // 10^69
    "trevigintillion",       // 10^72
    "quattuorvigintillion",  // 10^75
    "quinvigintillion",      // 10^78
    "sexvigintillion",       // 10^81
    "septenvigintillion",    // 10^84
    "octovigintillion",      // 10^87
    "novemvigintillion",     // 10^90
    "trigintillion",         // 10^93
    "untrigintillion",       // 10^96
    "duotrigintillion",      // 10^99
    "trestrigintillion",     // 10^102
    "quattuortrigintillion", // 10^105
    "quintrigintillion",     // 10^108
    "sextrigintillion",      // 10^111
    "septentrigintillion",   // 10^114
    "octotrigintillion",     // 10^117
    "novemtrigintillion",    // 10^120
    "quadragintillion",      // 10^123
    "unquadragintillion",    // 10^126
    "duoquadragintillion",   // 10^129
    "trequadragintillion",   // 10^132
    "quattuorquadragintillion", // 10^135
    "quinquadragintillion",  // 10^138
    "sexquadragintillion",   // 10^141
    "septenquadragintillion", // 10^144
    "octoquadragintillion",  // 10^147
    "novemquadragintillion", // 10^150
    "quinquagintillion",     // 10^153
    "unquinquagintillion",   // 10^156
    "duoquinquagintillion",  // 10^159
    "trequinquagintillion",  // 10^162
    "quattuorquinquagintillion", // 10^165
    "quinquinquagintillion", // 10^168
    "sexquinquagintillion",  // 10^171
    "septenquinquagintillion", // 10^174
    "octoquinquagintillion", // 10^177
    "novemquinquagintillion", // 10^180
    "sexagintillion",        // 10^183
    "unsexagintillion",      // 10^186
    "duosexagintillion",     // 10^189
    "tresexagintillion",     // 10^192
    "quattuorsexagintillion", // 10^195
    "quinsexagintillion",    // 10^198
    "sexsexagintillion",     // 10^201
    "septensexagintillion",  // 10^204
    "octosexagintillion",    // 10^207
    "novemsexagintillion",   // 10^210
];

/// Name for a value 0-19, or `None` when out of range.
///
/// Index 0 returns the empty filler string, not [`ZERO_WORD`].
pub fn ones_word(value: usize) -> Option<&'static str> {
    ONES_AND_TEENS.get(value).copied()
}

/// Name for a tens multiple, indexed by the tens digit (2-9).
pub fn tens_word(tens_digit: usize) -> Option<&'static str> {
    match tens_digit {
        2..=9 => Some(TENS[tens_digit]),
        _ => None,
    }
}

/// Scale name for power-of-1000 index `k` (1-70), or `None` when out of
/// range. Index 0 (the units group) has no name and also returns `None`.
pub fn scale_word(k: usize) -> Option<&'static str> {
    match k {
        1..=MAX_SCALE_INDEX => Some(SCALES[k]),
        _ => None,
    }
}

/// Reverse lookup for a ones/teens word.
///
/// Accepts [`ZERO_WORD`] for 0 and the names for 1-19. The word must
/// already be lowercase.
pub fn small_number_value(word: &str) -> Option<u32> {
    if word == ZERO_WORD {
        return Some(0);
    }
    ONES_AND_TEENS
        .iter()
        .position(|&w| !w.is_empty() && w == word)
        .map(|i| i as u32)
}

/// Reverse lookup for a tens word (20, 30, ... 90). Lowercase input.
pub fn tens_value(word: &str) -> Option<u32> {
    TENS.iter()
        .position(|&w| !w.is_empty() && w == word)
        .map(|i| i as u32 * 10)
}

/// Reverse index over the scale names, built once per process.
static SCALE_INDEX: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();

fn scale_lookup() -> &'static HashMap<&'static str, usize> {
    SCALE_INDEX.get_or_init(|| {
        SCALES
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_empty())
            .map(|(k, &w)| (w, k))
            .collect()
    })
}

/// Reverse lookup for a scale word, returning its power-of-1000 index
/// (1-70). Lowercase input.
pub fn scale_index(word: &str) -> Option<usize> {
    scale_lookup().get(word).copied()
}
