//! Command-Line Argument Parsing Module
//!
//! Argument definitions for the `numwords` binary. Uses clap for
//! type-safe argument parsing.

use clap::Parser;

/// Numeral words codec command-line arguments
#[derive(Parser, Debug)]
#[command(name = "numwords")]
#[command(about = "Convert decimal numerals to English words and back")]
pub struct CodecArgs {
    /// Encode a digit string (up to 213 digits) into English words
    #[arg(long, value_name = "DIGITS")]
    pub to_text: Option<String>,

    /// Decode English number words into a decimal numeral
    #[arg(long, value_name = "WORDS")]
    pub to_number: Option<String>,
}
