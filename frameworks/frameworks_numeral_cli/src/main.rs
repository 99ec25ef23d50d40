//! Numeral Words Codec Binary Entry Point
//!
//! Command-line front end for the numeral words codec. Encodes decimal
//! digit strings into English long-form words and decodes such text back
//! into numerals.

use std::process;

mod args;

use args::CodecArgs;
use clap::Parser;
use infrastructure_numeral_codec::{decode, encode};

fn main() {
    let args = CodecArgs::parse();

    if args.to_text.is_none() && args.to_number.is_none() {
        eprintln!("Nothing to do: pass --to-text <DIGITS> or --to-number <WORDS>");
        process::exit(2);
    }

    if let Some(digits) = &args.to_text {
        match encode(digits) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    if let Some(words) = &args.to_number {
        match decode(words) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}
