//! # Tradate: Traditional Dates to Numerals
//!
//! Turns calendar dates written the traditional way, like `"June 14, 1987"`,
//! into their normal form `"19870614"`.
//!
//! ## Usage
//!
//! Put this in your `Cargo.toml`:
//!
//! ```toml
//! tradate = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tradate::normalize;
//!
//! assert_eq!(normalize("June 14, 1987"), "19870614");
//! assert_eq!(normalize("  sePTemBer 3 1752 "), "17520903");
//! ```
//!
//! The month name may use any mix of upper and lower case, the comma may be
//! missing and extra blanks may surround any of the three parts.
//!
//! Conversion never fails. Input that does not look like a traditional date
//! still produces a numeral: an unrecognized month becomes `00` and a day or
//! year that is not a number is padded as is.
//!
//! ```rust
//! use tradate::normalize;
//!
//! assert_eq!(normalize("Blah 14, 1987"), "19870014");
//! assert_eq!(normalize("June 14, abc"), "0abc0614");
//! ```
//!
//! ## Grammar
//! ```text
//! <date>  ::= <month> <sep> <day> <sep> <year>
//!
//! <sep>   ::= <blank>+
//!           | <blank>* , <blank>*
//!
//! <month> ::= january | february | march | april | may | june
//!           | july | august | september | october | november | december
//!
//! <day>   ::= NUM    ; padded to 2 digits
//! <year>  ::= NUM    ; padded to 4 digits
//! ```
//!
//! No calendar checking is done, `"February 31, 2001"` is `"20010231"`.

pub mod convert;
pub mod lexer;
pub mod month;
pub mod pad;

use std::path::PathBuf;

use lexer::{collapse_whitespace, DateTokens};
use pad::{padded_with_zeros, DAY_WIDTH, MONTH_WIDTH, YEAR_WIDTH};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to read dates from {}", path.display())]
    /// The input source could not be opened
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error while converting dates")]
    /// Reading a line or writing a result failed
    Io(#[from] std::io::Error),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
/// How a traditional date is cut into month, day and year
///
/// Both agree on well formed dates and only differ on malformed ones.
pub enum Strategy {
    /// Turn commas into blanks, collapse the blanks and split on the first
    /// and last one
    #[default]
    Collapse,
    /// Take the year off the end (after the last comma, or the last blank
    /// when there is no comma), then the day, and keep the rest as the month
    SuffixStrip,
}

/// Convert a traditional date into its `YYYYMMDD` normal form
pub fn normalize(input: &str) -> String {
    normalize_with(input, Strategy::Collapse)
}

/// Convert a traditional date into its `YYYYMMDD` normal form, tokenizing
/// it with the given strategy
pub fn normalize_with(input: &str, strategy: Strategy) -> String {
    match strategy {
        Strategy::Collapse => {
            let collapsed = collapse_whitespace(input);
            join(DateTokens::split(&collapsed))
        }
        Strategy::SuffixStrip => join(DateTokens::strip_suffixes(input)),
    }
}

fn join(tokens: DateTokens) -> String {
    let month = month::month_number(tokens.month).to_string();

    let mut normal = padded_with_zeros(tokens.year, YEAR_WIDTH);
    normal.push_str(&padded_with_zeros(&month, MONTH_WIDTH));
    normal.push_str(&padded_with_zeros(tokens.day, DAY_WIDTH));

    normal
}
