//! Parsers for the multi-test-case text input.
//!
//! ## Format
//!
//! ```text
//! 2          number of test cases
//! 5 1        n (sequence length) and m (override count)
//! abcde      n reference symbols, concatenated or whitespace-separated
//! 3 c        m lines of 1-based position and symbol
//! 1 0
//! z
//! ```
//!
//! ## Example
//!
//! ```rust
//! use shift_scorer::parsing::cases::parse_cases_text;
//!
//! let cases = parse_cases_text("1\n5 1\nabcde\n3 c\n").unwrap();
//! assert_eq!(cases[0].reference, b"abcde");
//! ```
//!
//! Input may also be read from a file (optionally gzip-compressed) or stdin
//! with [`cases::parse_cases_file`].

pub mod cases;

pub use cases::ParseError;
