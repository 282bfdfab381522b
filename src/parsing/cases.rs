use std::io::{BufReader, Read};
use std::path::Path;
use std::str::SplitWhitespace;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::warn;

use crate::core::case::{Override, TestCase};
use crate::utils::validation::{
    check_case_limit, check_sequence_length, is_valid_symbol, parse_symbol,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected end of input: expected {0}")]
    UnexpectedEof(String),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("Input exceeds limits: {0}")]
    LimitExceeded(String),
}

/// Read test cases from `path`, from stdin if `path` is `-`.
///
/// Files ending in `.gz` are decompressed.
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_cases_file(path: &Path) -> Result<Vec<TestCase>, ParseError> {
    if path.as_os_str() == "-" {
        return parse_cases_reader(std::io::stdin().lock());
    }

    let file = std::fs::File::open(path)?;
    let is_gzipped = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));

    if is_gzipped {
        parse_cases_reader(BufReader::new(GzDecoder::new(file)))
    } else {
        parse_cases_reader(BufReader::new(file))
    }
}

/// Read all of `reader` and parse it as test cases
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure (including invalid UTF-8), or other
/// parse errors if the content is invalid.
pub fn parse_cases_reader<R: Read>(mut reader: R) -> Result<Vec<TestCase>, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_cases_text(&text)
}

/// Parse the whitespace-separated test case format:
///
/// ```text
/// t
/// n m
/// <n reference symbols, separated or concatenated>
/// position symbol      (m times, position is 1-based)
/// ```
///
/// Override positions are not range-checked here; that happens when the
/// target is built so a bad position only fails its own test case.
///
/// # Errors
///
/// Returns `ParseError::UnexpectedEof` if input ends early,
/// `ParseError::InvalidFormat` for malformed tokens or a reference of the wrong
/// length, or `ParseError::LimitExceeded` if declared sizes are too large.
pub fn parse_cases_text(text: &str) -> Result<Vec<TestCase>, ParseError> {
    let mut tokens = Tokens::new(text);

    let count = tokens.next_usize("number of test cases")?;
    if let Some(msg) = check_case_limit(count) {
        return Err(ParseError::LimitExceeded(msg));
    }

    let mut cases = Vec::with_capacity(count);
    for case_num in 1..=count {
        cases.push(parse_case(&mut tokens, case_num)?);
    }

    if let Some(extra) = tokens.next() {
        warn!(token = %extra, "Ignoring trailing input after last test case");
    }

    Ok(cases)
}

fn parse_case(tokens: &mut Tokens<'_>, case_num: usize) -> Result<TestCase, ParseError> {
    let length = tokens.next_usize(&format!("sequence length for case {case_num}"))?;
    let override_count = tokens.next_usize(&format!("override count for case {case_num}"))?;

    if let Some(msg) = check_sequence_length(length) {
        return Err(ParseError::LimitExceeded(format!("case {case_num}: {msg}")));
    }

    let reference = parse_reference(tokens, length, case_num)?;

    let mut overrides = Vec::with_capacity(override_count.min(length));
    for _ in 0..override_count {
        let position = tokens.next_usize(&format!("override position for case {case_num}"))?;
        let token = tokens.expect(&format!("override symbol for case {case_num}"))?;
        let symbol = parse_symbol(token).ok_or_else(|| {
            ParseError::InvalidFormat(format!(
                "case {case_num}: override symbol must be a single character, got '{token}'"
            ))
        })?;
        overrides.push(Override::new(position, symbol));
    }

    Ok(TestCase::new(reference, overrides))
}

/// Collect exactly `length` reference symbols, one or more per token
fn parse_reference(
    tokens: &mut Tokens<'_>,
    length: usize,
    case_num: usize,
) -> Result<Vec<u8>, ParseError> {
    let mut reference = Vec::with_capacity(length);

    while reference.len() < length {
        let token = tokens.expect(&format!("reference symbols for case {case_num}"))?;

        if let Some(bad) = token.bytes().find(|&b| !is_valid_symbol(b)) {
            return Err(ParseError::InvalidFormat(format!(
                "case {case_num}: invalid reference symbol byte 0x{bad:02x} in '{token}'"
            )));
        }
        if reference.len() + token.len() > length {
            return Err(ParseError::InvalidFormat(format!(
                "case {case_num}: reference has more than the declared {length} symbols"
            )));
        }

        reference.extend_from_slice(token.as_bytes());
    }

    Ok(reference)
}

/// Whitespace token cursor
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    fn expect(&mut self, what: &str) -> Result<&'a str, ParseError> {
        self.next()
            .ok_or_else(|| ParseError::UnexpectedEof(what.to_string()))
    }

    fn next_usize(&mut self, what: &str) -> Result<usize, ParseError> {
        let token = self.expect(what)?;
        token.parse().map_err(|_| {
            ParseError::InvalidFormat(format!("expected {what}, got '{token}'"))
        })
    }
}
