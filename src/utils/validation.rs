//! Centralized input limits and validation helpers.

/// Maximum sequence length accepted for a single test case.
///
/// Scoring is quadratic in the worst case (one free block spanning the whole
/// sequence), so this bounds the work a single case can demand.
pub const MAX_SEQUENCE_LENGTH: usize = 200_000;

/// Maximum number of test cases accepted in one input
pub const MAX_TEST_CASES: usize = 100_000;

/// Check whether a declared sequence length is acceptable.
///
/// Returns an error message if `length` exceeds the limit, None if it is safe.
#[must_use]
pub fn check_sequence_length(length: usize) -> Option<String> {
    if length > MAX_SEQUENCE_LENGTH {
        Some(format!(
            "Sequence length {length} exceeds maximum of {MAX_SEQUENCE_LENGTH}"
        ))
    } else {
        None
    }
}

/// Check whether a declared number of test cases is acceptable.
#[must_use]
pub fn check_case_limit(count: usize) -> Option<String> {
    if count > MAX_TEST_CASES {
        Some(format!(
            "Too many test cases: {count} exceeds maximum of {MAX_TEST_CASES}"
        ))
    } else {
        None
    }
}

/// Parse a token holding exactly one symbol.
///
/// Symbols are single printable ASCII characters.
///
/// # Examples
///
/// ```
/// use shift_scorer::utils::validation::parse_symbol;
///
/// assert_eq!(parse_symbol("c"), Some(b'c'));
/// assert_eq!(parse_symbol("cd"), None);
/// assert_eq!(parse_symbol("é"), None);
/// ```
#[must_use]
pub fn parse_symbol(token: &str) -> Option<u8> {
    match token.as_bytes() {
        [b] if is_valid_symbol(*b) => Some(*b),
        _ => None,
    }
}

#[inline]
#[must_use]
pub fn is_valid_symbol(b: u8) -> bool {
    b.is_ascii_graphic()
}
