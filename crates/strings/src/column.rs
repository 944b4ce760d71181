//! Bijective base-26 column titles.
//!
//! Each letter is a digit valued 1..=26, so there is no zero digit and every
//! positive integer has exactly one title.

/// Error type for column title conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    /// Column number is zero or negative
    #[error("invalid column number {0}: must be at least 1")]
    InvalidArgument(i64),
    /// Title is empty or contains a character other than an ASCII letter
    #[error("invalid column title {0:?}")]
    InvalidTitle(String),
    /// Title denotes a column number larger than `i64::MAX`
    #[error("column title {0:?} is out of range")]
    Overflow(String),
}

const RADIX: i64 = 26;

/// Convert a 1-based column number into its title.
///
/// `1 -> "A"`, `26 -> "Z"`, `27 -> "AA"`, `703 -> "AAA"`.
/// Returns `TitleError::InvalidArgument` for `column_number < 1`.
pub fn convert_to_title(column_number: i64) -> Result<String, TitleError> {
    if column_number < 1 {
        return Err(TitleError::InvalidArgument(column_number));
    }
    // digits come out least significant first
    let mut digits = Vec::new();
    let mut n = column_number;
    while n > 0 {
        // shift 1..=26 down to 0..=25 before taking the remainder
        n -= 1;
        digits.push(b'A' + (n % RADIX) as u8);
        n /= RADIX;
    }
    Ok(digits.into_iter().rev().map(char::from).collect())
}

/// Convert a column title back into its 1-based column number.
///
/// Letters are accepted in either case.
pub fn title_to_number(title: &str) -> Result<i64, TitleError> {
    if title.is_empty() {
        return Err(TitleError::InvalidTitle(String::new()));
    }
    title.chars().try_fold(0_i64, |acc, c| {
        if !c.is_ascii_alphabetic() {
            return Err(TitleError::InvalidTitle(title.to_string()));
        }
        let digit = i64::from(c.to_ascii_uppercase() as u8 - b'A') + 1;
        acc.checked_mul(RADIX)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| TitleError::Overflow(title.to_string()))
    })
}
