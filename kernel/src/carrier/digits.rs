//! `DigitsV1`: a state's decimal digits, most significant first.
//!
//! # Layout
//!
//! | Value | Digits        |
//! |-------|---------------|
//! | `0`   | `[0]`         |
//! | `7`   | `[7]`         |
//! | `123` | `[1, 2, 3]`   |
//! | `1020`| `[1, 0, 2, 0]`|
//!
//! [`encode`] never produces a leading zero (except for the value `0`), but
//! a rearranged sequence may start with `0`. Such a sequence still decodes;
//! the resulting integer is simply shorter than the sequence.
//!
//! # Canonical form
//!
//! The integer is the identity of a state. Two sequences that decode to the
//! same value are the same state, so callers that need a state compare the
//! decoded `u64`, never the sequence.

use std::fmt;

/// Error produced by the digit codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// An element outside `0..=9` was supplied.
    InvalidDigit { index: usize, value: u8 },
    /// The numeral does not fit in `u64`.
    Overflow { len: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit { index, value } => {
                write!(f, "invalid decimal digit {value} at index {index}")
            }
            Self::Overflow { len } => {
                write!(f, "{len}-digit numeral does not fit in u64")
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Ordered decimal digits, most significant first.
///
/// Every element is guaranteed to be in `0..=9`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DigitsV1(Vec<u8>);

impl DigitsV1 {
    /// Build from raw digits, rejecting any element above 9.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidDigit`] for the first out-of-range element.
    pub fn from_digits(digits: Vec<u8>) -> Result<Self, CodecError> {
        if let Some((index, &value)) = digits.iter().enumerate().find(|(_, &d)| d > 9) {
            return Err(CodecError::InvalidDigit { index, value });
        }
        Ok(Self(digits))
    }

    /// Wrap digits already known to be in range (rule output).
    pub(crate) fn from_trusted(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9));
        Self(digits)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for DigitsV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitsV1({self})")
    }
}

impl fmt::Display for DigitsV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Split `n` into its decimal digits, most significant first.
#[must_use]
pub fn encode(n: u64) -> DigitsV1 {
    if n == 0 {
        return DigitsV1(vec![0]);
    }
    let mut digits = Vec::with_capacity(20);
    let mut rest = n;
    while rest > 0 {
        #[allow(clippy::cast_possible_truncation)]
        digits.push((rest % 10) as u8);
        rest /= 10;
    }
    digits.reverse();
    DigitsV1(digits)
}

/// Read `digits` as a base-10 numeral.
///
/// An empty sequence decodes to `0`.
///
/// # Errors
///
/// Returns [`CodecError::Overflow`] if the value exceeds `u64::MAX`.
pub fn decode(digits: &DigitsV1) -> Result<u64, CodecError> {
    digits.0.iter().try_fold(0u64, |acc, &d| {
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(d)))
            .ok_or(CodecError::Overflow { len: digits.len() })
    })
}

/// Conventional decimal digit count of `n` (`1` for `0`).
#[must_use]
pub fn digit_len(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}
