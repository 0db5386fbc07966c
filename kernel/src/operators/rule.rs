//! The split-and-place transform.
//!
//! For a digit sequence of length `L >= 2` and a split position `i` in
//! `[0, L-2]`, the digits at `i` (`a`) and `i+1` (`b`) are lifted out and the
//! remaining `L-2` digits keep their relative order (`rest`). The pair is then
//! placed around `rest` according to the parity of `L`:
//!
//! | `L`  | Placement      | Result              |
//! |------|----------------|---------------------|
//! | odd  | `FrontFirst`   | `[a] + rest + [b]`  |
//! | even | `FrontSecond`  | `[b] + rest + [a]`  |
//!
//! Swapping the two rows changes the reachable graph entirely, so the
//! choice lives in exactly one place: [`Placement::for_len`].
//!
//! Two primitives are built on [`apply_split`]:
//! - [`expand`]: every split position, in increasing order (`L - 1` results)
//! - [`sample`]: one split position drawn uniformly from the injected source
//!
//! Integer wrappers ([`expand_state`], [`sample_state`]) encode the state in
//! and decode the neighbors out.

use std::fmt;

use crate::carrier::digits::{decode, encode, CodecError, DigitsV1};
use crate::rng::UniformSource;

/// Largest state accepted by the integer wrappers.
///
/// Any rearrangement of at most 19 digits fits in `u64`; 20-digit states
/// could rearrange past `u64::MAX`.
pub const MAX_STATE: u64 = 9_999_999_999_999_999_999;

/// Shortest digit sequence the rule is defined on.
pub const MIN_RULE_LEN: usize = 2;

/// Failure applying the transform rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Fewer than [`MIN_RULE_LEN`] digits: there is no split position.
    DegenerateLength { len: usize },
    /// Split position outside `[0, len-2]`.
    SplitOutOfRange { split: usize, len: usize },
    /// State above [`MAX_STATE`].
    StateOutOfRange { state: u64 },
    /// Decoding a neighbor failed.
    Codec(CodecError),
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateLength { len } => {
                write!(
                    f,
                    "rule needs at least {MIN_RULE_LEN} digits, got {len}"
                )
            }
            Self::SplitOutOfRange { split, len } => {
                write!(f, "split position {split} out of range for {len} digits")
            }
            Self::StateOutOfRange { state } => {
                write!(f, "state {state} exceeds maximum {MAX_STATE}")
            }
            Self::Codec(e) => write!(f, "codec: {e}"),
        }
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for RuleError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

/// Where the two lifted digits land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// First lifted digit to the front, second to the back (odd length).
    FrontFirst,
    /// Second lifted digit to the front, first to the back (even length).
    FrontSecond,
}

impl Placement {
    #[must_use]
    pub const fn for_len(len: usize) -> Self {
        if len % 2 == 1 {
            Self::FrontFirst
        } else {
            Self::FrontSecond
        }
    }
}

/// Number of split positions (`L - 1`).
///
/// # Errors
///
/// Returns [`RuleError::DegenerateLength`] if `digits` has fewer than two digits.
pub fn split_count(digits: &DigitsV1) -> Result<usize, RuleError> {
    let len = digits.len();
    if len < MIN_RULE_LEN {
        return Err(RuleError::DegenerateLength { len });
    }
    Ok(len - 1)
}

/// Apply the rule at one split position.
///
/// # Errors
///
/// Returns [`RuleError::DegenerateLength`] for sequences shorter than two
/// digits and [`RuleError::SplitOutOfRange`] if `split > L - 2`.
pub fn apply_split(digits: &DigitsV1, split: usize) -> Result<DigitsV1, RuleError> {
    let count = split_count(digits)?;
    let len = digits.len();
    if split >= count {
        return Err(RuleError::SplitOutOfRange { split, len });
    }

    let d = digits.as_slice();
    let (a, b) = (d[split], d[split + 1]);
    let (front, back) = match Placement::for_len(len) {
        Placement::FrontFirst => (a, b),
        Placement::FrontSecond => (b, a),
    };

    let mut out = Vec::with_capacity(len);
    out.push(front);
    out.extend_from_slice(&d[..split]);
    out.extend_from_slice(&d[split + 2..]);
    out.push(back);
    Ok(DigitsV1::from_trusted(out))
}

/// Full expansion: one neighbor per split position, in increasing order.
///
/// # Errors
///
/// Returns [`RuleError::DegenerateLength`] for sequences shorter than two digits.
pub fn expand(digits: &DigitsV1) -> Result<Vec<DigitsV1>, RuleError> {
    let count = split_count(digits)?;
    (0..count).map(|split| apply_split(digits, split)).collect()
}

/// Sampled step: one neighbor at a uniformly drawn split position.
///
/// Consumes exactly one draw from `source`.
///
/// # Errors
///
/// Returns [`RuleError::DegenerateLength`] for sequences shorter than two digits.
pub fn sample(digits: &DigitsV1, source: &mut dyn UniformSource) -> Result<DigitsV1, RuleError> {
    let count = split_count(digits)?;
    apply_split(digits, source.below(count))
}

fn check_range(state: u64) -> Result<DigitsV1, RuleError> {
    if state > MAX_STATE {
        return Err(RuleError::StateOutOfRange { state });
    }
    Ok(encode(state))
}

/// [`expand`] over integer states.
///
/// # Errors
///
/// Returns [`RuleError::StateOutOfRange`] above [`MAX_STATE`] and
/// [`RuleError::DegenerateLength`] for single-digit states.
pub fn expand_state(state: u64) -> Result<Vec<u64>, RuleError> {
    let digits = check_range(state)?;
    expand(&digits)?
        .iter()
        .map(|n| decode(n).map_err(RuleError::from))
        .collect()
}

/// [`sample`] over integer states.
///
/// # Errors
///
/// Returns [`RuleError::StateOutOfRange`] above [`MAX_STATE`] and
/// [`RuleError::DegenerateLength`] for single-digit states.
pub fn sample_state(state: u64, source: &mut dyn UniformSource) -> Result<u64, RuleError> {
    let digits = check_range(state)?;
    Ok(decode(&sample(&digits, source)?)?)
}
