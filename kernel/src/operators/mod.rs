//! Operators module: the digit transform rule.
//!
//! Depends on `carrier` and `rng`. Does not import from `proof`.

pub mod rule;
