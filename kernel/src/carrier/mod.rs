//! Carrier module: the digit sequence representation of a state.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod digits;
