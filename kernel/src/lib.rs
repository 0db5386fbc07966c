//! Digen Kernel: the deterministic core of the digit-generation study.
//!
//! # API Surface
//!
//! - [`carrier::digits`] -- integer ⇄ digit sequence codec
//! - [`operators::rule`] -- the split-and-place transform (full expansion, sampled step)
//! - [`rng`] -- the injectable uniform source used by every stochastic caller
//! - [`proof`] -- canonical JSON bytes and domain-separated content hashing
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` → `rng`
//!
//! One-way only. No cycles. `carrier` and `rng` depend on nothing internal;
//! `proof` is standalone.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
pub mod rng;
