//! Digen Search: four strategies for reaching a target state under the
//! digit transform rule.
//!
//! This crate depends only on `digen_kernel`. It does NOT depend on
//! `digen_harness` and performs no I/O beyond `tracing` events.
//!
//! # Crate dependency graph
//!
//! ```text
//! digen_kernel  ←  digen_search  ←  digen_harness
//! (codec, rule)     (strategies)     (prompt, stats, report)
//! ```
//!
//! # Strategies
//!
//! - [`breadth::in_width`] — deterministic level expansion, duplicates kept
//! - [`depth::in_depth`] — random walk choosing among the full expansion
//! - [`beam::by_beam`] — random walk over sampled steps
//! - [`parallel::parallel`] — a population advanced one sampled step per round
//!
//! Every call is bounded by a [`policy::SearchPolicyV1`]; randomness comes
//! only from the `UniformSource` the caller passes in.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod beam;
pub mod breadth;
pub mod depth;
pub mod error;
pub mod frontier;
pub mod parallel;
pub mod policy;
pub mod strategy;
pub mod trial;

mod walk;
