//! Digen Harness: trial orchestration around the search strategies.
//!
//! The harness collects `(start, target, tests)`, runs every strategy
//! through `digen_search` with one seeded source, reduces each batch to a
//! mean and standard deviation, and renders the result.
//!
//! The harness does NOT implement any search logic. It owns input handling,
//! configuration, aggregation, rendering, and logging setup.
//!
//! # Pipeline
//!
//! ```text
//! prompt/CLI → TrialInputs + RunConfig
//!   → run_trials() [in_width, in_depth, by_beam, parallel]
//!   → TrialReportV1 → render_text() | canonical JSON + digest
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod runner;
pub mod stats;
