//! Trial report: text rendering, canonical JSON artifact, digest.
//!
//! The hashed artifact carries integers only (inputs, seed, policy, breadth
//! result, raw batches). Means and deviations are derived on demand and
//! appear in the text view and the display JSON, never in the digest input.
//!
//! # Artifact layout
//!
//! ```text
//! {
//!   "batches": [{"iterations": [..], "strategy": "in_depth"}, ..],
//!   "breadth": null | {"frontier_high_water", "iterations", "states_generated"},
//!   "inputs": {"start", "target", "tests"},
//!   "policy": {"max_frontier_len", "max_iterations"},
//!   "schema_version": "trial_report.v1",
//!   "seed": u64
//! }
//! ```

use std::fmt::Write as _;
use std::path::Path;

use serde_json::{json, Value};

use digen_kernel::proof::canon::{canonical_json_bytes, CanonError};
use digen_kernel::proof::hash::{canonical_hash, ContentHash};
use digen_kernel::proof::hash_domain::HashDomain;
use digen_search::breadth::BreadthResult;
use digen_search::policy::SearchPolicyV1;
use digen_search::strategy::Strategy;
use digen_search::trial::TrialBatch;

use crate::config::TrialInputs;
use crate::runner::RunError;
use crate::stats::{summarize, BatchSummary};

/// Schema identifier embedded in every artifact.
pub const REPORT_SCHEMA_VERSION: &str = "trial_report.v1";

/// Everything one harness run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialReportV1 {
    pub inputs: TrialInputs,
    /// Seed of the shared uniform source.
    pub seed: u64,
    pub policy: SearchPolicyV1,
    /// `None` when breadth search was skipped.
    pub breadth: Option<BreadthResult>,
    /// Depth, beam and parallel batches, in run order.
    pub batches: Vec<TrialBatch>,
}

impl TrialReportV1 {
    /// The artifact as a JSON value (integers only).
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "schema_version": REPORT_SCHEMA_VERSION,
            "inputs": {
                "start": self.inputs.start,
                "target": self.inputs.target,
                "tests": self.inputs.tests,
            },
            "seed": self.seed,
            "policy": {
                "max_iterations": self.policy.max_iterations,
                "max_frontier_len": self.policy.max_frontier_len,
            },
            "breadth": self.breadth.as_ref().map(breadth_json),
            "batches": self.batches.iter().map(batch_json).collect::<Vec<_>>(),
        })
    }

    /// Canonical JSON bytes of [`Self::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Report digest under [`HashDomain::TrialReport`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::TrialReport, &bytes))
    }

    /// Breadth summary as `(value, 0)`; `None` if skipped or not found.
    #[must_use]
    pub fn breadth_summary(&self) -> Option<BatchSummary> {
        self.breadth
            .and_then(|b| b.iterations)
            .map(BatchSummary::exact)
    }

    /// Summary of each stochastic batch, in run order.
    #[must_use]
    pub fn batch_summaries(&self) -> Vec<(Strategy, Option<BatchSummary>)> {
        self.batches
            .iter()
            .map(|b| (b.strategy, summarize(b.as_slice())))
            .collect()
    }

    /// Human-readable report: raw results, then summaries.
    #[must_use]
    pub fn render_text(&self, digest: &ContentHash) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Trial results:");
        let _ = writeln!(out, "{}: {}", Strategy::Breadth.label(), self.breadth_raw());
        for batch in &self.batches {
            let _ = writeln!(out, "{}: {:?}", batch.strategy.label(), batch.as_slice());
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Summary:");
        write_summary(&mut out, Strategy::Breadth, self.breadth_summary());
        for (strategy, summary) in self.batch_summaries() {
            write_summary(&mut out, strategy, summary);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Seed: {}", self.seed);
        let _ = writeln!(out, "Report digest: {digest}");
        out
    }

    /// Display JSON: the artifact plus digests and summaries.
    ///
    /// This view holds floats and is not itself hashable.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if a batch digest cannot be computed.
    pub fn to_display_json(&self, digest: &ContentHash) -> Result<Value, CanonError> {
        let mut summaries = serde_json::Map::new();
        summaries.insert(
            Strategy::Breadth.as_str().to_string(),
            summary_json(self.breadth_summary()),
        );
        for (strategy, summary) in self.batch_summaries() {
            summaries.insert(strategy.as_str().to_string(), summary_json(summary));
        }

        let batch_digests = self
            .batches
            .iter()
            .map(|b| Ok((b.strategy.as_str().to_string(), json!(batch_digest(b)?.as_str()))))
            .collect::<Result<serde_json::Map<_, _>, CanonError>>()?;

        Ok(json!({
            "report": self.to_json_value(),
            "report_digest": digest.as_str(),
            "batch_digests": batch_digests,
            "summaries": summaries,
        }))
    }

    /// Write the canonical artifact to `path` and return its digest.
    ///
    /// The file holds exactly the bytes that were hashed.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Canon`] or [`RunError::Io`].
    pub fn write_json(&self, path: &Path) -> Result<ContentHash, RunError> {
        let bytes = self.to_canonical_json_bytes()?;
        std::fs::write(path, &bytes).map_err(|e| RunError::Io {
            detail: format!("writing {}: {e}", path.display()),
        })?;
        tracing::info!(path = %path.display(), len = bytes.len(), "report written");
        Ok(canonical_hash(HashDomain::TrialReport, &bytes))
    }

    fn breadth_raw(&self) -> String {
        match self.breadth {
            None => "skipped".to_string(),
            Some(BreadthResult {
                iterations: None, ..
            }) => "not found".to_string(),
            Some(BreadthResult {
                iterations: Some(n),
                ..
            }) => n.to_string(),
        }
    }
}

/// Digest of one batch under [`HashDomain::TrialBatch`].
///
/// # Errors
///
/// Returns [`CanonError`] if canonicalization fails.
pub fn batch_digest(batch: &TrialBatch) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&batch_json(batch))?;
    Ok(canonical_hash(HashDomain::TrialBatch, &bytes))
}

fn batch_json(batch: &TrialBatch) -> Value {
    json!({
        "strategy": batch.strategy.as_str(),
        "iterations": batch.as_slice(),
    })
}

fn breadth_json(result: &BreadthResult) -> Value {
    json!({
        "iterations": result.iterations,
        "frontier_high_water": result.frontier_high_water,
        "states_generated": result.states_generated,
    })
}

fn summary_json(summary: Option<BatchSummary>) -> Value {
    summary.map_or(Value::Null, |s| {
        json!({ "mean": s.mean, "std_dev": s.std_dev })
    })
}

fn write_summary(out: &mut String, strategy: Strategy, summary: Option<BatchSummary>) {
    let _ = writeln!(out, "{}:", strategy.label());
    match summary {
        Some(s) => {
            let _ = writeln!(out, "\tMean - {:.2}", s.mean);
            let _ = writeln!(out, "\tStandard deviation - {:.2}", s.std_dev);
        }
        None => {
            let _ = writeln!(out, "\tMean - n/a");
            let _ = writeln!(out, "\tStandard deviation - n/a");
        }
    }
}
