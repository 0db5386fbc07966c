//! Batch statistics.

/// Mean and population standard deviation of one batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary {
    pub mean: f64,
    pub std_dev: f64,
}

impl BatchSummary {
    /// A deterministic value: itself as the mean, no spread.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn exact(value: u64) -> Self {
        Self {
            mean: value as f64,
            std_dev: 0.0,
        }
    }
}

/// Mean and population standard deviation (divide by `n`).
///
/// Returns `None` for an empty batch.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(values: &[u64]) -> Option<BatchSummary> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    Some(BatchSummary {
        mean,
        std_dev: variance.sqrt(),
    })
}
