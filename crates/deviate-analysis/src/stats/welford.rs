//! Single-pass mean and population standard deviation (Welford).

use serde::{Deserialize, Serialize};

/// Mean and population standard deviation of a value sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: f64,
    pub std_dev: f64,
    /// Number of values the estimate was computed over.
    pub count: usize,
}

impl Statistics {
    /// Statistics of an empty sequence: mean and spread are both zero.
    pub fn empty() -> Self {
        Self {
            mean: 0.0,
            std_dev: 0.0,
            count: 0,
        }
    }

    /// True when the spread is exactly zero and a z-score is undefined.
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }

    /// False when the accumulation overflowed to NaN or infinity.
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.std_dev.is_finite()
    }
}

/// Estimate mean and population standard deviation in one pass.
///
/// Empty input yields `(0, 0)`; a single value yields `(value, 0)`.
/// The running sum of squared deviations is divided by `n`, not `n - 1`.
pub fn estimate_mean_and_std_dev(values: &[f64]) -> Statistics {
    let mut mean = 0.0;
    let mut m2 = 0.0;

    for (i, &x) in values.iter().enumerate() {
        let d1 = x - mean;
        mean += d1 / (i + 1) as f64;
        let d2 = x - mean;
        m2 += d1 * d2;
    }

    let count = values.len();
    let std_dev = if count > 1 {
        (m2 / count as f64).sqrt()
    } else {
        0.0
    };

    Statistics {
        mean,
        std_dev,
        count,
    }
}
