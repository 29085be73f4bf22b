//! Scoring sessions: method selection driven by `DeviateConfig`.
//!
//! This is the layer that logs. The numeric modules below it stay silent
//! and only return results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info_span, warn};

use deviate_core::config::DeviateConfig;
use deviate_core::errors::{ConfigError, DeviateError, ScoringError};

use crate::critical::{GrubbsCritical, JackknifeCritical};
use crate::dataset::{empty_output, format_output, Dataset, ScoredRecord};
use crate::scoring::{score_with_rejection, score_without_rejection};
use crate::stats::Statistics;

/// Scoring method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Grubbs,
    Jackknife,
    NoOutlier,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grubbs => "grubbs",
            Self::Jackknife => "jackknife",
            Self::NoOutlier => "no_outlier",
        }
    }

    pub fn all() -> [Method; 3] {
        [Self::Grubbs, Self::Jackknife, Self::NoOutlier]
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grubbs" => Ok(Self::Grubbs),
            "jackknife" | "iterative_jackknife" => Ok(Self::Jackknife),
            "no_outlier" | "nooutlier" | "none" => Ok(Self::NoOutlier),
            other => Err(ConfigError::InvalidValue {
                field: "method".to_string(),
                message: format!("unknown scoring method '{other}'"),
            }),
        }
    }
}

/// Result of scoring one sample.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringReport {
    pub method: Method,
    /// One z-score per original value, in original order.
    pub zscores: Vec<f64>,
    /// Original indices of values excluded from the reference distribution.
    pub removed: Vec<usize>,
    /// Rejection scanning steps (0 for `NoOutlier`).
    pub iterations: usize,
    /// Reference distribution the z-scores were computed against.
    pub reference: Statistics,
}

impl ScoringReport {
    /// Number of values that defined the reference distribution.
    pub fn survivors(&self) -> usize {
        self.reference.count
    }
}

/// Scores samples with parameters taken from a `DeviateConfig`.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: DeviateConfig,
}

impl Scorer {
    pub fn new(config: DeviateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeviateConfig {
        &self.config
    }

    /// Score a flat sample with `method`.
    pub fn score_values(&self, method: Method, values: &[f64]) -> Result<ScoringReport, ScoringError> {
        let span = info_span!("score", method = %method, n = values.len());
        let _guard = span.enter();

        let result = self.dispatch(method, values);
        match &result {
            Ok(report) => debug!(
                survivors = report.survivors(),
                removed = report.removed.len(),
                iterations = report.iterations,
                mean = report.reference.mean,
                std_dev = report.reference.std_dev,
                "scoring complete"
            ),
            Err(e) => warn!(error = %e, "scoring failed"),
        }
        result
    }

    fn dispatch(&self, method: Method, values: &[f64]) -> Result<ScoringReport, ScoringError> {
        let (zscores, rejection) = match method {
            Method::Grubbs => {
                let provider = GrubbsCritical::new(self.config.grubbs.effective_alpha())?;
                score_with_rejection(values, &provider)?
            }
            Method::Jackknife => {
                let provider = JackknifeCritical::new(
                    self.config.jackknife.effective_percentile(),
                    self.config.jackknife.effective_dof1(),
                )?;
                score_with_rejection(values, &provider)?
            }
            Method::NoOutlier => {
                let (zscores, reference) = score_without_rejection(values)?;
                return Ok(ScoringReport {
                    method,
                    zscores,
                    removed: Vec::new(),
                    iterations: 0,
                    reference,
                });
            }
        };

        Ok(ScoringReport {
            method,
            zscores,
            removed: rejection.removed,
            iterations: rejection.iterations,
            reference: rejection.stats,
        })
    }

    /// Score a dataset and pair every score with its id.
    ///
    /// An empty dataset yields no records and no error.
    pub fn score_dataset(
        &self,
        method: Method,
        dataset: &Dataset,
    ) -> Result<Vec<ScoredRecord>, ScoringError> {
        if dataset.is_empty() {
            debug!(method = %method, "empty dataset, nothing to score");
            return Ok(Vec::new());
        }
        let report = self.score_values(method, &dataset.values)?;
        Ok(dataset.records(&report.zscores))
    }

    /// Flatten `input`, score it, and shape the output per `[output]` config.
    pub fn score_json(&self, method: Method, input: &Value) -> Result<Value, DeviateError> {
        let output = &self.config.output;
        let dataset = Dataset::from_json(input, output.effective_use_id())?;
        if dataset.is_empty() {
            return Ok(empty_output(output));
        }
        let records = self.score_dataset(method, &dataset)?;
        Ok(format_output(&records, output))
    }
}
