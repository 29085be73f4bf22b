//! Deviate analysis engine: iterative outlier rejection and z-scoring.
//!
//! Every original observation receives a standardized deviate computed
//! against a reference distribution from which outliers were excluded.
//! Two rejection strategies are provided (Grubbs' test and the Iterative
//! JackKnife) plus a non-rejecting baseline.

pub mod critical;
pub mod dataset;
pub mod rejection;
pub mod scoring;
pub mod session;
pub mod stats;

mod buffer;

pub use critical::{CriticalValueProvider, GrubbsCritical, JackknifeCritical};
pub use rejection::{reject_outliers, Rejection};
pub use scoring::{run_grubbs, run_jackknife, run_no_outlier};
pub use session::{Method, Scorer, ScoringReport};
pub use stats::Statistics;
