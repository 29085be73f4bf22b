//! Core types for Deviate: errors, error codes, configuration, and tracing.
//!
//! The numerical engine lives in `deviate-analysis`; this crate holds the
//! ambient pieces shared by the engine and any host binding built on top.

pub mod config;
pub mod errors;
pub mod tracing;
