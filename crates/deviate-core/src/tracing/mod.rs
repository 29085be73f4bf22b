//! Observability for Deviate.
//! `tracing` crate with `EnvFilter`, configured through `DEVIATE_LOG`.

pub mod setup;

pub use setup::init_tracing;
