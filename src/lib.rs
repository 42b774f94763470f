//! Independent-variable transformations of sampled signals.
//!
//! A [`Signal`](transforms::Signal) pairs a strictly increasing
//! [`TimeGrid`](transforms::TimeGrid) with one amplitude per instant. The
//! operations in [`transforms`] never mutate their inputs:
//!
//! - construction from a closed-form [`Generator`](transforms::Generator)
//! - time shift `x(t - t0)`, by re-evaluation or by exact sample reindexing
//! - time reflection `x(-t)`
//! - time scaling `x(a t)`
//! - even/odd decomposition on grids symmetric about zero
pub mod config;
pub mod transforms;
