//! Low-level utilities shared across the crate.
//!
//! - [`robust`] - robust centroid estimation and outlier filters
//! - [`quantile`] - inverse normal CDF and chi-square quantile approximations
//! - [`rng`] - deterministic RNG for reproducible tests and benchmarks

pub mod quantile;
pub mod rng;
pub mod robust;

pub use rng::SimpleRng;
