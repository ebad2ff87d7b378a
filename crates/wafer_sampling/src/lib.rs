#![forbid(unsafe_code)]
//! wafer_sampling: circular wafer masks and classical cell sampling.
//!
//! Modules:
//! - wafer: circular masks, grid coordinates and radial strata
//! - estimate: sample size for a proportion at a confidence level
//! - sampling: simple random, systematic and radially stratified sampling
//! - runner: configuration-driven pipeline tying the pieces together
//!
//! All randomness comes from a caller-supplied [`rand::RngCore`].
#![doc = include_str!("../README.md")]
pub mod error;
pub mod estimate;
pub mod runner;
pub mod sampling;
pub mod wafer;

/// Convenient re-exports for common types. Import with `use wafer_sampling::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::estimate::{critical_value, estimate_sample_size, SampleSizeEstimate};
    pub use crate::runner::{run, RunConfig, RunResult, SampleSize, SamplingMethod, WaferSampler};
    pub use crate::sampling::{
        sample_srs, sample_stratified, sample_systematic, CellSampling, SimpleRandomSampling,
        StratifiedSampling, SystematicSampling,
    };
    pub use crate::wafer::{create_mask, GridCoord, Sample, StrataAssignment, WaferMask};
}
