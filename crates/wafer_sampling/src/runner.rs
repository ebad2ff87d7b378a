//! High-level runner: build a wafer, resolve the sample size and draw a sample.
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::estimate::SampleSizeEstimate;
use crate::sampling::{sample_srs, sample_stratified, sample_systematic};
use crate::wafer::{create_mask, GridCoord, Sample, StrataAssignment, WaferMask};

/// Wafer side length used by [`RunConfig::default`].
pub const DEFAULT_WAFER_SIZE: usize = 33;
/// Radial band count used by [`SamplingMethod::default`].
pub const DEFAULT_STRATA: usize = 3;

/// Sampling strategy to apply to the wafer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SamplingMethod {
    SimpleRandom,
    Systematic,
    Stratified { strata: usize },
}

impl Default for SamplingMethod {
    fn default() -> Self {
        SamplingMethod::Stratified {
            strata: DEFAULT_STRATA,
        }
    }
}

/// How many cells to request from the sampler.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SampleSize {
    /// Exactly this many cells.
    Fixed(usize),
    /// Computed from a proportion estimate.
    Estimated(SampleSizeEstimate),
}

impl Default for SampleSize {
    fn default() -> Self {
        SampleSize::Estimated(SampleSizeEstimate::default())
    }
}

impl SampleSize {
    pub fn resolve(&self) -> Result<usize> {
        match self {
            SampleSize::Fixed(n) => Ok(*n),
            SampleSize::Estimated(est) => est.sample_size(),
        }
    }
}

/// Configuration for a sampling run.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunConfig {
    /// Side length of the square wafer grid.
    pub wafer_size: usize,
    /// Sampling strategy.
    pub method: SamplingMethod,
    /// Requested sample size.
    pub sample_size: SampleSize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            wafer_size: DEFAULT_WAFER_SIZE,
            method: SamplingMethod::default(),
            sample_size: SampleSize::default(),
        }
    }
}

impl RunConfig {
    /// Creates a new [`RunConfig`] for a wafer of the given side length.
    pub fn new(wafer_size: usize) -> Self {
        Self {
            wafer_size,
            ..Default::default()
        }
    }

    /// Sets the sampling method.
    pub fn with_method(mut self, method: SamplingMethod) -> Self {
        self.method = method;
        self
    }

    /// Requests a fixed number of cells.
    pub fn with_fixed_sample_size(mut self, n: usize) -> Self {
        self.sample_size = SampleSize::Fixed(n);
        self
    }

    /// Derives the number of cells from a proportion estimate.
    pub fn with_estimated_sample_size(mut self, estimate: SampleSizeEstimate) -> Self {
        self.sample_size = SampleSize::Estimated(estimate);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Population-dependent checks are left to the samplers.
    pub fn validate(&self) -> Result<()> {
        if self.wafer_size == 0 {
            return Err(Error::InvalidConfig("wafer_size must be > 0".into()));
        }
        if let SamplingMethod::Stratified { strata: 0 } = self.method {
            return Err(Error::InvalidConfig("strata must be > 0".into()));
        }
        match self.sample_size {
            SampleSize::Fixed(0) => Err(Error::InvalidConfig("sample_size must be > 0".into())),
            SampleSize::Fixed(_) => Ok(()),
            SampleSize::Estimated(est) => est
                .sample_size()
                .map(|_| ())
                .map_err(|e| Error::InvalidConfig(e.to_string())),
        }
    }
}

/// Result of a sampling run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub mask: WaferMask,
    pub center: GridCoord,
    /// Masked-in cells in row-major order.
    pub valid_coords: Vec<GridCoord>,
    /// Number of cells requested from the sampler.
    pub requested: usize,
    pub sample: Sample,
    /// Band of every valid cell; only set for stratified runs.
    pub strata: Option<StrataAssignment>,
}

impl RunResult {
    /// Fraction of the requested cells actually drawn.
    pub fn fill_ratio(&self) -> f64 {
        if self.requested == 0 {
            return 0.0;
        }
        self.sample.len() as f64 / self.requested as f64
    }
}

/// Runs the configured sampling once.
pub fn run<R: RngCore>(config: &RunConfig, rng: &mut R) -> Result<RunResult> {
    config.validate()?;

    let (mask, center) = create_mask(config.wafer_size)?;
    let requested = config.sample_size.resolve()?;
    let valid_coords = mask.valid_coords();

    let (sample, strata) = match config.method {
        SamplingMethod::SimpleRandom => (sample_srs(&mask, requested, rng)?, None),
        SamplingMethod::Systematic => (sample_systematic(&mask, requested, rng)?, None),
        SamplingMethod::Stratified { strata } => {
            let (sample, assignment) = sample_stratified(&mask, center, requested, strata, rng)?;
            (sample, Some(assignment))
        }
    };

    info!(
        "Wafer {}x{}: {} valid cells | {:?} | sampled {} of {} requested.",
        config.wafer_size,
        config.wafer_size,
        valid_coords.len(),
        config.method,
        sample.len(),
        requested,
    );
    if sample.len() < requested {
        warn!(
            "Sample under-filled by {} cells.",
            requested - sample.len()
        );
    }

    Ok(RunResult {
        mask,
        center,
        valid_coords,
        requested,
        sample,
        strata,
    })
}

/// Runner holding a validated [`RunConfig`].
pub struct WaferSampler {
    config: RunConfig,
}

impl WaferSampler {
    /// Create a runner, validating the configuration.
    pub fn try_new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Draw a fresh sample.
    pub fn run<R: RngCore>(&mut self, rng: &mut R) -> Result<RunResult> {
        run(&self.config, rng)
    }
}
