//! Sample size estimation for a population proportion.
//!
//! Computes the minimum number of cells required to estimate a proportion `p`
//! within `margin_of_error` at a two-sided `confidence_level`:
//!
//! ```text
//! z = Φ⁻¹(1 - (1 - confidence_level) / 2)
//! n = ceil(z² · p · (1 - p) / margin_of_error²)
//! ```
//!
//! The standard normal quantile `Φ⁻¹` comes from [`statrs`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use crate::error::{Error, Result};

/// Two-sided standard normal critical value for `confidence_level`.
pub fn critical_value(confidence_level: f64) -> Result<f64> {
    if !open_unit_interval(confidence_level) {
        return Err(Error::InvalidArgument(format!(
            "confidence_level must be in (0, 1), got {confidence_level}"
        )));
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| Error::Statistics(e.to_string()))?;
    let alpha = 1.0 - confidence_level;
    Ok(normal.inverse_cdf(1.0 - alpha / 2.0))
}

/// Minimum sample size to estimate proportion `p` within `margin_of_error`.
pub fn estimate_sample_size(confidence_level: f64, p: f64, margin_of_error: f64) -> Result<usize> {
    if !open_unit_interval(p) {
        return Err(Error::InvalidArgument(format!(
            "p must be in (0, 1), got {p}"
        )));
    }
    if margin_of_error.is_nan() || margin_of_error <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "margin_of_error must be > 0, got {margin_of_error}"
        )));
    }
    let z = critical_value(confidence_level)?;

    let n = z * z * p * (1.0 - p) / (margin_of_error * margin_of_error);
    // usize::MAX as f64 rounds up to 2^64, so equality is already out of range.
    if !n.is_finite() || n.ceil() >= usize::MAX as f64 {
        return Err(Error::InvalidArgument(format!(
            "sample size {n:e} is not representable for margin_of_error {margin_of_error}"
        )));
    }
    let size = n.ceil() as usize;
    debug!(
        "Sample size: z = {:.6}, n = {:.4} -> {} (confidence {}, p {}, E {}).",
        z, n, size, confidence_level, p, margin_of_error
    );
    Ok(size)
}

#[inline]
fn open_unit_interval(x: f64) -> bool {
    x > 0.0 && x < 1.0
}

/// Inputs for [`estimate_sample_size`], defaulting to 95% confidence, `p = 0.5`, `E = 0.05`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleSizeEstimate {
    pub confidence_level: f64,
    /// Expected proportion.
    pub p: f64,
    pub margin_of_error: f64,
}

impl Default for SampleSizeEstimate {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            p: 0.5,
            margin_of_error: 0.05,
        }
    }
}

impl SampleSizeEstimate {
    pub fn new(confidence_level: f64, p: f64, margin_of_error: f64) -> Self {
        Self {
            confidence_level,
            p,
            margin_of_error,
        }
    }

    /// Sets the confidence level.
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Sets the expected proportion.
    pub fn with_proportion(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    /// Sets the margin of error.
    pub fn with_margin_of_error(mut self, margin_of_error: f64) -> Self {
        self.margin_of_error = margin_of_error;
        self
    }

    /// Evaluates the estimate.
    pub fn sample_size(&self) -> Result<usize> {
        estimate_sample_size(self.confidence_level, self.p, self.margin_of_error)
    }
}
