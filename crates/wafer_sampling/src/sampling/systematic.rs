//! Systematic sampling: every `interval`-th valid cell from a random start.
//!
//! `interval = total / sample_size` is floored, so when `total` is not a multiple
//! of `sample_size` the trailing `total - interval * sample_size` cells of the
//! row-major order are never reachable. This under-coverage is kept as is.
use rand::RngCore;
use tracing::debug;

use crate::error::{Error, Result};
use crate::sampling::{rand_index, CellSampling};
use crate::wafer::{Sample, WaferMask};

/// Draw every `total / sample_size`-th valid cell starting at a uniform offset.
///
/// Returns at most `sample_size` cells.
pub fn sample_systematic(
    mask: &WaferMask,
    sample_size: usize,
    rng: &mut dyn RngCore,
) -> Result<Sample> {
    if sample_size == 0 {
        return Err(Error::InvalidArgument("sample_size must be > 0".into()));
    }
    let valid = mask.valid_coords();
    let interval = valid.len() / sample_size;
    if interval == 0 {
        return Err(Error::InsufficientPopulation {
            requested: sample_size,
            available: valid.len(),
        });
    }

    let start = rand_index(rng, interval);
    debug!(
        "Systematic sampling: interval {} from start {} over {} valid cells.",
        interval,
        start,
        valid.len()
    );

    Ok(valid
        .into_iter()
        .skip(start)
        .step_by(interval)
        .take(sample_size)
        .collect())
}

/// Systematic sampling of masked-in cells in row-major order.
#[derive(Debug, Clone)]
pub struct SystematicSampling {
    /// Number of cells to draw.
    pub count: usize,
}

impl SystematicSampling {
    /// Create a sampler that draws `count` cells.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl CellSampling for SystematicSampling {
    fn sample(&self, mask: &WaferMask, rng: &mut dyn RngCore) -> Result<Sample> {
        sample_systematic(mask, self.count, rng)
    }
}
