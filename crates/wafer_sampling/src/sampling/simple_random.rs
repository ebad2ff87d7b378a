//! Simple random sampling without replacement.
use rand::RngCore;
use tracing::debug;

use crate::error::{Error, Result};
use crate::sampling::{choose_indices, CellSampling};
use crate::wafer::{Sample, WaferMask};

/// Draw `sample_size` distinct valid cells uniformly at random, in draw order.
pub fn sample_srs(mask: &WaferMask, sample_size: usize, rng: &mut dyn RngCore) -> Result<Sample> {
    if sample_size == 0 {
        return Err(Error::InvalidArgument("sample_size must be > 0".into()));
    }
    let valid = mask.valid_coords();
    if sample_size > valid.len() {
        return Err(Error::InsufficientPopulation {
            requested: sample_size,
            available: valid.len(),
        });
    }

    debug!(
        "Simple random sampling: {} of {} valid cells.",
        sample_size,
        valid.len()
    );
    Ok(choose_indices(valid.len(), sample_size, rng)
        .into_iter()
        .map(|i| valid[i])
        .collect())
}

/// Uniform sampling of masked-in cells without replacement.
#[derive(Debug, Clone)]
pub struct SimpleRandomSampling {
    /// Number of cells to draw.
    pub count: usize,
}

impl SimpleRandomSampling {
    /// Create a sampler that draws `count` cells.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl CellSampling for SimpleRandomSampling {
    fn sample(&self, mask: &WaferMask, rng: &mut dyn RngCore) -> Result<Sample> {
        sample_srs(mask, self.count, rng)
    }
}
