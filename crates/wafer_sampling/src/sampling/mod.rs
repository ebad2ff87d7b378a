//! Sampling strategies for drawing cells from a wafer mask.
//!
//! Every strategy derives its population from [`WaferMask::valid_coords`] and
//! draws from an injected [`RngCore`], so the same seed always yields the same
//! sample. Each strategy is available both as a free function and as a value
//! implementing [`CellSampling`].
use rand::RngCore;

use crate::error::Result;
use crate::wafer::{Sample, WaferMask};

pub mod simple_random;
pub mod stratified;
pub mod systematic;

pub use simple_random::{sample_srs, SimpleRandomSampling};
pub use stratified::{sample_stratified, StratifiedSampling};
pub use systematic::{sample_systematic, SystematicSampling};

/// Trait for cell sampling.
pub trait CellSampling: Send + Sync {
    fn sample(&self, mask: &WaferMask, rng: &mut dyn RngCore) -> Result<Sample>;
}

/// Uniform integer in `[0, n)`. `n` must be non-zero.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, n: usize) -> usize {
    debug_assert!(n > 0);
    ((rng.next_u64() as u128 * n as u128) >> 64) as usize
}

/// Draw `k` distinct indices from `[0, n)` in draw order (partial Fisher–Yates).
///
/// Callers guarantee `k <= n`.
pub(crate) fn choose_indices(n: usize, k: usize, rng: &mut dyn RngCore) -> Vec<usize> {
    debug_assert!(k <= n);
    let mut idx: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = i + rand_index(rng, n - i);
        idx.swap(i, j);
    }
    idx.truncate(k);
    idx
}
