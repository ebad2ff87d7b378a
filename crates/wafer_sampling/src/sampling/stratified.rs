//! Stratified sampling over radial bands of the wafer.
//!
//! Valid cells are split into `n_strata` equal-width bands of distance from the
//! center (see [`StrataAssignment`]). Each band receives
//! `floor(|band| * sample_size / total_valid)` draws without replacement, so the
//! total never exceeds `sample_size` but may fall short of it. The shortfall is
//! not redistributed.
use rand::RngCore;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::sampling::{choose_indices, CellSampling};
use crate::wafer::{GridCoord, Sample, StrataAssignment, WaferMask};

/// Proportional allocation for one stratum.
#[inline]
fn allocation(stratum_len: usize, sample_size: usize, total: usize) -> usize {
    (stratum_len as u128 * sample_size as u128 / total as u128) as usize
}

/// Draw a radially stratified sample, returning it with the band of every valid cell.
///
/// Strata are visited in increasing id order and their draws concatenated.
/// Strata whose allocation is zero, or larger than the stratum itself, add nothing.
pub fn sample_stratified(
    mask: &WaferMask,
    center: GridCoord,
    sample_size: usize,
    n_strata: usize,
    rng: &mut dyn RngCore,
) -> Result<(Sample, StrataAssignment)> {
    if sample_size == 0 {
        return Err(Error::InvalidArgument("sample_size must be > 0".into()));
    }
    if n_strata == 0 {
        return Err(Error::InvalidArgument("n_strata must be > 0".into()));
    }

    let valid = mask.valid_coords();
    let strata = StrataAssignment::compute(&valid, center, mask.radius() as f64, n_strata)?;
    let total = mask.valid_count();
    if total == 0 {
        return Ok((Vec::new(), strata));
    }

    let mut out: Sample = Vec::with_capacity(sample_size.min(total));
    for stratum in 0..n_strata {
        let members = strata.members(stratum);
        let k = allocation(members.len(), sample_size, total);
        if k == 0 {
            debug!(
                "Stratum {}: {} cells, allocation rounds to zero; skipping.",
                stratum,
                members.len()
            );
            continue;
        }
        if members.len() < k {
            warn!(
                "Stratum {}: allocation {} exceeds its {} cells; skipping.",
                stratum,
                k,
                members.len()
            );
            continue;
        }

        debug!("Stratum {}: drawing {} of {} cells.", stratum, k, members.len());
        out.extend(
            choose_indices(members.len(), k, rng)
                .into_iter()
                .map(|i| valid[members[i]]),
        );
    }

    if out.len() < sample_size {
        debug!(
            "Stratified sample under-filled: {} of {} requested.",
            out.len(),
            sample_size
        );
    }

    Ok((out, strata))
}

/// Radially stratified sampling around the mask's own center.
#[derive(Debug, Clone)]
pub struct StratifiedSampling {
    /// Requested number of cells; the result may be smaller.
    pub count: usize,
    /// Number of radial bands.
    pub strata: usize,
}

impl StratifiedSampling {
    /// Create a sampler with `count` cells over `strata` bands.
    pub fn new(count: usize, strata: usize) -> Self {
        Self { count, strata }
    }
}

impl CellSampling for StratifiedSampling {
    fn sample(&self, mask: &WaferMask, rng: &mut dyn RngCore) -> Result<Sample> {
        sample_stratified(mask, mask.center(), self.count, self.strata, rng).map(|(s, _)| s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::tests::FixedRng;
    use crate::wafer::create_mask;

    fn per_stratum_counts(
        sample: &Sample,
        valid: &[GridCoord],
        strata: &StrataAssignment,
    ) -> Vec<usize> {
        let mut counts = vec![0; strata.n_strata()];
        for c in sample {
            let idx = valid.iter().position(|v| v == c).unwrap();
            counts[strata.stratum_of(idx).unwrap()] += 1;
        }
        counts
    }

    #[test]
    fn rejects_zero_sizes() {
        let (mask, center) = create_mask(5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            sample_stratified(&mask, center, 0, 3, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            sample_stratified(&mask, center, 5, 0, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn floor_allocation_under_fills() {
        // Bands hold [1, 4, 8] cells; 6 of 13 gives floors [0, 1, 3].
        let (mask, center) = create_mask(5).unwrap();
        let valid = mask.valid_coords();
        let mut rng = StdRng::seed_from_u64(11);
        let (sample, strata) = sample_stratified(&mask, center, 6, 3, &mut rng).unwrap();
        assert_eq!(strata.sizes(), vec![1, 4, 8]);
        assert_eq!(sample.len(), 4);
        assert_eq!(per_stratum_counts(&sample, &valid, &strata), vec![0, 1, 3]);
    }

    #[test]
    fn full_request_takes_every_cell_in_band_order() {
        let (mask, center) = create_mask(5).unwrap();
        let mut rng = FixedRng { value: 0 };
        let (sample, _) = sample_stratified(&mask, center, 13, 3, &mut rng).unwrap();
        assert_eq!(sample.len(), 13);
        assert_eq!(sample[0], GridCoord::new(2, 2));
        assert_eq!(
            &sample[1..5],
            &[
                GridCoord::new(1, 2),
                GridCoord::new(2, 1),
                GridCoord::new(2, 3),
                GridCoord::new(3, 2)
            ]
        );
    }

    #[test]
    fn oversized_request_yields_empty_sample() {
        let (mask, center) = create_mask(5).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let (sample, strata) = sample_stratified(&mask, center, 26, 3, &mut rng).unwrap();
        assert!(sample.is_empty());
        assert_eq!(strata.len(), 13);
    }

    #[test]
    fn allocation_matches_floor_per_stratum() {
        let (mask, center) = create_mask(33).unwrap();
        let valid = mask.valid_coords();
        let total = mask.valid_count();
        let n = 120;
        let mut rng = StdRng::seed_from_u64(77);
        let (sample, strata) = sample_stratified(&mask, center, n, 4, &mut rng).unwrap();

        let expected: Vec<usize> = strata
            .sizes()
            .iter()
            .map(|&len| len * n / total)
            .collect();
        assert_eq!(per_stratum_counts(&sample, &valid, &strata), expected);
        assert!(sample.len() <= n);

        let unique: HashSet<_> = sample.iter().collect();
        assert_eq!(unique.len(), sample.len());
        assert!(sample.iter().all(|c| mask.contains(*c)));
    }

    #[test]
    fn determinism_for_same_seed() {
        let (mask, center) = create_mask(25).unwrap();
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let a = sample_stratified(&mask, center, 60, 3, &mut rng_a).unwrap();
        let b = sample_stratified(&mask, center, 60, 3, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn strategy_uses_mask_center() {
        let (mask, center) = create_mask(17).unwrap();
        let s = StratifiedSampling::new(40, 3);
        let mut rng_a = StdRng::seed_from_u64(5);
        let mut rng_b = StdRng::seed_from_u64(5);
        let via_trait = s.sample(&mask, &mut rng_a).unwrap();
        let (direct, _) = sample_stratified(&mask, center, 40, 3, &mut rng_b).unwrap();
        assert_eq!(via_trait, direct);
    }
}
