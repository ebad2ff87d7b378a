use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wafer_sampling::prelude::*;

fn lattice_points_within(k: i64) -> usize {
    (-k..=k)
        .flat_map(|x| (-k..=k).map(move |y| (x, y)))
        .filter(|(x, y)| x * x + y * y <= k * k)
        .count()
}

proptest! {
    #[test]
    fn prop_mask_counts_lattice_points(k in 0usize..25) {
        let (mask, center) = create_mask(2 * k + 1).unwrap();
        prop_assert_eq!(center, GridCoord::new(k, k));
        prop_assert_eq!(mask.valid_count(), lattice_points_within(k as i64));
    }

    #[test]
    fn prop_srs_returns_exact_distinct_valid_cells(
        k in 1usize..15,
        frac in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let (mask, _) = create_mask(2 * k + 1).unwrap();
        let total = mask.valid_count();
        let n = ((total as f64 * frac) as usize).clamp(1, total);
        let mut rng = StdRng::seed_from_u64(seed);

        let sample = sample_srs(&mask, n, &mut rng).unwrap();
        prop_assert_eq!(sample.len(), n);
        prop_assert!(sample.iter().all(|c| mask.contains(*c)));
        let unique: HashSet<_> = sample.iter().collect();
        prop_assert_eq!(unique.len(), n);
    }

    #[test]
    fn prop_srs_rejects_oversized_requests(k in 0usize..10, extra in 1usize..50) {
        let (mask, _) = create_mask(2 * k + 1).unwrap();
        let total = mask.valid_count();
        let mut rng = StdRng::seed_from_u64(0);
        let err = sample_srs(&mask, total + extra, &mut rng).unwrap_err();
        prop_assert!(err.is_invalid_argument());
    }

    #[test]
    fn prop_systematic_spacing(k in 1usize..15, n in 1usize..40, seed in any::<u64>()) {
        let (mask, _) = create_mask(2 * k + 1).unwrap();
        let valid = mask.valid_coords();
        prop_assume!(n <= valid.len());
        let interval = valid.len() / n;
        let mut rng = StdRng::seed_from_u64(seed);

        let sample = sample_systematic(&mask, n, &mut rng).unwrap();
        prop_assert!(sample.len() <= n);
        let positions: Vec<usize> = sample
            .iter()
            .map(|c| valid.binary_search(c).unwrap())
            .collect();
        prop_assert!(positions[0] < interval);
        prop_assert!(positions.windows(2).all(|w| w[1] - w[0] == interval));
    }

    #[test]
    fn prop_stratified_floor_allocation(
        k in 1usize..15,
        n in 1usize..200,
        strata in 1usize..6,
        seed in any::<u64>(),
    ) {
        let (mask, center) = create_mask(2 * k + 1).unwrap();
        let valid = mask.valid_coords();
        let total = mask.valid_count();
        let mut rng = StdRng::seed_from_u64(seed);

        let (sample, assignment) = sample_stratified(&mask, center, n, strata, &mut rng).unwrap();
        prop_assert!(sample.len() <= n);

        let mut counts = vec![0usize; strata];
        for c in &sample {
            let idx = valid.binary_search(c).unwrap();
            counts[assignment.stratum_of(idx).unwrap()] += 1;
        }
        let expected: Vec<usize> = assignment
            .sizes()
            .iter()
            .map(|&len| {
                let alloc = len * n / total;
                if alloc <= len { alloc } else { 0 }
            })
            .collect();
        prop_assert_eq!(counts, expected);

        let unique: HashSet<_> = sample.iter().collect();
        prop_assert_eq!(unique.len(), sample.len());
    }

    #[test]
    fn prop_same_seed_same_sample(k in 1usize..12, seed in any::<u64>()) {
        let (mask, center) = create_mask(2 * k + 1).unwrap();
        let n = mask.valid_count() / 2 + 1;

        let a = sample_srs(&mask, n, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = sample_srs(&mask, n, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);

        let a = sample_stratified(&mask, center, n, 3, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = sample_stratified(&mask, center, n, 3, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn estimate_feeds_sampler() {
    let n = estimate_sample_size(0.95, 0.5, 0.05).unwrap();
    assert_eq!(n, 385);

    // 33x33 wafer holds 797 cells.
    let (mask, _) = create_mask(33).unwrap();
    assert!(mask.valid_count() >= n);
    let mut rng = StdRng::seed_from_u64(2025);
    let sample = sample_srs(&mask, n, &mut rng).unwrap();
    assert_eq!(sample.len(), n);
}
