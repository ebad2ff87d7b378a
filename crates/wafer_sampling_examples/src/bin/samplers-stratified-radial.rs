use rand::rngs::StdRng;
use rand::SeedableRng;
use wafer_sampling::prelude::*;
use wafer_sampling_examples::{init_tracing, log_sample, log_strata};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let (mask, center) = create_mask(33)?;
    let valid = mask.valid_coords();

    // Five radial bands; each receives floor(|band| * n / total) cells.
    let mut rng = StdRng::seed_from_u64(42);
    let (sample, strata) = sample_stratified(&mask, center, 120, 5, &mut rng)?;

    log_strata(&valid, &sample, &strata);
    log_sample("Stratified sample", &sample);

    Ok(())
}
