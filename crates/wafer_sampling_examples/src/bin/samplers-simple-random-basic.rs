use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use wafer_sampling::prelude::*;
use wafer_sampling_examples::{init_tracing, log_sample};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let (mask, center) = create_mask(33)?;
    info!(
        "Wafer {}x{} centered at {:?} with {} valid cells.",
        mask.size(),
        mask.size(),
        center,
        mask.valid_count()
    );

    // Uniform draw without replacement; the same seed reproduces the sample.
    let mut rng = StdRng::seed_from_u64(2025);
    let sample = sample_srs(&mask, 50, &mut rng)?;
    log_sample("Simple random sample", &sample);

    Ok(())
}
