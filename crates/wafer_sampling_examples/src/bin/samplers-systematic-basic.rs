use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use wafer_sampling::prelude::*;
use wafer_sampling_examples::{init_tracing, log_sample};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let (mask, _) = create_mask(33)?;
    let count = 40usize;
    let interval = mask.valid_count() / count;
    info!(
        "{} valid cells, every {}-th cell after a random start.",
        mask.valid_count(),
        interval
    );

    let mut rng = StdRng::seed_from_u64(7);
    let sample = SystematicSampling::new(count).sample(&mask, &mut rng)?;
    log_sample("Systematic sample", &sample);

    Ok(())
}
