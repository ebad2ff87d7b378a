use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use wafer_sampling::prelude::*;
use wafer_sampling_examples::{init_tracing, log_strata};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Size the sample for p = 0.2 within 5% at 95% confidence, then stratify.
    let estimate = SampleSizeEstimate::default().with_proportion(0.2);
    let config = RunConfig::new(41)
        .with_method(SamplingMethod::Stratified { strata: 4 })
        .with_estimated_sample_size(estimate);

    let mut sampler = WaferSampler::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(2025);
    let result = sampler.run(&mut rng)?;

    info!(
        "Requested {} cells, drew {} ({:.1}%).",
        result.requested,
        result.sample.len(),
        result.fill_ratio() * 100.0
    );
    if let Some(strata) = &result.strata {
        log_strata(&result.valid_coords, &result.sample, strata);
    }

    Ok(())
}
