use tracing::info;
use wafer_sampling::prelude::*;
use wafer_sampling_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Common survey settings: confidence, expected proportion, margin of error.
    let settings = [
        (0.90, 0.5, 0.05),
        (0.95, 0.5, 0.05),
        (0.95, 0.2, 0.05),
        (0.99, 0.5, 0.03),
    ];

    for (confidence, p, margin) in settings {
        let z = critical_value(confidence)?;
        let n = estimate_sample_size(confidence, p, margin)?;
        info!("confidence {confidence:.2} | p {p:.2} | E {margin:.2} | z {z:.6} -> n = {n}");
    }

    Ok(())
}
