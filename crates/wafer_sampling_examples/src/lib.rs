#![forbid(unsafe_code)]

use tracing::info;
use tracing_subscriber::EnvFilter;
use wafer_sampling::prelude::*;

/// Install a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Log the coordinates of a sample, one line per cell.
pub fn log_sample(label: &str, sample: &[GridCoord]) {
    info!("{label}: {} cells.", sample.len());
    for (i, c) in sample.iter().enumerate() {
        info!("  #{i:<4} row {:>3}  col {:>3}", c.row, c.col);
    }
}

/// Log how many cells each stratum holds and how many were drawn from it.
pub fn log_strata(valid: &[GridCoord], sample: &[GridCoord], strata: &StrataAssignment) {
    let sizes = strata.sizes();
    let mut drawn = vec![0usize; strata.n_strata()];
    for c in sample {
        if let Ok(idx) = valid.binary_search(c) {
            if let Some(s) = strata.stratum_of(idx) {
                drawn[s] += 1;
            }
        }
    }
    let edges = strata.edges();
    for (s, (size, d)) in sizes.iter().zip(&drawn).enumerate() {
        info!(
            "Stratum {s}: r in [{:.2}, {:.2}] | {size} cells | drew {d}.",
            edges[s],
            edges[s + 1]
        );
    }
}
