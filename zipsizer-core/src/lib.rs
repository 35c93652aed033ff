#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod error;
pub mod estimate;
pub mod inventory;
pub mod report;
pub mod sample;
pub mod stats;

use std::path::Path;
use tracing::{info, warn};

// Re-exports: stable API surface
pub use codec::Algorithm;
pub use config::EstimateConfig;
pub use estimate::Estimate;
pub use inventory::{FileEntry, Inventory};
pub use sample::{Sample, Sampler};
pub use stats::RunStats;

/// Inventory `root`, sample it, compress the sample and extrapolate.
///
/// The config is validated before the filesystem is touched.
pub fn estimate(root: &Path, cfg: &EstimateConfig) -> error::Result<RunStats> {
    cfg.validate()?;
    let inventory = Inventory::scan(root)?;
    let total_size = inventory.total_size();
    info!(files = inventory.len(), total_size, "scanned {}", root.display());

    let sample = Sampler::from_config(cfg).sample(&inventory);
    if sample.is_empty() && total_size > 0 {
        warn!(
            "nothing sampled: {total_size} bytes is below the first sampling point at {}",
            cfg.chunk_size - cfg.sample_size
        );
    }
    let estimate = estimate::estimate_sample(&sample, total_size, cfg)?;

    Ok(RunStats {
        files: inventory.len() as u64,
        total_size,
        points: sample.points as u64,
        skipped_files: sample.skipped_files as u64,
        sample_digest: sample.digest(),
        estimate,
    })
}
