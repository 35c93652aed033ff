use crate::codec::compressed_len;
use crate::config::EstimateConfig;
use crate::error::Result;
use crate::sample::Sample;
use tracing::debug;

/// Linear projection of the sample's compressibility onto the whole tree.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Estimate {
    pub original_size: u64,
    pub sample_len: u64,
    pub compressed_sample_len: u64,
    pub estimated_total: f64,
}

impl Estimate {
    pub fn extrapolate(original_size: u64, sample_len: u64, compressed_sample_len: u64) -> Self {
        let estimated_total = if original_size == 0 || sample_len == 0 {
            0.0
        } else {
            compressed_sample_len as f64 / sample_len as f64 * original_size as f64
        };
        Self {
            original_size,
            sample_len,
            compressed_sample_len,
            estimated_total,
        }
    }

    /// `original / estimated`, undefined for an empty sample.
    pub fn ratio(&self) -> Option<f64> {
        (self.estimated_total > 0.0).then(|| self.original_size as f64 / self.estimated_total)
    }

    /// Fraction of the original size saved by compressing.
    pub fn space_savings(&self) -> Option<f64> {
        (self.estimated_total > 0.0)
            .then(|| 1.0 - self.estimated_total / self.original_size as f64)
    }
}

/// Compress the sample once and project the result onto `original_size`.
pub fn estimate_sample(
    sample: &Sample,
    original_size: u64,
    cfg: &EstimateConfig,
) -> Result<Estimate> {
    let compressed = compressed_len(&sample.data, cfg.algorithm, cfg.level)?;
    debug!(
        algorithm = %cfg.algorithm,
        level = cfg.level,
        sample = sample.len(),
        compressed,
        "sample compressed"
    );
    Ok(Estimate::extrapolate(original_size, sample.len(), compressed))
}
