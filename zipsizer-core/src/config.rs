use crate::codec::Algorithm;
use crate::error::{Result, SizerError};

pub const DEFAULT_CHUNK_SIZE: u64 = 10 * 1024 * 1024;
pub const DEFAULT_SAMPLING_RATIO: f64 = 0.1;
pub const DEFAULT_LEVEL: i32 = 9;

/// Everything the sampler and estimator need to know about a run.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimateConfig {
    pub algorithm: Algorithm,
    pub level: i32,
    /// Distance between consecutive sampling points in the virtual stream.
    pub chunk_size: u64,
    /// Bytes read at each sampling point (the tail of every chunk).
    pub sample_size: u64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            level: DEFAULT_LEVEL,
            chunk_size: DEFAULT_CHUNK_SIZE,
            sample_size: sample_size_for(DEFAULT_SAMPLING_RATIO, DEFAULT_CHUNK_SIZE),
        }
    }
}

/// `round(ratio * chunk_size)`, never below one byte.
fn sample_size_for(ratio: f64, chunk_size: u64) -> u64 {
    ((ratio * chunk_size as f64).round() as u64).clamp(1, chunk_size.max(1))
}

impl EstimateConfig {
    /// Build and validate a config from user-facing knobs. Nothing touches the
    /// filesystem here.
    pub fn new(
        algorithm: Algorithm,
        level: i32,
        sampling_ratio: f64,
        chunk_size: u64,
    ) -> Result<Self> {
        if !(sampling_ratio > 0.0 && sampling_ratio <= 1.0) {
            return Err(SizerError::Config(format!(
                "sampling ratio must be in (0, 1], got {sampling_ratio}"
            )));
        }
        let cfg = Self {
            algorithm,
            level,
            chunk_size,
            sample_size: sample_size_for(sampling_ratio, chunk_size),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let range = self.algorithm.level_range();
        if !range.contains(&self.level) {
            return Err(SizerError::Config(format!(
                "compression level for {} must be between {} and {}, got {}",
                self.algorithm,
                range.start(),
                range.end(),
                self.level
            )));
        }
        if self.chunk_size == 0 {
            return Err(SizerError::Config("chunk size must be greater than zero".into()));
        }
        if self.sample_size == 0 || self.sample_size > self.chunk_size {
            return Err(SizerError::Config(format!(
                "sample size must be in 1..={}, got {}",
                self.chunk_size, self.sample_size
            )));
        }
        Ok(())
    }

    pub fn sampling_ratio(&self) -> f64 {
        self.sample_size as f64 / self.chunk_size as f64
    }
}
