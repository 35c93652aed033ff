use crate::estimate::Estimate;

/// What a single run saw and concluded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunStats {
    pub files: u64,
    pub total_size: u64,
    /// Sampling points in the plan.
    pub points: u64,
    /// Files that owned a point but could not be read.
    pub skipped_files: u64,
    /// blake3 of the sample, hex; equal across runs over an unchanged tree.
    pub sample_digest: String,
    pub estimate: Estimate,
}
