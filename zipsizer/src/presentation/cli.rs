use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use zipsizer_core::Algorithm;
use zipsizer_core::config::{DEFAULT_CHUNK_SIZE, DEFAULT_LEVEL, DEFAULT_SAMPLING_RATIO};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Estimate the compressed size of a directory by sampling a fraction of its data",
    long_about = None
)]
pub struct Cli {
    /// Directory to process
    pub directory: PathBuf,

    /// Compression algorithm to use
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Gzip)]
    pub algorithm: AlgorithmArg,

    /// Compression level (1-9 for gzip and bzip2, 1-22 for zstd)
    #[arg(long, default_value_t = DEFAULT_LEVEL, allow_negative_numbers = true)]
    pub level: i32,

    /// Fraction of every chunk to sample, e.g. 0.1 for 10%
    #[arg(long, default_value_t = DEFAULT_SAMPLING_RATIO, allow_negative_numbers = true)]
    pub sampling_ratio: f64,

    /// Bytes between sampling points in the concatenated file stream
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: u64,

    /// Print file counts, sample sizes and intermediate results
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Gzip,
    Bzip2,
    Zstd,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(a: AlgorithmArg) -> Self {
        match a {
            AlgorithmArg::Gzip => Algorithm::Gzip,
            AlgorithmArg::Bzip2 => Algorithm::Bzip2,
            AlgorithmArg::Zstd => Algorithm::Zstd,
        }
    }
}
