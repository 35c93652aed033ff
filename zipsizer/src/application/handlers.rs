use std::io::Write;
use std::path::PathBuf;

use zipsizer_core::error::Result;
use zipsizer_core::report::{Report, human_readable_size};
use zipsizer_core::{Algorithm, EstimateConfig, RunStats, estimate};

pub fn handle_estimate(
    directory: PathBuf,
    algorithm: Algorithm,
    level: i32,
    sampling_ratio: f64,
    chunk_size: u64,
    verbose: bool,
) -> Result<()> {
    let cfg = EstimateConfig::new(algorithm, level, sampling_ratio, chunk_size)?;
    let stats = estimate(&directory, &cfg)?;

    let mut out = std::io::stdout().lock();
    if verbose {
        write_details(&mut out, &cfg, &stats)?;
    }
    writeln!(out, "{}", Report(&stats.estimate))?;
    Ok(())
}

fn write_details(
    out: &mut impl Write,
    cfg: &EstimateConfig,
    stats: &RunStats,
) -> std::io::Result<()> {
    let e = &stats.estimate;
    writeln!(out, "Total number of files: {}", stats.files)?;
    writeln!(
        out,
        "Total size of files: {} bytes ({})",
        stats.total_size,
        human_readable_size(stats.total_size as f64)
    )?;
    writeln!(
        out,
        "Sampling {} bytes from every {} bytes of data ({:.1}%, {} sampling points).",
        cfg.sample_size,
        cfg.chunk_size,
        cfg.sampling_ratio() * 100.0,
        stats.points
    )?;
    if stats.skipped_files > 0 {
        writeln!(out, "Files skipped due to read errors: {}", stats.skipped_files)?;
    }
    writeln!(
        out,
        "Compressed sample size: {} bytes ({}) using {} level {}",
        e.compressed_sample_len,
        human_readable_size(e.compressed_sample_len as f64),
        cfg.algorithm,
        cfg.level
    )?;
    writeln!(
        out,
        "Original sample size: {} bytes ({})",
        e.sample_len,
        human_readable_size(e.sample_len as f64)
    )?;
    if let Some(savings) = e.space_savings() {
        writeln!(out, "Estimated space savings: {:.2}%", savings * 100.0)?;
    }
    writeln!(out, "Sample digest (blake3): {}", stats.sample_digest)
}
