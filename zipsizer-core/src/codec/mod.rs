use crate::error::Result;
use std::fmt;
use std::io::{Read, Write};
use std::ops::RangeInclusive;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Gzip,
    Bzip2,
    Zstd,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Gzip, Algorithm::Bzip2, Algorithm::Zstd];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Gzip => "gzip",
            Algorithm::Bzip2 => "bzip2",
            Algorithm::Zstd => "zstd",
        }
    }

    /// Levels accepted by the backing library.
    pub fn level_range(self) -> RangeInclusive<i32> {
        match self {
            Algorithm::Gzip | Algorithm::Bzip2 => 1..=9,
            Algorithm::Zstd => 1..=22,
        }
    }

    pub fn compressor(self) -> Box<dyn Compressor> {
        match self {
            Algorithm::Gzip => Box::new(gzip::GzipCompressor),
            Algorithm::Bzip2 => Box::new(bzip2c::Bzip2Compressor),
            Algorithm::Zstd => Box::new(zstdc::ZstdCompressor),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait Compressor: Send + Sync {
    /// Compress all of `src` into `dst`; returns the number of uncompressed bytes consumed.
    fn compress(&self, src: &mut dyn Read, dst: &mut dyn Write, level: i32) -> Result<u64>;
}

/// Write sink that only counts bytes written
#[derive(Debug, Default)]
pub struct CountingWriter {
    n: u64,
}

impl CountingWriter {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn count(&self) -> u64 {
        self.n
    }
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.n += buf.len() as u64;
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Compress `data` and return only the compressed length.
pub fn compressed_len(data: &[u8], algorithm: Algorithm, level: i32) -> Result<u64> {
    let mut sink = CountingWriter::new();
    algorithm
        .compressor()
        .compress(&mut &data[..], &mut sink, level)?;
    Ok(sink.count())
}

pub mod bzip2c;
pub mod gzip;
pub mod zstdc;

#[cfg(test)]
mod tests {
    use super::*;

    fn repetitive() -> Vec<u8> {
        b"the quick brown fox jumps over the lazy dog. "
            .iter()
            .copied()
            .cycle()
            .take(64 * 1024)
            .collect()
    }

    #[test]
    fn every_algorithm_shrinks_repetitive_input() {
        let data = repetitive();
        for algo in Algorithm::ALL {
            let n = compressed_len(&data, algo, 9).unwrap();
            assert!(n > 0, "{algo} produced no output");
            assert!((n as usize) < data.len() / 4, "{algo}: {n} bytes");
        }
    }

    #[test]
    fn counting_writer_tracks_total() {
        let mut w = CountingWriter::new();
        w.write_all(b"abc").unwrap();
        w.write_all(b"defgh").unwrap();
        assert_eq!(w.count(), 8);
    }
}
