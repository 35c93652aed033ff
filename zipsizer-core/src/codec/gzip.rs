use super::Compressor;
use crate::error::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

/// DEFLATE inside a gzip container, as `gzip -N` would produce.
pub struct GzipCompressor;

impl Compressor for GzipCompressor {
    fn compress(&self, src: &mut dyn Read, dst: &mut dyn Write, level: i32) -> Result<u64> {
        let mut enc = GzEncoder::new(dst, Compression::new(level.clamp(1, 9) as u32));
        let consumed = std::io::copy(src, &mut enc)?;
        enc.finish()?;
        Ok(consumed)
    }
}
