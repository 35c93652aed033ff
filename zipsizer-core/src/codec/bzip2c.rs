use super::Compressor;
use crate::error::Result;
use bzip2::Compression;
use bzip2::write::BzEncoder;
use std::io::{Read, Write};

pub struct Bzip2Compressor;

impl Compressor for Bzip2Compressor {
    fn compress(&self, src: &mut dyn Read, dst: &mut dyn Write, level: i32) -> Result<u64> {
        let mut enc = BzEncoder::new(dst, Compression::new(level.clamp(1, 9) as u32));
        let consumed = std::io::copy(src, &mut enc)?;
        enc.finish()?;
        Ok(consumed)
    }
}
