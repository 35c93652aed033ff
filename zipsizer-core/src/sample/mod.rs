//! Virtual offset sampling.
//!
//! Files are treated as one contiguous stream in inventory order. The plan
//! picks points in that stream; each point is resolved to the file whose
//! virtual range `[start, start + size)` contains it and up to `sample_size`
//! bytes are read from there.

pub mod plan;

use crate::config::EstimateConfig;
use crate::error::ReadRangeError;
use crate::inventory::{FileEntry, Inventory};
use plan::{PlanCursor, SamplingPlan};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use tracing::{debug, warn};

/// One resolved read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    pub file_index: usize,
    pub virtual_offset: u64,
    pub file_offset: u64,
    pub len: u64,
}

#[derive(Clone, Debug, Default)]
pub struct Sample {
    pub data: Vec<u8>,
    pub windows: Vec<Window>,
    pub points: usize,
    /// Files that intersected the plan but failed to read.
    pub skipped_files: usize,
}

impl Sample {
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// blake3 of the sampled bytes, hex encoded.
    pub fn digest(&self) -> String {
        hex::encode(blake3::hash(&self.data).as_bytes())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Sampler {
    chunk_size: u64,
    sample_size: u64,
}

impl Sampler {
    pub fn new(chunk_size: u64, sample_size: u64) -> Self {
        Self {
            chunk_size,
            sample_size,
        }
    }

    pub fn from_config(cfg: &EstimateConfig) -> Self {
        Self::new(cfg.chunk_size, cfg.sample_size)
    }

    pub fn plan(&self, inventory: &Inventory) -> SamplingPlan {
        SamplingPlan::new(inventory.total_size(), self.chunk_size, self.sample_size)
    }

    /// Read every window of the plan into one buffer, opening each file at
    /// most once and only when it owns at least one point.
    pub fn sample(&self, inventory: &Inventory) -> Sample {
        let plan = self.plan(inventory);
        let mut cursor = plan.cursor();
        let mut out = Sample {
            points: plan.len(),
            ..Default::default()
        };

        let mut current_offset = 0u64;
        for (file_index, entry) in inventory.entries().iter().enumerate() {
            let end = current_offset + entry.size;
            let owns_point = matches!(cursor.peek(), Some(p) if p < end);

            if owns_point {
                if let Err(e) =
                    self.read_file(file_index, entry, current_offset, &mut cursor, &mut out)
                {
                    warn!("{e}");
                    out.skipped_files += 1;
                    // the failed file still owns its points
                    while cursor.next_within(current_offset, end).is_some() {}
                }
            }

            current_offset = end;
            if cursor.peek().is_none() {
                break;
            }
        }

        debug!(
            points = out.points,
            windows = out.windows.len(),
            bytes = out.data.len(),
            skipped = out.skipped_files,
            "sampling complete"
        );
        out
    }

    fn read_file(
        &self,
        file_index: usize,
        entry: &FileEntry,
        start: u64,
        cursor: &mut PlanCursor<'_>,
        out: &mut Sample,
    ) -> Result<(), ReadRangeError> {
        let wrap = |e| ReadRangeError::new(&entry.path, e);
        let mut f = File::open(&entry.path).map_err(wrap)?;
        self.read_windows(&mut f, file_index, entry.size, start, cursor, out)
            .map_err(wrap)
    }

    /// Read every point of `cursor` that lies in `[start, start + size)`.
    /// A window that fails partway leaves no bytes behind; earlier windows
    /// of the same file are kept.
    fn read_windows<R: Read + Seek>(
        &self,
        src: &mut R,
        file_index: usize,
        size: u64,
        start: u64,
        cursor: &mut PlanCursor<'_>,
        out: &mut Sample,
    ) -> std::io::Result<()> {
        while let Some(p) = cursor.next_within(start, start + size) {
            let file_offset = p - start;
            // never read past the size recorded at inventory time
            let want = self.sample_size.min(size - file_offset);
            let before = out.data.len();
            let read = src
                .seek(SeekFrom::Start(file_offset))
                .and_then(|_| (&mut *src).take(want).read_to_end(&mut out.data));
            match read {
                Ok(n) => out.windows.push(Window {
                    file_index,
                    virtual_offset: p,
                    file_offset,
                    len: n as u64,
                }),
                Err(e) => {
                    out.data.truncate(before);
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}
