/// Ascending virtual offsets at which a window of `sample_size` bytes is
/// taken: the last `sample_size` bytes of every `chunk_size` chunk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SamplingPlan {
    points: Vec<u64>,
}

impl SamplingPlan {
    /// Points `i*chunk_size - sample_size` for `i = 1, 2, ...` while below
    /// `total_size`. Callers guarantee `0 < sample_size <= chunk_size`.
    pub fn new(total_size: u64, chunk_size: u64, sample_size: u64) -> Self {
        debug_assert!(chunk_size > 0 && sample_size > 0 && sample_size <= chunk_size);
        let first = chunk_size - sample_size;
        let points = if first < total_size {
            (first..total_size).step_by(chunk_size as usize).collect()
        } else {
            Vec::new()
        };
        Self { points }
    }

    pub fn points(&self) -> &[u64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cursor(&self) -> PlanCursor<'_> {
        PlanCursor {
            points: &self.points,
            next: 0,
        }
    }
}

/// Forward-only view over a plan; each point is handed out once.
#[derive(Debug)]
pub struct PlanCursor<'a> {
    points: &'a [u64],
    next: usize,
}

impl PlanCursor<'_> {
    pub fn peek(&self) -> Option<u64> {
        self.points.get(self.next).copied()
    }

    /// Next point if it falls in `[start, end)`, consuming it.
    pub fn next_within(&mut self, start: u64, end: u64) -> Option<u64> {
        match self.peek() {
            Some(p) if start <= p && p < end => {
                self.next += 1;
                Some(p)
            }
            _ => None,
        }
    }

    pub fn consumed(&self) -> usize {
        self.next
    }
}
