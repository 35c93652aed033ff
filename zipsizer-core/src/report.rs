use crate::estimate::Estimate;
use std::fmt;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// 1024-based, two decimals: `1536.0` becomes `"1.50 KB"`.
pub fn human_readable_size(size: f64) -> String {
    let mut size = size;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.2} PB")
}

const RULE: &str =
    "---------------------------------------------------------------------------------";

/// Console report for a finished estimate.
pub struct Report<'a>(pub &'a Estimate);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.0;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Original size: {} bytes ({})",
            e.original_size,
            human_readable_size(e.original_size as f64)
        )?;
        writeln!(
            f,
            "Estimated compressed size: {:.2} bytes ({})",
            e.estimated_total,
            human_readable_size(e.estimated_total)
        )?;
        match e.ratio() {
            Some(r) => writeln!(f, "Compression ratio: {r:.2}")?,
            None => writeln!(f, "Compression ratio: n/a (nothing was sampled)")?,
        }
        write!(f, "{RULE}")
    }
}
