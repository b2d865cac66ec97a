//! Processor count from /proc/cpuinfo.

use std::fs;
use std::path::Path;

use crate::error::SampleError;

/// Every logical CPU block in /proc/cpuinfo starts with this key.
const PROCESSOR_MARKER: &str = "processor";

/// Counts lines beginning with the `processor` key.
pub fn count_processors(content: &str) -> usize {
    content
        .lines()
        .filter(|line| line.starts_with(PROCESSOR_MARKER))
        .count()
}

/// Reads the processor count. A listing without any `processor` line counts
/// as a single core so the load sample is never empty.
pub fn read_processor_count(path: &Path) -> Result<usize, SampleError> {
    let content = fs::read_to_string(path).map_err(|source| SampleError::CpuInfo {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(count_processors(&content).max(1))
}
