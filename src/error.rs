//! Error types for the sampling pipeline.
//!
//! Every variant of [`SampleError`] is fatal: startup is refused or the
//! publish loop stops, and the process exits. Best-effort reads (power supply files) never produce one.

use std::io;
use std::path::PathBuf;

/// A fatal failure while reading one of the required kernel inputs.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("Failed to read processor listing {path}: {source}")]
    CpuInfo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read network statistics {path}: {source}")]
    NetDev {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid network statistics format at line {line}: {reason}")]
    NetDevFormat { line: usize, reason: String },

    #[error("Failed to read memory info {path}: {source}")]
    MemInfo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid memory info format: {0}")]
    MemInfoFormat(String),

    #[error("getloadavg failed: {0}")]
    LoadAverage(String),

    #[error("{0}")]
    ClockFormat(String),
}

/// Failure to hand a status line to the display sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write status line: {0}")]
    Io(#[from] io::Error),

    #[error("{program} exited with {status}")]
    Command { program: String, status: String },
}
