//! Load averages via getloadavg(3).

use crate::error::SampleError;

/// getloadavg(3) never reports more than the 1, 5 and 15 minute averages.
const MAX_LOADAVG_SAMPLES: usize = 3;

/// One load value per detected processor.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSample(pub Vec<f64>);

impl LoadSample {
    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

/// Queries the kernel load averages and sizes the result to `nproc`.
///
/// Only the first three entries can carry a value; the rest are `0.0`.
pub fn read_load_average(nproc: usize) -> Result<LoadSample, SampleError> {
    let mut values = vec![0.0_f64; nproc.max(1)];
    let requested = values.len().min(MAX_LOADAVG_SAMPLES);

    // SAFETY: `values` holds at least `requested` initialized f64 slots and
    // getloadavg writes at most `requested` of them.
    let got = unsafe { libc::getloadavg(values.as_mut_ptr(), requested as libc::c_int) };
    if got < 0 {
        return Err(SampleError::LoadAverage(format!(
            "requested {} samples, call returned {}",
            requested, got
        )));
    }

    values.truncate(nproc.max(1));
    Ok(LoadSample(values))
}

/// Renders the sample as space-separated values with two decimals.
pub fn format_load(sample: &LoadSample) -> String {
    sample
        .values()
        .iter()
        .map(|v| format!("{:.2}", v))
        .collect::<Vec<_>>()
        .join(" ")
}
