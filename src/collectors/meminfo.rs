//! Memory usage from /proc/meminfo.
//!
//! The four keys `MemTotal`, `MemFree`, `Buffers` and `Cached` must appear in
//! that order, each as `<key>: <value> kB`. Other keys in between (such as
//! `MemAvailable`) are skipped. Anything else is a format error.

use std::fs;
use std::path::Path;

use crate::error::SampleError;

const REQUIRED_KEYS: [&str; 4] = ["MemTotal", "MemFree", "Buffers", "Cached"];
const UNIT: &str = "kB";

/// Memory figures in kilobytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub total_kb: u64,
    pub free_kb: u64,
    pub buffers_kb: u64,
    pub cached_kb: u64,
}

impl MemoryUsage {
    /// `(total - free) / total`, always within `[0, 1]`.
    pub fn used_fraction(&self) -> f64 {
        if self.total_kb == 0 {
            return 0.0;
        }
        self.total_kb.saturating_sub(self.free_kb) as f64 / self.total_kb as f64
    }

    /// Used memory as a percentage with two decimals, e.g. `45.00%`.
    pub fn render(&self) -> String {
        format!("{:.2}%", 100.0 * self.used_fraction())
    }
}

/// Parses /proc/meminfo content.
pub fn parse_meminfo(content: &str) -> Result<MemoryUsage, SampleError> {
    let mut values = [0u64; REQUIRED_KEYS.len()];
    let mut found = 0;

    for line in content.lines() {
        if found == REQUIRED_KEYS.len() {
            break;
        }

        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();

        if key == REQUIRED_KEYS[found] {
            values[found] = parse_kb_value(key, rest)?;
            found += 1;
        } else if REQUIRED_KEYS[found + 1..].contains(&key) {
            return Err(SampleError::MemInfoFormat(format!(
                "{} appears before {}",
                key, REQUIRED_KEYS[found]
            )));
        }
    }

    if found < REQUIRED_KEYS.len() {
        return Err(SampleError::MemInfoFormat(format!(
            "missing {}",
            REQUIRED_KEYS[found]
        )));
    }

    let [total_kb, free_kb, buffers_kb, cached_kb] = values;
    if total_kb == 0 {
        return Err(SampleError::MemInfoFormat("MemTotal is zero".to_string()));
    }

    Ok(MemoryUsage {
        total_kb,
        free_kb,
        buffers_kb,
        cached_kb,
    })
}

/// Reads and parses the memory info file.
pub fn read_meminfo(path: &Path) -> Result<MemoryUsage, SampleError> {
    let content = fs::read_to_string(path).map_err(|source| SampleError::MemInfo {
        path: path.to_path_buf(),
        source,
    })?;

    parse_meminfo(&content)
}

/// Parses `"   1234 kB"` strictly: one decimal value followed by the unit.
fn parse_kb_value(key: &str, rest: &str) -> Result<u64, SampleError> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(value), Some(UNIT), None) => value.parse::<u64>().map_err(|e| {
            SampleError::MemInfoFormat(format!("invalid {} value '{}': {}", key, value, e))
        }),
        _ => Err(SampleError::MemInfoFormat(format!(
            "expected '<value> kB' for {}, got '{}'",
            key,
            rest.trim()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_legacy_layout() {
        let content = "MemTotal:        8000000 kB\nMemFree:         4400000 kB\nBuffers:          100000 kB\nCached:          2000000 kB\n";
        let mem = parse_meminfo(content).unwrap();
        assert_eq!(mem.total_kb, 8000000);
        assert_eq!(mem.free_kb, 4400000);
        assert_eq!(mem.buffers_kb, 100000);
        assert_eq!(mem.cached_kb, 2000000);
        assert_eq!(mem.render(), "45.00%");
    }

    #[test]
    fn test_parse_modern_layout_with_memavailable() {
        let content = "\
MemTotal:       16303428 kB
MemFree:         1234567 kB
MemAvailable:    9876543 kB
Buffers:          456789 kB
Cached:          5678901 kB
SwapCached:            0 kB
Active:          6543210 kB
";
        let mem = parse_meminfo(content).unwrap();
        assert_eq!(mem.total_kb, 16303428);
        assert_eq!(mem.cached_kb, 5678901);
    }

    #[test]
    fn test_used_fraction_bounds() {
        let full = MemoryUsage {
            total_kb: 100,
            free_kb: 0,
            buffers_kb: 0,
            cached_kb: 0,
        };
        let empty = MemoryUsage { free_kb: 100, ..full };
        let odd = MemoryUsage { free_kb: 150, ..full };

        assert_eq!(full.used_fraction(), 1.0);
        assert_eq!(empty.used_fraction(), 0.0);
        assert_eq!(odd.used_fraction(), 0.0);
        assert_eq!(full.render(), "100.00%");
        assert_eq!(empty.render(), "0.00%");
    }

    #[test]
    fn test_render_rounds_to_two_decimals() {
        let mem = MemoryUsage {
            total_kb: 3,
            free_kb: 2,
            buffers_kb: 0,
            cached_kb: 0,
        };
        assert_eq!(mem.render(), "33.33%");
    }

    #[test]
    fn test_missing_key_is_error() {
        let content = "MemTotal: 100 kB\nMemFree: 50 kB\nBuffers: 1 kB\n";
        let err = parse_meminfo(content).unwrap_err();
        assert!(err.to_string().contains("missing Cached"));
    }

    #[test]
    fn test_wrong_order_is_error() {
        let content = "MemFree: 50 kB\nMemTotal: 100 kB\nBuffers: 1 kB\nCached: 1 kB\n";
        assert!(matches!(
            parse_meminfo(content),
            Err(SampleError::MemInfoFormat(_))
        ));
    }

    #[test]
    fn test_missing_unit_is_error() {
        let content = "MemTotal: 100\nMemFree: 50 kB\nBuffers: 1 kB\nCached: 1 kB\n";
        assert!(parse_meminfo(content).is_err());
    }

    #[test]
    fn test_zero_total_is_error() {
        let content = "MemTotal: 0 kB\nMemFree: 0 kB\nBuffers: 0 kB\nCached: 0 kB\n";
        assert!(parse_meminfo(content).is_err());
    }

    #[test]
    fn test_empty_is_error() {
        assert!(parse_meminfo("").is_err());
    }
}
