//! Network interface byte counters from /proc/net/dev.
//!
//! The file has two header lines followed by one line per interface:
//!
//! ```text
//! Inter-|   Receive                                                |  Transmit
//!  face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
//!   eth0: 1234567    8910    0    0    0     0          0         0  7654321    1098    0    0    0     0       0          0
//! ```
//!
//! Only the receive and transmit byte columns are used; they are summed over
//! every interface except loopback.

use std::fs;
use std::path::Path;

use crate::error::SampleError;

const HEADER_LINES: usize = 2;
const LOOPBACK_INTERFACE: &str = "lo";

/// Field positions after the `iface:` prefix.
const RX_BYTES_FIELD: usize = 0;
const TX_BYTES_FIELD: usize = 8;
/// 8 receive columns + 8 transmit columns.
const FIELD_COUNT: usize = 16;

/// Cumulative byte counters summed over all non-loopback interfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkCounters {
    pub received_bytes: u64,
    pub sent_bytes: u64,
}

/// Parses /proc/net/dev content into summed counters.
pub fn parse_netdev(content: &str) -> Result<NetworkCounters, SampleError> {
    let mut totals = NetworkCounters::default();

    for (idx, line) in content.lines().enumerate() {
        // Skip the first two header lines
        if idx < HEADER_LINES || line.trim().is_empty() {
            continue;
        }

        let line_no = idx + 1;
        let (interface, stats_str) = line
            .split_once(':')
            .ok_or_else(|| format_error(line_no, "missing ':' after interface name"))?;

        if interface.trim() == LOOPBACK_INTERFACE {
            continue;
        }

        let values: Vec<&str> = stats_str.split_whitespace().collect();
        if values.len() < FIELD_COUNT {
            return Err(format_error(
                line_no,
                &format!("expected {} fields, got {}", FIELD_COUNT, values.len()),
            ));
        }

        let rx = parse_field(values[RX_BYTES_FIELD], line_no, "receive bytes")?;
        let tx = parse_field(values[TX_BYTES_FIELD], line_no, "transmit bytes")?;

        totals.received_bytes = totals.received_bytes.saturating_add(rx);
        totals.sent_bytes = totals.sent_bytes.saturating_add(tx);
    }

    Ok(totals)
}

/// Reads and sums the non-loopback counters from the given file.
pub fn read_netdev_counters(path: &Path) -> Result<NetworkCounters, SampleError> {
    let content = fs::read_to_string(path).map_err(|source| SampleError::NetDev {
        path: path.to_path_buf(),
        source,
    })?;

    parse_netdev(&content)
}

fn parse_field(value: &str, line: usize, name: &str) -> Result<u64, SampleError> {
    value
        .parse::<u64>()
        .map_err(|e| format_error(line, &format!("invalid {} '{}': {}", name, value, e)))
}

fn format_error(line: usize, reason: &str) -> SampleError {
    SampleError::NetDevFormat {
        line,
        reason: reason.to_string(),
    }
}
