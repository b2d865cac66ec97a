//! Transfer rates from pairs of cumulative byte counters.

use std::time::Duration;

/// Rates at or above this many KB/s are shown in MB/s.
const MB_THRESHOLD_KB: f64 = 1024.0;

/// Formats the rate between two cumulative counter readings.
///
/// A counter that went backwards (interface reset or wrap) counts as no
/// traffic. `elapsed` is the nominal sampling interval.
pub fn rate(previous: u64, current: u64, elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return render_rate(0.0);
    }

    let delta = current.saturating_sub(previous);
    render_rate(delta as f64 / 1024.0 / secs)
}

/// Renders a KB/s figure, switching to MB/s with three decimals at 1024 KB/s.
pub fn render_rate(kb_per_sec: f64) -> String {
    if kb_per_sec >= MB_THRESHOLD_KB {
        format!("{:.3} MB/s", kb_per_sec / 1024.0)
    } else {
        format!("{:.2} KB/s", kb_per_sec)
    }
}
