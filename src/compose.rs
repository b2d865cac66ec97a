//! Assembly of the status line.
//!
//! Field order and separators are fixed:
//!
//! ```text
//! {time}; Battery: {power}      {net}      Memory: {mem}      CPU: {load}
//! ```

use crate::collectors::{format_load, LoadSample, PowerState};

/// Gap between status fields.
pub const FIELD_SEPARATOR: &str = "      ";

/// Builds one status line from already-rendered fields.
pub fn compose(load: &LoadSample, power: &PowerState, time: &str, net: &str, mem: &str) -> String {
    let mut line = String::with_capacity(128);
    line.push_str(time);
    line.push_str("; Battery: ");
    line.push_str(&power.render());
    line.push_str(FIELD_SEPARATOR);
    line.push_str(net);
    line.push_str(FIELD_SEPARATOR);
    line.push_str("Memory: ");
    line.push_str(mem);
    line.push_str(FIELD_SEPARATOR);
    line.push_str("CPU: ");
    line.push_str(&format_load(load));
    line
}
