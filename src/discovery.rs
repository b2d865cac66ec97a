//! Battery and AC adapter discovery under /sys/class/power_supply.
//!
//! Runs once at startup. Devices plugged in later are not picked up.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const BATTERY_PREFIX: &str = "BAT";
pub const AC_ADAPTER_PREFIX: &str = "AC";

/// Power supply devices found at startup. `None` disables that part of the
/// battery field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceSet {
    pub battery: Option<String>,
    pub ac_adapter: Option<String>,
}

impl DeviceSet {
    pub fn is_empty(&self) -> bool {
        self.battery.is_none() && self.ac_adapter.is_none()
    }
}

/// Scans `dir` for the first `BAT*` and first `AC*` entry.
///
/// Entries are visited in name order, so `BAT0` wins over `BAT1`. An
/// unreadable directory yields an empty set.
pub fn discover(dir: &Path) -> DeviceSet {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Power supply directory {} unavailable: {}", dir.display(), e);
            return DeviceSet::default();
        }
    };

    let mut names: Vec<String> = entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();

    let devices = select_devices(names.iter().map(String::as_str));

    info!(
        "Power supply devices: battery={:?}, ac_adapter={:?}",
        devices.battery, devices.ac_adapter
    );
    devices
}

/// Picks the first battery and first AC adapter name in iteration order.
pub fn select_devices<'a>(names: impl IntoIterator<Item = &'a str>) -> DeviceSet {
    let mut devices = DeviceSet::default();

    for name in names {
        if devices.battery.is_none() && name.starts_with(BATTERY_PREFIX) {
            devices.battery = Some(name.to_string());
        }
        if devices.ac_adapter.is_none() && name.starts_with(AC_ADAPTER_PREFIX) {
            devices.ac_adapter = Some(name.to_string());
        }
    }

    devices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let devices = select_devices(["AC", "BAT0", "BAT1"]);
        assert_eq!(devices.battery.as_deref(), Some("BAT0"));
        assert_eq!(devices.ac_adapter.as_deref(), Some("AC"));
    }

    #[test]
    fn test_iteration_order_decides() {
        let devices = select_devices(["BAT1", "BAT0"]);
        assert_eq!(devices.battery.as_deref(), Some("BAT1"));
        assert!(devices.ac_adapter.is_none());
    }

    #[test]
    fn test_unrelated_entries_ignored() {
        let devices = select_devices(["hidpp_battery_0", "ucsi-source-psy-USBC000:001"]);
        assert!(devices.is_empty());
    }

    #[test]
    fn test_missing_directory_is_empty() {
        assert!(discover(Path::new("/nonexistent/power_supply")).is_empty());
    }
}
