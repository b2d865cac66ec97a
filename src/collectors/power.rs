//! Battery charge and AC adapter state from /sys/class/power_supply.
//!
//! Every file here is optional. A missing or unparsable file reads as zero
//! and the rest of the status line is unaffected.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::discovery::DeviceSet;

const CHARGE_NOW: &str = "charge_now";
const ENERGY_NOW: &str = "energy_now";
const CHARGE_FULL: &str = "charge_full";
const ENERGY_FULL: &str = "energy_full";
const ONLINE: &str = "online";

/// AC adapter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyStatus {
    Plugged,
    Unplugged,
    /// No AC adapter was discovered.
    Unknown,
}

impl SupplyStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            SupplyStatus::Plugged => "P",
            SupplyStatus::Unplugged => "U",
            SupplyStatus::Unknown => "",
        }
    }
}

/// Charge level of the discovered battery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BatteryLevel {
    /// Percentage of full capacity, within `[0, 100]`.
    Level(f64),
    /// Full capacity read as zero, so no percentage can be computed.
    NoCapacity,
}

impl BatteryLevel {
    pub fn from_charge(now: u64, full: u64) -> Self {
        match charge_percentage(now, full) {
            Some(pct) => BatteryLevel::Level(pct),
            None => BatteryLevel::NoCapacity,
        }
    }

    pub fn render(&self) -> String {
        match self {
            BatteryLevel::Level(pct) => format!("{:.2} % ", pct),
            BatteryLevel::NoCapacity => "0.0 % ".to_string(),
        }
    }
}

/// Battery and AC state for one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerState {
    /// `None` when no battery was discovered.
    pub battery: Option<BatteryLevel>,
    pub supply: SupplyStatus,
}

impl PowerState {
    /// Renders the battery level followed by `P`/`U` for the AC adapter.
    /// Either part is omitted when its device is absent.
    pub fn render(&self) -> String {
        let mut out = self
            .battery
            .map(|level| level.render())
            .unwrap_or_default();
        out.push_str(self.supply.symbol());
        out
    }
}

/// Charge as a percentage of full capacity, `None` when capacity is zero.
pub fn charge_percentage(now: u64, full: u64) -> Option<f64> {
    if full == 0 {
        return None;
    }
    Some((now as f64 * 100.0 / full as f64).clamp(0.0, 100.0))
}

/// Reads the current power state for the discovered devices.
pub fn read_power_state(dir: &Path, devices: &DeviceSet) -> PowerState {
    let battery = devices.battery.as_deref().map(|battery| {
        let battery_dir = dir.join(battery);
        let now = read_first_value(&battery_dir, &[CHARGE_NOW, ENERGY_NOW]);
        let full = read_first_value(&battery_dir, &[CHARGE_FULL, ENERGY_FULL]);
        BatteryLevel::from_charge(now, full)
    });

    let supply = match devices.ac_adapter.as_deref() {
        Some(adapter) => match read_sysfs_value(&dir.join(adapter).join(ONLINE)) {
            Some(online) if online != 0 => SupplyStatus::Plugged,
            _ => SupplyStatus::Unplugged,
        },
        None => SupplyStatus::Unknown,
    };

    PowerState { battery, supply }
}

/// Returns the value of the first readable file among `names`, or 0.
fn read_first_value(dir: &Path, names: &[&str]) -> u64 {
    names
        .iter()
        .find_map(|name| read_sysfs_value(&dir.join(name)))
        .unwrap_or(0)
}

/// Reads a single integer sysfs attribute.
fn read_sysfs_value(path: &Path) -> Option<u64> {
    match fs::read_to_string(path) {
        Ok(content) => match content.trim().parse::<u64>() {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Unparsable value in {}: {}", path.display(), e);
                None
            }
        },
        Err(e) => {
            debug!("Cannot read {}: {}", path.display(), e);
            None
        }
    }
}
