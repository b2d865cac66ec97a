//! Readers for the kernel inputs the status line is built from.
//!
//! Each collector pairs a pure `parse_*` function over the file contents with
//! a `read_*` wrapper that takes the path. Paths are resolved against
//! [`SysPaths`] so a fixture tree can stand in for `/proc` and `/sys`.

use std::path::{Path, PathBuf};

pub mod cpuinfo;
pub mod loadavg;
pub mod meminfo;
pub mod netdev;
pub mod power;

pub use cpuinfo::{count_processors, read_processor_count};
pub use loadavg::{format_load, read_load_average, LoadSample};
pub use meminfo::{parse_meminfo, read_meminfo, MemoryUsage};
pub use netdev::{parse_netdev, read_netdev_counters, NetworkCounters};
pub use power::{read_power_state, BatteryLevel, PowerState, SupplyStatus};

pub const DEFAULT_PROC_ROOT: &str = "/proc";
pub const DEFAULT_POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";

/// Locations of the kernel-exposed inputs.
#[derive(Debug, Clone)]
pub struct SysPaths {
    pub proc_root: PathBuf,
    pub power_supply_dir: PathBuf,
}

impl SysPaths {
    pub fn new(proc_root: impl Into<PathBuf>, power_supply_dir: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
            power_supply_dir: power_supply_dir.into(),
        }
    }

    pub fn cpuinfo(&self) -> PathBuf {
        self.proc_root.join("cpuinfo")
    }

    pub fn netdev(&self) -> PathBuf {
        self.proc_root.join("net").join("dev")
    }

    pub fn meminfo(&self) -> PathBuf {
        self.proc_root.join("meminfo")
    }

    pub fn power_supply(&self) -> &Path {
        &self.power_supply_dir
    }
}

impl Default for SysPaths {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT, DEFAULT_POWER_SUPPLY_DIR)
    }
}
