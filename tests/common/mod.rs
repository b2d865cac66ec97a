//! Fake /proc and /sys/class/power_supply trees for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use dwm_statusd::SysPaths;
use tempfile::TempDir;

pub const NETDEV_HEADER: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
";

pub const MEMINFO: &str = "\
MemTotal:        8000000 kB
MemFree:         4400000 kB
MemAvailable:    6000000 kB
Buffers:          100000 kB
Cached:          2000000 kB
SwapCached:            0 kB
";

pub const CPUINFO: &str = "\
processor\t: 0
model name\t: Test CPU

processor\t: 1
model name\t: Test CPU
";

pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// Two processors, loopback plus eth0 at zero, and the meminfo above.
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("tempdir"),
        };
        fs::create_dir_all(fixture.proc_root().join("net")).unwrap();
        fs::create_dir_all(fixture.power_supply_dir()).unwrap();

        fixture.write_proc("cpuinfo", CPUINFO);
        fixture.write_proc("meminfo", MEMINFO);
        fixture.set_netdev(0, 0);
        fixture
    }

    pub fn proc_root(&self) -> PathBuf {
        self.dir.path().join("proc")
    }

    pub fn power_supply_dir(&self) -> PathBuf {
        self.dir.path().join("power_supply")
    }

    pub fn paths(&self) -> SysPaths {
        SysPaths::new(self.proc_root(), self.power_supply_dir())
    }

    pub fn write_proc(&self, name: &str, content: &str) {
        fs::write(self.proc_root().join(name), content).unwrap();
    }

    pub fn remove_proc(&self, name: &str) {
        fs::remove_file(self.proc_root().join(name)).unwrap();
    }

    /// Rewrites /proc/net/dev with constant loopback traffic and the given
    /// eth0 byte counters.
    pub fn set_netdev(&self, eth0_rx: u64, eth0_tx: u64) {
        let mut content = NETDEV_HEADER.to_string();
        content.push_str(
            "    lo: 9999999   100    0    0    0     0          0         0  9999999     100    0    0    0     0       0          0\n",
        );
        content.push_str(&format!(
            "  eth0: {}    10    0    0    0     0          0         0  {}      10    0    0    0     0       0          0\n",
            eth0_rx, eth0_tx
        ));
        fs::write(self.proc_root().join("net").join("dev"), content).unwrap();
    }

    /// Creates a power supply device directory with the given attribute files.
    pub fn add_device(&self, name: &str, attributes: &[(&str, &str)]) {
        let dir = self.power_supply_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        for (attr, value) in attributes {
            fs::write(dir.join(attr), format!("{}\n", value)).unwrap();
        }
    }
}
