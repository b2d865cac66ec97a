//! Loop-scoped sampling state.
//!
//! Everything that outlives a single cycle (discovered devices, processor
//! count, previous network counters) lives in [`StatusContext`], owned by the
//! publish loop.

use std::time::Duration;
use tracing::{debug, info};

use crate::clock;
use crate::collectors::{
    read_load_average, read_meminfo, read_netdev_counters, read_power_state,
    read_processor_count, SysPaths,
};
use crate::compose::compose;
use crate::counters::CounterStore;
use crate::discovery::{discover, DeviceSet};
use crate::error::SampleError;

/// Fixed time between cycles. Rates assume exactly this much time passed.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

pub struct StatusContext {
    paths: SysPaths,
    devices: DeviceSet,
    processor_count: usize,
    counters: CounterStore,
    clock_format: String,
    interval: Duration,
}

impl StatusContext {
    /// Checks the clock pattern, counts processors, discovers power supply
    /// devices and takes the first network reading so the first cycle has a
    /// baseline.
    pub fn init(paths: SysPaths, clock_format: impl Into<String>) -> Result<Self, SampleError> {
        let clock_format = clock_format.into();
        clock::validate_clock_format(&clock_format).map_err(SampleError::ClockFormat)?;

        let processor_count = read_processor_count(&paths.cpuinfo())?;
        let devices = discover(paths.power_supply());
        let baseline = read_netdev_counters(&paths.netdev())?;

        info!(
            "Sampler initialized: {} processors, baseline rx={} tx={}",
            processor_count, baseline.received_bytes, baseline.sent_bytes
        );

        Ok(Self {
            paths,
            devices,
            processor_count,
            counters: CounterStore::new(baseline),
            clock_format,
            interval: SAMPLE_INTERVAL,
        })
    }

    /// Uses a different nominal interval for rate computation.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn devices(&self) -> &DeviceSet {
        &self.devices
    }

    pub fn processor_count(&self) -> usize {
        self.processor_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn counters(&self) -> &CounterStore {
        &self.counters
    }

    /// Reads every input once and composes the status line.
    pub fn cycle(&mut self) -> Result<String, SampleError> {
        self.cycle_at(&clock::now(&self.clock_format))
    }

    /// Same as [`cycle`](Self::cycle) with a pre-rendered clock field.
    pub fn cycle_at(&mut self, time: &str) -> Result<String, SampleError> {
        let load = read_load_average(self.processor_count)?;
        let power = read_power_state(self.paths.power_supply(), &self.devices);
        let current = read_netdev_counters(&self.paths.netdev())?;
        let memory = read_meminfo(&self.paths.meminfo())?;

        let rates = self.counters.advance(current, self.interval);
        debug!(
            rx = current.received_bytes,
            tx = current.sent_bytes,
            downstream = %rates.downstream,
            upstream = %rates.upstream,
            "Network counters sampled"
        );

        Ok(compose(&load, &power, time, &rates.render(), &memory.render()))
    }
}
