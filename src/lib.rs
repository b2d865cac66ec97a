//! dwm-statusd library
//!
//! Samples host metrics from kernel text files and composes one status line
//! per second for the dwm bar.
//!
//! # Pipeline
//!
//! - **Discovery**: battery and AC adapter names, found once at startup
//! - **Collectors**: `/proc/cpuinfo`, `getloadavg(3)`, `/proc/net/dev`,
//!   `/proc/meminfo` and `/sys/class/power_supply`
//! - **Rates**: downstream/upstream throughput from the previous network
//!   counters
//! - **Compose**: fixed-order status line
//! - **Publish**: once per interval to a [`StatusSink`]
//!
//! # Usage
//!
//! ```rust,no_run
//! use dwm_statusd::{PublishLoop, StatusContext, StdoutSink, SysPaths};
//!
//! let context = StatusContext::init(SysPaths::default(), "%H:%M:%S")?;
//! let mut publisher = PublishLoop::new(context, StdoutSink);
//!
//! // Five status lines, one per second.
//! publisher.run(Some(5))?;
//! # Ok::<(), dwm_statusd::SampleError>(())
//! ```

pub mod cli;
pub mod clock;
pub mod collectors;
pub mod compose;
pub mod config;
pub mod counters;
pub mod discovery;
pub mod error;
pub mod publish;
pub mod rate;
pub mod sink;
pub mod state;

// Re-export main types for convenience
pub use collectors::{
    BatteryLevel, LoadSample, MemoryUsage, NetworkCounters, PowerState, SupplyStatus, SysPaths,
};
pub use compose::compose;
pub use counters::{CounterStore, NetworkRates};
pub use discovery::{discover, DeviceSet};
pub use error::{SampleError, SinkError};
pub use publish::PublishLoop;
pub use rate::rate;
pub use sink::{SinkKind, StatusSink, StdoutSink, XsetrootSink};
pub use state::{StatusContext, SAMPLE_INTERVAL};
