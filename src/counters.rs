//! Last-seen network counters, carried from one cycle to the next.

use std::time::Duration;

use crate::collectors::NetworkCounters;
use crate::rate::rate;

/// Formatted downstream and upstream rates for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRates {
    pub downstream: String,
    pub upstream: String,
}

impl NetworkRates {
    pub fn render(&self) -> String {
        format!(
            "Downstream: {}{}Upstream: {}",
            self.downstream,
            crate::compose::FIELD_SEPARATOR,
            self.upstream
        )
    }
}

/// Holds the previous cumulative counters.
#[derive(Debug, Clone, Default)]
pub struct CounterStore {
    previous: NetworkCounters,
}

impl CounterStore {
    pub fn new(initial: NetworkCounters) -> Self {
        Self { previous: initial }
    }

    pub fn previous(&self) -> NetworkCounters {
        self.previous
    }

    /// Computes the rates against the stored counters, then stores `current`.
    pub fn advance(&mut self, current: NetworkCounters, elapsed: Duration) -> NetworkRates {
        let rates = NetworkRates {
            downstream: rate(self.previous.received_bytes, current.received_bytes, elapsed),
            upstream: rate(self.previous.sent_bytes, current.sent_bytes, elapsed),
        };
        self.previous = current;
        rates
    }
}
