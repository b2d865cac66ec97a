//! The sampling loop: sample, publish, sleep out the rest of the interval.

use std::thread;
use std::time::Instant;
use tracing::{debug, warn};

use crate::error::SampleError;
use crate::sink::StatusSink;
use crate::state::StatusContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Sampling,
    Idle { cycle_started: Instant },
}

pub struct PublishLoop<S: StatusSink> {
    context: StatusContext,
    sink: S,
    cycles: u64,
}

impl<S: StatusSink> PublishLoop<S> {
    pub fn new(context: StatusContext, sink: S) -> Self {
        Self {
            context,
            sink,
            cycles: 0,
        }
    }

    /// Number of completed cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs until a fatal read error, or until `limit` cycles have been
    /// published. `None` runs forever.
    ///
    /// Sink failures are logged and the loop carries on.
    pub fn run(&mut self, limit: Option<u64>) -> Result<(), SampleError> {
        let interval = self.context.interval();
        let mut state = LoopState::Sampling;

        loop {
            state = match state {
                LoopState::Sampling => {
                    if self.limit_reached(limit) {
                        return Ok(());
                    }
                    let cycle_started = Instant::now();
                    let status = self.context.cycle()?;

                    if let Err(e) = self.sink.publish(&status) {
                        warn!("Failed to publish status line: {}", e);
                    }
                    self.cycles += 1;
                    debug!(
                        cycle = self.cycles,
                        duration_ms = cycle_started.elapsed().as_secs_f64() * 1000.0,
                        "Status published"
                    );

                    if self.limit_reached(limit) {
                        return Ok(());
                    }
                    LoopState::Idle { cycle_started }
                }
                LoopState::Idle { cycle_started } => {
                    thread::sleep(interval.saturating_sub(cycle_started.elapsed()));
                    LoopState::Sampling
                }
            };
        }
    }

    fn limit_reached(&self, limit: Option<u64>) -> bool {
        limit.is_some_and(|max| self.cycles >= max)
    }
}
