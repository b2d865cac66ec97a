//! Test command implementation.
//!
//! Runs a few sampling cycles and prints each status line.

use std::time::Instant;

use dwm_statusd::config::Config;
use dwm_statusd::{PublishLoop, StatusContext, StdoutSink};

/// Runs `iterations` cycles against stdout.
pub fn command_test(iterations: u64, config: &Config) -> anyhow::Result<()> {
    println!("🧪 dwm-statusd - Test Mode");
    println!("==========================");

    let context = StatusContext::init(config.sys_paths(), config.clock_format())?;
    println!(
        "   🧮 {} processors, battery={:?}, ac_adapter={:?}\n",
        context.processor_count(),
        context.devices().battery,
        context.devices().ac_adapter
    );

    let start = Instant::now();
    let mut publisher = PublishLoop::new(context, StdoutSink);
    publisher.run(Some(iterations))?;

    println!(
        "\n   ⏱️  {} cycles in {:.2}s",
        publisher.cycles(),
        start.elapsed().as_secs_f64()
    );
    println!("✅ Test completed successfully");
    Ok(())
}
