//! Check command implementation.
//!
//! Reads every input once and reports which ones are usable.

use dwm_statusd::collectors::{
    read_load_average, read_meminfo, read_netdev_counters, read_power_state,
    read_processor_count,
};
use dwm_statusd::config::Config;
use dwm_statusd::discover;

/// Validates that all required inputs can be read.
pub fn command_check(config: &Config) -> anyhow::Result<()> {
    println!("🔍 dwm-statusd - Input Check");
    println!("============================");

    let paths = config.sys_paths();
    let mut all_ok = true;

    println!("\n🧮 Processors ({})...", paths.cpuinfo().display());
    let nproc = match read_processor_count(&paths.cpuinfo()) {
        Ok(n) => {
            println!("   ✅ {} processors", n);
            n
        }
        Err(e) => {
            println!("   ❌ {}", e);
            all_ok = false;
            1
        }
    };

    println!("\n📈 Load average...");
    match read_load_average(nproc) {
        Ok(sample) => println!("   ✅ {:?}", sample.values()),
        Err(e) => {
            println!("   ❌ {}", e);
            all_ok = false;
        }
    }

    println!("\n🌐 Network counters ({})...", paths.netdev().display());
    match read_netdev_counters(&paths.netdev()) {
        Ok(counters) => println!(
            "   ✅ received={} bytes, sent={} bytes",
            counters.received_bytes, counters.sent_bytes
        ),
        Err(e) => {
            println!("   ❌ {}", e);
            all_ok = false;
        }
    }

    println!("\n💾 Memory ({})...", paths.meminfo().display());
    match read_meminfo(&paths.meminfo()) {
        Ok(mem) => println!(
            "   ✅ total={} kB, free={} kB, used={}",
            mem.total_kb,
            mem.free_kb,
            mem.render()
        ),
        Err(e) => {
            println!("   ❌ {}", e);
            all_ok = false;
        }
    }

    // Power supply is optional, so it never fails the check.
    println!("\n🔋 Power supply ({})...", paths.power_supply().display());
    let devices = discover(paths.power_supply());
    match &devices.battery {
        Some(battery) => println!("   ✅ Battery: {}", battery),
        None => println!("   ⚠️  No battery found"),
    }
    match &devices.ac_adapter {
        Some(adapter) => println!("   ✅ AC adapter: {}", adapter),
        None => println!("   ⚠️  No AC adapter found"),
    }
    if !devices.is_empty() {
        let power = read_power_state(paths.power_supply(), &devices);
        println!("   ℹ️  Rendered: '{}'", power.render());
    }

    println!("\n📋 Summary:");
    if all_ok {
        println!("   ✅ All required inputs readable");
        Ok(())
    } else {
        println!("   ❌ Some required inputs failed - the sampler would exit");
        std::process::exit(1);
    }
}
