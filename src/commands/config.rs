//! Config command implementation.
//!
//! Generates configuration files in various formats.

use std::fs;
use std::path::PathBuf;

use dwm_statusd::cli::ConfigFormat;
use dwm_statusd::config::{render_config, Config};

/// Generates configuration files.
pub fn command_config(
    output: Option<PathBuf>,
    format: ConfigFormat,
    commented: bool,
) -> anyhow::Result<()> {
    let config = Config::default();
    let output = output.unwrap_or_else(|| PathBuf::from("dwm-statusd.yaml"));

    let mut content = render_config(&config, &format).map_err(|e| anyhow::anyhow!("{}", e))?;
    if commented && matches!(format, ConfigFormat::Yaml) {
        content = add_config_comments(content);
    }

    if output.to_string_lossy() == "-" {
        print!("{}", content);
    } else {
        fs::write(&output, content)?;
        println!("✅ Configuration written to: {}", output.display());
    }

    Ok(())
}

/// Adds comments to YAML configuration.
fn add_config_comments(yaml: String) -> String {
    let comments = r#"# dwm-statusd Configuration
# =========================
#
# Inputs
# ------
# proc_root: "/proc"                           # Root of the proc filesystem
# power_supply_dir: "/sys/class/power_supply"  # Battery/AC device directory
#
# Output
# ------
# clock_format: "%a %d %b %Y      %H:%M:%S %Z" # strftime pattern for the clock field
# sink: "xsetroot"                             # xsetroot (dwm bar) or stdout
#
# Logging
# -------
# log_level: "info"                            # off, error, warn, info, debug, trace
#
# The sampling interval (1s) and the status fields are fixed.
"#;

    format!("{comments}\n{yaml}")
}
