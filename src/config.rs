//! Configuration management for dwm-statusd.
//!
//! This module handles loading, merging, and validating configuration from files
//! and CLI arguments. It supports YAML, JSON, and TOML formats.
//!
//! The sampling interval and the set of status fields are not configurable.

use crate::cli::{Args, ConfigFormat};
use crate::clock::{validate_clock_format, DEFAULT_CLOCK_FORMAT};
use crate::collectors::{SysPaths, DEFAULT_POWER_SUPPLY_DIR, DEFAULT_PROC_ROOT};
use crate::sink::SinkKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_LOCATIONS: [&str; 6] = [
    "/etc/dwm-statusd/dwm-statusd.yaml",
    "/etc/dwm-statusd/dwm-statusd.yml",
    "/etc/dwm-statusd/dwm-statusd.json",
    "./dwm-statusd.yaml",
    "./dwm-statusd.yml",
    "./dwm-statusd.json",
];

/// Effective configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(alias = "proc-root")]
    pub proc_root: Option<PathBuf>,
    #[serde(alias = "power-supply-dir")]
    pub power_supply_dir: Option<PathBuf>,

    #[serde(alias = "clock-format")]
    pub clock_format: Option<String>,

    pub sink: Option<SinkKind>,

    // Logging
    #[serde(alias = "log-level")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proc_root: Some(PathBuf::from(DEFAULT_PROC_ROOT)),
            power_supply_dir: Some(PathBuf::from(DEFAULT_POWER_SUPPLY_DIR)),
            clock_format: Some(DEFAULT_CLOCK_FORMAT.to_string()),
            sink: Some(SinkKind::Xsetroot),
            log_level: Some("info".into()),
        }
    }
}

impl Config {
    pub fn sys_paths(&self) -> SysPaths {
        SysPaths::new(
            self.proc_root
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROC_ROOT)),
            self.power_supply_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_POWER_SUPPLY_DIR)),
        )
    }

    pub fn clock_format(&self) -> &str {
        self.clock_format.as_deref().unwrap_or(DEFAULT_CLOCK_FORMAT)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn sink(&self) -> SinkKind {
        self.sink.unwrap_or(SinkKind::Xsetroot)
    }
}

/// Validate effective config (used by --check-config and at startup)
pub fn validate_effective_config(cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    validate_clock_format(cfg.clock_format())?;

    if cfg
        .proc_root
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        return Err("proc_root must not be empty".into());
    }
    if cfg
        .power_supply_dir
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        return Err("power_supply_dir must not be empty".into());
    }

    if let Some(level) = cfg.log_level.as_deref() {
        match level {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(format!(
                    "Invalid log_level '{}', expected off, error, warn, info, debug or trace",
                    other
                )
                .into());
            }
        }
    }

    Ok(())
}

/// Resolves configuration from CLI args, config file, and defaults.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        load_config(args.config.as_deref())?
    };

    if let Some(proc_root) = &args.proc_root {
        config.proc_root = Some(proc_root.clone());
    }
    if let Some(dir) = &args.power_supply_dir {
        config.power_supply_dir = Some(dir.clone());
    }
    if let Some(pattern) = &args.clock_format {
        config.clock_format = Some(pattern.clone());
    }
    if let Some(sink) = args.sink {
        config.sink = Some(sink);
    }
    if let Some(level) = &args.log_level {
        config.log_level = Some(level.as_str().to_string());
    }

    Ok(config)
}

/// Finds the config file to load.
///
/// Without an explicit path the first existing default location is used;
/// `None` means no file exists and the defaults apply. An explicit path that
/// does not exist is an error.
pub fn locate_config(path: Option<&Path>) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    match path {
        Some(p) if !p.exists() => Err(format!("Config file not found: {}", p.display()).into()),
        Some(p) => Ok(Some(p.to_path_buf())),
        None => Ok(DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(Path::new)
            .find(|p| p.exists())
            .map(Path::to_path_buf)),
    }
}

/// Configuration loading with multiple format support.
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let Some(path) = locate_config(path)? else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&path)?;
    parse_config(&content, path.extension().and_then(|s| s.to_str()))
}

/// Parses config text, picking the format from the file extension.
pub fn parse_config(
    content: &str,
    extension: Option<&str>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let config: Config = match extension {
        Some("json") => serde_json::from_str(content)?,
        Some("toml") => toml::from_str(content)?,
        // Default to YAML
        _ => serde_yaml::from_str(content)?,
    };
    Ok(config)
}

/// Serializes configuration in the requested format
pub fn render_config(
    config: &Config,
    format: &ConfigFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let output = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };
    Ok(output)
}

/// Shows configuration in requested format
pub fn show_config(config: &Config, format: &ConfigFormat) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_config(config, format)?);
    Ok(())
}
