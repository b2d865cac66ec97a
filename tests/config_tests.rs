//! Integration tests for configuration loading, merging and validation.

use std::path::PathBuf;

use clap::Parser;
use dwm_statusd::cli::{Args, ConfigFormat};
use dwm_statusd::clock::DEFAULT_CLOCK_FORMAT;
use dwm_statusd::config::{
    load_config, locate_config, parse_config, render_config, resolve_config, validate_effective_config, Config,
};
use dwm_statusd::SinkKind;

#[test]
fn test_defaults_are_valid() {
    let config = Config::default();
    assert!(validate_effective_config(&config).is_ok());

    let paths = config.sys_paths();
    assert_eq!(paths.cpuinfo(), PathBuf::from("/proc/cpuinfo"));
    assert_eq!(paths.netdev(), PathBuf::from("/proc/net/dev"));
    assert_eq!(paths.meminfo(), PathBuf::from("/proc/meminfo"));
    assert_eq!(config.clock_format(), DEFAULT_CLOCK_FORMAT);
    assert_eq!(config.sink(), SinkKind::Xsetroot);
}

#[test]
fn test_parse_yaml_partial() {
    let config = parse_config("sink: stdout\nclock-format: \"%H:%M\"\n", Some("yaml")).unwrap();

    assert_eq!(config.sink(), SinkKind::Stdout);
    assert_eq!(config.clock_format(), "%H:%M");
    // Unset fields fall back to defaults.
    assert_eq!(config.sys_paths().proc_root, PathBuf::from("/proc"));
    assert_eq!(config.log_level(), "info");
}

#[test]
fn test_parse_json_and_toml() {
    let json = parse_config(r#"{"proc_root": "/host/proc", "log_level": "debug"}"#, Some("json"))
        .unwrap();
    assert_eq!(json.sys_paths().proc_root, PathBuf::from("/host/proc"));
    assert_eq!(json.log_level(), "debug");

    let toml = parse_config("power_supply_dir = \"/tmp/ps\"\nsink = \"stdout\"\n", Some("toml"))
        .unwrap();
    assert_eq!(toml.sys_paths().power_supply_dir, PathBuf::from("/tmp/ps"));
    assert_eq!(toml.sink(), SinkKind::Stdout);
}

#[test]
fn test_unknown_sink_rejected() {
    assert!(parse_config("sink: dzen\n", None).is_err());
}

#[test]
fn test_invalid_values_rejected() {
    let bad_clock = Config {
        clock_format: Some("%Q".to_string()),
        ..Config::default()
    };
    assert!(validate_effective_config(&bad_clock).is_err());

    let bad_level = Config {
        log_level: Some("loud".to_string()),
        ..Config::default()
    };
    assert!(validate_effective_config(&bad_level).is_err());

    let empty_root = Config {
        proc_root: Some(PathBuf::new()),
        ..Config::default()
    };
    assert!(validate_effective_config(&empty_root).is_err());
}

#[test]
fn test_cli_overrides_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("dwm-statusd.yaml");
    std::fs::write(&path, "sink: xsetroot\nproc_root: /from/file\nlog_level: warn\n").unwrap();

    let args = Args::parse_from([
        "dwm-statusd",
        "--config",
        path.to_str().unwrap(),
        "--sink",
        "stdout",
        "--log-level",
        "debug",
    ]);
    let config = resolve_config(&args).unwrap();

    assert_eq!(config.sink(), SinkKind::Stdout);
    assert_eq!(config.log_level(), "debug");
    assert_eq!(config.sys_paths().proc_root, PathBuf::from("/from/file"));
}

#[test]
fn test_no_config_ignores_file() {
    let args = Args::parse_from([
        "dwm-statusd",
        "--no-config",
        "--config",
        "/nonexistent/dwm-statusd.yaml",
    ]);
    let config = resolve_config(&args).unwrap();
    assert_eq!(config.sink(), SinkKind::Xsetroot);
}

#[test]
fn test_explicit_missing_file_is_error() {
    assert!(load_config(Some(std::path::Path::new("/nonexistent/dwm-statusd.yaml"))).is_err());
    assert!(locate_config(Some(std::path::Path::new("/nonexistent/dwm-statusd.yaml"))).is_err());
}

#[test]
fn test_explicit_file_is_located() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("dwm-statusd.toml");
    std::fs::write(&path, "sink = \"stdout\"\n").unwrap();

    assert_eq!(locate_config(Some(&path)).unwrap(), Some(path.clone()));
    assert_eq!(load_config(Some(&path)).unwrap().sink(), SinkKind::Stdout);
}

#[test]
fn test_render_round_trips_through_yaml() {
    let rendered = render_config(&Config::default(), &ConfigFormat::Yaml).unwrap();
    let parsed = parse_config(&rendered, Some("yaml")).unwrap();

    assert_eq!(parsed.clock_format(), DEFAULT_CLOCK_FORMAT);
    assert_eq!(parsed.sink(), SinkKind::Xsetroot);
}
