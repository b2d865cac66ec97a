//! dwm-statusd - version 0.1.0
//!
//! Status line sampler with tracing logging.
//! This is the main entry point that initializes the sampler and handles subcommands.

mod commands;

use clap::Parser;
use tracing::{error, info, Level};

use commands::{command_check, command_config, command_test};
use dwm_statusd::cli::{Args, Commands};
use dwm_statusd::config::{
    locate_config, resolve_config, show_config, validate_effective_config, Config,
};
use dwm_statusd::{PublishLoop, StatusContext};

/// Initializes tracing logging subsystem with configured log level.
fn setup_logging(config: &Config) {
    if config.log_level() == "off" {
        return;
    }

    let log_level = match config.log_level() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    // stdout may be the status sink, so logs go to stderr.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    info!("Logging initialized with level: {}", config.log_level());
}

/// Helper function to load and validate configuration.
/// Exits the process with error code 1 if validation fails.
fn load_validated_config(args: &Args) -> anyhow::Result<Config> {
    let config = resolve_config(args).map_err(|e| anyhow::anyhow!("{}", e))?;
    if let Err(e) = validate_effective_config(&config) {
        eprintln!("❌ Configuration invalid: {}", e);
        std::process::exit(1);
    }
    Ok(config)
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Early config resolution for show/check modes
    if args.show_config || args.check_config {
        let config = load_validated_config(&args)?;

        if args.check_config {
            println!("✅ Configuration is valid");
            return Ok(());
        }

        return show_config(&config, &args.config_format).map_err(|e| anyhow::anyhow!("{}", e));
    }

    let config = load_validated_config(&args)?;
    setup_logging(&config);

    if !args.no_config {
        match locate_config(args.config.as_deref()) {
            Ok(Some(path)) => info!("Loaded configuration from: {}", path.display()),
            _ => info!("No config file found, using defaults"),
        }
    }

    if let Some(command) = &args.command {
        return match command {
            Commands::Check => command_check(&config),
            Commands::Config {
                output,
                format,
                commented,
            } => command_config(output.clone(), format.clone(), *commented),
            Commands::Test { iterations } => command_test(*iterations, &config),
        };
    }

    info!("Starting dwm-statusd with sink {:?}", config.sink());

    let context = match StatusContext::init(config.sys_paths(), config.clock_format()) {
        Ok(context) => context,
        Err(e) => {
            error!("❌ Startup failed: {}", e);
            std::process::exit(1);
        }
    };

    let mut publisher = PublishLoop::new(context, config.sink().build());
    if let Err(e) = publisher.run(None) {
        error!("❌ Sampling failed after {} cycles: {}", publisher.cycles(), e);
        std::process::exit(1);
    }

    Ok(())
}
