//! CLI command implementations for dwm-statusd.
//!
//! This module provides implementations for all CLI subcommands:
//! - `check`: Input validation
//! - `config`: Configuration file generation
//! - `test`: A few sampling cycles printed to the terminal

pub mod check;
pub mod config;
pub mod test;

// Re-export command functions
pub use check::command_check;
pub use config::command_config;
pub use test::command_test;
