//! Display sinks for the composed status line.
//!
//! dwm shows the X root window name in its bar, so the `xsetroot` sink sets
//! that name. The stdout sink prints one line per cycle for piping into
//! other bars or for debugging.

use std::io::Write;
use std::process::Command;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::SinkError;

/// Something that makes a status line visible. Each call replaces the
/// previous content.
pub trait StatusSink {
    fn publish(&mut self, status: &str) -> Result<(), SinkError>;
}

impl<T: StatusSink + ?Sized> StatusSink for Box<T> {
    fn publish(&mut self, status: &str) -> Result<(), SinkError> {
        (**self).publish(status)
    }
}

/// Sink selection for config and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Stdout,
    Xsetroot,
}

impl SinkKind {
    pub fn build(self) -> Box<dyn StatusSink> {
        match self {
            SinkKind::Stdout => Box::new(StdoutSink),
            SinkKind::Xsetroot => Box::new(XsetrootSink::default()),
        }
    }
}

/// Writes each status line to stdout.
pub struct StdoutSink;

impl StatusSink for StdoutSink {
    fn publish(&mut self, status: &str) -> Result<(), SinkError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", status)?;
        out.flush()?;
        Ok(())
    }
}

/// Sets the X root window name through `xsetroot -name`.
pub struct XsetrootSink {
    program: String,
}

impl Default for XsetrootSink {
    fn default() -> Self {
        Self {
            program: "xsetroot".to_string(),
        }
    }
}

impl StatusSink for XsetrootSink {
    fn publish(&mut self, status: &str) -> Result<(), SinkError> {
        let exit = Command::new(&self.program).arg("-name").arg(status).status()?;
        if !exit.success() {
            return Err(SinkError::Command {
                program: self.program.clone(),
                status: exit.to_string(),
            });
        }
        Ok(())
    }
}
