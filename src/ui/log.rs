//! Verbosity-gated diagnostics on stderr.
//!
//! stdout carries command results (text or NDJSON); everything written here
//! goes to stderr so it never mixes into machine output.

use std::io::{self, Write};

use circle_lab::Verbosity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    level: Verbosity,
}

impl Logger {
    pub fn new(level: Verbosity) -> Self {
        Self { level }
    }

    /// Shown unless `verbosity = "quiet"`
    pub fn info(&self, msg: impl AsRef<str>) {
        self.log(Verbosity::Normal, msg.as_ref());
    }

    /// Shown with `-v` or `verbosity = "verbose"`
    pub fn verbose(&self, msg: impl AsRef<str>) {
        self.log(Verbosity::Verbose, msg.as_ref());
    }

    /// Shown with `-vv` or `verbosity = "debug"`
    pub fn debug(&self, msg: impl AsRef<str>) {
        self.log(Verbosity::Debug, msg.as_ref());
    }

    fn log(&self, at: Verbosity, msg: &str) {
        let mut err = io::stderr().lock();
        let _ = self.write_to(&mut err, at, msg);
    }

    pub(crate) fn write_to(&self, out: &mut impl Write, at: Verbosity, msg: &str) -> io::Result<()> {
        if !self.enabled(at) {
            return Ok(());
        }
        match at {
            Verbosity::Debug => writeln!(out, "[debug] {}", msg),
            _ => writeln!(out, "{}", msg),
        }
    }

    pub fn enabled(&self, at: Verbosity) -> bool {
        self.level >= at
    }
}
