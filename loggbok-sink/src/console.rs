//! ## loggbok-sink::console
//! Sink that writes to the process console: plain messages and info lines
//! go to stdout, errors and warnings to stderr, and `trace` renders a
//! captured backtrace on stderr. Write failures are discarded; a broken
//! pipe must never take the caller down.

use std::backtrace::Backtrace;
use std::io::Write;

use crate::OutputSink;

/// Console-backed sink implementing every channel.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    fn write_stdout(text: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{text}");
    }

    fn write_stderr(text: &str) {
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        let _ = writeln!(handle, "{text}");
    }
}

impl OutputSink for ConsoleSink {
    fn message(&self, text: &str) {
        Self::write_stdout(text);
    }

    fn error(&self, text: &str) {
        Self::write_stderr(text);
    }

    fn warn(&self, text: &str) {
        Self::write_stderr(text);
    }

    fn info(&self, text: &str) {
        Self::write_stdout(text);
    }

    fn trace(&self) {
        // Frame detail follows RUST_BACKTRACE; force_capture still yields
        // a rendering when the variable is unset.
        let backtrace = Backtrace::force_capture();
        Self::write_stderr(&format!("stack trace:\n{backtrace}"));
    }
}
