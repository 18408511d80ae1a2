//! ## loggbok-sink::tracing_bridge
//! Sink that forwards each channel onto the matching `tracing` macro, so a
//! process that already runs a `tracing_subscriber` can route shim output
//! through it without a second emission path.

use std::backtrace::Backtrace;

use crate::OutputSink;

/// Sink bridging onto the `tracing` macros.
///
/// Plain messages and info land on `info!`, warnings on `warn!`, errors on
/// `error!`, and `trace()` emits a captured backtrace at `trace!` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for TracingSink {
    fn message(&self, text: &str) {
        tracing::info!("{}", text);
    }

    fn error(&self, text: &str) {
        tracing::error!("{}", text);
    }

    fn warn(&self, text: &str) {
        tracing::warn!("{}", text);
    }

    fn info(&self, text: &str) {
        tracing::info!("{}", text);
    }

    fn trace(&self) {
        let backtrace = Backtrace::force_capture();
        tracing::trace!(backtrace = %backtrace, "stack trace");
    }
}
