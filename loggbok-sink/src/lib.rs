//! # loggbok-sink
//!
//! Output-sink abstraction for the loggbok logging shim.
//!
//! A sink is the destination that actually renders emitted text. Loggers
//! never talk to stdout, stderr, or a subscriber directly; they hold an
//! optional sink reference and forward each emission to the matching
//! channel. A sink implements only the channels it supports: `error`,
//! `warn`, and `info` fall back to the plain-message channel unless
//! overridden, and `trace` is a no-op unless overridden. Missing
//! capabilities degrade silently, never to an error.
//!
//! ### Provided sinks:
//! - `console`: stdout/stderr emission with backtrace-based `trace`
//! - `memory`: in-memory capture, used by tests
//! - `null`: explicit no-op for every channel
//! - `tracing_bridge`: forwards channels onto the `tracing` macros

pub mod console;
pub mod memory;
pub mod null;
pub mod tracing_bridge;

pub use console::ConsoleSink;
pub use memory::{Channel, MemorySink, Record};
pub use null::NullSink;
pub use tracing_bridge::TracingSink;

/// Destination for emitted log text.
///
/// `message` is the only required channel. The default methods encode the
/// fallback rules: `error`, `warn`, and `info` degrade to `message`, while
/// `trace` degrades to nothing at all. No method returns a value or fails;
/// a sink that cannot write must swallow the failure.
pub trait OutputSink: Send + Sync {
    /// Emits plain message text.
    fn message(&self, text: &str);

    /// Emits error text. Falls back to the plain-message channel.
    fn error(&self, text: &str) {
        self.message(text);
    }

    /// Emits warning text. Falls back to the plain-message channel.
    fn warn(&self, text: &str) {
        self.message(text);
    }

    /// Emits informational text. Falls back to the plain-message channel.
    fn info(&self, text: &str) {
        self.message(text);
    }

    /// Emits a stack trace. No fallback: sinks without a trace channel
    /// emit nothing here, not even via `message`.
    fn trace(&self) {}
}
