//! # loggbok-core
//!
//! Namespaced logging shim: loggers bound to optional namespace strings
//! forward text to a pluggable output sink, with per-namespace (or global)
//! gating of debug messages.
//!
//! The contract throughout is best-effort, never-crash: no logging
//! operation returns a value, fails, or panics. A missing sink or a sink
//! without the relevant channel degrades silently.
//!
//! Basic use:
//!
//! ```
//! use std::sync::Arc;
//! use loggbok_core::Logging;
//! use loggbok_sink::ConsoleSink;
//!
//! let logging = Logging::new(Arc::new(ConsoleSink::new()));
//! let log = logging.logger("engine");
//!
//! log.message("starting");
//! log.debug("not printed");
//! logging.enable_debug("engine");
//! log.debug("printed");
//! ```
//!
//! There is no hierarchy of loggers. Enabling debug output for a name
//! affects exactly the loggers with that name; enabling with
//! [`Logging::enable_debug_all`] affects every logger.

pub mod logger;
pub mod registry;

pub use logger::Logger;
pub use registry::DebugRegistry;

use std::sync::Arc;

use loggbok_sink::OutputSink;

/// Logging context: owns the debug-state registry and the sink reference,
/// and hands out [`Logger`] values bound to them.
///
/// The registry lifecycle belongs to whoever constructs the context,
/// typically the process entry point or an individual test. Contexts are
/// cheap to clone; clones share the same registry and sink.
#[derive(Clone)]
pub struct Logging {
    registry: Arc<DebugRegistry>,
    sink: Option<Arc<dyn OutputSink>>,
}

impl std::fmt::Debug for Logging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logging")
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl Logging {
    /// Creates a context emitting to the given sink.
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self::with_parts(Arc::new(DebugRegistry::new()), Some(sink))
    }

    /// Creates a context with no sink at all. Every logger it hands out is
    /// a total no-op; nothing errors.
    pub fn without_sink() -> Self {
        Self::with_parts(Arc::new(DebugRegistry::new()), None)
    }

    /// Creates a context from an existing registry and optional sink.
    pub fn with_parts(registry: Arc<DebugRegistry>, sink: Option<Arc<dyn OutputSink>>) -> Self {
        Self { registry, sink }
    }

    /// Builds a logger bound to `namespace`.
    pub fn logger(&self, namespace: impl Into<String>) -> Logger {
        Logger::new(
            Some(namespace.into()),
            self.registry.clone(),
            self.sink.clone(),
        )
    }

    /// Builds a logger with no namespace. Its debug output can only be
    /// switched on globally, never by name.
    pub fn anonymous_logger(&self) -> Logger {
        Logger::new(None, self.registry.clone(), self.sink.clone())
    }

    /// Enables debug output for loggers with the given namespace.
    pub fn enable_debug(&self, namespace: &str) {
        self.registry.enable(namespace);
    }

    /// Enables debug output for every logger.
    pub fn enable_debug_all(&self) {
        self.registry.enable_all();
    }

    /// Disables debug output for the given namespace. Idempotent.
    pub fn disable_debug(&self, namespace: &str) {
        self.registry.disable(namespace);
    }

    /// Clears the global debug flag. Namespaces enabled by name stay
    /// active until disabled individually.
    pub fn disable_debug_all(&self) {
        self.registry.disable_all();
    }

    /// The shared registry behind this context.
    pub fn registry(&self) -> &Arc<DebugRegistry> {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loggbok_sink::MemorySink;

    #[test]
    fn test_loggers_share_one_registry() {
        let sink = Arc::new(MemorySink::new());
        let logging = Logging::new(sink.clone());
        let a = logging.logger("a");
        let b = logging.logger("b");

        logging.enable_debug("b");
        a.debug("not printed");
        b.debug("printed");

        let records = sink.take();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "printed");
    }

    #[test]
    fn test_clone_shares_state() {
        let logging = Logging::without_sink();
        let clone = logging.clone();
        clone.enable_debug("x");
        assert!(logging.registry().is_active(Some("x")));
    }
}
