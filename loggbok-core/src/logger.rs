//! ## loggbok-core::logger
//! Logger handles. A logger is an immutable value: an optional namespace,
//! a shared registry handle, and an optional sink reference resolved once
//! when the logger is built. All dynamic behavior (is debug on?) is read
//! from the registry at call time, never cached on the handle.

use std::sync::Arc;

use loggbok_sink::OutputSink;

use crate::registry::DebugRegistry;

/// Named (or anonymous) logging handle.
///
/// Every operation is infallible and returns nothing: a missing sink, or a
/// sink without the relevant channel, degrades to a silent no-op. Handles
/// are cheap to clone and hold no resources.
#[derive(Clone)]
pub struct Logger {
    namespace: Option<String>,
    registry: Arc<DebugRegistry>,
    sink: Option<Arc<dyn OutputSink>>,
}

impl Logger {
    pub(crate) fn new(
        namespace: Option<String>,
        registry: Arc<DebugRegistry>,
        sink: Option<Arc<dyn OutputSink>>,
    ) -> Self {
        Self {
            namespace,
            registry,
            sink,
        }
    }

    /// The namespace this logger was built with, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Emits plain message text.
    pub fn message(&self, text: &str) {
        if let Some(sink) = &self.sink {
            sink.message(text);
        }
    }

    /// Emits error text, on the sink's error channel if it has one.
    pub fn error(&self, text: &str) {
        if let Some(sink) = &self.sink {
            sink.error(text);
        }
    }

    /// Emits warning text, on the sink's warning channel if it has one.
    pub fn warn(&self, text: &str) {
        if let Some(sink) = &self.sink {
            sink.warn(text);
        }
    }

    /// Emits informational text, on the sink's info channel if it has one.
    pub fn info(&self, text: &str) {
        if let Some(sink) = &self.sink {
            sink.info(text);
        }
    }

    /// Emits a stack trace if the sink supports one. Sinks without a trace
    /// channel emit nothing here; there is no plain-message fallback.
    pub fn trace(&self) {
        if let Some(sink) = &self.sink {
            sink.trace();
        }
    }

    /// Emits message text only while debug output is active for this
    /// logger's namespace. The registry is consulted on every call, so
    /// enables and disables take effect immediately.
    pub fn debug(&self, text: &str) {
        if self.registry.is_active(self.namespace.as_deref()) {
            self.message(text);
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("namespace", &self.namespace)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
