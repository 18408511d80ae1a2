//! ## loggbok-sink::null
//! The "console does not exist" case as a first-class value: every channel
//! is an explicit no-op.

use crate::OutputSink;

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for NullSink {
    fn message(&self, _text: &str) {}
    fn error(&self, _text: &str) {}
    fn warn(&self, _text: &str) {}
    fn info(&self, _text: &str) {}
    fn trace(&self) {}
}
