//! ## loggbok-sink::memory
//! Capture sink that records every emission in memory. The workspace's
//! tests assert against its records; embedders can use it the same way to
//! inspect what a component logged.

use parking_lot::Mutex;

use crate::OutputSink;

/// Channel an emission arrived on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Message,
    Error,
    Warn,
    Info,
    Trace,
}

/// One captured emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub channel: Channel,
    pub text: String,
}

/// In-memory sink implementing every channel.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, channel: Channel, text: &str) {
        self.records.lock().push(Record {
            channel,
            text: text.to_string(),
        });
    }

    /// Returns a copy of everything captured so far.
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Drains and returns everything captured so far.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl OutputSink for MemorySink {
    fn message(&self, text: &str) {
        self.push(Channel::Message, text);
    }

    fn error(&self, text: &str) {
        self.push(Channel::Error, text);
    }

    fn warn(&self, text: &str) {
        self.push(Channel::Warn, text);
    }

    fn info(&self, text: &str) {
        self.push(Channel::Info, text);
    }

    fn trace(&self) {
        self.push(Channel::Trace, "");
    }
}
