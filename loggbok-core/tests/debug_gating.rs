//! End-to-end behavior of the logging context: debug enable/disable
//! lifecycle and channel fallbacks, observed through a capture sink.

use std::sync::Arc;

use loggbok_core::Logging;
use loggbok_sink::{Channel, MemorySink, OutputSink};

/// Sink implementing only the plain-message channel; error/warn/info fall
/// back to it and trace disappears.
struct PlainOnlySink(MemorySink);

impl OutputSink for PlainOnlySink {
    fn message(&self, text: &str) {
        self.0.message(text);
    }
}

#[test]
fn test_debug_enable_disable_lifecycle() {
    let sink = Arc::new(MemorySink::new());
    let logging = Logging::new(sink.clone());
    let log = logging.logger("A");

    // Before any enable: silence.
    log.debug("x");
    assert!(sink.is_empty());

    // Named enable: the message comes out on the plain path.
    logging.enable_debug("A");
    log.debug("x");
    let records = sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].channel, Channel::Message);
    assert_eq!(records[0].text, "x");

    // Global disable does not revoke the named enable.
    logging.enable_debug_all();
    logging.disable_debug_all();
    log.debug("still on");
    assert_eq!(sink.take().len(), 1);

    // Named disable finally stops it.
    logging.disable_debug("A");
    log.debug("off");
    assert!(sink.is_empty());
}

#[test]
fn test_global_enable_reaches_unseen_and_anonymous_loggers() {
    let sink = Arc::new(MemorySink::new());
    let logging = Logging::new(sink.clone());

    logging.enable_debug_all();
    logging.logger("never-enabled-by-name").debug("one");
    logging.anonymous_logger().debug("two");

    let texts: Vec<_> = sink.take().into_iter().map(|r| r.text).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[test]
fn test_error_falls_back_to_plain_channel() {
    let sink = Arc::new(PlainOnlySink(MemorySink::new()));
    let logging = Logging::new(sink.clone() as Arc<dyn OutputSink>);

    logging.anonymous_logger().error("boom");

    let records = sink.0.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].channel, Channel::Message);
    assert_eq!(records[0].text, "boom");
}

#[test]
fn test_trace_without_capability_emits_nothing() {
    let sink = Arc::new(PlainOnlySink(MemorySink::new()));
    let logging = Logging::new(sink.clone() as Arc<dyn OutputSink>);

    logging.anonymous_logger().trace();

    assert!(sink.0.is_empty());
}

#[test]
fn test_absent_sink_never_panics() {
    let logging = Logging::without_sink();
    logging.enable_debug_all();
    let log = logging.logger("a");
    log.message("m");
    log.error("e");
    log.warn("w");
    log.info("i");
    log.trace();
    log.debug("d");
}
