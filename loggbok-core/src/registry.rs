//! ## loggbok-core::registry
//! Debug-state registry: tracks which namespaces (or all of them) have
//! debug output enabled. An explicitly constructed value shared between
//! loggers, never a process global, so each test and each embedding owns
//! its own lifecycle.
//!
//! Matching is flat. Enabling "engine.io" says nothing about
//! "engine.io.sub"; only an exact string match or the global flag
//! activates a namespace.

use std::collections::HashSet;

use parking_lot::RwLock;

#[derive(Debug, Default)]
struct State {
    all: bool,
    namespaces: HashSet<String>,
}

/// Shared record of which loggers currently emit debug output.
///
/// A namespace is active iff the global flag is set or the namespace was
/// enabled by exact name. All operations are idempotent and infallible.
#[derive(Debug, Default)]
pub struct DebugRegistry {
    state: RwLock<State>,
}

impl DebugRegistry {
    /// Creates a registry with nothing enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables debug output for one namespace.
    pub fn enable(&self, namespace: &str) {
        self.state.write().namespaces.insert(namespace.to_string());
    }

    /// Enables debug output for every logger, named or not.
    pub fn enable_all(&self) {
        self.state.write().all = true;
    }

    /// Disables debug output for one namespace. No-op if it was never
    /// enabled. Does not touch the global flag.
    pub fn disable(&self, namespace: &str) {
        self.state.write().namespaces.remove(namespace);
    }

    /// Clears the global flag. Namespaces enabled by name stay active.
    pub fn disable_all(&self) {
        self.state.write().all = false;
    }

    /// Whether debug output is active for the given namespace. `None`
    /// (an anonymous logger) is active only under the global flag.
    pub fn is_active(&self, namespace: Option<&str>) -> bool {
        let state = self.state.read();
        state.all
            || namespace
                .map(|ns| state.namespaces.contains(ns))
                .unwrap_or(false)
    }
}
