//! Testing utilities for plugboard.
//!
//! This module provides utilities to make testing handlers and registries easier.
//!
//! # Features
//!
//! - [`RecordingHandler`]: A handler that records every input it receives
//! - [`CountingHandler`]: A handler that counts invocations
//! - [`FixedSelector`]: A selector that always picks the same index
//! - [`SequenceSelector`]: A selector that replays a fixed list of picks

use crate::select::Selector;
use parking_lot::Mutex;
use plugboard_core::Handler;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records all inputs it receives.
///
/// Returns `prefix` followed by the input. Clones share the same record,
/// so a clone can be registered while the original is kept for assertions.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new("Hello ");
/// registry.register("hello", recorder.clone())?;
///
/// registry.dispatch_random("Kevin")?;
/// assert_eq!(recorder.inputs(), vec!["Kevin"]);
/// ```
pub struct RecordingHandler {
    inputs: Arc<Mutex<Vec<String>>>,
    prefix: String,
}

impl RecordingHandler {
    /// Create a recording handler that answers `"{prefix}{input}"`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            inputs: Arc::new(Mutex::new(Vec::new())),
            prefix: prefix.into(),
        }
    }

    /// Get a clone of the recorded inputs.
    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().clone()
    }

    /// Get the number of recorded inputs.
    pub fn count(&self) -> usize {
        self.inputs.lock().len()
    }
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self::new("")
    }
}

impl Clone for RecordingHandler {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
            prefix: self.prefix.clone(),
        }
    }
}

impl Handler for RecordingHandler {
    fn call(&self, input: &str) -> String {
        self.inputs.lock().push(input.to_string());
        format!("{}{}", self.prefix, input)
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations and echoes its input.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
/// registry.register("count", counter.clone())?;
///
/// registry.dispatch("count", "x")?;
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl Handler for CountingHandler {
    fn call(&self, input: &str) -> String {
        self.count.fetch_add(1, Ordering::SeqCst);
        input.to_string()
    }
}

// ============================================================================
// Selectors
// ============================================================================

/// A selector that always picks the same index.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(
    /// Index to pick, clamped to the last entry.
    pub usize,
);

impl Selector for FixedSelector {
    fn select(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// A selector that replays a list of picks, cycling when exhausted.
///
/// An empty list always picks index 0.
pub struct SequenceSelector {
    picks: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceSelector {
    /// Create a selector replaying `picks`.
    pub fn new(picks: Vec<usize>) -> Self {
        Self {
            picks,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl Selector for SequenceSelector {
    fn select(&self, len: usize) -> usize {
        let n = self.cursor.fetch_add(1, Ordering::SeqCst);
        if self.picks.is_empty() {
            return 0;
        }
        self.picks[n % self.picks.len()] % len
    }
}
