//! Testing utilities for Keiro.
//!
//! This module provides listeners that make dispatch behavior observable.
//!
//! # Features
//!
//! - [`Journal`]: A shared, ordered log of listener invocations
//! - [`RecordingListener`]: Appends its label to a journal, returns a fixed decision
//! - [`CountingListener`]: Counts invocations
//! - [`FailingListener`]: Always returns an error

use keiro_core::{Identity, Listener, ListenerResult, Payload, RegistrationRecord};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Journal
// ============================================================================

/// An ordered log of listener labels shared between listeners and a test.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label.
    pub fn push(&self, label: impl Into<String>) {
        self.lock().push(label.into());
    }

    /// Get a copy of the recorded labels, in invocation order.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of recorded labels.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clear all recorded labels.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// Recording Listener
// ============================================================================

/// A listener that records its label in a [`Journal`] on every invocation.
///
/// # Example
///
/// ```rust
/// use keiro_std::{EventHub, loaders::ManualLoader, testing::{Journal, RecordingListener}};
///
/// let journal = Journal::new();
/// let loader = ManualLoader::new()
///     .register(RecordingListener::new("second", &journal).record("g", 1, 0))
///     .register(RecordingListener::new("first", &journal).record("g", 0, 0));
///
/// let hub = EventHub::new();
/// hub.initialize([loader]).unwrap();
/// hub.dispatch("g").unwrap();
///
/// assert_eq!(journal.entries(), ["first", "second"]);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingListener {
    label: String,
    stop: bool,
    journal: Journal,
}

impl RecordingListener {
    /// Create a recording listener that never stops propagation.
    pub fn new(label: impl Into<String>, journal: &Journal) -> Self {
        Self {
            label: label.into(),
            stop: false,
            journal: journal.clone(),
        }
    }

    /// Make this listener stop propagation after recording.
    pub fn stopping(mut self) -> Self {
        self.stop = true;
        self
    }

    /// Build a registration record for this listener.
    ///
    /// The identity is named after the label.
    pub fn record(self, group: &str, priority: i32, flag: u32) -> RegistrationRecord {
        RegistrationRecord::new(
            group.to_owned(),
            Identity::from_instance(self.label.clone(), self),
        )
        .with_priority(priority)
        .with_flag(flag)
    }
}

impl Listener for RecordingListener {
    fn on_receive(&self, _payload: &Payload) -> ListenerResult {
        self.journal.push(self.label.clone());
        Ok(self.stop)
    }
}

// ============================================================================
// Counting Listener
// ============================================================================

/// A listener that counts invocations.
///
/// Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct CountingListener {
    count: Arc<AtomicUsize>,
}

impl CountingListener {
    /// Create a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Listener for CountingListener {
    fn on_receive(&self, _payload: &Payload) -> ListenerResult {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(false)
    }
}

// ============================================================================
// Failing Listener
// ============================================================================

/// A listener that always fails with the given message.
#[derive(Debug, Clone)]
pub struct FailingListener {
    message: String,
}

impl FailingListener {
    /// Create a failing listener.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Listener for FailingListener {
    fn on_receive(&self, _payload: &Payload) -> ListenerResult {
        Err(self.message.clone().into())
    }
}
