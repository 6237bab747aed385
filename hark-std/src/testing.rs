//! Testing utilities for hark.
//!
//! This module provides test doubles that make emitter behavior easy to
//! assert on.
//!
//! # Features
//!
//! - [`RecordingSink`]: A diagnostic sink that keeps every warning it receives
//! - [`RecordingListener`]: A listener that records the arguments of each call
//! - [`CountingListener`]: A listener that only counts invocations
//! - [`OrderRecorder`]: Hands out labelled listeners and records call order

use hark_core::{Args, DiagnosticSink, Listener, MaxListenersExceeded};
use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Sink
// ============================================================================

/// A diagnostic sink that records all warnings it receives.
///
/// # Example
///
/// ```rust,ignore
/// let sink = RecordingSink::new();
/// let emitter = EventEmitter::<String>::builder()
///     .max_listeners(1)
///     .sink(sink.clone())
///     .build();
///
/// emitter.on("a", |_: &Args| {}).on("a", |_: &Args| {});
/// assert_eq!(sink.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingSink {
    warnings: Arc<Mutex<Vec<MaxListenersExceeded>>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded warnings.
    pub fn warnings(&self) -> Vec<MaxListenersExceeded> {
        self.warnings.lock().clone()
    }

    /// Get the number of recorded warnings.
    pub fn count(&self) -> usize {
        self.warnings.lock().len()
    }

    /// Clear all recorded warnings.
    pub fn clear(&self) {
        self.warnings.lock().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn max_listeners_exceeded(&self, warning: &MaxListenersExceeded) {
        self.warnings.lock().push(warning.clone());
    }
}

// ============================================================================
// Recording Listener
// ============================================================================

/// A listener that records the arguments of every invocation.
///
/// Clones share the same record and the same [`Listener`] identity.
#[derive(Clone)]
pub struct RecordingListener {
    calls: Arc<Mutex<Vec<Args>>>,
    listener: Listener,
}

impl RecordingListener {
    /// Create a new recording listener.
    pub fn new() -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let listener = Listener::new(move |args: &Args| sink.lock().push(args.clone()));
        Self { calls, listener }
    }

    /// The handle to register.
    pub fn listener(&self) -> Listener {
        self.listener.clone()
    }

    /// Arguments of each call, oldest first.
    pub fn calls(&self) -> Vec<Args> {
        self.calls.lock().clone()
    }

    /// Get the number of times the listener was called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Default for RecordingListener {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Counting Listener
// ============================================================================

/// A listener that counts invocations.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingListener::new();
/// emitter.on("tick", counter.listener());
/// emitter.emit("tick", args![]);
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Clone)]
pub struct CountingListener {
    count: Arc<AtomicUsize>,
    listener: Listener,
}

impl CountingListener {
    /// Create a new counting listener.
    pub fn new() -> Self {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let listener = Listener::new(move |_: &Args| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        Self { count, listener }
    }

    /// The handle to register.
    pub fn listener(&self) -> Listener {
        self.listener.clone()
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

impl Default for CountingListener {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Order Recorder
// ============================================================================

/// Records the order in which labelled listeners run.
#[derive(Clone, Default)]
pub struct OrderRecorder {
    order: Arc<Mutex<Vec<&'static str>>>,
}

impl OrderRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new listener that appends `label` each time it runs.
    pub fn listener(&self, label: &'static str) -> Listener {
        let order = self.order.clone();
        Listener::new(move |_: &Args| order.lock().push(label))
    }

    /// Labels in call order.
    pub fn order(&self) -> Vec<&'static str> {
        self.order.lock().clone()
    }

    /// Forget recorded calls.
    pub fn clear(&self) {
        self.order.lock().clear();
    }
}
