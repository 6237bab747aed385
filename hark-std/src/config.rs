//! Emitter configuration and builder.

use crate::{diagnostics::TracingSink, emitter::EventEmitter};
use hark_core::{DiagnosticSink, EventName};
use std::marker::PhantomData;

/// Threshold used when none is configured.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// Tunables for an [`EventEmitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Listener count per event above which a registration is reported to
    /// the diagnostic sink. `0` reports every registration.
    pub max_listeners: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EmitterConfig {
    /// Create the default configuration.
    pub const fn new() -> Self {
        Self {
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }

    /// Set the listener threshold.
    pub const fn with_max_listeners(mut self, max_listeners: usize) -> Self {
        self.max_listeners = max_listeners;
        self
    }
}

/// Builder for constructing an [`EventEmitter`].
///
/// # Example
/// ```ignore
/// let emitter = EventEmitter::<String>::builder()
///     .max_listeners(3)
///     .sink(|warning: &MaxListenersExceeded| eprintln!("{warning}"))
///     .build();
/// ```
pub struct EmitterBuilder<E> {
    config: EmitterConfig,
    sink: Option<Box<dyn DiagnosticSink>>,
    _event: PhantomData<fn() -> E>,
}

impl<E: EventName> EmitterBuilder<E> {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: EmitterConfig::default(),
            sink: None,
            _event: PhantomData,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EmitterConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the listener threshold.
    pub fn max_listeners(mut self, max_listeners: usize) -> Self {
        self.config.max_listeners = max_listeners;
        self
    }

    /// Route diagnostics to `sink` instead of `tracing`.
    pub fn sink<S: DiagnosticSink>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the emitter.
    pub fn build(self) -> EventEmitter<E> {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(TracingSink::default()));
        EventEmitter::from_parts(self.config, sink)
    }
}

impl<E: EventName> Default for EmitterBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
