//! Standard diagnostic sinks.

use hark_core::{DiagnosticSink, MaxListenersExceeded};

/// A sink that reports diagnostics as `tracing` warnings.
///
/// This is the default sink of every emitter.
///
/// # Example
///
/// ```rust,ignore
/// let emitter = EventEmitter::<String>::builder()
///     .sink(TracingSink::named("http_events"))
///     .build();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    name: &'static str,
}

impl TracingSink {
    /// Create a new `TracingSink` with a default name.
    pub const fn new() -> Self {
        Self { name: "emitter" }
    }

    /// Create a new `TracingSink` with a custom name.
    ///
    /// The name is used in log records to tell emitters apart.
    pub const fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for TracingSink {
    fn max_listeners_exceeded(&self, warning: &MaxListenersExceeded) {
        tracing::warn!(
            emitter = %self.name,
            event = %warning.event,
            count = warning.count,
            max = warning.max,
            "{warning}"
        );
    }
}

/// A sink that drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn max_listeners_exceeded(&self, _warning: &MaxListenersExceeded) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning() -> MaxListenersExceeded {
        MaxListenersExceeded {
            event: "\"warn\"".into(),
            count: 3,
            max: 2,
        }
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink::new().max_listeners_exceeded(&warning());
        TracingSink::named("my_emitter").max_listeners_exceeded(&warning());
    }

    #[test]
    fn test_silent_sink() {
        SilentSink.max_listeners_exceeded(&warning());
    }
}
