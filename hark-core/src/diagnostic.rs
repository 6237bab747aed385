//! # Diagnostics
//!
//! Non-fatal conditions noticed by an emitter are reported to a
//! [`DiagnosticSink`] instead of being written to a global stream. Sinks are
//! injected when the emitter is built, which keeps emitters quiet in tests and
//! lets applications route warnings wherever they like.

use std::fmt;

/// Reported when a registration pushes a listener list past the threshold.
///
/// The registration itself still succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxListenersExceeded {
    /// The event name, rendered with its `Debug` impl.
    pub event: String,
    /// Number of listeners for the event after the registration.
    pub count: usize,
    /// The threshold that was in effect.
    pub max: usize,
}

impl fmt::Display for MaxListenersExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "possible listener leak detected: {} listeners added to {} (max {}); \
             use set_max_listeners() to raise the limit",
            self.count, self.event, self.max
        )
    }
}

/// Receiver of emitter diagnostics.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `DiagnosticSink`",
    label = "missing `DiagnosticSink` implementation",
    note = "Closures taking `&MaxListenersExceeded` implement `DiagnosticSink` automatically."
)]
pub trait DiagnosticSink: Send + Sync + 'static {
    /// Called once per registration that exceeds the threshold.
    fn max_listeners_exceeded(&self, warning: &MaxListenersExceeded);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&MaxListenersExceeded) + Send + Sync + 'static,
{
    fn max_listeners_exceeded(&self, warning: &MaxListenersExceeded) {
        (self)(warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_display_names_event_and_counts() {
        let warning = MaxListenersExceeded {
            event: "\"warn\"".into(),
            count: 3,
            max: 2,
        };
        let text = warning.to_string();
        assert!(text.contains("3 listeners added to \"warn\""));
        assert!(text.contains("max 2"));
    }

    #[test]
    fn test_closure_sink() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let sink = move |w: &MaxListenersExceeded| seen_clone.lock().unwrap().push(w.count);

        sink.max_listeners_exceeded(&MaxListenersExceeded {
            event: "\"x\"".into(),
            count: 11,
            max: 10,
        });
        assert_eq!(*seen.lock().unwrap(), vec![11]);
    }
}
