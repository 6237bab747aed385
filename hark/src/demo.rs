//! A fixed walkthrough of the emitter API.
//!
//! [`run_events`] drives one emitter through every registration, removal and
//! emission pattern in turn. Each listener writes a line to a transcript; the
//! transcript is logged with `tracing` as it grows and returned at the end so
//! callers (and tests) can check exactly which listeners ran.

use crate::{Args, EventEmitter, Listener, MaxListenersExceeded, args};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug)]
struct Three {
    three: u8,
}

/// Shared, append-only list of output lines.
#[derive(Clone, Default)]
struct Transcript(Arc<Mutex<Vec<String>>>);

impl Transcript {
    fn line(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::info!("{text}");
        self.0.lock().push(text);
    }

    fn warn(&self, warning: &MaxListenersExceeded) {
        tracing::warn!(event = %warning.event, count = warning.count, max = warning.max, "{warning}");
        self.0.lock().push(format!("warning: {warning}"));
    }

    fn listener(&self, text: &'static str) -> Listener {
        let transcript = self.clone();
        Listener::new(move |_: &Args| transcript.line(text))
    }

    fn into_lines(self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock())
    }
}

/// Run the walkthrough and return the transcript, one entry per line.
pub fn run_events() -> Vec<String> {
    let out = Transcript::default();
    let sink = out.clone();
    let emitter = EventEmitter::<String>::builder()
        .sink(move |warning: &MaxListenersExceeded| sink.warn(warning))
        .build();

    // Multiple listeners for one event, the last one reading a parameter.
    emitter
        .on("foo", out.listener("[scenario 1] listener 1 triggered for \"foo\""))
        .on("foo", out.listener("[scenario 1] listener 2 triggered for \"foo\""));
    let param_out = out.clone();
    emitter.on("foo", move |args: &Args| {
        let param = args.get::<&str>(0).copied().unwrap_or("<none>");
        param_out.line(format!("[scenario 2] listener with param: {param}"));
    });

    // One-shot listener.
    emitter.once("bar", out.listener("[scenario 3] one-time \"bar\" listener triggered"));

    out.line("--- emitting \"foo\" without param ---");
    emitter.emit("foo", args![]);

    out.line("--- emitting \"foo\" with param ---");
    emitter.emit("foo", args!["Hello world!"]);

    out.line("--- emitting \"bar\" multiple times ---");
    for attempt in 1..=3 {
        out.line(format!("emitting \"bar\" attempt #{attempt}"));
        emitter.emit("bar", args![]);
    }

    // Removing a specific listener.
    let to_remove = out.listener("[scenario 4] this should not be called");
    emitter.on("baz", to_remove.clone()).off("baz", &to_remove);

    out.line("--- emitting \"baz\" after removing its listener ---");
    let delivered = emitter.emit("baz", args![]);
    out.line(format!("emit(\"baz\") -> {delivered}"));

    // Removing every listener of one event.
    emitter
        .on("multi", out.listener("[scenario 5] multi listener 1"))
        .on("multi", out.listener("[scenario 5] multi listener 2"))
        .remove_listener("multi", None);

    out.line("--- emitting \"multi\" after removing all its listeners ---");
    let delivered = emitter.emit("multi", args![]);
    out.line(format!("emit(\"multi\") -> {delivered}"));

    // Introspection.
    emitter
        .on("check", |_: &Args| {})
        .on("check", |_: &Args| {});
    out.line(format!(
        "--- listener count for \"check\": {}",
        emitter.listener_count("check")
    ));
    out.line(format!(
        "raw listeners for \"check\": {}",
        emitter.raw_listeners("check").len()
    ));

    // Several arguments of different types.
    let args_out = out.clone();
    emitter.on("args", move |args: &Args| {
        let a = args.get::<i32>(0).copied().unwrap_or_default();
        let b = args.get::<&str>(1).copied().unwrap_or_default();
        let c = args.get::<Three>(2).map(|c| c.three).unwrap_or_default();
        args_out.line(format!(
            "[scenario 7] received multiple args: {a} {b} three={c}"
        ));
    });

    out.line("--- emitting \"args\" with multiple arguments ---");
    emitter.emit("args", args![1i32, "two", Three { three: 3 }]);

    // Prepending.
    emitter
        .on("prep", out.listener("[scenario 8] prep: last listener"))
        .prepend_listener("prep", out.listener("[scenario 8] prep: first listener"));

    out.line("--- emitting \"prep\" to test prepend_listener ---");
    emitter.emit("prep", args![]);

    // Prepending a one-shot listener.
    emitter
        .prepend_once_listener("boot", out.listener("[scenario 9] prepend-once fired first"))
        .on("boot", out.listener("[scenario 9] normal boot listener"));

    out.line("--- emitting \"boot\" twice to test prepend_once_listener ---");
    emitter.emit("boot", args![]);
    emitter.emit("boot", args![]);

    out.line(format!(
        "--- event names currently registered: {:?}",
        emitter.event_names()
    ));

    // Global removal.
    emitter.remove_all_listeners(None);
    out.line("--- all listeners removed ---");
    out.line("should emit nothing now:");
    for event in ["foo", "boot", "args"] {
        let delivered = emitter.emit(event, args![]);
        out.line(format!("emit({event:?}) -> {delivered}"));
    }

    // Threshold warning: the third listener exceeds a limit of two.
    if let Err(err) = emitter.set_max_listeners(2) {
        out.line(format!("error: {err}"));
    }
    emitter
        .on("warn", |_: &Args| {})
        .on("warn", |_: &Args| {})
        .on("warn", |_: &Args| {});

    out.into_lines()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_collects_lines_in_order() {
        let transcript = Transcript::default();
        transcript.line("a");
        transcript.listener("b").call(&Args::new());
        assert_eq!(transcript.into_lines(), vec!["a", "b"]);
    }
}
