#![allow(dead_code)]

use hark::{EventEmitter, testing::RecordingSink};

// ============================================================================
// Emitters
// ============================================================================

pub fn emitter() -> EventEmitter {
    EventEmitter::builder().sink(hark::SilentSink).build()
}

pub fn emitter_with_sink(max_listeners: usize) -> (EventEmitter, RecordingSink) {
    let sink = RecordingSink::new();
    let emitter = EventEmitter::builder()
        .max_listeners(max_listeners)
        .sink(sink.clone())
        .build();
    (emitter, sink)
}
