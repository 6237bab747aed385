//! # hark - Synchronous Event Emitter
//!
//! `hark` is an in-process publish/subscribe registry. Callers register
//! listeners against named events and later emit those events, invoking every
//! registered listener in order, synchronously, on the emitting thread.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hark::prelude::*;
//!
//! let emitter = EventEmitter::new();
//! emitter
//!     .on("foo", |_: &Args| println!("an event occurred"))
//!     .once("bar", |_: &Args| println!("only once"));
//!
//! assert!(emitter.emit("foo", args![]));
//! assert!(emitter.emit("bar", args![]));
//! assert!(!emitter.emit("bar", args![]));
//! ```

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

#[allow(clippy::pub_use)]
pub use hark_core::{
    // Arguments
    Arg,
    Args,
    // Diagnostics
    DiagnosticSink,
    // Event names
    EventName,
    // Errors
    HarkError,
    // Listeners
    Listener,
    ListenerFn,
    MaxListenersExceeded,
    Result,
    args,
};

#[allow(clippy::pub_use)]
pub use hark_std::{
    DEFAULT_MAX_LISTENERS, EmitterBuilder, EmitterConfig, EventEmitter, NextEmission, SilentSink,
    TracingSink,
};

pub mod demo;

/// Standard diagnostic sinks.
pub mod diagnostics {
    #![allow(clippy::pub_use)]

    pub use hark_std::diagnostics::{SilentSink, TracingSink};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::pub_use)]

    pub use hark_std::testing::{CountingListener, OrderRecorder, RecordingListener, RecordingSink};
}

/// Prelude module - common imports for hark.
///
/// # Usage
///
/// ```rust,ignore
/// use hark::prelude::*;
/// ```
pub mod prelude {
    #![allow(clippy::pub_use)]

    pub use crate::{
        Args, DiagnosticSink, EmitterConfig, EventEmitter, HarkError, Listener,
        MaxListenersExceeded, args,
    };
}
