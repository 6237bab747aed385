//! # hark-core
//!
//! Core types for the hark synchronous event emitter.
//!
//! This crate has minimal dependencies and holds the vocabulary shared by
//! emitters, sinks, and listeners:
//!
//! - [`EventName`] - Marker trait for event identifiers
//! - [`Args`] / [`Arg`] - Type-erased variadic listener arguments
//! - [`Listener`] - Shared callback handle with identity semantics
//! - [`DiagnosticSink`] - Receiver of non-fatal emitter diagnostics
//!
//! # Error Types
//!
//! - [`HarkError`] - Top-level error type

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod args;
mod diagnostic;
mod error;
mod event;
mod listener;

// Re-exports
pub use args::{Arg, Args};
pub use diagnostic::{DiagnosticSink, MaxListenersExceeded};
pub use error::{HarkError, Result};
pub use event::EventName;
pub use listener::{Listener, ListenerFn};
