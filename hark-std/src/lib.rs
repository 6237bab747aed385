//! # hark-std
//!
//! Standard implementations for the hark event emitter.
//!
//! This crate provides:
//! - **Emitter**: [`EventEmitter`], the synchronous listener registry
//! - **Configuration**: [`EmitterConfig`], [`EmitterBuilder`]
//! - **Diagnostics**: [`TracingSink`], [`SilentSink`]
//! - **Async bridge**: [`NextEmission`]
//! - **Testing**: recording and counting test doubles

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
#[allow(clippy::pub_use)]
pub use hark_core;

mod registry;

pub mod config;
pub mod diagnostics;
pub mod emitter;
pub mod testing;
pub mod wait;

#[allow(clippy::pub_use)]
pub use config::{DEFAULT_MAX_LISTENERS, EmitterBuilder, EmitterConfig};
#[allow(clippy::pub_use)]
pub use diagnostics::{SilentSink, TracingSink};
#[allow(clippy::pub_use)]
pub use emitter::EventEmitter;
#[allow(clippy::pub_use)]
pub use wait::NextEmission;
