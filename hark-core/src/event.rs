//! Event identifier trait.

use std::{fmt::Debug, hash::Hash};

/// A marker trait for values that name an event.
///
/// Identifiers are opaque: there is no predefined set, and a new identifier
/// comes into existence the first time a listener is registered under it.
/// `String` is the usual choice, but enums and integers work as well.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// enum Lifecycle { Boot, Shutdown }
///
/// let emitter: EventEmitter<Lifecycle> = EventEmitter::new();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an event name",
    label = "must be `Clone + Eq + Hash + Debug + Send + Sync + 'static`",
    note = "Event names are stored as map keys and reported in diagnostics."
)]
pub trait EventName: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> EventName for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
