//! # Event Emitter
//!
//! [`EventEmitter`] is a synchronous, in-process publish/subscribe registry.
//! Listeners are registered against event names and invoked, in list order,
//! on the caller's thread whenever the event is emitted.
//!
//! # Semantics
//!
//! - **Ordering**: emission order is list order. `on` appends, `prepend_*`
//!   inserts at the head.
//! - **Snapshot**: `emit` copies the list before invoking anything. Listeners
//!   added or removed while an emission runs only affect later emissions.
//! - **One-shot**: `once` entries run at most once and are removed right after
//!   their callback returns (or unwinds).
//! - **Failures**: a panicking listener unwinds out of `emit` and the rest of
//!   that fan-out is skipped.
//! - **Threshold**: persistent registrations (`add_listener`,
//!   `prepend_listener`) past `max_listeners` are reported to the
//!   [`DiagnosticSink`], never refused. One-shot registrations are not checked.
//!
//! All methods take `&self`. The internal lock is released before any
//! listener or sink runs, so listeners may freely call back into the emitter.

use crate::{
    config::{EmitterBuilder, EmitterConfig},
    registry::{EntryId, ListenerRegistry, Position},
    wait::NextEmission,
};
use futures::channel::oneshot;
use hark_core::{
    Args, DiagnosticSink, EventName, HarkError, Listener, MaxListenersExceeded, Result,
};
use parking_lot::Mutex;
use std::{borrow::Borrow, fmt, hash::Hash};

/// A synchronous event emitter keyed by `E` (a `String` by default).
///
/// # Example
/// ```ignore
/// let emitter = EventEmitter::new();
/// emitter
///     .on("foo", |_: &Args| println!("first"))
///     .on("foo", |args: &Args| println!("{:?}", args.get::<&str>(0)));
///
/// assert!(emitter.emit("foo", args!["hello"]));
/// assert!(!emitter.emit("unregistered", args![]));
/// ```
pub struct EventEmitter<E: EventName = String> {
    registry: Mutex<ListenerRegistry<E>>,
    sink: Box<dyn DiagnosticSink>,
}

impl<E: EventName> EventEmitter<E> {
    /// Create an emitter with the default configuration and a `tracing` sink.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a customised emitter.
    pub fn builder() -> EmitterBuilder<E> {
        EmitterBuilder::new()
    }

    pub(crate) fn from_parts(config: EmitterConfig, sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            registry: Mutex::new(ListenerRegistry::new(config.max_listeners)),
            sink,
        }
    }

    /// Append a persistent listener to `event`'s list.
    pub fn add_listener(&self, event: impl Into<E>, listener: impl Into<Listener>) -> &Self {
        self.register(event.into(), listener.into(), false, Position::Back)
    }

    /// Alias for [`add_listener`](Self::add_listener).
    pub fn on(&self, event: impl Into<E>, listener: impl Into<Listener>) -> &Self {
        self.add_listener(event, listener)
    }

    /// Insert a persistent listener at the head of `event`'s list.
    pub fn prepend_listener(&self, event: impl Into<E>, listener: impl Into<Listener>) -> &Self {
        self.register(event.into(), listener.into(), false, Position::Front)
    }

    /// Append a listener that is removed after its first invocation.
    ///
    /// The list stores an adapter around `listener`; that adapter is what
    /// [`raw_listeners`](Self::raw_listeners) reports.
    pub fn once(&self, event: impl Into<E>, listener: impl Into<Listener>) -> &Self {
        self.register(event.into(), listener.into(), true, Position::Back)
    }

    /// Insert a one-shot listener at the head of `event`'s list.
    pub fn prepend_once_listener(
        &self,
        event: impl Into<E>,
        listener: impl Into<Listener>,
    ) -> &Self {
        self.register(event.into(), listener.into(), true, Position::Front)
    }

    fn register(&self, event: E, listener: Listener, once: bool, position: Position) -> &Self {
        let inserted = self
            .registry
            .lock()
            .insert(event.clone(), listener, once, position);

        tracing::trace!(
            event = ?event,
            id = inserted.id,
            count = inserted.count,
            once,
            "listener registered"
        );

        if !once && inserted.exceeds_max() {
            self.sink.max_listeners_exceeded(&MaxListenersExceeded {
                event: format!("{event:?}"),
                count: inserted.count,
                max: inserted.max,
            });
        }
        self
    }

    /// Remove one listener from `event`, or the whole list when `listener` is
    /// `None`.
    ///
    /// With a listener, the first entry (in emission order) whose stored
    /// callable is `listener` is removed. One-shot entries store an adapter, so
    /// passing the listener given to [`once`](Self::once) does not match them.
    /// Unknown events and unmatched listeners are ignored.
    pub fn remove_listener<'a, Q>(
        &self,
        event: &Q,
        listener: impl Into<Option<&'a Listener>>,
    ) -> &Self
    where
        E: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let mut registry = self.registry.lock();
        match listener.into() {
            Some(listener) => {
                let removed = registry.remove_matching(event, listener);
                tracing::trace!(event = ?event, removed, "listener removed");
            }
            None => {
                let removed = registry.remove_event(event);
                tracing::trace!(event = ?event, removed, "listeners removed");
            }
        }
        self
    }

    /// Alias for [`remove_listener`](Self::remove_listener).
    pub fn off<'a, Q>(&self, event: &Q, listener: impl Into<Option<&'a Listener>>) -> &Self
    where
        E: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.remove_listener(event, listener)
    }

    /// Remove every listener of `event`, or of every event when `None`.
    pub fn remove_all_listeners<'a>(&self, event: impl Into<Option<&'a E>>) -> &Self
    where
        E: 'a,
    {
        let mut registry = self.registry.lock();
        match event.into() {
            Some(event) => {
                let removed = registry.remove_event(event);
                tracing::trace!(event = ?event, removed, "listeners removed");
            }
            None => {
                let removed = registry.clear();
                tracing::trace!(removed, "all listeners removed");
            }
        }
        self
    }

    /// Invoke every listener of `event` with `args`.
    ///
    /// Returns `false` without calling anything when `event` has no
    /// listeners, `true` otherwise.
    pub fn emit<Q>(&self, event: &Q, args: Args) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let snapshot = {
            let registry = self.registry.lock();
            let entries = registry.entries(event);
            if entries.is_empty() {
                return false;
            }
            entries.to_vec()
        };

        tracing::debug!(
            event = ?event,
            listeners = snapshot.len(),
            args = args.len(),
            "emitting event"
        );

        for entry in &snapshot {
            if entry.is_once() {
                let _removal = OnceRemoval {
                    emitter: self,
                    event,
                    id: entry.id(),
                };
                entry.callback().call(&args);
            } else {
                entry.callback().call(&args);
            }
        }
        true
    }

    /// Number of entries registered for `event`, pending one-shots included.
    pub fn listener_count<Q>(&self, event: &Q) -> usize
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.registry.lock().count(event)
    }

    /// The stored callables of `event`, in emission order.
    ///
    /// One-shot entries appear as their adapter, not as the listener passed
    /// to [`once`](Self::once).
    pub fn raw_listeners<Q>(&self, event: &Q) -> Vec<Listener>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.registry
            .lock()
            .entries(event)
            .iter()
            .map(|entry| entry.callback().clone())
            .collect()
    }

    /// The listeners of `event` as they were registered, in emission order.
    pub fn listeners<Q>(&self, event: &Q) -> Vec<Listener>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.registry
            .lock()
            .entries(event)
            .iter()
            .map(|entry| entry.original().clone())
            .collect()
    }

    /// Events with at least one listener, in first-registration order.
    pub fn event_names(&self) -> Vec<E> {
        self.registry.lock().names()
    }

    /// Set the listener threshold.
    ///
    /// Fails with [`HarkError::InvalidArgument`] when `n` is negative or does
    /// not fit a `usize`. Lists already above the new threshold are not
    /// reported again.
    pub fn set_max_listeners<N>(&self, n: N) -> Result<&Self>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        let max = n.try_into().map_err(|_| {
            HarkError::invalid_argument(format!(
                "max listeners must be a non-negative integer, got {n}"
            ))
        })?;
        self.registry.lock().set_max_listeners(max);
        Ok(self)
    }

    /// The current listener threshold.
    pub fn max_listeners(&self) -> usize {
        self.registry.lock().max_listeners()
    }

    /// Register a one-shot listener and return a future resolving to the
    /// arguments of the next emission of `event`.
    pub fn next_emission(&self, event: impl Into<E>) -> NextEmission {
        let (sender, receiver) = oneshot::channel();
        let sender = Mutex::new(Some(sender));
        self.once(event, move |args: &Args| {
            if let Some(sender) = sender.lock().take() {
                // The receiver may already be gone.
                let _ = sender.send(args.clone());
            }
        });
        NextEmission::new(receiver)
    }
}

impl<E: EventName> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventName> fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.lock();
        f.debug_struct("EventEmitter")
            .field("max_listeners", &registry.max_listeners())
            .field("listeners", &registry.counts())
            .finish_non_exhaustive()
    }
}

/// Removes a one-shot entry once its callback has returned or unwound.
struct OnceRemoval<'a, E, Q>
where
    E: EventName + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    emitter: &'a EventEmitter<E>,
    event: &'a Q,
    id: EntryId,
}

impl<E, Q> Drop for OnceRemoval<'_, E, Q>
where
    E: EventName + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    fn drop(&mut self) {
        self.emitter.registry.lock().remove_entry(self.event, self.id);
    }
}
