//! Listener entries.

use hark_core::{Args, Listener};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Identifier of an entry, unique within one registry.
pub(crate) type EntryId = u64;

#[derive(Clone)]
enum EntryKind {
    Persistent,
    Once { original: Listener },
}

/// A registered listener plus its lifecycle tag.
///
/// For one-shot entries `callback` is an adapter around the original
/// listener. The adapter refuses to run the original a second time, so a
/// one-shot entry executes at most once even when it is reached again
/// through a nested emission before its removal.
#[derive(Clone)]
pub(crate) struct Entry {
    id: EntryId,
    callback: Listener,
    kind: EntryKind,
}

impl Entry {
    pub(crate) fn persistent(id: EntryId, listener: Listener) -> Self {
        Self {
            id,
            callback: listener,
            kind: EntryKind::Persistent,
        }
    }

    pub(crate) fn once(id: EntryId, original: Listener) -> Self {
        let fired = Arc::new(AtomicBool::new(false));
        let inner = original.clone();
        let adapter = Listener::new(move |args: &Args| {
            if !fired.swap(true, Ordering::AcqRel) {
                inner.call(args);
            }
        });
        Self {
            id,
            callback: adapter,
            kind: EntryKind::Once { original },
        }
    }

    pub(crate) fn id(&self) -> EntryId {
        self.id
    }

    /// The stored callable (the adapter for one-shot entries).
    pub(crate) fn callback(&self) -> &Listener {
        &self.callback
    }

    /// The listener the caller registered.
    pub(crate) fn original(&self) -> &Listener {
        match &self.kind {
            EntryKind::Persistent => &self.callback,
            EntryKind::Once { original } => original,
        }
    }

    pub(crate) fn is_once(&self) -> bool {
        matches!(self.kind, EntryKind::Once { .. })
    }

    /// Matches the stored callable only; a one-shot entry never matches the
    /// listener it wraps.
    pub(crate) fn matches(&self, listener: &Listener) -> bool {
        self.callback.ptr_eq(listener)
    }
}
