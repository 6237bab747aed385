//! # Listener Handles
//!
//! A [`Listener`] is a shared, type-erased callback. Registration stores a
//! clone of the handle, so the caller can keep its own clone and later remove
//! exactly that registration again.
//!
//! Identity is allocation identity: two handles are equal when they point to
//! the same callback, regardless of what the callback does. Wrapping the same
//! closure twice yields two distinct listeners.
//!
//! # Example
//!
//! ```rust,ignore
//! let listener = Listener::new(|args: &Args| println!("{args:?}"));
//! emitter.on("baz", listener.clone());
//! emitter.off("baz", &listener);
//! ```

use crate::args::Args;
use std::{fmt, sync::Arc};

/// The callable signature shared by all listeners.
pub type ListenerFn = dyn Fn(&Args) + Send + Sync;

/// A reference-counted listener callback.
#[derive(Clone)]
pub struct Listener(Arc<ListenerFn>);

impl Listener {
    /// Wrap a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Invoke the callback.
    pub fn call(&self, args: &Args) {
        (self.0)(args)
    }

    /// `true` when both handles refer to the same callback.
    pub fn ptr_eq(&self, other: &Listener) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<F> From<F> for Listener
where
    F: Fn(&Args) + Send + Sync + 'static,
{
    fn from(callback: F) -> Self {
        Self::new(callback)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_clone_is_same_listener() {
        let listener = Listener::new(|_| {});
        let cloned = listener.clone();
        assert_eq!(listener, cloned);
    }

    #[test]
    fn test_same_closure_wrapped_twice_differs() {
        let callback = |_: &Args| {};
        let a = Listener::new(callback);
        let b = Listener::new(callback);
        assert_ne!(a, b);
    }

    #[test]
    fn test_call_forwards_args() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = seen.clone();
        let listener = Listener::from(move |args: &Args| {
            seen_clone.store(args.len(), Ordering::SeqCst);
        });

        listener.call(&crate::args![1u8, 2u8]);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }
}
