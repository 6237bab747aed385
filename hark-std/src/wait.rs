//! Awaiting the next emission of an event.
//!
//! The emitter stays synchronous: [`NextEmission`] is backed by a one-shot
//! listener that forwards the emitted arguments over a channel. Any executor
//! can poll it.

use futures::channel::oneshot;
use hark_core::Args;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

/// Future returned by [`EventEmitter::next_emission`].
///
/// Resolves to `Some(args)` when the event is emitted, or `None` when the
/// underlying one-shot listener is removed (or the emitter dropped) first.
///
/// [`EventEmitter::next_emission`]: crate::EventEmitter::next_emission
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct NextEmission {
    receiver: oneshot::Receiver<Args>,
}

impl NextEmission {
    pub(crate) fn new(receiver: oneshot::Receiver<Args>) -> Self {
        Self { receiver }
    }
}

impl Future for NextEmission {
    type Output = Option<Args>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver).poll(cx).map(Result::ok)
    }
}
