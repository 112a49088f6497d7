// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, no-replay multicast subject.
//!
//! A [`Subject`] broadcasts each [`StreamItem<T>`] to all active subscribers.
//!
//! ## Characteristics
//!
//! - **Hot**: Late subscribers do not receive past items, only items sent
//!   after subscribing.
//! - **Unbounded**: Uses unbounded mpsc channels internally (no backpressure).
//! - **Thread-safe**: Cheap to clone; all clones share the same internal state.
//! - **Terminal replay**: Once completed or errored, the subject replays the
//!   terminal signal (stream end, or the error item then stream end) to every
//!   subsequent subscriber. Subscribing never fails.
//!
//! ## Example
//!
//! ```
//! use syncro_core::{StreamItem, Subject};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = Subject::<i32>::new();
//!
//! // Subscribe before sending
//! let mut stream = subject.subscribe();
//!
//! // Send values to all subscribers
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subject.close();
//!
//! // Receive values
//! assert_eq!(stream.next().await, Some(StreamItem::Value(1)));
//! assert_eq!(stream.next().await, Some(StreamItem::Value(2)));
//! assert_eq!(stream.next().await, None); // Subject closed
//! # }
//! ```

use crate::{StreamItem, SubjectError, SyncroError};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Boxed item stream handed out by `subscribe()`.
pub type SubjectBoxStream<T> = Pin<Box<dyn Stream<Item = StreamItem<T>> + Send + Sync + 'static>>;

/// Terminal state machine shared by [`Subject`] and
/// [`ReplaySubject`](crate::ReplaySubject): Active → Completed or
/// Active → Errored, never back.
#[derive(Debug, Clone)]
pub(crate) enum Lifecycle {
    Active,
    Completed,
    Errored(SyncroError),
}

impl Lifecycle {
    pub(crate) const fn is_terminal(&self) -> bool {
        !matches!(self, Lifecycle::Active)
    }
}

struct SubjectState<T> {
    lifecycle: Lifecycle,
    senders: Vec<UnboundedSender<StreamItem<T>>>,
}

// A Sync-capable wrapper around the unbounded receiver used by subject
// subscriptions.
pub(crate) struct SubjectStream<T> {
    inner: Arc<Mutex<UnboundedReceiver<StreamItem<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> SubjectStream<T> {
    pub(crate) fn into_boxed_stream(rx: UnboundedReceiver<StreamItem<T>>) -> SubjectBoxStream<T> {
        Box::pin(Self {
            inner: Arc::new(Mutex::new(rx)),
        })
    }
}

impl<T: Clone + Send + Sync + 'static> Stream for SubjectStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut guard = self.inner.lock();
        Pin::new(&mut *guard).poll_next(cx)
    }
}

/// A hot, unbounded subject that broadcasts items to all current subscribers.
///
/// `Subject` is the relay at the heart of the no-replay `sync` bridge. It
/// implements a publish-subscribe pattern where multiple subscribers receive
/// the same items.
///
/// See the [module documentation](self) for examples and more details.
pub struct Subject<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> Subject<T> {
    /// Creates a new unbounded subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                lifecycle: Lifecycle::Active,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to this subject and receive a stream of `StreamItem<T>`.
    ///
    /// Late subscribers do not receive previously sent items. Subscribing to
    /// a terminal subject succeeds and yields a stream that immediately ends
    /// (after the error item, if the subject errored).
    pub fn subscribe(&self) -> SubjectBoxStream<T> {
        let mut state = self.state.lock();
        let (tx, rx) = mpsc::unbounded();

        match state.lifecycle.clone() {
            Lifecycle::Active => state.senders.push(tx),
            Lifecycle::Completed => drop(tx),
            Lifecycle::Errored(e) => {
                // The receiver buffers the error even though tx is dropped
                // right away.
                let _ = tx.unbounded_send(StreamItem::Error(e));
            }
        }

        SubjectStream::into_boxed_stream(rx)
    }

    /// Send an item to all active subscribers.
    ///
    /// Value items are broadcast; an error item terminates the subject via
    /// [`error()`](Self::error), since an error ends the sequence.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already terminated.
    pub fn send(&self, item: StreamItem<T>) -> std::result::Result<(), SubjectError> {
        match item {
            StreamItem::Value(v) => self.next(v),
            StreamItem::Error(e) => self.error(e),
        }
    }

    /// Send a value to all active subscribers.
    ///
    /// Dropped subscribers are pruned as a side effect.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already terminated.
    pub fn next(&self, value: T) -> std::result::Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.lifecycle.is_terminal() {
            return Err(SubjectError::Closed);
        }

        let item = StreamItem::Value(value);
        let mut next_senders = Vec::with_capacity(state.senders.len());

        for tx in state.senders.drain(..) {
            if tx.unbounded_send(item.clone()).is_ok() {
                next_senders.push(tx);
            }
        }

        state.senders = next_senders;
        Ok(())
    }

    /// Send an error to all subscribers and terminate the subject.
    ///
    /// Late subscribers receive the same error item followed by stream end.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already terminated.
    pub fn error(&self, err: SyncroError) -> std::result::Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.lifecycle.is_terminal() {
            return Err(SubjectError::Closed);
        }

        for tx in state.senders.drain(..) {
            let _ = tx.unbounded_send(StreamItem::Error(err.clone()));
        }
        state.lifecycle = Lifecycle::Errored(err);
        Ok(())
    }

    /// Completes the subject, ending all subscriber streams.
    ///
    /// After closing:
    /// - Existing subscribers receive `None` on their next poll (stream ends).
    /// - `send()`, `next()` and `error()` return `SubjectError::Closed`.
    /// - New subscribers receive an immediately-ended stream.
    ///
    /// Closing is idempotent and never demotes an `Errored` subject to
    /// `Completed`.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if !state.lifecycle.is_terminal() {
            state.lifecycle = Lifecycle::Completed;
        }
        state.senders.clear();
    }

    /// Returns `true` if the subject has completed or errored.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().lifecycle.is_terminal()
    }

    /// Returns the number of currently active subscribers.
    ///
    /// Note: This count is updated lazily. Dropped subscribers are removed on
    /// the next `send()` call, not immediately when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
