// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Replaying multicast subject.
//!
//! A [`ReplaySubject`] behaves like [`Subject`](crate::Subject) but keeps a
//! buffer of past values governed by a [`ReplayPolicy`]. Every subscriber,
//! however late, first receives the buffered values in original order, then
//! live items. A subject that already terminated delivers the buffer followed
//! by the terminal signal.
//!
//! ## Example
//!
//! ```
//! use syncro_core::{ReplayPolicy, ReplaySubject, StreamItem};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = ReplaySubject::<i32>::new(ReplayPolicy::Last(2));
//!
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subject.next(3).unwrap();
//! subject.close();
//!
//! // Late subscriber still sees the last two values.
//! let mut stream = subject.subscribe();
//! assert_eq!(stream.next().await, Some(StreamItem::Value(2)));
//! assert_eq!(stream.next().await, Some(StreamItem::Value(3)));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

use crate::subject::{Lifecycle, SubjectStream};
use crate::{StreamItem, SubjectBoxStream, SubjectError, SyncroError};
use futures::channel::mpsc::{self, UnboundedSender};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// How many past values a [`ReplaySubject`] retains for late subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayPolicy {
    /// Keep every value ever emitted.
    ///
    /// The buffer grows without limit for a long-lived source; bounding it is
    /// the caller's responsibility.
    #[default]
    Unbounded,
    /// Keep only the most recent `n` values, evicting the oldest first.
    ///
    /// `Last(0)` buffers nothing; late subscribers still observe the terminal
    /// signal.
    Last(usize),
}

struct ReplayState<T> {
    lifecycle: Lifecycle,
    policy: ReplayPolicy,
    buffer: VecDeque<T>,
    senders: Vec<UnboundedSender<StreamItem<T>>>,
}

impl<T> ReplayState<T> {
    fn push_buffered(&mut self, value: T) {
        if let ReplayPolicy::Last(bound) = self.policy {
            if bound == 0 {
                return;
            }
            while self.buffer.len() >= bound {
                self.buffer.pop_front();
            }
        }
        self.buffer.push_back(value);
    }
}

/// A multicast subject that replays buffered values to late subscribers.
///
/// This is the relay behind the `sync_replay` bridge. Identical to
/// [`Subject`](crate::Subject) except for the replay buffer: subscribing
/// first yields up to [`ReplayPolicy`]-many past values, then live items.
/// The buffer survives the terminal transition, so subscribers attaching
/// after completion or error still observe it.
///
/// See the [module documentation](self) for an example.
pub struct ReplaySubject<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<ReplayState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> ReplaySubject<T> {
    /// Creates a new replay subject with the given policy and no subscribers.
    #[must_use]
    pub fn new(policy: ReplayPolicy) -> Self {
        Self {
            state: Arc::new(Mutex::new(ReplayState {
                lifecycle: Lifecycle::Active,
                policy,
                buffer: VecDeque::new(),
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to this subject and receive a stream of `StreamItem<T>`.
    ///
    /// The stream starts with the buffered values in original order, then
    /// live items. Subscribing to a terminal subject succeeds and yields the
    /// buffer followed by the terminal signal.
    pub fn subscribe(&self) -> SubjectBoxStream<T> {
        let mut state = self.state.lock();
        let (tx, rx) = mpsc::unbounded();

        // Snapshot-read of the buffer under the same lock as the registration,
        // so no live item can interleave with the replayed prefix.
        for value in &state.buffer {
            let _ = tx.unbounded_send(StreamItem::Value(value.clone()));
        }

        match state.lifecycle.clone() {
            Lifecycle::Active => state.senders.push(tx),
            Lifecycle::Completed => drop(tx),
            Lifecycle::Errored(e) => {
                let _ = tx.unbounded_send(StreamItem::Error(e));
            }
        }

        SubjectStream::into_boxed_stream(rx)
    }

    /// Send an item to all active subscribers, buffering values per the
    /// replay policy.
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

    /// Send a value to all active subscribers and append it to the buffer.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already terminated.
    pub fn next(&self, value: T) -> std::result::Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.lifecycle.is_terminal() {
            return Err(SubjectError::Closed);
        }

        state.push_buffered(value.clone());

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
    /// The buffer is retained: late subscribers receive the buffered values
    /// followed by this error.
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
    /// The buffer is retained for late subscribers. Idempotent; never demotes
    /// an `Errored` subject to `Completed`.
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

    /// Returns the number of currently buffered values.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.state.lock().buffer.len()
    }

    /// Returns the number of currently active subscribers.
    ///
    /// Note: This count is updated lazily. Dropped subscribers are removed on
    /// the next `next()` call, not immediately when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ReplaySubject<T> {
    fn default() -> Self {
        Self::new(ReplayPolicy::Unbounded)
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for ReplaySubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
