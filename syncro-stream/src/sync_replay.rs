// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Eager multicast bridge with replay.
//!
//! A [`ReplayShared`] is the replaying variant of
//! [`SyncShared`](crate::SyncShared): the source is still activated exactly
//! once at construction, but each subscriber first receives up to
//! [`ReplayPolicy`]-many buffered values (in original order), then live
//! items. Subscribers attaching after the source terminated receive the
//! buffer followed by the terminal signal.
//!
//! ## Example
//!
//! ```
//! use syncro_stream::{ReplayPolicy, SyncReplayExt};
//! use syncro_core::StreamItem;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = stream::iter([1, 2, 3, 4].map(StreamItem::Value));
//! let shared = source.sync_replay(ReplayPolicy::Last(2));
//!
//! // The source already completed; a late subscriber gets the last two
//! // values and the completion.
//! let mut sub = shared.subscribe();
//! assert_eq!(sub.next().await, Some(StreamItem::Value(3)));
//! assert_eq!(sub.next().await, Some(StreamItem::Value(4)));
//! assert_eq!(sub.next().await, None);
//! # }
//! ```

use crate::relay::activate;
use crate::task::ForwardTask;
use futures::Stream;
use syncro_core::{ReplayPolicy, ReplaySubject, StreamItem, SubjectBoxStream};

/// An eagerly-activated shared stream that replays buffered values.
///
/// Created by [`SyncReplayExt::sync_replay()`]. Like
/// [`SyncShared`](crate::SyncShared) this is a subscription factory; the
/// difference is the replay buffer handed to every subscriber.
///
/// With [`ReplayPolicy::Unbounded`] the buffer grows for as long as the
/// source emits; bounding long-lived sources is the caller's responsibility.
pub struct ReplayShared<T: Clone + Send + Sync + 'static> {
    subject: ReplaySubject<T>,
    _task: Option<ForwardTask>,
}

impl<T: Clone + Send + Sync + 'static> ReplayShared<T> {
    /// Creates a new `ReplayShared` from a source stream and a replay policy.
    ///
    /// Activation semantics are identical to
    /// [`SyncShared::new`](crate::SyncShared::new), except that drained items
    /// land in the replay buffer instead of being discarded.
    ///
    /// Prefer [`SyncReplayExt::sync_replay()`] over calling this directly.
    pub fn new<S>(source: S, policy: ReplayPolicy) -> Self
    where
        S: Stream<Item = StreamItem<T>> + Send + Unpin + 'static,
    {
        let subject = ReplaySubject::new(policy);
        let task = activate(source, subject.clone());

        Self {
            subject,
            _task: task,
        }
    }

    /// Subscribe to this shared source and receive a stream of items.
    ///
    /// The stream starts with the buffered values, then live items. Never
    /// fails; after the source terminated the stream carries the buffer
    /// followed by the terminal signal.
    pub fn subscribe(&self) -> SubjectBoxStream<T> {
        self.subject.subscribe()
    }

    /// Returns `true` if the source has completed or errored.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.subject.is_closed()
    }

    /// Returns the number of currently buffered values.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.subject.buffered_len()
    }

    /// Returns the number of currently active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }
}

impl<T: Clone + Send + Sync + 'static> Drop for ReplayShared<T> {
    fn drop(&mut self) {
        self.subject.close();
    }
}

/// Extension trait providing [`sync_replay()`](Self::sync_replay) on item
/// streams.
pub trait SyncReplayExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone + Send + Sync + 'static,
{
    /// Converts this stream into an eagerly-activated, multi-subscriber
    /// source that replays buffered values to late subscribers.
    ///
    /// The stream starts running inside this call, regardless of whether
    /// anyone ever subscribes.
    fn sync_replay(self, policy: ReplayPolicy) -> ReplayShared<T>
    where
        Self: Send + Unpin + 'static,
    {
        ReplayShared::new(self, policy)
    }
}

impl<S, T> SyncReplayExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Sized,
    T: Clone + Send + Sync + 'static,
{
}
