// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Eager, no-replay multicast bridge.
//!
//! A [`SyncShared`] converts a cold stream into a hot, multi-subscriber
//! source. The source is consumed **exactly once, starting at construction**,
//! and each item is broadcast to all subscribers attached at that moment.
//!
//! ## Characteristics
//!
//! - **Eager**: The source is activated inside [`SyncShared::new`], not on
//!   first subscription. Items the source can emit synchronously are consumed
//!   before the constructor returns.
//! - **Hot**: Late subscribers do not receive past items, only items emitted
//!   after subscribing. After the source terminated, late subscribers receive
//!   only the terminal signal.
//! - **Subscription factory**: Call [`subscribe()`](SyncShared::subscribe) to
//!   create independent subscriber streams; dropping one never affects the
//!   others or the source.
//! - **Owned lifecycle**: The forwarding task is owned and cancelled when the
//!   bridge is dropped.
//!
//! ## Example
//!
//! ```
//! use syncro_stream::SyncExt;
//! use syncro_core::StreamItem;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
//! let source = tokio_stream::wrappers::UnboundedReceiverStream::new(rx)
//!     .map(StreamItem::Value);
//!
//! let shared = source.sync();
//! let mut sub = shared.subscribe();
//!
//! tx.send(7).unwrap();
//! assert_eq!(sub.next().await, Some(StreamItem::Value(7)));
//! # }
//! ```

use crate::relay::activate;
use crate::task::ForwardTask;
use futures::Stream;
use syncro_core::{StreamItem, Subject, SubjectBoxStream};

/// An eagerly-activated shared stream without replay.
///
/// Created by [`SyncExt::sync()`]. This is a **subscription factory**, not a
/// stream itself; call [`subscribe()`](Self::subscribe) to obtain item
/// streams.
///
/// See the [module documentation](self) for examples and more details.
pub struct SyncShared<T: Clone + Send + Sync + 'static> {
    subject: Subject<T>,
    _task: Option<ForwardTask>,
}

impl<T: Clone + Send + Sync + 'static> SyncShared<T> {
    /// Creates a new `SyncShared` from a source stream.
    ///
    /// This is the single activation point: already-ready items are drained
    /// (and discarded, there being no subscribers yet) before this returns,
    /// and a forwarding task takes over the pending remainder.
    ///
    /// Prefer [`SyncExt::sync()`] over calling this directly.
    pub fn new<S>(source: S) -> Self
    where
        S: Stream<Item = StreamItem<T>> + Send + Unpin + 'static,
    {
        let subject = Subject::new();
        let task = activate(source, subject.clone());

        Self {
            subject,
            _task: task,
        }
    }

    /// Subscribe to this shared source and receive a stream of items.
    ///
    /// Late subscribers do not receive previously emitted items. Subscribing
    /// never fails; after the source terminated the returned stream carries
    /// only the terminal signal.
    pub fn subscribe(&self) -> SubjectBoxStream<T> {
        self.subject.subscribe()
    }

    /// Returns `true` if the source has completed or errored.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.subject.is_closed()
    }

    /// Returns the number of currently active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }
}

impl<T: Clone + Send + Sync + 'static> Drop for SyncShared<T> {
    fn drop(&mut self) {
        self.subject.close();
    }
}

/// Extension trait providing [`sync()`](Self::sync) on item streams.
pub trait SyncExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone + Send + Sync + 'static,
{
    /// Converts this stream into an eagerly-activated, multi-subscriber
    /// source without replay.
    ///
    /// The stream starts running inside this call, regardless of whether
    /// anyone ever subscribes.
    fn sync(self) -> SyncShared<T>
    where
        Self: Send + Unpin + 'static,
    {
        SyncShared::new(self)
    }
}

impl<S, T> SyncExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Sized,
    T: Clone + Send + Sync + 'static,
{
}
