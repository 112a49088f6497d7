// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::sync::SyncShared;
use crate::sync_replay::ReplayShared;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};
use syncro_core::{ReplayPolicy, StreamItem};
use tokio_stream::wrappers::UnboundedReceiverStream;

/// A concrete wrapper type that provides the syncro operators as methods.
///
/// `SyncroStream` wraps any item stream and exposes [`sync()`](Self::sync)
/// and [`sync_replay()`](Self::sync_replay) directly, for callers that prefer
/// method chaining on a named type over importing the extension traits.
///
/// # Example
///
/// ```rust
/// use syncro_stream::SyncroStream;
/// use syncro_core::StreamItem;
/// use futures::stream;
///
/// # #[tokio::main]
/// # async fn main() {
/// let stream = SyncroStream::new(stream::iter([1, 2, 3].map(StreamItem::Value)));
/// let shared = stream.sync();
/// # }
/// ```
#[pin_project]
pub struct SyncroStream<S> {
    #[pin]
    inner: S,
}

impl<S> SyncroStream<S> {
    /// Wrap a stream in a `SyncroStream` wrapper.
    pub const fn new(stream: S) -> Self {
        Self { inner: stream }
    }

    /// Unwrap to get the inner stream.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Creates a `SyncroStream` from any existing stream.
    ///
    /// This is an alias for `SyncroStream::new()` but may be more
    /// discoverable.
    pub fn from_stream(stream: S) -> Self {
        SyncroStream::new(stream)
    }
}

type WrapValue<T> = fn(T) -> StreamItem<T>;

// Separate impl for the constructor that changes the type parameter
impl SyncroStream<()> {
    /// Creates a `SyncroStream` of items from a tokio unbounded receiver.
    ///
    /// Received values are wrapped in `StreamItem::Value`, making the result
    /// directly usable with [`sync()`](SyncroStream::sync) and
    /// [`sync_replay()`](SyncroStream::sync_replay).
    ///
    /// # Example
    ///
    /// ```rust
    /// use syncro_stream::SyncroStream;
    /// use tokio::sync::mpsc;
    ///
    /// let (tx, rx) = mpsc::unbounded_channel::<i32>();
    /// let stream = SyncroStream::from_unbounded_receiver(rx);
    /// ```
    pub fn from_unbounded_receiver<T>(
        receiver: tokio::sync::mpsc::UnboundedReceiver<T>,
    ) -> SyncroStream<futures::stream::Map<UnboundedReceiverStream<T>, WrapValue<T>>> {
        SyncroStream::new(UnboundedReceiverStream::new(receiver).map(StreamItem::Value as WrapValue<T>))
    }
}

impl<S, T> SyncroStream<S>
where
    S: Stream<Item = StreamItem<T>> + Send + Unpin + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Eagerly activates this stream and multicasts it without replay.
    ///
    /// Equivalent to [`SyncExt::sync()`](crate::SyncExt::sync).
    pub fn sync(self) -> SyncShared<T> {
        SyncShared::new(self.inner)
    }

    /// Eagerly activates this stream and multicasts it, replaying buffered
    /// values to late subscribers.
    ///
    /// Equivalent to
    /// [`SyncReplayExt::sync_replay()`](crate::SyncReplayExt::sync_replay).
    pub fn sync_replay(self, policy: ReplayPolicy) -> ReplayShared<T> {
        ReplayShared::new(self.inner, policy)
    }
}

impl<S> Stream for SyncroStream<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
