// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared activation machinery for the two bridges.
//!
//! Both bridges are "a relay fed by a single source activation"; they differ
//! only in the relay's replay behavior. [`activate`] implements the common
//! part: the synchronous eager drain followed by the spawned forwarding task.

use crate::task::ForwardTask;
use futures::{FutureExt, Stream, StreamExt};
use syncro_core::{ReplaySubject, StreamItem, Subject, SubjectError, SyncroError};

/// Push side of a relay, as seen by the forwarding loop.
pub(crate) trait RelaySink<T>: Clone + Send + 'static {
    fn forward(&self, value: T) -> Result<(), SubjectError>;
    fn fail(&self, err: SyncroError);
    fn finish(&self);
}

impl<T: Clone + Send + Sync + 'static> RelaySink<T> for Subject<T> {
    fn forward(&self, value: T) -> Result<(), SubjectError> {
        self.next(value)
    }

    fn fail(&self, err: SyncroError) {
        let _ = self.error(err);
    }

    fn finish(&self) {
        self.close();
    }
}

impl<T: Clone + Send + Sync + 'static> RelaySink<T> for ReplaySubject<T> {
    fn forward(&self, value: T) -> Result<(), SubjectError> {
        self.next(value)
    }

    fn fail(&self, err: SyncroError) {
        let _ = self.error(err);
    }

    fn finish(&self) {
        self.close();
    }
}

/// Activates `source` exactly once, feeding every item into `relay`.
///
/// Already-ready items are drained before this function returns; the caller's
/// subscribers therefore cannot observe values the source emitted
/// synchronously at construction. If the source terminated during the drain,
/// the relay is terminalized and no task is spawned.
///
/// A source that is infinite *and* always ready never yields the drain loop;
/// keeping such a source out of the bridge is the caller's responsibility.
pub(crate) fn activate<T, S, R>(mut source: S, relay: R) -> Option<ForwardTask>
where
    T: Clone + Send + Sync + 'static,
    S: Stream<Item = StreamItem<T>> + Send + Unpin + 'static,
    R: RelaySink<T>,
{
    // Synchronous activation point.
    loop {
        match source.next().now_or_never() {
            Some(Some(StreamItem::Value(v))) => {
                if relay.forward(v).is_err() {
                    return None;
                }
            }
            Some(Some(StreamItem::Error(e))) => {
                tracing::debug!(error = %e, "source errored during eager drain");
                relay.fail(e);
                return None;
            }
            Some(None) => {
                tracing::trace!("source completed during eager drain");
                relay.finish();
                return None;
            }
            // Source is pending; hand the remainder to the forwarding task.
            None => break,
        }
    }

    Some(ForwardTask::spawn(move |cancel| async move {
        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::trace!("bridge dropped, forwarding task stopping");
                    break;
                }
                item = source.next() => match item {
                    Some(StreamItem::Value(v)) => {
                        if relay.forward(v).is_err() {
                            break;
                        }
                    }
                    Some(StreamItem::Error(e)) => {
                        tracing::debug!(error = %e, "forwarding source error");
                        relay.fail(e);
                        break;
                    }
                    None => {
                        tracing::trace!("source completed");
                        break;
                    }
                },
            }
        }
        relay.finish();
    }))
}
