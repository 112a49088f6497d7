// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Assertion and extraction helpers for item streams.

use futures::{Stream, StreamExt};
use std::time::Duration;
use syncro_core::{StreamItem, SyncroError};
use tokio::time::sleep;

/// Asserts that `stream` emits nothing within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected item emitted, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Awaits the next item, panicking if the stream ends or `timeout_ms` passes
/// first.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    tokio::select! {
        item = stream.next() => item.expect("stream ended, expected next item"),
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("timed out after {timeout_ms}ms waiting for next item")
        }
    }
}

/// Extracts the value from an item, panicking on an error item.
pub fn unwrap_value<T>(item: StreamItem<T>) -> T {
    item.expect("expected value item")
}

/// Extracts the error from an item, panicking on a value item.
pub fn unwrap_error<T: std::fmt::Debug>(item: StreamItem<T>) -> SyncroError {
    match item {
        StreamItem::Error(e) => e,
        StreamItem::Value(v) => panic!("expected error item, got value {v:?}"),
    }
}

/// Drains `stream` to completion, collecting values and panicking if an error
/// item is encountered.
pub async fn collect_values<S, T>(stream: S) -> Vec<T>
where
    S: Stream<Item = StreamItem<T>>,
{
    stream
        .map(|item| item.expect("expected value item"))
        .collect()
        .await
}
