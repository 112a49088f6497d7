// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the syncro workspace.
//!
//! This crate provides push-style test channels and assertion helpers for
//! testing the eager multicast bridges. It is for development and testing
//! only, not for production code.
//!
//! # Architecture
//!
//! Syncro keeps a clean separation between production and test code:
//!
//! - **Production**: streams are composed functionally and handed to the
//!   bridges.
//! - **Testing**: `test_channel()` gives the test a sender so values (and,
//!   with `test_channel_with_errors()`, errors) can be pushed imperatively at
//!   chosen points of the scenario.
//!
//! # Example
//!
//! ```rust
//! use syncro_test_utils::{test_channel, unwrap_stream, unwrap_value};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, mut stream) = test_channel::<i32>();
//! tx.send(42).unwrap();
//!
//! let value = unwrap_value(unwrap_stream(&mut stream, 500).await);
//! assert_eq!(value, 42);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;

use futures::{Stream, StreamExt};
use syncro_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{
    assert_no_element_emitted, collect_values, unwrap_error, unwrap_stream, unwrap_value,
};

/// Creates a test channel that automatically wraps values in
/// `StreamItem::Value`.
///
/// Tests send plain values; the stream side receives `StreamItem<T>` and is
/// `Send + Unpin + 'static`, so it can be handed directly to the bridges.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin + 'static,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>`, for testing error
/// propagation.
///
/// Unlike [`test_channel`], the sender side chooses per item whether to send
/// a value or an error.
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin + 'static,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
