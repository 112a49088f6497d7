// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Syncro
//!
//! Eager multicast operators for async Rust streams.
//!
//! ## Overview
//!
//! A stream wrapped by an ordinary share-style operator starts running when
//! the first subscriber attaches. For timer-driven or otherwise
//! time-sensitive sources that is too late: the work starts on subscription
//! and, with naive sharing, restarts per subscriber. Syncro's two operators
//! commit to the opposite activation policy, documented as part of their
//! contract:
//!
//! - [`sync()`](SyncExt::sync) activates the source **at construction** and
//!   multicasts each item to whoever is subscribed at that moment. Late
//!   subscribers see only live items.
//! - [`sync_replay()`](SyncReplayExt::sync_replay) does the same, but hands
//!   every subscriber a replay of up to [`ReplayPolicy`]-many past values
//!   (and the terminal signal) first.
//!
//! ## Quick Start
//!
//! ```rust
//! use syncro::{ReplayPolicy, StreamItem, SyncReplayExt};
//! use futures::{stream, StreamExt};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = stream::iter([1, 2, 3, 4].map(StreamItem::Value));
//!
//!     // Runs (and here, completes) immediately.
//!     let shared = source.sync_replay(ReplayPolicy::Last(2));
//!
//!     let mut sub = shared.subscribe();
//!     assert_eq!(sub.next().await, Some(StreamItem::Value(3)));
//!     assert_eq!(sub.next().await, Some(StreamItem::Value(4)));
//!     assert_eq!(sub.next().await, None);
//! }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

// Re-export core types
pub use syncro_core::{
    ReplayPolicy, ReplaySubject, Result, StreamItem, Subject, SubjectBoxStream, SubjectError,
    SyncroError,
};

// Re-export the operators and the wrapper type
pub use syncro_stream::{ReplayShared, SyncExt, SyncReplayExt, SyncShared, SyncroStream};
