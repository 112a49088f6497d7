// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Eager multicast bridges for async Rust streams.
//!
//! This crate provides two operators that turn a cold stream into a hot,
//! multi-subscriber source whose consumption starts **at construction**, not
//! at first subscription:
//!
//! - [`sync`](SyncExt::sync) — no replay; subscribers observe only items
//!   emitted after they attach ("live participation only").
//! - [`sync_replay`](SyncReplayExt::sync_replay) — replays up to
//!   [`ReplayPolicy`]-many past values (and the terminal signal) to every
//!   subscriber, however late.
//!
//! Ordinary share-style wrappers activate lazily on first subscription, which
//! makes timer-driven sources start late or restart per subscriber. The
//! bridges here activate exactly once, eagerly: already-ready items are
//! drained synchronously inside the constructor, and a background task owned
//! by the bridge forwards the rest.
//!
//! # Example
//!
//! ```
//! use syncro_stream::{ReplayPolicy, SyncReplayExt};
//! use futures::{stream, StreamExt};
//! use syncro_core::StreamItem;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = stream::iter([1, 2, 3, 4].map(StreamItem::Value));
//!
//! // The source runs (and completes) right here.
//! let shared = source.sync_replay(ReplayPolicy::Last(2));
//!
//! // A late subscriber still sees the last two values.
//! let values: Vec<_> = shared
//!     .subscribe()
//!     .filter_map(|item| async move { item.ok() })
//!     .collect()
//!     .await;
//! assert_eq!(values, vec![3, 4]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod relay;
mod task;

pub mod prelude;
pub mod sync;
pub mod sync_replay;
pub mod syncro_stream;

pub use self::sync::{SyncExt, SyncShared};
pub use self::sync_replay::{ReplayShared, SyncReplayExt};
pub use self::syncro_stream::SyncroStream;

// Re-export the core types the operator signatures are built from.
pub use syncro_core::{ReplayPolicy, StreamItem, SubjectBoxStream, SyncroError};
