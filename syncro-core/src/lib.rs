// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for the syncro eager multicast operators.
//!
//! This crate provides the building blocks the `syncro-stream` bridges are
//! assembled from:
//!
//! - [`StreamItem`] — Rx-style stream items (`Value` or terminating `Error`)
//! - [`SyncroError`] — the library error type
//! - [`Subject`] — a hot, no-replay multicast point
//! - [`ReplaySubject`] — a multicast point that replays a bounded buffer of
//!   past values (and the terminal signal) to late subscribers
//! - [`ReplayPolicy`] — named replay configuration
//!
//! Subjects are push-based: producers call [`Subject::next`] /
//! [`Subject::error`] / [`Subject::close`], and every subscriber obtains an
//! independent item stream via `subscribe()`. Subscribing never fails; a
//! subject that already terminated hands out a pre-terminated stream.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod replay_subject;
pub mod stream_item;
pub mod subject;
pub mod subject_error;

pub use self::error::{Result, SyncroError};
pub use self::replay_subject::{ReplayPolicy, ReplaySubject};
pub use self::stream_item::StreamItem;
pub use self::subject::{Subject, SubjectBoxStream};
pub use self::subject_error::SubjectError;
