// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used traits and types.
//!
//! ```ignore
//! use syncro_stream::prelude::*;
//!
//! let live = source.sync();
//! let replayed = other_source.sync_replay(ReplayPolicy::Last(8));
//! ```

pub use crate::sync::{SyncExt, SyncShared};
pub use crate::sync_replay::{ReplayShared, SyncReplayExt};
pub use crate::syncro_stream::SyncroStream;
pub use syncro_core::{ReplayPolicy, StreamItem, SyncroError};
