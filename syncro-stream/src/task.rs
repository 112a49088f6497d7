// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Owned handle for the forwarding task, with cancellation on drop.

use core::future::Future;
use tokio_util::sync::CancellationToken;

/// Handle for a spawned forwarding task.
///
/// The closure receives a [`CancellationToken`] that is triggered when the
/// handle is dropped, letting the task shut down cooperatively instead of
/// being aborted mid-broadcast.
#[derive(Debug)]
pub(crate) struct ForwardTask {
    cancel: CancellationToken,
}

impl ForwardTask {
    pub(crate) fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }
}

impl Drop for ForwardTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
