// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation through the no-replay `sync` bridge.

use futures::StreamExt;
use syncro_stream::{StreamItem, SyncExt, SyncroError};
use syncro_test_utils::{test_channel_with_errors, unwrap_error, unwrap_stream, unwrap_value};

#[tokio::test]
async fn source_error_reaches_live_subscribers_and_terminates() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = test_channel_with_errors::<i32>();
    let shared = source.sync();
    let mut sub = shared.subscribe();

    // Act
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(SyncroError::stream_error("boom")))?;

    // Assert - value, then the error, then stream end
    assert_eq!(unwrap_value(unwrap_stream(&mut sub, 500).await), 1);
    let err = unwrap_error(unwrap_stream(&mut sub, 500).await);
    assert!(matches!(
        err,
        SyncroError::StreamProcessingError { ref context } if context == "boom"
    ));
    assert_eq!(sub.next().await, None);
    assert!(shared.is_closed());
    Ok(())
}

#[tokio::test]
async fn late_subscriber_after_error_receives_error_only() -> anyhow::Result<()> {
    // Arrange - the error is already queued when the bridge is built
    let (tx, source) = test_channel_with_errors::<i32>();
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(SyncroError::stream_error("boom")))?;

    // Act - eager drain discards the value and terminalizes on the error
    let shared = source.sync();

    // Assert - every late attachment gets the same terminal signal
    for _ in 0..2 {
        let mut sub = shared.subscribe();
        let err = unwrap_error(unwrap_stream(&mut sub, 500).await);
        assert!(matches!(err, SyncroError::StreamProcessingError { .. }));
        assert_eq!(sub.next().await, None);
    }
    Ok(())
}

#[tokio::test]
async fn values_queued_after_an_error_are_never_delivered() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = test_channel_with_errors::<i32>();
    tx.send(StreamItem::Error(SyncroError::stream_error("boom")))?;
    tx.send(StreamItem::Value(2))?;

    // Act
    let shared = source.sync();
    let mut sub = shared.subscribe();

    // Assert - the relay stopped at the error
    assert!(unwrap_stream(&mut sub, 500).await.is_error());
    assert_eq!(sub.next().await, None);
    Ok(())
}
