// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation through the replaying `sync_replay` bridge.

use futures::StreamExt;
use syncro_stream::{ReplayPolicy, StreamItem, SyncReplayExt, SyncroError};
use syncro_test_utils::{test_channel_with_errors, unwrap_error, unwrap_stream, unwrap_value};

#[tokio::test]
async fn late_subscriber_gets_buffer_then_error() -> anyhow::Result<()> {
    // Arrange - values and the error are queued before construction
    let (tx, source) = test_channel_with_errors::<i32>();
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Value(2))?;
    tx.send(StreamItem::Error(SyncroError::stream_error("boom")))?;

    // Act
    let shared = source.sync_replay(ReplayPolicy::Unbounded);

    // Assert - buffered values are not fabricated away by the error; every
    // late attachment replays them followed by the same terminal signal
    for _ in 0..2 {
        let mut sub = shared.subscribe();
        assert_eq!(unwrap_value(unwrap_stream(&mut sub, 500).await), 1);
        assert_eq!(unwrap_value(unwrap_stream(&mut sub, 500).await), 2);
        let err = unwrap_error(unwrap_stream(&mut sub, 500).await);
        assert!(matches!(
            err,
            SyncroError::StreamProcessingError { ref context } if context == "boom"
        ));
        assert_eq!(sub.next().await, None);
    }
    assert!(shared.is_closed());
    Ok(())
}

#[tokio::test]
async fn live_subscriber_gets_buffer_then_live_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = test_channel_with_errors::<i32>();
    tx.send(StreamItem::Value(1))?;

    let shared = source.sync_replay(ReplayPolicy::Last(4));
    let mut sub = shared.subscribe();

    // Act
    tx.send(StreamItem::Value(2))?;
    tx.send(StreamItem::Error(SyncroError::stream_error("boom")))?;

    // Assert
    assert_eq!(unwrap_value(unwrap_stream(&mut sub, 500).await), 1);
    assert_eq!(unwrap_value(unwrap_stream(&mut sub, 500).await), 2);
    assert!(unwrap_stream(&mut sub, 500).await.is_error());
    assert_eq!(sub.next().await, None);
    Ok(())
}

#[tokio::test]
async fn bounded_buffer_still_applies_before_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = test_channel_with_errors::<i32>();
    for v in 1..=4 {
        tx.send(StreamItem::Value(v))?;
    }
    tx.send(StreamItem::Error(SyncroError::stream_error("boom")))?;

    // Act
    let shared = source.sync_replay(ReplayPolicy::Last(2));
    let mut sub = shared.subscribe();

    // Assert - eviction happened before the terminal transition
    assert_eq!(unwrap_value(unwrap_stream(&mut sub, 500).await), 3);
    assert_eq!(unwrap_value(unwrap_stream(&mut sub, 500).await), 4);
    assert!(unwrap_stream(&mut sub, 500).await.is_error());
    assert_eq!(sub.next().await, None);
    Ok(())
}
