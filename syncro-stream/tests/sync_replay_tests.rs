// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Behavioral tests for the replaying `sync_replay` bridge.

use futures::stream;
use syncro_stream::{ReplayPolicy, StreamItem, SyncReplayExt};
use syncro_test_utils::{collect_values, test_channel, unwrap_stream, unwrap_value};

#[tokio::test]
async fn replays_last_two_values_to_late_subscriber() -> anyhow::Result<()> {
    // Arrange - source completes inside sync_replay()
    let source = stream::iter([1, 2, 3, 4].map(StreamItem::Value));

    // Act
    let shared = source.sync_replay(ReplayPolicy::Last(2));
    let values = collect_values(shared.subscribe()).await;

    // Assert - last two values in original order, then completion
    assert_eq!(values, vec![3, 4]);
    Ok(())
}

#[tokio::test]
async fn unbounded_policy_replays_everything() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter([1, 2, 3, 4, 5].map(StreamItem::Value));

    // Act
    let shared = source.sync_replay(ReplayPolicy::Unbounded);

    // Assert
    assert_eq!(collect_values(shared.subscribe()).await, vec![1, 2, 3, 4, 5]);
    assert_eq!(shared.buffered_len(), 5);
    Ok(())
}

#[tokio::test]
async fn last_zero_buffers_nothing_but_replays_completion() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter([1, 2, 3].map(StreamItem::Value));

    // Act
    let shared = source.sync_replay(ReplayPolicy::Last(0));

    // Assert
    assert!(collect_values(shared.subscribe()).await.is_empty());
    assert!(shared.is_closed());
    Ok(())
}

#[tokio::test]
async fn subscriber_gets_buffer_then_live_items() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = test_channel::<i32>();
    tx.send(1)?;
    tx.send(2)?;
    tx.send(3)?;

    // Act - 1..=3 are drained into the buffer at construction
    let shared = source.sync_replay(ReplayPolicy::Last(2));
    let mut early = shared.subscribe();

    // Assert - replayed prefix is the bounded buffer, in original order
    assert_eq!(unwrap_value(unwrap_stream(&mut early, 500).await), 2);
    assert_eq!(unwrap_value(unwrap_stream(&mut early, 500).await), 3);

    // Live item follows the replayed prefix
    tx.send(4)?;
    assert_eq!(unwrap_value(unwrap_stream(&mut early, 500).await), 4);

    // A later subscriber sees the shifted window
    let late = shared.subscribe();
    drop(tx);
    assert_eq!(collect_values(late).await, vec![3, 4]);
    Ok(())
}

#[tokio::test]
async fn repeated_late_subscriptions_replay_the_same_buffer() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter([1, 2, 3, 4].map(StreamItem::Value));
    let shared = source.sync_replay(ReplayPolicy::Last(2));

    // Act / Assert - terminal idempotence, no second source activation
    for _ in 0..3 {
        assert_eq!(collect_values(shared.subscribe()).await, vec![3, 4]);
    }
    assert_eq!(shared.subscriber_count(), 0);
    assert_eq!(shared.buffered_len(), 2);
    Ok(())
}
