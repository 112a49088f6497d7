// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! End-to-end smoke tests through the umbrella crate's public API.

use futures::stream;
use syncro::{ReplayPolicy, StreamItem, Subject, SyncExt, SyncReplayExt};
use syncro_test_utils::{collect_values, test_channel, unwrap_stream, unwrap_value};

#[tokio::test]
async fn sync_and_sync_replay_are_reachable_from_the_facade() -> anyhow::Result<()> {
    // Arrange
    let live = stream::iter([1, 2].map(StreamItem::Value)).sync();
    let replayed = stream::iter([1, 2].map(StreamItem::Value)).sync_replay(ReplayPolicy::Last(1));

    // Assert
    assert!(collect_values(live.subscribe()).await.is_empty());
    assert_eq!(collect_values(replayed.subscribe()).await, vec![2]);
    Ok(())
}

#[tokio::test]
async fn a_bridge_output_can_be_rewrapped() -> anyhow::Result<()> {
    // Arrange - a subscription stream is itself a valid bridge source
    let (tx, source) = test_channel::<i32>();
    let first = source.sync_replay(ReplayPolicy::Unbounded);
    let second = first.subscribe().sync_replay(ReplayPolicy::Unbounded);

    // Act
    tx.send(1)?;
    tx.send(2)?;
    drop(tx);

    // Assert
    assert_eq!(collect_values(second.subscribe()).await, vec![1, 2]);
    Ok(())
}

#[tokio::test]
async fn subjects_are_usable_directly() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let mut sub = subject.subscribe();

    // Act
    subject.next(5)?;

    // Assert
    assert_eq!(unwrap_value(unwrap_stream(&mut sub, 500).await), 5);
    Ok(())
}
