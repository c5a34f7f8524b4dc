// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory event store
//!
//! Streams live in a `HashMap` behind a `tokio::sync::RwLock`. Appends take
//! the write lock for the whole batch, which makes them atomic.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{EventStore, StoredEvent};
use crate::errors::{NotaryError, NotaryResult};
use crate::events::StarEvent;

/// Volatile event store
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    streams: RwLock<HashMap<Uuid, Vec<StoredEvent<StarEvent>>>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of events across all streams
    pub async fn len(&self) -> usize {
        self.streams.read().await.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(
        &self,
        aggregate_id: Uuid,
        events: Vec<StarEvent>,
        expected_version: Option<u64>,
    ) -> NotaryResult<u64> {
        let mut streams = self.streams.write().await;
        let stream = streams.entry(aggregate_id).or_default();
        let current = stream.len() as u64;

        if let Some(expected) = expected_version {
            if expected != current {
                return Err(NotaryError::Concurrency {
                    expected,
                    actual: current,
                });
            }
        }

        let mut sequence = current;
        for event in events {
            sequence += 1;
            debug!(
                %aggregate_id,
                sequence,
                event_type = event.event_type(),
                "Appending event"
            );
            stream.push(StoredEvent::wrap(aggregate_id, sequence, event));
        }

        Ok(sequence)
    }

    async fn read_events_from(
        &self,
        aggregate_id: Uuid,
        from_version: u64,
    ) -> NotaryResult<Vec<StoredEvent<StarEvent>>> {
        let streams = self.streams.read().await;
        Ok(streams
            .get(&aggregate_id)
            .map(|stream| {
                stream
                    .iter()
                    .filter(|stored| stored.sequence >= from_version)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn read_by_correlation(
        &self,
        correlation_id: Uuid,
    ) -> NotaryResult<Vec<StoredEvent<StarEvent>>> {
        let streams = self.streams.read().await;
        let mut events: Vec<_> = streams
            .values()
            .flatten()
            .filter(|stored| stored.correlation_id == correlation_id)
            .cloned()
            .collect();
        events.sort_by_key(|stored| (stored.timestamp, stored.sequence));
        Ok(events)
    }

    async fn get_version(&self, aggregate_id: Uuid) -> NotaryResult<Option<u64>> {
        let streams = self.streams.read().await;
        Ok(streams
            .get(&aggregate_id)
            .and_then(|stream| stream.last())
            .map(|stored| stored.sequence))
    }

    async fn read_events_by_time_range(
        &self,
        aggregate_id: Uuid,
        from_time: DateTime<Utc>,
        to_time: DateTime<Utc>,
    ) -> NotaryResult<Vec<StoredEvent<StarEvent>>> {
        let streams = self.streams.read().await;
        Ok(streams
            .get(&aggregate_id)
            .map(|stream| {
                stream
                    .iter()
                    .filter(|stored| stored.timestamp >= from_time && stored.timestamp <= to_time)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
