// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Store Abstraction
//!
//! Storage interface for star events.
//!
//! ```text
//! Command → Aggregate → Events → EventStore
//!                                    ↓
//!                                 Replay
//! ```
//!
//! # Event Store Requirements
//!
//! 1. **Append-Only**: Events are never updated or deleted
//! 2. **Ordered**: Sequences start at 1 and have no gaps per aggregate
//! 3. **Correlation**: Events can be traced by correlation id
//! 4. **Replay**: State can be rebuilt from the stored stream

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::NotaryResult;
use crate::events::StarEvent;

pub mod memory;

pub use memory::InMemoryEventStore;

/// Envelope around a persisted event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEvent<E> {
    /// Unique event ID
    pub event_id: Uuid,

    /// Aggregate ID this event belongs to
    pub aggregate_id: Uuid,

    /// Sequence number within aggregate stream (1-based)
    pub sequence: u64,

    /// Event timestamp (when it occurred)
    pub timestamp: DateTime<Utc>,

    /// Correlation ID (tracks related events)
    pub correlation_id: Uuid,

    /// Event type name
    pub event_type: String,

    /// The actual domain event data
    pub data: E,
}

impl StoredEvent<StarEvent> {
    /// Wrap a star event at the given sequence
    pub fn wrap(aggregate_id: Uuid, sequence: u64, event: StarEvent) -> Self {
        Self {
            event_id: event.event_id(),
            aggregate_id,
            sequence,
            timestamp: event.timestamp(),
            correlation_id: event.correlation_id(),
            event_type: event.event_type().to_string(),
            data: event,
        }
    }
}

/// Event Store trait for persisting and retrieving star events
///
/// Implementations must append a batch atomically: either every event of
/// the batch is stored or none is.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append events to an aggregate's stream
    ///
    /// `expected_version` enables optimistic concurrency: when given, it must
    /// equal the current version (0 for an empty stream).
    ///
    /// # Returns
    ///
    /// The new version after appending events
    ///
    /// # Errors
    ///
    /// - `Concurrency` if `expected_version` doesn't match
    async fn append(
        &self,
        aggregate_id: Uuid,
        events: Vec<StarEvent>,
        expected_version: Option<u64>,
    ) -> NotaryResult<u64>;

    /// Read all events for an aggregate in write order
    async fn read_events(&self, aggregate_id: Uuid) -> NotaryResult<Vec<StoredEvent<StarEvent>>> {
        self.read_events_from(aggregate_id, 1).await
    }

    /// Read events starting at `from_version` (inclusive)
    async fn read_events_from(
        &self,
        aggregate_id: Uuid,
        from_version: u64,
    ) -> NotaryResult<Vec<StoredEvent<StarEvent>>>;

    /// Read every event sharing a correlation id, across aggregates
    async fn read_by_correlation(
        &self,
        correlation_id: Uuid,
    ) -> NotaryResult<Vec<StoredEvent<StarEvent>>>;

    /// Current version of an aggregate, or None if it has no events
    async fn get_version(&self, aggregate_id: Uuid) -> NotaryResult<Option<u64>>;

    /// Read events with `from_time <= timestamp <= to_time`
    async fn read_events_by_time_range(
        &self,
        aggregate_id: Uuid,
        from_time: DateTime<Utc>,
        to_time: DateTime<Utc>,
    ) -> NotaryResult<Vec<StoredEvent<StarEvent>>>;
}
