// Copyright (c) 2025 - Cowboy AI, Inc.
//! Star Registry Domain Events
//!
//! Every accepted command produces exactly one of these facts. They are
//! immutable, named in past tense and carry [`EventMeta`] for tracing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Amount, Identity, StarId, StarName, StarSymbol};

/// Current schema version of all star events
pub const EVENT_VERSION: u32 = 1;

/// Metadata shared by every star event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeta {
    /// Event version for schema evolution
    pub event_version: u32,

    /// Unique event identifier (UUID v7 for time ordering)
    pub event_id: Uuid,

    /// When this event occurred
    pub timestamp: DateTime<Utc>,

    /// Correlation ID for request tracing
    pub correlation_id: Uuid,

    /// Causation ID (event that caused this event)
    pub causation_id: Option<Uuid>,
}

impl EventMeta {
    /// Build metadata for a freshly decided event
    pub fn new(timestamp: DateTime<Utc>, correlation_id: Uuid, causation_id: Option<Uuid>) -> Self {
        Self {
            event_version: EVENT_VERSION,
            event_id: Uuid::now_v7(),
            timestamp,
            correlation_id,
            causation_id,
        }
    }
}

/// Star registry events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StarEvent {
    /// A new star was minted
    StarCreated(StarCreated),

    /// Owner handed the star to another identity
    StarTransferred(StarTransferred),

    /// Two stars swapped owners
    StarsExchanged(StarsExchanged),

    /// Owner offered the star for sale
    StarListed(StarListed),

    /// A buyer paid for a listed star
    StarPurchased(StarPurchased),
}

impl StarEvent {
    pub fn meta(&self) -> &EventMeta {
        match self {
            StarEvent::StarCreated(e) => &e.meta,
            StarEvent::StarTransferred(e) => &e.meta,
            StarEvent::StarsExchanged(e) => &e.meta,
            StarEvent::StarListed(e) => &e.meta,
            StarEvent::StarPurchased(e) => &e.meta,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.meta().event_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.meta().timestamp
    }

    pub fn correlation_id(&self) -> Uuid {
        self.meta().correlation_id
    }

    /// Snake-case type tag, identical to the serialized `type` field
    pub fn event_type(&self) -> &'static str {
        match self {
            StarEvent::StarCreated(_) => "star_created",
            StarEvent::StarTransferred(_) => "star_transferred",
            StarEvent::StarsExchanged(_) => "stars_exchanged",
            StarEvent::StarListed(_) => "star_listed",
            StarEvent::StarPurchased(_) => "star_purchased",
        }
    }

    /// Stars touched by this event
    pub fn star_ids(&self) -> Vec<StarId> {
        match self {
            StarEvent::StarCreated(e) => vec![e.star_id],
            StarEvent::StarTransferred(e) => vec![e.star_id],
            StarEvent::StarsExchanged(e) => vec![e.star_a, e.star_b],
            StarEvent::StarListed(e) => vec![e.star_id],
            StarEvent::StarPurchased(e) => vec![e.star_id],
        }
    }
}

/// Star was minted and assigned to its creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarCreated {
    #[serde(flatten)]
    pub meta: EventMeta,

    pub star_id: StarId,
    pub name: StarName,
    pub symbol: StarSymbol,

    /// Creator, first owner of the star
    pub owner: Identity,
}

/// Ownership moved from `from` to `to`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarTransferred {
    #[serde(flatten)]
    pub meta: EventMeta,

    pub star_id: StarId,
    pub from: Identity,
    pub to: Identity,
}

/// Owners of two stars were swapped
///
/// `owner_a` / `owner_b` are the owners before the swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarsExchanged {
    #[serde(flatten)]
    pub meta: EventMeta,

    pub star_a: StarId,
    pub star_b: StarId,
    pub owner_a: Identity,
    pub owner_b: Identity,
}

/// Star was put up for sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarListed {
    #[serde(flatten)]
    pub meta: EventMeta,

    pub star_id: StarId,
    pub seller: Identity,
    pub price: Amount,
}

/// Listed star was bought
///
/// The seller is credited exactly `price`; the buyer gets `change` back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarPurchased {
    #[serde(flatten)]
    pub meta: EventMeta,

    pub star_id: StarId,
    pub seller: Identity,
    pub buyer: Identity,
    pub price: Amount,
    pub payment: Amount,
    pub change: Amount,
}
