// Copyright (c) 2025 - Cowboy AI, Inc.
//! Commands for the Star Registry Aggregate
//!
//! Commands express intent and can be rejected. Each one names the acting
//! identity explicitly; there is no ambient caller.
//!
//! # Time Handling
//!
//! All commands include an explicit `timestamp`.
//! **NEVER call `Utc::now()` in domain logic**.
//! Time is passed from the application layer.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Amount, Identity};

/// Mint a new star
///
/// Name, symbol and id arrive unvalidated so the handler can reject them
/// with `InvalidArgument`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStarCommand {
    pub name: String,
    pub symbol: String,
    pub star_id: u64,

    /// Caller, becomes the owner
    pub creator: Identity,

    /// Timestamp when command was issued (explicit time parameter)
    pub timestamp: DateTime<Utc>,

    /// Correlation ID for distributed tracing
    pub correlation_id: Uuid,
}

/// Hand a star to another identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferStarCommand {
    pub star_id: u64,
    pub destination: Identity,

    /// Must be the current owner
    pub caller: Identity,

    pub timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub causation_id: Option<Uuid>,
}

/// Swap the owners of two stars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeStarsCommand {
    /// Star owned by the caller
    pub star_a: u64,

    /// Counterparty star; its owner is taken from registry state
    pub star_b: u64,

    pub caller: Identity,

    pub timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub causation_id: Option<Uuid>,
}

/// Offer a star for sale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStarCommand {
    pub star_id: u64,
    pub price: Amount,

    /// Must be the current owner
    pub caller: Identity,

    pub timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub causation_id: Option<Uuid>,
}

/// Buy a listed star with an attached payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseStarCommand {
    pub star_id: u64,
    pub buyer: Identity,

    /// Amount attached to the call; anything above the price is change
    pub payment: Amount,

    pub timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub causation_id: Option<Uuid>,
}
