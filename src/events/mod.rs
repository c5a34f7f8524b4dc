// Copyright (c) 2025 - Cowboy AI, Inc.
//! Star Notary Domain Events
//!
//! Events are immutable facts representing state changes that have occurred.
//!
//! # Event Flow
//!
//! ```text
//! Command → Handler → Event → EventStore → apply_event → RegistryState
//!  (intent)  (validate)  (fact)   (append)        (fold)
//! ```
//!
//! # Correlation and Causation
//!
//! - **correlation_id**: groups events of one request flow
//! - **causation_id**: direct parent event, if any
//!
//! All events start at `event_version` 1.

pub mod star;

pub use star::{
    EventMeta, StarCreated, StarEvent, StarListed, StarPurchased, StarTransferred,
    StarsExchanged, EVENT_VERSION,
};
