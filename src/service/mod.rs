// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer
//!
//! The application service that orchestrates pure domain logic, the event
//! store and the balance ledger.
//!
//! ```text
//! Caller (explicit identity + payment)
//!     ↓
//! Service (this module, one critical section per operation)
//!     ↓
//! Handler → Event → Ledger settlement → Event Store → Subscribers
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::Utc;
//! use uuid::Uuid;
//! use star_notary::aggregate::CreateStarCommand;
//! use star_notary::config::NotaryConfig;
//! use star_notary::domain::Identity;
//! use star_notary::event_store::InMemoryEventStore;
//! use star_notary::ledger::InMemoryLedger;
//! use star_notary::service::{EventSourcedStarNotary, StarNotaryService};
//!
//! # tokio_test::block_on(async {
//! let notary = EventSourcedStarNotary::new(
//!     NotaryConfig::default(),
//!     Arc::new(InMemoryEventStore::new()),
//!     Arc::new(InMemoryLedger::new()),
//! );
//!
//! notary
//!     .create_star(CreateStarCommand {
//!         name: "Awesome Star".to_string(),
//!         symbol: "AWE".to_string(),
//!         star_id: 20,
//!         creator: Identity::new("acct0").unwrap(),
//!         timestamp: Utc::now(),
//!         correlation_id: Uuid::now_v7(),
//!     })
//!     .await
//!     .unwrap();
//!
//! assert_eq!(notary.lookup_star_info(20).await.unwrap().as_str(), "Awesome Star");
//! # });
//! ```

pub mod notary;

pub use notary::{EventSourcedStarNotary, ServiceError, ServiceResult, StarNotaryService};
