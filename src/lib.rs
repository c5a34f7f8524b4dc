// Copyright (c) 2025 - Cowboy AI, Inc.
//! Star Notary
//!
//! An event-sourced ownership registry: identities mint uniquely numbered
//! stars, transfer or exchange them, and list them for sale to buyers who
//! attach a payment.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod errors;
pub mod event_store;
pub mod events;
pub mod ledger;
pub mod service;
pub mod state_machine;

// Re-export commonly used types
pub use aggregate::{CommandError, RegistryState, StarRecord};
pub use config::NotaryConfig;
pub use errors::{NotaryError, NotaryResult};
pub use events::StarEvent;
pub use service::{EventSourcedStarNotary, ServiceError, ServiceResult, StarNotaryService};
