// Copyright (c) 2025 - Cowboy AI, Inc.
//! Star Registry Aggregate
//!
//! The registry is a single aggregate that owns the mapping from star id to
//! record. It follows the functional aggregate pattern:
//!
//! - Handlers: `(&State, Command) → Result<Event, CommandError>`
//! - Fold: `(State, &Event) → State`
//!
//! ```text
//! Command → handle_*() → Event → apply_event() → RegistryState
//!    ↓          ↓          ↓
//! Intent   Validation    Fact
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use uuid::Uuid;
//! use star_notary::aggregate::*;
//! use star_notary::domain::{Identity, StarId};
//! use star_notary::events::StarEvent;
//!
//! let state = RegistryState::new(Uuid::now_v7());
//! let command = CreateStarCommand {
//!     name: "Awesome Star".to_string(),
//!     symbol: "AWE".to_string(),
//!     star_id: 20,
//!     creator: Identity::new("acct0").unwrap(),
//!     timestamp: Utc::now(),
//!     correlation_id: Uuid::now_v7(),
//! };
//!
//! let event = handle_create_star(&state, command).unwrap();
//! let state = apply_event(state, &StarEvent::StarCreated(event));
//! assert_eq!(state.lookup_info(StarId::new(20).unwrap()).unwrap().as_str(), "Awesome Star");
//! ```

pub mod commands;
pub mod handlers;
pub mod registry;

pub use commands::*;
pub use handlers::*;
pub use registry::{apply_event, RegistryState, StarRecord};
