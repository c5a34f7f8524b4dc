// Copyright (c) 2025 - Cowboy AI, Inc.
//! Star Notary Domain Models
//!
//! Value objects with validation invariants. Construction is the only place
//! invariants are checked; once built, a value object is always valid.
//!
//! - [`Identity`] - actor that owns stars and holds a balance
//! - [`StarId`] - positive token id
//! - [`StarName`] / [`StarSymbol`] - immutable labels
//! - [`Amount`] - wei amount with checked arithmetic

pub mod amount;
pub mod identity;
pub mod star;

pub use amount::Amount;
pub use identity::{Identity, IdentityError};
pub use star::{StarError, StarId, StarName, StarSymbol};
