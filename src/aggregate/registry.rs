// Copyright (c) 2025 - Cowboy AI, Inc.
//! Star Registry Aggregate State
//!
//! One aggregate holds the whole keyed record store. State is rebuilt by
//! folding events:
//!
//! ```text
//! Events → apply_event() → RegistryState
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::handlers::CommandError;
use crate::domain::{Amount, Identity, StarId, StarName, StarSymbol};
use crate::events::StarEvent;
use crate::state_machine::listing::{settle, ListingInput, ListingStatus};

/// A minted star
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    pub id: StarId,
    pub name: StarName,
    pub symbol: StarSymbol,
    pub owner: Identity,
    pub listing: ListingStatus,
}

/// Registry state reconstructed from events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryState {
    /// Aggregate ID of this registry instance
    pub id: Uuid,

    /// All stars by id
    pub stars: BTreeMap<StarId, StarRecord>,

    /// Number of events folded into this state
    pub version: u64,

    /// Timestamp of the first event
    pub created_at: Option<DateTime<Utc>>,

    /// Timestamp of the latest event
    pub updated_at: Option<DateTime<Utc>>,
}

impl RegistryState {
    /// Empty registry, initial state for folding
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            stars: BTreeMap::new(),
            version: 0,
            created_at: None,
            updated_at: None,
        }
    }

    /// Reconstruct state from an event stream
    pub fn from_events<'a>(id: Uuid, events: impl IntoIterator<Item = &'a StarEvent>) -> Self {
        events
            .into_iter()
            .fold(Self::new(id), |state, event| apply_event(state, event))
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn contains(&self, id: StarId) -> bool {
        self.stars.contains_key(&id)
    }

    /// Full record for `id`
    pub fn star(&self, id: StarId) -> Result<&StarRecord, CommandError> {
        self.stars.get(&id).ok_or(CommandError::NotFound(id))
    }

    /// Stored name of the star
    pub fn lookup_info(&self, id: StarId) -> Result<&StarName, CommandError> {
        self.star(id).map(|star| &star.name)
    }

    pub fn symbol_of(&self, id: StarId) -> Result<&StarSymbol, CommandError> {
        self.star(id).map(|star| &star.symbol)
    }

    pub fn owner_of(&self, id: StarId) -> Result<&Identity, CommandError> {
        self.star(id).map(|star| &star.owner)
    }

    /// Active sale price
    ///
    /// Fails with `NotFound` for unknown ids and `NotListed` when the
    /// star is not for sale.
    pub fn sale_price(&self, id: StarId) -> Result<Amount, CommandError> {
        self.star(id)?
            .listing
            .price()
            .ok_or(CommandError::NotListed(id))
    }

    /// Ids of stars owned by `owner`, ascending
    pub fn stars_owned_by(&self, owner: &Identity) -> Vec<StarId> {
        self.stars
            .values()
            .filter(|star| &star.owner == owner)
            .map(|star| star.id)
            .collect()
    }

    /// Number of stars owned by `owner`
    pub fn star_count(&self, owner: &Identity) -> usize {
        self.stars.values().filter(|star| &star.owner == owner).count()
    }

    /// All active listings, ascending by id
    pub fn listings(&self) -> Vec<(StarId, Amount)> {
        self.stars
            .values()
            .filter_map(|star| star.listing.price().map(|price| (star.id, price)))
            .collect()
    }
}

/// Apply event to state
///
/// Events are facts that already passed validation, so this never fails.
/// Every ownership change clears the listing of the affected stars.
pub fn apply_event(mut state: RegistryState, event: &StarEvent) -> RegistryState {
    match event {
        StarEvent::StarCreated(e) => {
            state.stars.insert(
                e.star_id,
                StarRecord {
                    id: e.star_id,
                    name: e.name.clone(),
                    symbol: e.symbol.clone(),
                    owner: e.owner.clone(),
                    listing: ListingStatus::Unlisted,
                },
            );
        }

        StarEvent::StarTransferred(e) => {
            if let Some(star) = state.stars.get_mut(&e.star_id) {
                star.owner = e.to.clone();
                star.listing = settle(star.listing, ListingInput::Reassign);
            }
        }

        StarEvent::StarsExchanged(e) => {
            if let Some(star) = state.stars.get_mut(&e.star_a) {
                star.owner = e.owner_b.clone();
                star.listing = settle(star.listing, ListingInput::Reassign);
            }
            if let Some(star) = state.stars.get_mut(&e.star_b) {
                star.owner = e.owner_a.clone();
                star.listing = settle(star.listing, ListingInput::Reassign);
            }
        }

        StarEvent::StarListed(e) => {
            if let Some(star) = state.stars.get_mut(&e.star_id) {
                star.listing = settle(star.listing, ListingInput::List(e.price));
            }
        }

        StarEvent::StarPurchased(e) => {
            if let Some(star) = state.stars.get_mut(&e.star_id) {
                star.owner = e.buyer.clone();
                star.listing = settle(star.listing, ListingInput::Sell);
            }
        }
    }

    let timestamp = event.timestamp();
    if state.created_at.is_none() {
        state.created_at = Some(timestamp);
    }
    state.updated_at = Some(timestamp);
    state.version += 1;
    state
}
