// Copyright (c) 2025 - Cowboy AI, Inc.
//! Star Notary Service
//!
//! The deployed registry instance. Every operation runs inside one critical
//! section over the registry state:
//!
//! 1. Load state, folding in any events other writers appended
//! 2. Validate via the pure handler
//! 3. Settle balances (purchase only)
//! 4. Append the event to the store (optimistic concurrency)
//! 5. Apply the event to in-memory state
//! 6. Broadcast the event to subscribers
//!
//! If any step fails, earlier steps are undone and the operation is rejected.
//! A version conflict on append rejects only the current command; the state
//! is brought up to date so the next command sees the other writer's events.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{broadcast, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use crate::aggregate::*;
use crate::config::NotaryConfig;
use crate::domain::{Amount, Identity, StarId, StarName, StarSymbol};
use crate::errors::{NotaryError, NotaryResult};
use crate::event_store::EventStore;
use crate::events::StarEvent;
use crate::ledger::{BalanceLedger, LedgerError, Settlement};

/// Service layer result type
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service layer errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Command validation failed
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Balance movement failed
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Event store or configuration failure
    #[error("Notary error: {0}")]
    Notary(#[from] NotaryError),

    /// Purchase was not recorded and its settlement could not be undone
    #[error("Purchase commit failed ({commit}) and settlement revert failed: {revert}")]
    SettlementNotReverted {
        commit: NotaryError,
        revert: LedgerError,
    },
}

impl ServiceError {
    /// Underlying command error, if this is a rejected command
    pub fn command_error(&self) -> Option<&CommandError> {
        match self {
            ServiceError::Command(err) => Some(err),
            _ => None,
        }
    }
}

/// Validate a raw id given to a query
fn query_id(raw: u64) -> ServiceResult<StarId> {
    StarId::new(raw).map_err(|e| ServiceError::Command(e.into()))
}

/// Star notary operations
///
/// Query methods take raw ids; an id of zero is rejected as
/// `InvalidArgument`, any other unknown id as `NotFound`.
#[async_trait]
pub trait StarNotaryService: Send + Sync {
    /// Mint a star owned by the command's creator
    async fn create_star(&self, command: CreateStarCommand) -> ServiceResult<StarId>;

    /// Name stored for the star
    async fn lookup_star_info(&self, star_id: u64) -> ServiceResult<StarName>;

    async fn star_symbol(&self, star_id: u64) -> ServiceResult<StarSymbol>;

    async fn owner_of(&self, star_id: u64) -> ServiceResult<Identity>;

    async fn transfer_star(&self, command: TransferStarCommand) -> ServiceResult<()>;

    async fn exchange_stars(&self, command: ExchangeStarsCommand) -> ServiceResult<()>;

    async fn put_star_up_for_sale(&self, command: ListStarCommand) -> ServiceResult<()>;

    /// Price of the active listing
    async fn sale_price(&self, star_id: u64) -> ServiceResult<Amount>;

    /// Buy a listed star, returning the change credited back to the buyer
    async fn buy_star(&self, command: PurchaseStarCommand) -> ServiceResult<Amount>;

    /// Ids owned by `owner`, ascending
    async fn stars_owned_by(&self, owner: &Identity) -> ServiceResult<Vec<StarId>>;

    /// Number of stars owned by `owner`
    async fn star_count(&self, owner: &Identity) -> ServiceResult<usize>;

    /// All active listings
    async fn listings(&self) -> ServiceResult<Vec<(StarId, Amount)>>;
}

/// Event-sourced implementation of [`StarNotaryService`]
pub struct EventSourcedStarNotary {
    config: NotaryConfig,
    state: Mutex<RegistryState>,
    event_store: Arc<dyn EventStore>,
    ledger: Arc<dyn BalanceLedger>,
    events: broadcast::Sender<StarEvent>,
}

impl EventSourcedStarNotary {
    /// Create a service over an empty registry
    pub fn new(
        config: NotaryConfig,
        event_store: Arc<dyn EventStore>,
        ledger: Arc<dyn BalanceLedger>,
    ) -> Self {
        let state = RegistryState::new(config.registry_id);
        Self::with_state(config, state, event_store, ledger)
    }

    /// Rebuild a service from the events already in `event_store`
    pub async fn replay(
        config: NotaryConfig,
        event_store: Arc<dyn EventStore>,
        ledger: Arc<dyn BalanceLedger>,
    ) -> ServiceResult<Self> {
        let stored = event_store.read_events(config.registry_id).await?;
        let state = RegistryState::from_events(
            config.registry_id,
            stored.iter().map(|stored| &stored.data),
        );

        info!(
            registry_id = %config.registry_id,
            version = state.version,
            stars = state.len(),
            "Replayed registry"
        );

        Ok(Self::with_state(config, state, event_store, ledger))
    }

    fn with_state(
        config: NotaryConfig,
        state: RegistryState,
        event_store: Arc<dyn EventStore>,
        ledger: Arc<dyn BalanceLedger>,
    ) -> Self {
        let (events, _) = broadcast::channel(config.event_buffer);
        Self {
            config,
            state: Mutex::new(state),
            event_store,
            ledger,
            events,
        }
    }

    /// Registry display name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Registry ticker
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    pub fn config(&self) -> &NotaryConfig {
        &self.config
    }

    /// Receive every event this service commits after this call
    pub fn subscribe(&self) -> broadcast::Receiver<StarEvent> {
        self.events.subscribe()
    }

    /// Copy of the in-memory registry state
    pub async fn snapshot(&self) -> RegistryState {
        self.state.lock().await.clone()
    }

    /// Lock the registry state and bring it up to date with the store
    async fn load_state(&self) -> NotaryResult<MutexGuard<'_, RegistryState>> {
        let mut guard = self.state.lock().await;
        self.catch_up(&mut guard).await?;
        Ok(guard)
    }

    /// Fold events appended by other writers since `state.version`
    async fn catch_up(&self, state: &mut RegistryState) -> NotaryResult<()> {
        let stored = self
            .event_store
            .read_events_from(state.id, state.version + 1)
            .await?;
        if stored.is_empty() {
            return Ok(());
        }

        let id = state.id;
        let mut current = std::mem::replace(state, RegistryState::new(id));
        for event in &stored {
            let expected = current.version + 1;
            if event.sequence != expected {
                *state = current;
                return Err(NotaryError::EventStore(format!(
                    "stream {id} has sequence {} where {expected} was expected",
                    event.sequence
                )));
            }
            current = apply_event(current, &event.data);
        }
        *state = current;

        info!(
            registry_id = %id,
            applied = stored.len(),
            version = state.version,
            "Caught up with event store"
        );
        Ok(())
    }

    /// Append, apply and publish one event
    async fn commit(&self, state: &mut RegistryState, event: StarEvent) -> NotaryResult<()> {
        if let Err(err) = self
            .event_store
            .append(state.id, vec![event.clone()], Some(state.version))
            .await
        {
            if matches!(err, NotaryError::Concurrency { .. }) {
                warn!(error = %err, "Append conflicted with another writer");
                if let Err(reload_err) = self.catch_up(state).await {
                    warn!(error = %reload_err, "Reloading registry state failed");
                }
            }
            return Err(err);
        }

        let id = state.id;
        let current = std::mem::replace(state, RegistryState::new(id));
        *state = apply_event(current, &event);

        info!(
            event_type = event.event_type(),
            stars = ?event.star_ids(),
            version = state.version,
            "Committed star event"
        );

        if self.events.send(event).is_err() {
            debug!("No event subscribers");
        }
        Ok(())
    }

    async fn query<T>(
        &self,
        f: impl FnOnce(&RegistryState) -> Result<T, CommandError>,
    ) -> ServiceResult<T> {
        let state = self.load_state().await?;
        Ok(f(&state)?)
    }
}

fn rejected<T>(operation: &str, err: CommandError) -> ServiceResult<T> {
    debug!(operation, error = %err, "Command rejected");
    Err(err.into())
}

#[async_trait]
impl StarNotaryService for EventSourcedStarNotary {
    async fn create_star(&self, command: CreateStarCommand) -> ServiceResult<StarId> {
        let mut state = self.load_state().await?;
        let event = match handle_create_star(&state, command) {
            Ok(event) => event,
            Err(err) => return rejected("create_star", err),
        };

        let star_id = event.star_id;
        self.commit(&mut state, StarEvent::StarCreated(event)).await?;
        Ok(star_id)
    }

    async fn lookup_star_info(&self, star_id: u64) -> ServiceResult<StarName> {
        let id = query_id(star_id)?;
        self.query(|state| state.lookup_info(id).cloned()).await
    }

    async fn star_symbol(&self, star_id: u64) -> ServiceResult<StarSymbol> {
        let id = query_id(star_id)?;
        self.query(|state| state.symbol_of(id).cloned()).await
    }

    async fn owner_of(&self, star_id: u64) -> ServiceResult<Identity> {
        let id = query_id(star_id)?;
        self.query(|state| state.owner_of(id).cloned()).await
    }

    async fn transfer_star(&self, command: TransferStarCommand) -> ServiceResult<()> {
        let mut state = self.load_state().await?;
        let event = match handle_transfer_star(&state, command) {
            Ok(event) => event,
            Err(err) => return rejected("transfer_star", err),
        };
        self.commit(&mut state, StarEvent::StarTransferred(event)).await?;
        Ok(())
    }

    async fn exchange_stars(&self, command: ExchangeStarsCommand) -> ServiceResult<()> {
        let mut state = self.load_state().await?;
        let event = match handle_exchange_stars(&state, command) {
            Ok(event) => event,
            Err(err) => return rejected("exchange_stars", err),
        };
        self.commit(&mut state, StarEvent::StarsExchanged(event)).await?;
        Ok(())
    }

    async fn put_star_up_for_sale(&self, command: ListStarCommand) -> ServiceResult<()> {
        let mut state = self.load_state().await?;
        let event = match handle_list_star(&state, command) {
            Ok(event) => event,
            Err(err) => return rejected("put_star_up_for_sale", err),
        };
        self.commit(&mut state, StarEvent::StarListed(event)).await?;
        Ok(())
    }

    async fn sale_price(&self, star_id: u64) -> ServiceResult<Amount> {
        let id = query_id(star_id)?;
        self.query(|state| state.sale_price(id)).await
    }

    async fn buy_star(&self, command: PurchaseStarCommand) -> ServiceResult<Amount> {
        let mut state = self.load_state().await?;
        let event = match handle_purchase_star(&state, command) {
            Ok(event) => event,
            Err(err) => return rejected("buy_star", err),
        };

        let settlement = Settlement {
            payer: event.buyer.clone(),
            payee: event.seller.clone(),
            payment: event.payment,
            price: event.price,
            change: event.change,
        };
        self.ledger.settle(&settlement).await?;

        let change = event.change;
        if let Err(err) = self.commit(&mut state, StarEvent::StarPurchased(event)).await {
            warn!(error = %err, "Purchase commit failed, reverting settlement");
            if let Err(revert) = self.ledger.settle(&settlement.reversed()).await {
                error!(
                    payer = %settlement.payer,
                    payee = %settlement.payee,
                    error = %revert,
                    "Settlement revert failed"
                );
                return Err(ServiceError::SettlementNotReverted { commit: err, revert });
            }
            return Err(err.into());
        }

        Ok(change)
    }

    async fn stars_owned_by(&self, owner: &Identity) -> ServiceResult<Vec<StarId>> {
        let owner = owner.clone();
        self.query(move |state| Ok(state.stars_owned_by(&owner))).await
    }

    async fn star_count(&self, owner: &Identity) -> ServiceResult<usize> {
        let owner = owner.clone();
        self.query(move |state| Ok(state.star_count(&owner))).await
    }

    async fn listings(&self) -> ServiceResult<Vec<(StarId, Amount)>> {
        self.query(|state| Ok(state.listings())).await
    }
}
