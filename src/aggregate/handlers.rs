// Copyright (c) 2025 - Cowboy AI, Inc.
//! Command Handlers for the Star Registry Aggregate
//!
//! ```text
//! handle_command(&State, Command) → Result<Event, CommandError>
//! ```
//!
//! Handlers validate every business rule against the current state and
//! produce a single event. They never mutate state, so a rejected command
//! leaves no trace.
//!
//! # Business Rules
//!
//! - Star ids are unique and positive; names and symbols are non-empty
//! - Only the current owner may transfer, exchange or list a star
//! - Self-transfer and exchanging a star with itself are rejected
//! - Purchase needs an active listing and a payment covering the price

use super::commands::*;
use super::registry::{RegistryState, StarRecord};
use crate::domain::{Amount, Identity, StarError, StarId, StarName, StarSymbol};
use crate::events::*;
use crate::state_machine::{ListingInput, StateMachine, TransitionError};

/// Command validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Star id is already taken
    #[error("Star {0} already exists")]
    DuplicateId(StarId),

    /// Star id is not registered
    #[error("Star {0} not found")]
    NotFound(StarId),

    /// Caller does not own the star
    #[error("{caller} is not the owner of star {star_id}")]
    NotOwner { star_id: StarId, caller: Identity },

    /// Argument fails validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Star has no active listing
    #[error("Star {0} is not for sale")]
    NotListed(StarId),

    /// Attached payment is below the sale price
    #[error("Payment {payment} is below price {price} for star {star_id}")]
    InsufficientPayment {
        star_id: StarId,
        price: Amount,
        payment: Amount,
    },
}

impl From<StarError> for CommandError {
    fn from(err: StarError) -> Self {
        CommandError::InvalidArgument(err.to_string())
    }
}

fn parse_id(raw: u64) -> Result<StarId, CommandError> {
    Ok(StarId::new(raw)?)
}

/// Look up a star and check the caller owns it
fn owned_star<'a>(
    state: &'a RegistryState,
    star_id: StarId,
    caller: &Identity,
) -> Result<&'a StarRecord, CommandError> {
    let star = state.star(star_id)?;
    if &star.owner != caller {
        return Err(CommandError::NotOwner {
            star_id,
            caller: caller.clone(),
        });
    }
    Ok(star)
}

/// Handle CreateStar command
///
/// # Business Rules
/// - Id positive, name and symbol non-empty (checked first)
/// - Id not already registered
pub fn handle_create_star(
    state: &RegistryState,
    command: CreateStarCommand,
) -> Result<StarCreated, CommandError> {
    let star_id = parse_id(command.star_id)?;
    let name = StarName::new(command.name)?;
    let symbol = StarSymbol::new(command.symbol)?;

    if state.contains(star_id) {
        return Err(CommandError::DuplicateId(star_id));
    }

    Ok(StarCreated {
        meta: EventMeta::new(command.timestamp, command.correlation_id, None),
        star_id,
        name,
        symbol,
        owner: command.creator,
    })
}

/// Handle TransferStar command
///
/// # Business Rules
/// - Star exists and caller owns it
/// - Destination differs from the current owner
pub fn handle_transfer_star(
    state: &RegistryState,
    command: TransferStarCommand,
) -> Result<StarTransferred, CommandError> {
    let star_id = parse_id(command.star_id)?;
    let star = owned_star(state, star_id, &command.caller)?;

    if command.destination == star.owner {
        return Err(CommandError::InvalidArgument(format!(
            "star {star_id} is already owned by {}",
            command.destination
        )));
    }

    Ok(StarTransferred {
        meta: EventMeta::new(command.timestamp, command.correlation_id, command.causation_id),
        star_id,
        from: star.owner.clone(),
        to: command.destination,
    })
}

/// Handle ExchangeStars command
///
/// # Business Rules
/// - The two ids differ
/// - Both stars exist
/// - Caller owns the first star; the second owner is read from state
pub fn handle_exchange_stars(
    state: &RegistryState,
    command: ExchangeStarsCommand,
) -> Result<StarsExchanged, CommandError> {
    let star_a = parse_id(command.star_a)?;
    let star_b = parse_id(command.star_b)?;

    if star_a == star_b {
        return Err(CommandError::InvalidArgument(format!(
            "cannot exchange star {star_a} with itself"
        )));
    }

    let owner_b = state.owner_of(star_b)?.clone();
    let a = owned_star(state, star_a, &command.caller)?;

    Ok(StarsExchanged {
        meta: EventMeta::new(command.timestamp, command.correlation_id, command.causation_id),
        star_a,
        star_b,
        owner_a: a.owner.clone(),
        owner_b,
    })
}

/// Handle ListStar command
///
/// # Business Rules
/// - Star exists and caller owns it
/// - Price is strictly positive
pub fn handle_list_star(
    state: &RegistryState,
    command: ListStarCommand,
) -> Result<StarListed, CommandError> {
    let star_id = parse_id(command.star_id)?;
    let star = owned_star(state, star_id, &command.caller)?;

    star.listing
        .transition(&ListingInput::List(command.price))
        .map_err(|err| CommandError::InvalidArgument(err.to_string()))?;

    Ok(StarListed {
        meta: EventMeta::new(command.timestamp, command.correlation_id, command.causation_id),
        star_id,
        seller: command.caller,
        price: command.price,
    })
}

/// Handle PurchaseStar command
///
/// # Business Rules
/// - Star exists and is listed
/// - Buyer is not the current owner
/// - Payment covers the price; the surplus is returned as change
pub fn handle_purchase_star(
    state: &RegistryState,
    command: PurchaseStarCommand,
) -> Result<StarPurchased, CommandError> {
    let star_id = parse_id(command.star_id)?;
    let star = state.star(star_id)?;

    let (_, output) = star
        .listing
        .transition(&ListingInput::Sell)
        .map_err(|err| match err {
            TransitionError::InvalidTransition { .. } => CommandError::NotListed(star_id),
            other => CommandError::InvalidArgument(other.to_string()),
        })?;
    let price = output.cleared.ok_or(CommandError::NotListed(star_id))?;

    if command.buyer == star.owner {
        return Err(CommandError::InvalidArgument(format!(
            "{} already owns star {star_id}",
            command.buyer
        )));
    }

    let change = command
        .payment
        .checked_sub(price)
        .ok_or(CommandError::InsufficientPayment {
            star_id,
            price,
            payment: command.payment,
        })?;

    Ok(StarPurchased {
        meta: EventMeta::new(command.timestamp, command.correlation_id, command.causation_id),
        star_id,
        seller: star.owner.clone(),
        buyer: command.buyer,
        price,
        payment: command.payment,
        change,
    })
}
