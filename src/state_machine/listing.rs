// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sale Listing State Machine
//!
//! Mealy machine for the sale listing of one star.
//!
//! ```text
//!             List(p)                 Sell
//! Unlisted ───────────▶ Listed{p} ─────────▶ Unlisted
//!                         │  ▲
//!                         └──┘ List(p')      Reassign (from any) ▶ Unlisted
//! ```
//!
//! - `List(price)`: price must be non-zero; re-listing replaces the price
//! - `Sell`: only from `Listed`; outputs the price that was paid
//! - `Reassign`: ownership changed by transfer/exchange; always clears

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{StateMachine, TransitionError, TransitionResult};
use crate::domain::Amount;

/// Listing state of a star
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ListingStatus {
    /// Not for sale
    #[default]
    Unlisted,

    /// For sale at `price`
    Listed { price: Amount },
}

impl ListingStatus {
    /// Price of the active listing, if any
    pub fn price(&self) -> Option<Amount> {
        match self {
            ListingStatus::Unlisted => None,
            ListingStatus::Listed { price } => Some(*price),
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingStatus::Unlisted => write!(f, "Unlisted"),
            ListingStatus::Listed { price } => write!(f, "Listed({price})"),
        }
    }
}

/// Listing FSM input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingInput {
    /// Owner offers the star at a price
    List(Amount),

    /// A buyer completes the purchase
    Sell,

    /// Ownership changed outside of a sale
    Reassign,
}

impl fmt::Display for ListingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingInput::List(price) => write!(f, "List({price})"),
            ListingInput::Sell => write!(f, "Sell"),
            ListingInput::Reassign => write!(f, "Reassign"),
        }
    }
}

/// Transition output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOutput {
    /// Price of the listing that this transition ended or replaced
    pub cleared: Option<Amount>,
}

impl StateMachine for ListingStatus {
    type Input = ListingInput;
    type Output = ListingOutput;

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        use ListingInput::*;
        use ListingStatus::*;

        match (self, input) {
            (_, List(price)) if price.is_zero() => Err(TransitionError::PreconditionFailed(
                "sale price must be positive".to_string(),
            )),
            (state, List(price)) => Ok((
                Listed { price: *price },
                ListingOutput {
                    cleared: state.price(),
                },
            )),
            (Listed { price }, Sell) => Ok((
                Unlisted,
                ListingOutput {
                    cleared: Some(*price),
                },
            )),
            (Unlisted, Sell) => Err(TransitionError::InvalidTransition {
                from: self.to_string(),
                input: input.to_string(),
            }),
            (state, Reassign) => Ok((
                Unlisted,
                ListingOutput {
                    cleared: state.price(),
                },
            )),
        }
    }
}

/// Apply an input that is already known to be valid
///
/// Used when folding events: an event is a fact, so an impossible
/// transition falls back to `Unlisted` rather than failing.
pub fn settle(state: ListingStatus, input: ListingInput) -> ListingStatus {
    state
        .transition(&input)
        .map(|(next, _)| next)
        .unwrap_or(ListingStatus::Unlisted)
}
