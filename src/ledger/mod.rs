// Copyright (c) 2025 - Cowboy AI, Inc.
//! Identity Balances
//!
//! Balances belong to the host platform, not to the registry. The registry
//! only ever credits: the seller gets the price, the buyer gets the change.
//! Debiting the attached payment is the host's job, performed together with
//! those credits as one [`Settlement`].
//!
//! ```text
//! buyer  ── payment ──▶ (held by call)
//!                       ├── price  ──▶ seller
//!                       └── change ──▶ buyer
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Amount, Identity};

pub mod memory;

pub use memory::InMemoryLedger;

/// Balance errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Payer cannot fund the attached payment
    #[error("{identity} has {balance}, needs {required}")]
    InsufficientFunds {
        identity: Identity,
        balance: Amount,
        required: Amount,
    },

    /// Credit would overflow the balance
    #[error("Balance overflow for {0}")]
    Overflow(Identity),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Balance movement of one purchase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Buyer, debited `payment` and credited `change`
    pub payer: Identity,

    /// Seller, credited `price`
    pub payee: Identity,

    pub payment: Amount,
    pub price: Amount,
    pub change: Amount,
}

impl Settlement {
    /// Movement that undoes this settlement's net effect
    ///
    /// The payer's net loss was `price`, so the reversal moves `price` back.
    pub fn reversed(&self) -> Settlement {
        Settlement {
            payer: self.payee.clone(),
            payee: self.payer.clone(),
            payment: self.price,
            price: self.price,
            change: Amount::ZERO,
        }
    }
}

/// Source of identities and their balances
#[async_trait]
pub trait BalanceLedger: Send + Sync {
    /// Create an account with an initial balance, or top up an existing one
    async fn open_account(&self, identity: &Identity, initial: Amount) -> LedgerResult<Amount>;

    /// Current balance; unknown identities have zero
    async fn balance_of(&self, identity: &Identity) -> Amount;

    /// Add `amount` to the balance
    async fn credit(&self, identity: &Identity, amount: Amount) -> LedgerResult<Amount>;

    /// Apply a purchase settlement atomically
    ///
    /// Either every movement is applied or none is.
    async fn settle(&self, settlement: &Settlement) -> LedgerResult<()>;

    /// Sum of all balances, or `None` if it does not fit in an [`Amount`]
    async fn total_supply(&self) -> Option<Amount>;
}
