// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory balance ledger

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{BalanceLedger, LedgerError, LedgerResult, Settlement};
use crate::domain::{Amount, Identity};

/// Balances held in process memory
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: RwLock<HashMap<Identity, Amount>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger pre-funded with the given accounts
    pub fn with_accounts(accounts: impl IntoIterator<Item = (Identity, Amount)>) -> Self {
        Self {
            balances: RwLock::new(accounts.into_iter().collect()),
        }
    }
}

fn add(balances: &HashMap<Identity, Amount>, identity: &Identity, amount: Amount) -> LedgerResult<Amount> {
    balances
        .get(identity)
        .copied()
        .unwrap_or_default()
        .checked_add(amount)
        .ok_or_else(|| LedgerError::Overflow(identity.clone()))
}

#[async_trait]
impl BalanceLedger for InMemoryLedger {
    async fn open_account(&self, identity: &Identity, initial: Amount) -> LedgerResult<Amount> {
        self.credit(identity, initial).await
    }

    async fn balance_of(&self, identity: &Identity) -> Amount {
        self.balances
            .read()
            .await
            .get(identity)
            .copied()
            .unwrap_or_default()
    }

    async fn credit(&self, identity: &Identity, amount: Amount) -> LedgerResult<Amount> {
        let mut balances = self.balances.write().await;
        let updated = add(&balances, identity, amount)?;
        balances.insert(identity.clone(), updated);
        Ok(updated)
    }

    async fn settle(&self, settlement: &Settlement) -> LedgerResult<()> {
        let mut balances = self.balances.write().await;

        // Compute every resulting balance before touching the map.
        let payer_balance = balances.get(&settlement.payer).copied().unwrap_or_default();
        let payer_after_debit = payer_balance.checked_sub(settlement.payment).ok_or_else(|| {
            LedgerError::InsufficientFunds {
                identity: settlement.payer.clone(),
                balance: payer_balance,
                required: settlement.payment,
            }
        })?;
        let payer_final = payer_after_debit
            .checked_add(settlement.change)
            .ok_or_else(|| LedgerError::Overflow(settlement.payer.clone()))?;

        if settlement.payer == settlement.payee {
            let payer_final = payer_final
                .checked_add(settlement.price)
                .ok_or_else(|| LedgerError::Overflow(settlement.payer.clone()))?;
            balances.insert(settlement.payer.clone(), payer_final);
            return Ok(());
        }

        let payee_final = add(&balances, &settlement.payee, settlement.price)?;

        balances.insert(settlement.payer.clone(), payer_final);
        balances.insert(settlement.payee.clone(), payee_final);

        debug!(
            payer = %settlement.payer,
            payee = %settlement.payee,
            price = %settlement.price,
            change = %settlement.change,
            "Settled purchase"
        );
        Ok(())
    }

    async fn total_supply(&self) -> Option<Amount> {
        self.balances
            .read()
            .await
            .values()
            .try_fold(Amount::ZERO, |acc, balance| acc.checked_add(*balance))
    }
}
