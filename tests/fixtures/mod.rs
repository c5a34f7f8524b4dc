// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for star-notary
//!
//! Deterministic identities, timestamps and command builders shared by the
//! integration suites.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use star_notary::aggregate::*;
use star_notary::domain::{Amount, Identity};
use star_notary::event_store::InMemoryEventStore;
use star_notary::ledger::InMemoryLedger;
use star_notary::{EventSourcedStarNotary, NotaryConfig};

pub const REGISTRY_ID: &str = "01934f4a-1000-7000-8000-000000001000";
pub const CORRELATION_ID: &str = "01934f4a-c001-7000-8000-00000000c001";

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

/// Ten test accounts, like a local dev chain hands out
pub const ACCOUNTS: [&str; 10] = [
    "0xacct0", "0xacct1", "0xacct2", "0xacct3", "0xacct4", "0xacct5", "0xacct6", "0xacct7",
    "0xacct8", "0xacct9",
];

pub fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid UUID in test fixture")
}

pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

pub fn account(index: usize) -> Identity {
    Identity::new(ACCOUNTS[index]).expect("Invalid identity in test fixture")
}

/// Starting balance of every funded account: 100 ether
pub fn starting_balance() -> Amount {
    Amount::ETHER.checked_mul(100).expect("fixture balance overflow")
}

pub fn config() -> NotaryConfig {
    NotaryConfig {
        registry_id: parse_uuid(REGISTRY_ID),
        ..NotaryConfig::default()
    }
}

/// Notary over fresh in-memory stores with all accounts funded
pub fn funded_notary() -> (EventSourcedStarNotary, Arc<InMemoryLedger>, Arc<InMemoryEventStore>) {
    let ledger = Arc::new(InMemoryLedger::with_accounts(
        (0..ACCOUNTS.len()).map(|i| (account(i), starting_balance())),
    ));
    let store = Arc::new(InMemoryEventStore::new());
    let notary = EventSourcedStarNotary::new(config(), store.clone(), ledger.clone());
    (notary, ledger, store)
}

pub fn create(name: &str, symbol: &str, star_id: u64, creator: &Identity) -> CreateStarCommand {
    CreateStarCommand {
        name: name.to_string(),
        symbol: symbol.to_string(),
        star_id,
        creator: creator.clone(),
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID),
    }
}

pub fn transfer(star_id: u64, destination: &Identity, caller: &Identity) -> TransferStarCommand {
    TransferStarCommand {
        star_id,
        destination: destination.clone(),
        caller: caller.clone(),
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID),
        causation_id: None,
    }
}

pub fn exchange(star_a: u64, star_b: u64, caller: &Identity) -> ExchangeStarsCommand {
    ExchangeStarsCommand {
        star_a,
        star_b,
        caller: caller.clone(),
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID),
        causation_id: None,
    }
}

pub fn list(star_id: u64, price: Amount, caller: &Identity) -> ListStarCommand {
    ListStarCommand {
        star_id,
        price,
        caller: caller.clone(),
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID),
        causation_id: None,
    }
}

pub fn purchase(star_id: u64, buyer: &Identity, payment: Amount) -> PurchaseStarCommand {
    PurchaseStarCommand {
        star_id,
        buyer: buyer.clone(),
        payment,
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID),
        causation_id: None,
    }
}
