// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Registry Ownership
//!
//! Random command sequences are pushed through the pure handlers. Accepted
//! events are folded into state; rejected commands are dropped, exactly as
//! the service does.

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use star_notary::aggregate::*;
use star_notary::domain::{Amount, Identity, StarId};
use star_notary::events::StarEvent;
use star_notary::ledger::{BalanceLedger, InMemoryLedger, Settlement};
use uuid::Uuid;

// ============================================================================
// Test Inputs
// ============================================================================

const ACCOUNTS: usize = 4;

fn ts() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-01-19T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn who(index: usize) -> Identity {
    Identity::new(format!("acct{index}")).unwrap()
}

fn registry_id() -> Uuid {
    Uuid::parse_str("01934f4a-1000-7000-8000-000000001000").unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    Create { id: u64, creator: usize },
    Transfer { id: u64, to: usize, caller: usize },
    Exchange { a: u64, b: u64, caller: usize },
    List { id: u64, price: u128, caller: usize },
    Purchase { id: u64, buyer: usize, payment: u128 },
}

fn op() -> impl Strategy<Value = Op> {
    let id = 1..8u64;
    let account = 0..ACCOUNTS;
    prop_oneof![
        (id.clone(), account.clone()).prop_map(|(id, creator)| Op::Create { id, creator }),
        (id.clone(), account.clone(), account.clone())
            .prop_map(|(id, to, caller)| Op::Transfer { id, to, caller }),
        (id.clone(), id.clone(), account.clone())
            .prop_map(|(a, b, caller)| Op::Exchange { a, b, caller }),
        (id.clone(), 0..100u128, account.clone())
            .prop_map(|(id, price, caller)| Op::List { id, price, caller }),
        (id, account, 0..150u128)
            .prop_map(|(id, buyer, payment)| Op::Purchase { id, buyer, payment }),
    ]
}

fn op_sequence() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..60)
}

/// Run one command against `state`, returning the event if accepted
fn handle(state: &RegistryState, op: &Op) -> Result<StarEvent, CommandError> {
    let correlation_id = Uuid::now_v7();
    match *op {
        Op::Create { id, creator } => handle_create_star(
            state,
            CreateStarCommand {
                name: format!("Star {id}"),
                symbol: "STR".to_string(),
                star_id: id,
                creator: who(creator),
                timestamp: ts(),
                correlation_id,
            },
        )
        .map(StarEvent::StarCreated),
        Op::Transfer { id, to, caller } => handle_transfer_star(
            state,
            TransferStarCommand {
                star_id: id,
                destination: who(to),
                caller: who(caller),
                timestamp: ts(),
                correlation_id,
                causation_id: None,
            },
        )
        .map(StarEvent::StarTransferred),
        Op::Exchange { a, b, caller } => handle_exchange_stars(
            state,
            ExchangeStarsCommand {
                star_a: a,
                star_b: b,
                caller: who(caller),
                timestamp: ts(),
                correlation_id,
                causation_id: None,
            },
        )
        .map(StarEvent::StarsExchanged),
        Op::List { id, price, caller } => handle_list_star(
            state,
            ListStarCommand {
                star_id: id,
                price: Amount::new(price),
                caller: who(caller),
                timestamp: ts(),
                correlation_id,
                causation_id: None,
            },
        )
        .map(StarEvent::StarListed),
        Op::Purchase { id, buyer, payment } => handle_purchase_star(
            state,
            PurchaseStarCommand {
                star_id: id,
                buyer: who(buyer),
                payment: Amount::new(payment),
                timestamp: ts(),
                correlation_id,
                causation_id: None,
            },
        )
        .map(StarEvent::StarPurchased),
    }
}

/// Fold every accepted command, keeping the event stream
fn run(ops: &[Op]) -> (RegistryState, Vec<StarEvent>) {
    let mut state = RegistryState::new(registry_id());
    let mut events = Vec::new();
    for op in ops {
        if let Ok(event) = handle(&state, op) {
            state = apply_event(state, &event);
            events.push(event);
        }
    }
    (state, events)
}

fn star_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,30}"
}

fn star_symbol() -> impl Strategy<Value = String> {
    "[A-Z]{1,8}"
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: A created star reads back with its name, symbol and creator
    #[test]
    fn prop_create_then_lookup(
        name in star_name(),
        symbol in star_symbol(),
        raw_id in 1..u64::MAX,
        creator in 0..ACCOUNTS,
    ) {
        let (state, _) = run(&[]);
        let event = handle_create_star(&state, CreateStarCommand {
            name: name.clone(),
            symbol: symbol.clone(),
            star_id: raw_id,
            creator: who(creator),
            timestamp: ts(),
            correlation_id: Uuid::now_v7(),
        }).unwrap();
        let state = apply_event(state, &StarEvent::StarCreated(event));
        let id = StarId::new(raw_id).unwrap();

        prop_assert_eq!(state.lookup_info(id).unwrap().as_str(), name.as_str());
        prop_assert_eq!(state.symbol_of(id).unwrap().as_str(), symbol.as_str());
        prop_assert_eq!(state.owner_of(id).unwrap(), &who(creator));
        prop_assert_eq!(state.sale_price(id), Err(CommandError::NotListed(id)));
    }

    /// Property: Once an id is taken, creating it again always fails
    #[test]
    fn prop_duplicate_create_always_fails(ops in op_sequence(), creator in 0..ACCOUNTS) {
        let (state, _) = run(&ops);
        for id in state.stars.keys() {
            let result = handle(&state, &Op::Create { id: id.value(), creator });
            prop_assert_eq!(result, Err(CommandError::DuplicateId(*id)));
        }
    }

    /// Property: Exchange swaps the two owners and nothing else
    #[test]
    fn prop_exchange_swaps_owners(ops in op_sequence(), a in 1..8u64, b in 1..8u64) {
        let (state, _) = run(&ops);
        let (Ok(owner_a), Ok(owner_b)) = (
            state.owner_of(StarId::new(a).unwrap()).cloned(),
            state.owner_of(StarId::new(b).unwrap()).cloned(),
        ) else {
            return Ok(());
        };
        prop_assume!(a != b);

        let caller = (0..ACCOUNTS).find(|i| who(*i) == owner_a).unwrap();
        let event = handle(&state, &Op::Exchange { a, b, caller }).unwrap();
        let after = apply_event(state.clone(), &event);

        prop_assert_eq!(after.owner_of(StarId::new(a).unwrap()), Ok(&owner_b));
        prop_assert_eq!(after.owner_of(StarId::new(b).unwrap()), Ok(&owner_a));
        prop_assert_eq!(after.len(), state.len());
    }

    /// Property: Any ownership change leaves the affected stars unlisted
    #[test]
    fn prop_ownership_change_clears_listing(ops in op_sequence()) {
        let (_, events) = run(&ops);
        let mut state = RegistryState::new(registry_id());
        for event in &events {
            state = apply_event(state, event);
            let moved = match event {
                StarEvent::StarTransferred(_)
                | StarEvent::StarsExchanged(_)
                | StarEvent::StarPurchased(_) => event.star_ids(),
                _ => Vec::new(),
            };
            for id in moved {
                prop_assert!(state.sale_price(id).is_err(), "star {} still listed", id);
            }
        }
    }

    /// Property: Every star has exactly one owner among the accounts
    #[test]
    fn prop_counts_partition_stars(ops in op_sequence()) {
        let (state, _) = run(&ops);
        let total: usize = (0..ACCOUNTS).map(|i| state.star_count(&who(i))).sum();
        prop_assert_eq!(total, state.len());
    }

    /// Property: Replaying the stream reproduces the live state
    #[test]
    fn prop_replay_is_deterministic(ops in op_sequence()) {
        let (live, events) = run(&ops);
        let replayed = RegistryState::from_events(registry_id(), &events);

        prop_assert_eq!(replayed.version, events.len() as u64);
        prop_assert_eq!(replayed, live);
    }

    /// Property: Purchases move exactly the price and conserve total balance
    #[test]
    fn prop_purchases_conserve_balance(ops in op_sequence()) {
        let (_, events) = run(&ops);
        let ledger = InMemoryLedger::with_accounts((0..ACCOUNTS).map(|i| (who(i), Amount::new(1_000))));

        tokio_test::block_on(async {
            let supply = ledger.total_supply().await;
            prop_assert_eq!(supply, Some(Amount::new(1_000 * ACCOUNTS as u128)));
            for event in &events {
                let StarEvent::StarPurchased(e) = event else { continue };
                let seller_before = ledger.balance_of(&e.seller).await;
                let settlement = Settlement {
                    payer: e.buyer.clone(),
                    payee: e.seller.clone(),
                    payment: e.payment,
                    price: e.price,
                    change: e.change,
                };
                if ledger.settle(&settlement).await.is_ok() {
                    let seller_after = ledger.balance_of(&e.seller).await;
                    prop_assert_eq!(seller_before.checked_add(e.price), Some(seller_after));
                    prop_assert_eq!(e.payment.checked_sub(e.price), Some(e.change));
                }
                prop_assert_eq!(ledger.total_supply().await, supply);
            }
            Ok::<(), TestCaseError>(())
        })?;
    }
}
