// Copyright (c) 2025 - Cowboy AI, Inc.
//! Integration tests for registry event application and state reconstruction
//!
//! These tests verify the complete flow:
//! 1. Handle command → generate event
//! 2. Apply event → produce new state
//! 3. Reconstruct state from event stream

mod fixtures;

use fixtures::*;
use pretty_assertions::assert_eq;
use star_notary::aggregate::*;
use star_notary::domain::{Amount, StarId};
use star_notary::events::StarEvent;
use star_notary::state_machine::ListingStatus;

fn id(n: u64) -> StarId {
    StarId::new(n).unwrap()
}

/// Apply an accepted event and remember it
fn record(state: RegistryState, events: &mut Vec<StarEvent>, event: StarEvent) -> RegistryState {
    events.push(event.clone());
    apply_event(state, &event)
}

/// Test: mint, list, sell, trade and give away, then rebuild
#[test]
fn test_complete_star_lifecycle() {
    let registry_id = parse_uuid(REGISTRY_ID);
    let mut state = RegistryState::new(registry_id);
    let mut events = Vec::new();
    let (alice, bob, carol) = (account(1), account(2), account(3));
    let price = Amount::from_milli_ether(10);

    // Step 1: Mint two stars
    let created = handle_create_star(&state, create("Awesome Star", "AWE", 1, &alice))
        .expect("Failed to create star 1");
    let created_event_id = created.meta.event_id;
    state = record(state, &mut events, StarEvent::StarCreated(created));
    let created = handle_create_star(&state, create("Second Star", "SEC", 2, &bob))
        .expect("Failed to create star 2");
    state = record(state, &mut events, StarEvent::StarCreated(created));

    assert_eq!(state.len(), 2);
    assert_eq!(state.owner_of(id(1)), Ok(&alice));
    assert_eq!(state.symbol_of(id(2)).unwrap().as_str(), "SEC");

    // Step 2: Alice lists star 1
    let listed = handle_list_star(&state, list(1, price, &alice)).expect("Failed to list");
    state = record(state, &mut events, StarEvent::StarListed(listed));
    assert_eq!(state.sale_price(id(1)), Ok(price));
    assert_eq!(state.star(id(1)).unwrap().listing, ListingStatus::Listed { price });

    // Step 3: Bob buys it with a surplus
    let mut buy = purchase(1, &bob, Amount::from_milli_ether(25));
    buy.causation_id = Some(created_event_id);
    let purchased = handle_purchase_star(&state, buy).expect("Failed to purchase");
    assert_eq!(purchased.change, Amount::from_milli_ether(15));
    assert_eq!(purchased.meta.causation_id, Some(created_event_id));
    state = record(state, &mut events, StarEvent::StarPurchased(purchased));

    assert_eq!(state.owner_of(id(1)), Ok(&bob));
    assert_eq!(state.sale_price(id(1)), Err(CommandError::NotListed(id(1))));
    assert_eq!(state.stars_owned_by(&bob), vec![id(1), id(2)]);

    // Step 4: Bob owns both, exchanging them is allowed and a no-op for owners
    let exchanged = handle_exchange_stars(&state, exchange(1, 2, &bob)).expect("Failed to exchange");
    state = record(state, &mut events, StarEvent::StarsExchanged(exchanged));
    assert_eq!(state.star_count(&bob), 2);

    // Step 5: Bob gives star 2 to Carol
    let transferred =
        handle_transfer_star(&state, transfer(2, &carol, &bob)).expect("Failed to transfer");
    state = record(state, &mut events, StarEvent::StarTransferred(transferred));

    assert_eq!(state.owner_of(id(2)), Ok(&carol));
    assert_eq!(state.version, 6);
    assert_eq!(state.created_at, Some(fixed_timestamp()));
    assert_eq!(state.updated_at, Some(fixed_timestamp()));

    // Rebuilding from the stream gives the same state
    let rebuilt = RegistryState::from_events(registry_id, &events);
    assert_eq!(rebuilt, state);
}

/// Test: rejected commands never produce events, so state stays untouched
#[test]
fn test_rejections_leave_state_unchanged() {
    let registry_id = parse_uuid(REGISTRY_ID);
    let owner = account(0);
    let stranger = account(9);

    let event = handle_create_star(
        &RegistryState::new(registry_id),
        create("Awesome Star", "AWE", 7, &owner),
    )
    .unwrap();
    let state = apply_event(RegistryState::new(registry_id), &StarEvent::StarCreated(event));
    let before = state.clone();

    assert!(handle_create_star(&state, create("Dup", "DUP", 7, &stranger)).is_err());
    assert!(handle_transfer_star(&state, transfer(7, &stranger, &stranger)).is_err());
    assert!(handle_exchange_stars(&state, exchange(7, 8, &owner)).is_err());
    assert!(handle_list_star(&state, list(7, Amount::ZERO, &owner)).is_err());
    assert!(handle_purchase_star(&state, purchase(7, &stranger, Amount::ETHER)).is_err());

    assert_eq!(state, before);
}

/// Test: relisting replaces the price, a transfer clears it
#[test]
fn test_listing_follows_ownership() {
    let registry_id = parse_uuid(REGISTRY_ID);
    let (seller, friend) = (account(4), account(5));
    let mut events = Vec::new();

    let mut state = RegistryState::new(registry_id);
    let created = handle_create_star(&state, create("Listed Star", "LST", 42, &seller)).unwrap();
    state = record(state, &mut events, StarEvent::StarCreated(created));

    for milli in [10, 30] {
        let listed = handle_list_star(&state, list(42, Amount::from_milli_ether(milli), &seller))
            .unwrap();
        state = record(state, &mut events, StarEvent::StarListed(listed));
    }
    assert_eq!(state.listings(), vec![(id(42), Amount::from_milli_ether(30))]);

    let transferred = handle_transfer_star(&state, transfer(42, &friend, &seller)).unwrap();
    state = record(state, &mut events, StarEvent::StarTransferred(transferred));

    assert!(state.listings().is_empty());
    assert_eq!(
        handle_purchase_star(&state, purchase(42, &seller, Amount::ETHER)),
        Err(CommandError::NotListed(id(42)))
    );
}

/// Test: state serializes with amounts as decimal strings
#[test]
fn test_state_serialization() {
    let registry_id = parse_uuid(REGISTRY_ID);
    let owner = account(0);
    let state = RegistryState::new(registry_id);
    let created = handle_create_star(&state, create("Awesome Star", "AWE", 3, &owner)).unwrap();
    let state = apply_event(state, &StarEvent::StarCreated(created));
    let listed = handle_list_star(&state, list(3, Amount::new(1500), &owner)).unwrap();
    let state = apply_event(state, &StarEvent::StarListed(listed));

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["stars"]["3"]["listing"]["price"], "1500");
    assert_eq!(json["stars"]["3"]["owner"], "0xacct0");

    let back: RegistryState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}
