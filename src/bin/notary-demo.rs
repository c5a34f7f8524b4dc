// Copyright (c) 2025 - Cowboy AI, Inc.
//! Star Notary Demo
//!
//! Drives an in-memory notary through a mint / list / buy / exchange session
//! and prints the resulting registry state as JSON.
//!
//! Run with: cargo run --bin notary-demo
//!
//! Configuration comes from `NOTARY_*` environment variables, logging from
//! `RUST_LOG`.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use star_notary::aggregate::{
    CreateStarCommand, ExchangeStarsCommand, ListStarCommand, PurchaseStarCommand,
};
use star_notary::domain::{Amount, Identity};
use star_notary::event_store::InMemoryEventStore;
use star_notary::ledger::{BalanceLedger, InMemoryLedger};
use star_notary::{EventSourcedStarNotary, NotaryConfig, StarNotaryService};
use tracing::info;
use uuid::Uuid;

fn identity(raw: &str) -> Result<Identity> {
    Identity::new(raw).with_context(|| format!("invalid identity {raw:?}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = NotaryConfig::from_env().context("loading notary configuration")?;
    info!(name = %config.name, symbol = %config.symbol, "Starting notary demo");

    let alice = identity("alice")?;
    let bob = identity("bob")?;
    let starting_balance = Amount::ETHER;

    let ledger = Arc::new(InMemoryLedger::with_accounts([
        (alice.clone(), starting_balance),
        (bob.clone(), starting_balance),
    ]));
    let notary = EventSourcedStarNotary::new(
        config,
        Arc::new(InMemoryEventStore::new()),
        ledger.clone(),
    );
    let session = Uuid::now_v7();

    let stars = [(1, "Awesome Star", &alice), (2, "Second Star", &bob)];
    let mints = stars.map(|(star_id, name, owner)| {
        let notary = &notary;
        async move {
            notary
                .create_star(CreateStarCommand {
                    name: name.to_string(),
                    symbol: "AWE".to_string(),
                    star_id,
                    creator: owner.clone(),
                    timestamp: Utc::now(),
                    correlation_id: session,
                })
                .await
                .with_context(|| format!("creating star {star_id}"))
        }
    });
    let minted = futures::future::try_join_all(mints).await?;
    info!(stars = ?minted, "Minted stars");

    let price = Amount::from_milli_ether(10);
    notary
        .put_star_up_for_sale(ListStarCommand {
            star_id: 1,
            price,
            caller: alice.clone(),
            timestamp: Utc::now(),
            correlation_id: session,
            causation_id: None,
        })
        .await
        .context("listing star 1")?;

    let change = notary
        .buy_star(PurchaseStarCommand {
            star_id: 1,
            buyer: bob.clone(),
            payment: Amount::from_milli_ether(50),
            timestamp: Utc::now(),
            correlation_id: session,
            causation_id: None,
        })
        .await
        .context("buying star 1")?;
    info!(%change, "Bob bought star 1");

    notary
        .exchange_stars(ExchangeStarsCommand {
            star_a: 1,
            star_b: 2,
            caller: bob.clone(),
            timestamp: Utc::now(),
            correlation_id: session,
            causation_id: None,
        })
        .await
        .context("exchanging stars")?;

    for who in [&alice, &bob] {
        info!(
            identity = %who,
            balance = %ledger.balance_of(who).await,
            stars = ?notary.stars_owned_by(who).await?,
            "Final holdings"
        );
    }

    let snapshot = notary.snapshot().await;
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("serializing registry state")?
    );

    Ok(())
}
