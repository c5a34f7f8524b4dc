// Copyright (c) 2025 - Cowboy AI, Inc.
//! Notary configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `NOTARY_NAME` | `Star Notary` |
//! | `NOTARY_SYMBOL` | `STAR` |
//! | `NOTARY_REGISTRY_ID` | fresh UUID v7 |
//! | `NOTARY_EVENT_BUFFER` | `256` |

use uuid::Uuid;

use crate::errors::{NotaryError, NotaryResult};

/// Configuration for a notary instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotaryConfig {
    /// Registry display name (ERC721 `name`)
    pub name: String,

    /// Registry ticker (ERC721 `symbol`)
    pub symbol: String,

    /// Aggregate id of the registry stream
    pub registry_id: Uuid,

    /// Capacity of the event broadcast channel
    pub event_buffer: usize,
}

impl Default for NotaryConfig {
    fn default() -> Self {
        Self {
            name: "Star Notary".to_string(),
            symbol: "STAR".to_string(),
            registry_id: Uuid::now_v7(),
            event_buffer: 256,
        }
    }
}

impl NotaryConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> NotaryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Missing keys fall back to defaults; present but malformed values fail.
    pub fn from_lookup<F>(lookup: F) -> NotaryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let name = lookup("NOTARY_NAME").unwrap_or(defaults.name);
        if name.trim().is_empty() {
            return Err(NotaryError::Configuration("NOTARY_NAME is empty".to_string()));
        }

        let symbol = lookup("NOTARY_SYMBOL").unwrap_or(defaults.symbol);
        if symbol.trim().is_empty() {
            return Err(NotaryError::Configuration("NOTARY_SYMBOL is empty".to_string()));
        }

        let registry_id = match lookup("NOTARY_REGISTRY_ID") {
            Some(raw) => Uuid::parse_str(&raw).map_err(|e| {
                NotaryError::Configuration(format!("NOTARY_REGISTRY_ID is not a UUID: {e}"))
            })?,
            None => defaults.registry_id,
        };

        let event_buffer = match lookup("NOTARY_EVENT_BUFFER") {
            Some(raw) => raw.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                NotaryError::Configuration(format!(
                    "NOTARY_EVENT_BUFFER must be a positive integer, got {raw:?}"
                ))
            })?,
            None => defaults.event_buffer,
        };

        Ok(Self {
            name,
            symbol,
            registry_id,
            event_buffer,
        })
    }
}
