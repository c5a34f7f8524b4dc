// Copyright (c) 2025 - Cowboy AI, Inc.
//! Star Value Objects
//!
//! - [`StarId`] - positive integer token id, unique for the registry lifetime
//! - [`StarName`] - non-empty label, immutable after creation
//! - [`StarSymbol`] - non-empty short label, immutable after creation

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Star value object validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StarError {
    #[error("Star id must be a positive integer")]
    ZeroId,

    #[error("Star name is empty")]
    EmptyName,

    #[error("Star symbol is empty")]
    EmptySymbol,

    #[error("Star symbol exceeds maximum length of {max} characters: {actual}")]
    SymbolTooLong { max: usize, actual: usize },
}

/// Star token identifier
///
/// Zero is reserved and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct StarId(u64);

impl StarId {
    pub fn new(id: u64) -> Result<Self, StarError> {
        if id == 0 {
            return Err(StarError::ZeroId);
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for StarId {
    type Error = StarError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarId> for u64 {
    fn from(value: StarId) -> Self {
        value.0
    }
}

/// Human readable star name
///
/// Whitespace-only names count as empty. The stored text is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StarName(String);

impl StarName {
    pub fn new(name: impl Into<String>) -> Result<Self, StarError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StarError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for StarName {
    type Error = StarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarName> for String {
    fn from(value: StarName) -> Self {
        value.0
    }
}

/// Short ticker-like symbol (e.g. `AWE`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StarSymbol(String);

impl StarSymbol {
    /// Maximum symbol length in characters
    pub const MAX_LENGTH: usize = 16;

    pub fn new(symbol: impl Into<String>) -> Result<Self, StarError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(StarError::EmptySymbol);
        }

        let len = symbol.chars().count();
        if len > Self::MAX_LENGTH {
            return Err(StarError::SymbolTooLong {
                max: Self::MAX_LENGTH,
                actual: len,
            });
        }

        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StarSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for StarSymbol {
    type Error = StarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarSymbol> for String {
    fn from(value: StarSymbol) -> Self {
        value.0
    }
}
