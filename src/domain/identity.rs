// Copyright (c) 2025 - Cowboy AI, Inc.
//! Identity Value Object
//!
//! An identity is an external actor that can own stars and hold a balance.
//! The registry never keeps an "ambient" caller: every operation receives the
//! acting identity explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identity validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Identity is empty")]
    Empty,

    #[error("Identity exceeds maximum length of 128 characters: {0}")]
    TooLong(usize),

    #[error("Identity contains whitespace: {0:?}")]
    Whitespace(String),
}

/// Addressable actor (account address, user handle, ...)
///
/// # Examples
///
/// ```rust
/// use star_notary::domain::Identity;
///
/// let alice = Identity::new("0xA11CE").unwrap();
/// assert_eq!(alice.as_str(), "0xA11CE");
///
/// assert!(Identity::new("").is_err());
/// assert!(Identity::new("two words").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Maximum accepted length
    pub const MAX_LENGTH: usize = 128;

    /// Create a new identity with validation
    pub fn new(identity: impl Into<String>) -> Result<Self, IdentityError> {
        let identity = identity.into();

        if identity.is_empty() {
            return Err(IdentityError::Empty);
        }

        if identity.len() > Self::MAX_LENGTH {
            return Err(IdentityError::TooLong(identity.len()));
        }

        if identity.chars().any(char::is_whitespace) {
            return Err(IdentityError::Whitespace(identity));
        }

        Ok(Self(identity))
    }

    /// Get the identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identity {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Identity> for String {
    fn from(value: Identity) -> Self {
        value.0
    }
}
