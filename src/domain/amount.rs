// Copyright (c) 2025 - Cowboy AI, Inc.
//! Monetary amounts in the smallest indivisible unit (wei)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Non-negative amount in wei
///
/// Arithmetic is checked; overflow and underflow surface as `None`.
/// Serialized as a decimal string so values above 2^53 survive JSON readers.
///
/// ```rust
/// use star_notary::domain::Amount;
///
/// let price = Amount::from_milli_ether(10); // 0.01 ether
/// assert_eq!(price.wei(), 10_000_000_000_000_000);
/// assert_eq!(price.checked_sub(Amount::ETHER), None);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// One ether (10^18 wei)
    pub const ETHER: Amount = Amount(1_000_000_000_000_000_000);

    pub const fn new(wei: u128) -> Self {
        Self(wei)
    }

    const WEI_PER_MILLI_ETHER: u128 = 1_000_000_000_000_000;

    /// Convenience constructor: thousandths of an ether
    ///
    /// # Panics
    ///
    /// Panics if the amount does not fit in wei. Use
    /// [`Amount::checked_from_milli_ether`] for untrusted input.
    pub const fn from_milli_ether(milli: u128) -> Self {
        match Self::checked_from_milli_ether(milli) {
            Some(amount) => amount,
            None => panic!("milli-ether amount overflows wei"),
        }
    }

    /// Thousandths of an ether, or `None` on overflow
    pub const fn checked_from_milli_ether(milli: u128) -> Option<Self> {
        match milli.checked_mul(Self::WEI_PER_MILLI_ETHER) {
            Some(wei) => Some(Self(wei)),
            None => None,
        }
    }

    pub const fn wei(&self) -> u128 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    pub fn checked_mul(self, factor: u128) -> Option<Amount> {
        self.0.checked_mul(factor).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wei", self.0)
    }
}

impl From<u128> for Amount {
    fn from(wei: u128) -> Self {
        Self(wei)
    }
}

impl FromStr for Amount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>().map(Self)
    }
}

impl TryFrom<String> for Amount {
    type Error = std::num::ParseIntError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(value: Amount) -> Self {
        value.0.to_string()
    }
}
