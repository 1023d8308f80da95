//! Path parameter parsing.
//!
//! Turns the `{num}` segment of a prime-check route into a validated,
//! strictly positive [`BigUint`].

use num_bigint::BigUint;
use num_traits::Zero;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A validated prime-check candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeCheckRequest {
    pub number: BigUint,
}

impl PrimeCheckRequest {
    /// Parse a base-10 integer literal and require it to be positive.
    ///
    /// Accepts an optional leading `+` or `-` followed by one or more ASCII
    /// digits. Leading zeros are allowed. Negative values and zero are
    /// rejected after parsing.
    pub fn parse(raw: &str) -> Result<Self> {
        // ---
        let (negative, digits) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };

        // BigUint's own parser accepts `_` separators, so check digits first.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidNumber(raw.to_string()));
        }

        let number = BigUint::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| Error::InvalidNumber(raw.to_string()))?;

        if negative || number.is_zero() {
            return Err(Error::InvalidNumber(raw.to_string()));
        }

        Ok(Self { number })
    }
}

impl FromStr for PrimeCheckRequest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
