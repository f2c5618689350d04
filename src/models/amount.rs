//! Amount type for expense and budget values
//!
//! Amounts are plain floating point numbers stored exactly as the user typed
//! them. Negative and zero amounts are allowed; only text that is not a finite
//! number is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::error::TrackerError;

/// A monetary amount with no currency attached
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Parse an amount typed at a prompt
    ///
    /// Accepts anything `f64` parses after trimming whitespace ("12", "12.5",
    /// "-3", "1e3"). Infinities and NaN are rejected because JSON cannot
    /// represent them.
    pub fn parse(s: &str) -> Result<Self, TrackerError> {
        let trimmed = s.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self(value)),
            _ => Err(TrackerError::InvalidAmount(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, a| acc + a)
    }
}
