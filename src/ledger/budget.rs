use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A spending ceiling for the whole ledger. Zero means no budget is set.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget(f64);

impl Budget {
    pub const UNSET: Budget = Budget(0.0);

    pub fn new(limit: f64) -> Result<Self, ValidationError> {
        if limit.is_finite() && limit >= 0.0 {
            Ok(Self(limit))
        } else {
            Err(ValidationError::InvalidBudget(limit))
        }
    }

    pub fn limit(&self) -> f64 {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0 > 0.0
    }

    /// True when a budget is set and `spent` exceeds it.
    pub fn is_exceeded_by(&self, spent: f64) -> bool {
        self.is_set() && spent > self.0
    }
}

impl FromStr for Budget {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let limit: f64 = trimmed
            .parse()
            .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
        Budget::new(limit)
    }
}
