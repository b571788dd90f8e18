//! Request bodies and their validation
//!
//! Amounts arrive as signed integers so zero and negative values reach
//! validation instead of failing deserialization. Validation yields the
//! `u32` the engine works with.

use crate::error::SheetError;
use crate::types::DamageType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRequest {
    pub amount: i64,
    #[serde(rename = "type")]
    pub damage_type: DamageType,
}

impl DamageRequest {
    pub fn new(amount: i64, damage_type: DamageType) -> Self {
        DamageRequest { amount, damage_type }
    }

    /// Amount must be positive
    pub fn validate(&self) -> Result<u32, SheetError> {
        positive_amount(self.amount, "Damage")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealRequest {
    pub amount: i64,
}

impl HealRequest {
    pub fn new(amount: i64) -> Self {
        HealRequest { amount }
    }

    /// Amount must be positive
    pub fn validate(&self) -> Result<u32, SheetError> {
        positive_amount(self.amount, "Heal")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempHpRequest {
    pub amount: i64,
}

impl TempHpRequest {
    pub fn new(amount: i64) -> Self {
        TempHpRequest { amount }
    }

    /// Amount must be non-negative
    pub fn validate(&self) -> Result<u32, SheetError> {
        if self.amount < 0 {
            return Err(SheetError::invalid_argument(
                "Temp HP amount must be non-negative.",
            ));
        }
        in_range(self.amount, "Temp HP")
    }
}

fn positive_amount(amount: i64, label: &str) -> Result<u32, SheetError> {
    if amount <= 0 {
        return Err(SheetError::invalid_argument(format!(
            "{label} amount must be positive."
        )));
    }
    in_range(amount, label)
}

fn in_range(amount: i64, label: &str) -> Result<u32, SheetError> {
    u32::try_from(amount).map_err(|_| {
        SheetError::invalid_argument(format!(
            "{label} amount must not exceed {}.",
            u32::MAX
        ))
    })
}
