//! Damage transform - Incoming amount to effective damage
//!
//! Formula:
//! - Immunity: 0
//! - Resistance: amount / 2 (integer division, 11 -> 5)
//! - Vulnerability: amount * 2 (checked, overflow is an error)
//! - No defense: amount

use super::constants::{RESISTANCE_DIVISOR, VULNERABILITY_MULTIPLIER};
use crate::error::SheetError;
use crate::types::DefenseKind;

/// Calculate effective damage after the defense that applies to its type
///
/// # Arguments
/// * `amount` - The incoming damage
/// * `defense` - The defense kind for the damage type, if the target has one
///
/// # Errors
/// [`SheetError::ArithmeticOverflow`] if doubling for vulnerability does not
/// fit in a `u32`.
pub fn effective_damage(amount: u32, defense: Option<DefenseKind>) -> Result<u32, SheetError> {
    match defense {
        Some(DefenseKind::Immunity) => Ok(0),
        Some(DefenseKind::Vulnerability) => amount
            .checked_mul(VULNERABILITY_MULTIPLIER)
            .ok_or(SheetError::ArithmeticOverflow {
                operation: "vulnerability doubling",
                amount,
            }),
        Some(DefenseKind::Resistance) => Ok(amount / RESISTANCE_DIVISOR),
        None => Ok(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_defense_passes_through() {
        assert_eq!(effective_damage(7, None).unwrap(), 7);
    }

    #[test]
    fn test_immunity_zeroes() {
        assert_eq!(effective_damage(14, Some(DefenseKind::Immunity)).unwrap(), 0);
    }

    #[test]
    fn test_resistance_truncates() {
        assert_eq!(effective_damage(11, Some(DefenseKind::Resistance)).unwrap(), 5);
        assert_eq!(effective_damage(10, Some(DefenseKind::Resistance)).unwrap(), 5);
        assert_eq!(effective_damage(1, Some(DefenseKind::Resistance)).unwrap(), 0);
    }

    #[test]
    fn test_vulnerability_doubles() {
        assert_eq!(effective_damage(9, Some(DefenseKind::Vulnerability)).unwrap(), 18);
    }

    #[test]
    fn test_vulnerability_at_limit() {
        let largest = u32::MAX / 2;
        assert_eq!(
            effective_damage(largest, Some(DefenseKind::Vulnerability)).unwrap(),
            largest * 2
        );
    }

    #[test]
    fn test_vulnerability_overflow_is_error() {
        let result = effective_damage(u32::MAX / 2 + 1, Some(DefenseKind::Vulnerability));
        assert!(matches!(result, Err(SheetError::ArithmeticOverflow { .. })));
    }
}
