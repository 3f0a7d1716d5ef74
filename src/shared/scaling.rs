//! Pure conversion between on-chain fixed-point integers and decimals.
//!
//! All math uses `rust_decimal::Decimal` for exact arithmetic. The decimal
//! exponent is always supplied by the caller; nothing here assumes 8 or 18.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::ScalingError;

/// Largest exponent a `Decimal` can represent as scale.
pub const MAX_DECIMALS: u32 = 28;

/// Convert a raw fixed-point integer into a decimal (`formatUnits`).
///
/// ```text
/// value = raw / 10^decimals
/// ```
pub fn normalize(raw: i128, decimals: u32) -> Result<Decimal, ScalingError> {
    if decimals > MAX_DECIMALS {
        return Err(ScalingError::InvalidDecimals(decimals));
    }
    Decimal::try_from_i128_with_scale(raw, decimals)
        .map(|d| d.normalize())
        .map_err(|e| ScalingError::Overflow {
            context: format!("{} with {} decimals: {}", raw, decimals, e),
        })
}

/// Convert a decimal into raw base units (`parseUnits`).
///
/// Rejects values that would need fractional base units.
pub fn to_base_units(value: Decimal, decimals: u32) -> Result<i128, ScalingError> {
    let multiplier = multiplier(decimals)?;

    let scaled = value
        .checked_mul(multiplier)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * 10^{}", value, decimals),
        })?;

    if scaled.fract() != Decimal::ZERO {
        return Err(ScalingError::FractionalAmount {
            value: scaled.to_string(),
        });
    }

    scaled.to_i128().ok_or_else(|| ScalingError::Overflow {
        context: format!("{} does not fit in i128", scaled),
    })
}

/// Parse a user-entered amount string into raw base units.
pub fn parse_units(input: &str, decimals: u32) -> Result<i128, ScalingError> {
    let value = Decimal::from_str(input.trim()).map_err(|e| ScalingError::InvalidDecimal {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    to_base_units(value, decimals)
}

fn multiplier(decimals: u32) -> Result<Decimal, ScalingError> {
    if decimals > MAX_DECIMALS {
        return Err(ScalingError::InvalidDecimals(decimals));
    }
    let pow = 10i128
        .checked_pow(decimals)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("10^{} overflow", decimals),
        })?;
    Decimal::try_from_i128_with_scale(pow, 0).map_err(|e| ScalingError::Overflow {
        context: format!("10^{}: {}", decimals, e),
    })
}
