//! Position analytics: PnL, return on equity, liquidation estimate.
//!
//! Pure functions over already-normalized decimals. All arithmetic is checked;
//! overflow surfaces as [`PositionMathError::Overflow`] instead of panicking.

use rust_decimal::Decimal;

use super::{PartialClose, Position, PositionMetrics};
use crate::constants::BPS_DENOMINATOR;
use crate::error::PositionMathError;
use crate::shared::Side;

fn overflow(context: &str) -> PositionMathError {
    PositionMathError::Overflow {
        context: context.to_string(),
    }
}

/// Unrealized PnL at `mark_price`.
///
/// ```text
/// long:  (mark - entry) * size
/// short: (entry - mark) * size
/// ```
pub fn unrealized_pnl(
    position: &Position,
    mark_price: Decimal,
) -> Result<Decimal, PositionMathError> {
    let move_per_unit = match position.side {
        Side::Long => mark_price.checked_sub(position.entry_price),
        Side::Short => position.entry_price.checked_sub(mark_price),
    }
    .ok_or_else(|| overflow("mark - entry"))?;

    move_per_unit
        .checked_mul(position.size)
        .ok_or_else(|| overflow("price move * size"))
}

/// `pnl / collateral`. Collateral must be positive.
pub fn return_on_equity(pnl: Decimal, collateral: Decimal) -> Result<Decimal, PositionMathError> {
    if collateral <= Decimal::ZERO {
        return Err(PositionMathError::InvalidCollateral(collateral.to_string()));
    }
    pnl.checked_div(collateral)
        .ok_or_else(|| overflow("pnl / collateral"))
}

/// Estimated liquidation price for display.
///
/// ```text
/// long:  entry * (1 - collateral * threshold / size)
/// short: entry * (1 + collateral * threshold / size)
/// ```
///
/// A long whose collateral covers the whole move to zero reports `0`. This is
/// an approximation that ignores funding and fees; the contract's own
/// liquidation rule is authoritative.
pub fn estimated_liquidation_price(
    position: &Position,
    maintenance_threshold: Decimal,
) -> Result<Decimal, PositionMathError> {
    if position.size <= Decimal::ZERO {
        return Err(PositionMathError::InvalidSize(position.size.to_string()));
    }
    if maintenance_threshold < Decimal::ZERO || maintenance_threshold > Decimal::ONE {
        return Err(PositionMathError::InvalidThreshold(
            maintenance_threshold.to_string(),
        ));
    }

    let buffer = position
        .collateral
        .checked_mul(maintenance_threshold)
        .ok_or_else(|| overflow("collateral * threshold"))?
        .checked_div(position.size)
        .ok_or_else(|| overflow("buffer / size"))?;

    let factor = match position.side {
        Side::Long => Decimal::ONE.checked_sub(buffer),
        Side::Short => Decimal::ONE.checked_add(buffer),
    }
    .ok_or_else(|| overflow("1 +/- buffer"))?;

    let price = position
        .entry_price
        .checked_mul(factor)
        .ok_or_else(|| overflow("entry * factor"))?;

    Ok(price.max(Decimal::ZERO))
}

/// Direction-adjusted percentage move from entry to `mark_price`.
pub fn price_change_pct(
    position: &Position,
    mark_price: Decimal,
) -> Result<Decimal, PositionMathError> {
    if position.entry_price <= Decimal::ZERO {
        return Err(PositionMathError::InvalidEntryPrice(
            position.entry_price.to_string(),
        ));
    }
    let pct = mark_price
        .checked_sub(position.entry_price)
        .and_then(|d| d.checked_div(position.entry_price))
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| overflow("(mark - entry) / entry * 100"))?;

    Ok(match position.side {
        Side::Long => pct,
        Side::Short => -pct,
    })
}

/// All display metrics for one position at `mark_price`.
pub fn metrics(
    position: &Position,
    mark_price: Decimal,
    maintenance_threshold: Decimal,
) -> Result<PositionMetrics, PositionMathError> {
    let pnl = unrealized_pnl(position, mark_price)?;
    Ok(PositionMetrics {
        pnl,
        roe: return_on_equity(pnl, position.collateral)?,
        est_liquidation_price: estimated_liquidation_price(position, maintenance_threshold)?,
        price_change_pct: price_change_pct(position, mark_price)?,
    })
}

/// Split a position the way `closePositionPartial(id, ratio_bps)` does:
/// size and collateral shrink proportionally, entry price is unchanged.
pub fn partial_close(
    position: &Position,
    ratio_bps: u32,
) -> Result<PartialClose, PositionMathError> {
    if ratio_bps == 0 || ratio_bps > BPS_DENOMINATOR {
        return Err(PositionMathError::InvalidCloseRatio(ratio_bps));
    }

    let ratio = Decimal::from(ratio_bps) / Decimal::from(BPS_DENOMINATOR);
    let closed_size = position
        .size
        .checked_mul(ratio)
        .ok_or_else(|| overflow("size * ratio"))?;
    let closed_collateral = position
        .collateral
        .checked_mul(ratio)
        .ok_or_else(|| overflow("collateral * ratio"))?;

    let closed = Position {
        size: closed_size,
        collateral: closed_collateral,
        ..position.clone()
    };

    let remaining = (ratio_bps < BPS_DENOMINATOR).then(|| Position {
        size: position.size - closed_size,
        collateral: position.collateral - closed_collateral,
        ..position.clone()
    });

    Ok(PartialClose {
        ratio_bps,
        closed,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::CountryKey;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn position(side: Side, collateral: &str, size: &str, entry: &str) -> Position {
        Position::new(
            CountryKey::encode("Indonesia").unwrap(),
            side,
            dec(collateral),
            dec(size),
            dec(entry),
        )
    }

    #[test]
    fn test_pnl_long_and_short() {
        let long = position(Side::Long, "200", "10", "100");
        let short = position(Side::Short, "200", "10", "100");
        assert_eq!(unrealized_pnl(&long, dec("108")).unwrap(), dec("80"));
        assert_eq!(unrealized_pnl(&short, dec("92")).unwrap(), dec("80"));
        assert_eq!(unrealized_pnl(&short, dec("108")).unwrap(), dec("-80"));
    }

    #[test]
    fn test_roe() {
        assert_eq!(return_on_equity(dec("80"), dec("200")).unwrap(), dec("0.4"));
        assert_eq!(return_on_equity(dec("-50"), dec("200")).unwrap(), dec("-0.25"));
    }

    #[test]
    fn test_roe_rejects_non_positive_collateral() {
        assert_eq!(
            return_on_equity(dec("80"), Decimal::ZERO),
            Err(PositionMathError::InvalidCollateral("0".to_string()))
        );
        assert!(matches!(
            return_on_equity(dec("80"), dec("-1")),
            Err(PositionMathError::InvalidCollateral(_))
        ));
    }

    #[test]
    fn test_liquidation_long() {
        // 100 * (1 - 50 * 0.85 / 100) = 57.5
        let long = position(Side::Long, "50", "100", "100");
        assert_eq!(
            estimated_liquidation_price(&long, dec("0.85")).unwrap(),
            dec("57.5")
        );
    }

    #[test]
    fn test_liquidation_short() {
        // 100 * (1 + 50 * 0.85 / 100) = 142.5
        let short = position(Side::Short, "50", "100", "100");
        assert_eq!(
            estimated_liquidation_price(&short, dec("0.85")).unwrap(),
            dec("142.5")
        );
    }

    #[test]
    fn test_liquidation_long_floors_at_zero() {
        // 100 * (1 - 50 * 0.85 / 10) = -325
        let long = position(Side::Long, "50", "10", "100");
        assert_eq!(
            estimated_liquidation_price(&long, dec("0.85")).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_liquidation_rejects_zero_size() {
        let empty = position(Side::Long, "50", "0", "100");
        assert_eq!(
            estimated_liquidation_price(&empty, dec("0.85")),
            Err(PositionMathError::InvalidSize("0".to_string()))
        );
    }

    #[test]
    fn test_liquidation_rejects_threshold_out_of_range() {
        let long = position(Side::Long, "50", "100", "100");
        assert!(matches!(
            estimated_liquidation_price(&long, dec("1.5")),
            Err(PositionMathError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_price_change_pct() {
        let long = position(Side::Long, "200", "10", "100");
        let short = position(Side::Short, "200", "10", "100");
        assert_eq!(price_change_pct(&long, dec("108")).unwrap(), dec("8"));
        assert_eq!(price_change_pct(&short, dec("108")).unwrap(), dec("-8"));
        let bad = position(Side::Long, "200", "10", "0");
        assert!(matches!(
            price_change_pct(&bad, dec("1")),
            Err(PositionMathError::InvalidEntryPrice(_))
        ));
    }

    #[test]
    fn test_metrics() {
        let long = position(Side::Long, "200", "10", "100");
        let m = metrics(&long, dec("108"), dec("0.85")).unwrap();
        assert_eq!(m.pnl, dec("80"));
        assert_eq!(m.roe, dec("0.4"));
        // 100 * (1 - 200 * 0.85 / 10) < 0
        assert_eq!(m.est_liquidation_price, Decimal::ZERO);
        assert_eq!(m.price_change_pct, dec("8"));
    }

    #[test]
    fn test_partial_close_half() {
        let long = position(Side::Long, "200", "10", "100");
        let split = partial_close(&long, 5_000).unwrap();
        assert_eq!(split.closed.size, dec("5"));
        assert_eq!(split.closed.collateral, dec("100"));
        let remaining = split.remaining.as_ref().unwrap();
        assert_eq!(remaining.size, dec("5"));
        assert_eq!(remaining.entry_price, dec("100"));
        assert_eq!(split.realized_pnl(dec("108")).unwrap(), dec("40"));
    }

    #[test]
    fn test_partial_close_full_and_invalid() {
        let long = position(Side::Long, "200", "10", "100");
        assert!(partial_close(&long, 10_000).unwrap().remaining.is_none());
        assert_eq!(
            partial_close(&long, 0),
            Err(PositionMathError::InvalidCloseRatio(0))
        );
        assert_eq!(
            partial_close(&long, 10_001),
            Err(PositionMathError::InvalidCloseRatio(10_001))
        );
    }
}
