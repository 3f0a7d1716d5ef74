//! Position domain: user positions, derived analytics, portfolio totals.

mod convert;
pub mod math;
pub mod portfolio;
pub mod wire;

use crate::domain::market::CountryKey;
use crate::shared::Side;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::{PositionDecimals, ReportedPnl};
pub use math::{
    estimated_liquidation_price, metrics, partial_close, price_change_pct, return_on_equity,
    unrealized_pnl,
};
pub use portfolio::PortfolioSummary;

// ─── Position ────────────────────────────────────────────────────────────────

/// Snapshot of a user's open position, normalized to decimals.
///
/// The trading contract holds the authoritative copy; this crate only derives
/// read-only analytics from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub country_key: CountryKey,
    pub side: Side,
    pub collateral: Decimal,
    pub size: Decimal,
    pub entry_price: Decimal,
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_funding_at: Option<DateTime<Utc>>,
}

impl Position {
    pub fn new(
        country_key: CountryKey,
        side: Side,
        collateral: Decimal,
        size: Decimal,
        entry_price: Decimal,
    ) -> Self {
        Self {
            country_key,
            side,
            collateral,
            size,
            entry_price,
            opened_at: None,
            last_funding_at: None,
        }
    }

    pub fn is_long(&self) -> bool {
        self.side.is_long()
    }
}

// ─── Derived ─────────────────────────────────────────────────────────────────

/// Analytics for one position at one mark price. Never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionMetrics {
    pub pnl: Decimal,
    /// PnL over collateral, as a ratio (`0.4` = 40%).
    pub roe: Decimal,
    /// Display estimate; ignores funding and fees.
    pub est_liquidation_price: Decimal,
    /// Direction-adjusted price move since entry, in percent.
    pub price_change_pct: Decimal,
}

/// Result of splitting a position for `closePositionPartial`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialClose {
    pub ratio_bps: u32,
    /// Portion being closed.
    pub closed: Position,
    /// What stays open, `None` on a full close.
    pub remaining: Option<Position>,
}

impl PartialClose {
    /// PnL realized by the closed portion at `mark_price`.
    pub fn realized_pnl(
        &self,
        mark_price: Decimal,
    ) -> Result<Decimal, crate::error::PositionMathError> {
        unrealized_pnl(&self.closed, mark_price)
    }
}
