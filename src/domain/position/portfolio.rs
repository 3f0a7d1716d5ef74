//! Portfolio totals across open positions.

use super::math::unrealized_pnl;
use super::Position;
use crate::error::PositionMathError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account-level totals shown on the portfolio header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Collateral deposited in the trading contract.
    pub margin_balance: Decimal,
    /// Collateral locked in open positions.
    pub locked_collateral: Decimal,
    pub total_unrealized_pnl: Decimal,
    /// `margin_balance + total_unrealized_pnl`
    pub total_equity: Decimal,
    pub open_positions: usize,
}

impl PortfolioSummary {
    /// Totals from positions paired with their current mark prices.
    pub fn from_positions(
        margin_balance: Decimal,
        positions: &[(Position, Decimal)],
    ) -> Result<Self, PositionMathError> {
        let mut total_pnl = Decimal::ZERO;
        let mut locked = Decimal::ZERO;
        for (position, mark) in positions {
            let pnl = unrealized_pnl(position, *mark)?;
            total_pnl = total_pnl
                .checked_add(pnl)
                .ok_or_else(|| PositionMathError::Overflow {
                    context: "sum of pnl".to_string(),
                })?;
            locked = locked
                .checked_add(position.collateral)
                .ok_or_else(|| PositionMathError::Overflow {
                    context: "sum of collateral".to_string(),
                })?;
        }
        Self::assemble(margin_balance, locked, total_pnl, positions.len())
    }

    /// Totals from PnL figures the contract reported directly
    /// (`getPositionPnL`), when no position snapshots are at hand.
    pub fn from_reported_pnl(
        margin_balance: Decimal,
        pnls: impl IntoIterator<Item = Decimal>,
    ) -> Result<Self, PositionMathError> {
        let mut total_pnl = Decimal::ZERO;
        let mut count = 0;
        for pnl in pnls {
            total_pnl = total_pnl
                .checked_add(pnl)
                .ok_or_else(|| PositionMathError::Overflow {
                    context: "sum of pnl".to_string(),
                })?;
            count += 1;
        }
        Self::assemble(margin_balance, Decimal::ZERO, total_pnl, count)
    }

    fn assemble(
        margin_balance: Decimal,
        locked_collateral: Decimal,
        total_unrealized_pnl: Decimal,
        open_positions: usize,
    ) -> Result<Self, PositionMathError> {
        let total_equity = margin_balance
            .checked_add(total_unrealized_pnl)
            .ok_or_else(|| PositionMathError::Overflow {
                context: "margin + pnl".to_string(),
            })?;
        Ok(Self {
            margin_balance,
            locked_collateral,
            total_unrealized_pnl,
            total_equity,
            open_positions,
        })
    }

    /// Equity change relative to an earlier equity figure, as a ratio.
    /// `None` when the earlier figure is zero or the change overflows.
    pub fn equity_change_ratio(&self, previous_equity: Decimal) -> Option<Decimal> {
        if previous_equity.is_zero() {
            return None;
        }
        self.total_equity
            .checked_sub(previous_equity)?
            .checked_div(previous_equity)
    }
}
