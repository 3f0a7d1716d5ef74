//! Conversion: position wire tuples → normalized domain types.

use super::wire::{PositionPnlTuple, PositionTuple};
use super::Position;
use crate::config::AnalyticsConfig;
use crate::domain::market::CountryKey;
use crate::error::{ScalingError, SdkError};
use crate::shared::scaling::normalize;
use crate::shared::Side;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal exponents used by the trading contract's integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionDecimals {
    /// Collateral and size.
    pub amount: u32,
    /// Entry and mark price.
    pub price: u32,
}

impl PositionDecimals {
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self {
            amount: config.collateral_decimals,
            price: config.price_decimals,
        }
    }
}

fn timestamp(secs: u64) -> Option<DateTime<Utc>> {
    if secs == 0 {
        return None;
    }
    i64::try_from(secs)
        .ok()
        .and_then(|s| DateTime::<Utc>::from_timestamp(s, 0))
}

impl PositionTuple {
    /// Normalize into a [`Position`]. Returns `Ok(None)` for an empty slot.
    pub fn to_position(&self, decimals: PositionDecimals) -> Result<Option<Position>, SdkError> {
        if !self.is_open() {
            return Ok(None);
        }

        let country_key: CountryKey = self.country_code.parse()?;

        Ok(Some(Position {
            country_key,
            side: Side::from_is_long(self.is_long),
            collateral: normalize(self.collateral_amount, decimals.amount)?,
            size: normalize(self.position_size, decimals.amount)?,
            entry_price: normalize(self.entry_price, decimals.price)?,
            opened_at: timestamp(self.entry_timestamp),
            last_funding_at: timestamp(self.last_funding_timestamp),
        }))
    }
}

/// PnL and mark price as reported by the trading contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedPnl {
    pub pnl: Decimal,
    pub mark_price: Decimal,
}

impl PositionPnlTuple {
    pub fn to_reported(&self, decimals: PositionDecimals) -> Result<ReportedPnl, ScalingError> {
        Ok(ReportedPnl {
            pnl: normalize(self.pnl, decimals.amount)?,
            mark_price: normalize(self.current_price, decimals.price)?,
        })
    }
}
