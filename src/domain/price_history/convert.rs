//! Conversion: oracle wire shapes → `PricePoint`, given the feed's exponent.

use super::wire::{CountryPriceReading, OracleRound, PriceUpdatedLog};
use super::PricePoint;
use crate::error::ScalingError;
use crate::shared::scaling::normalize;

impl PriceUpdatedLog {
    pub fn to_price_point(&self, price_decimals: u32) -> Result<PricePoint, ScalingError> {
        Ok(PricePoint::new(
            self.updated_at,
            normalize(self.price, price_decimals)?,
        ))
    }
}

impl OracleRound {
    pub fn to_price_point(&self, price_decimals: u32) -> Result<PricePoint, ScalingError> {
        Ok(PricePoint::new(
            self.updated_at,
            normalize(self.answer, price_decimals)?,
        ))
    }
}

impl CountryPriceReading {
    pub fn to_price_point(&self, price_decimals: u32) -> Result<PricePoint, ScalingError> {
        Ok(PricePoint::new(
            self.timestamp,
            normalize(self.price, price_decimals)?,
        ))
    }
}

/// Decode a batch of logs, preserving their order.
pub fn decode_logs(
    logs: &[PriceUpdatedLog],
    price_decimals: u32,
) -> Result<Vec<PricePoint>, ScalingError> {
    logs.iter()
        .map(|log| log.to_price_point(price_decimals))
        .collect()
}
