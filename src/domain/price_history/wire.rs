//! Wire types for oracle price data (event logs and view calls).

use crate::shared::serde_util::int_str;
use serde::{Deserialize, Serialize};

/// A decoded price-update log emitted by a country price feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdatedLog {
    #[serde(with = "int_str")]
    pub price: i128,
    pub updated_at: u64,
    #[serde(default)]
    pub block_number: Option<u64>,
}

/// Return value of a feed's `latestRoundData()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleRound {
    #[serde(with = "int_str")]
    pub round_id: i128,
    #[serde(with = "int_str")]
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    #[serde(with = "int_str")]
    pub answered_in_round: i128,
}

/// Return value of the registry's `getCountryPrice(bytes32)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPriceReading {
    #[serde(with = "int_str")]
    pub price: i128,
    pub timestamp: u64,
}
