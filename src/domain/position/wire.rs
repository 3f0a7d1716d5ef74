//! Wire types for the trading contract's position views.

use crate::shared::serde_util::int_str;
use serde::{Deserialize, Serialize};

/// Return of `getPosition(address, uint256)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionTuple {
    /// `bytes32` as `0x`-prefixed hex.
    pub country_code: String,
    pub is_long: bool,
    #[serde(with = "int_str")]
    pub collateral_amount: i128,
    #[serde(with = "int_str")]
    pub position_size: i128,
    #[serde(with = "int_str")]
    pub entry_price: i128,
    pub entry_timestamp: u64,
    pub last_funding_timestamp: u64,
}

impl PositionTuple {
    /// A zero entry price marks an empty or already-closed slot.
    pub fn is_open(&self) -> bool {
        self.entry_price != 0
    }
}

/// Return of `getPositionPnL(address, uint256)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionPnlTuple {
    #[serde(with = "int_str")]
    pub pnl: i128,
    #[serde(with = "int_str")]
    pub current_price: i128,
}
