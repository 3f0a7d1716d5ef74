//! Shared newtypes and utilities used across all domain modules.
//!
//! These types serialize identically to the shapes the frontend and the chain
//! client exchange, so they can be used directly in wire types.

pub mod fmt;
pub mod scaling;
pub mod serde_util;

pub use scaling::{normalize, parse_units, to_base_units};

use serde::{Deserialize, Serialize};

// ─── Side ────────────────────────────────────────────────────────────────────

/// Position direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Long,
    Short,
}

impl Side {
    /// Map the trading contract's `isLong` flag.
    pub fn from_is_long(is_long: bool) -> Self {
        if is_long {
            Side::Long
        } else {
            Side::Short
        }
    }

    pub fn is_long(&self) -> bool {
        matches!(self, Side::Long)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Long => write!(f, "LONG"),
            Side::Short => write!(f, "SHORT"),
        }
    }
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Price chart candle resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "1d")]
    Day1,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Hour1 => "1h",
            Self::Hour4 => "4h",
            Self::Day1 => "1d",
        }
    }

    /// Duration of one candle in seconds.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Minute1 => 60,
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Hour1 => 3_600,
            Self::Hour4 => 14_400,
            Self::Day1 => 86_400,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serde() {
        let long: Side = serde_json::from_str("\"long\"").unwrap();
        assert_eq!(long, Side::Long);
        let short: Side = serde_json::from_str("\"short\"").unwrap();
        assert_eq!(short, Side::Short);
        assert_eq!(serde_json::to_string(&Side::Long).unwrap(), "\"long\"");
    }

    #[test]
    fn test_side_from_contract_flag() {
        assert_eq!(Side::from_is_long(true), Side::Long);
        assert_eq!(Side::from_is_long(false), Side::Short);
        assert!(Side::from_is_long(true).is_long());
    }

    #[test]
    fn test_resolution_serde() {
        let r: Resolution = serde_json::from_str("\"4h\"").unwrap();
        assert_eq!(r, Resolution::Hour4);
        assert_eq!(r.seconds(), 14_400);
        assert_eq!(Resolution::default().seconds(), 60);
    }
}
