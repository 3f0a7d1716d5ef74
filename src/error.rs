//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
///
/// Every fallible operation in the crate returns one of the narrower enums
/// below; this type exists for callers that want a single error to `?` into.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Position math error: {0}")]
    Position(#[from] PositionMathError),

    #[error("Country key error: {0}")]
    CountryKey(#[from] CountryKeyError),

    #[error("Candle error: {0}")]
    Candle(#[from] CandleError),

    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    #[error("Scaling error: {0}")]
    Scaling(#[from] ScalingError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors from the position analytics functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionMathError {
    #[error("Collateral must be positive, got {0}")]
    InvalidCollateral(String),

    #[error("Position size must be positive, got {0}")]
    InvalidSize(String),

    #[error("Maintenance threshold must be within [0, 1], got {0}")]
    InvalidThreshold(String),

    #[error("Entry price must be positive, got {0}")]
    InvalidEntryPrice(String),

    #[error("Close ratio must be within 1..=10000 bps, got {0}")]
    InvalidCloseRatio(u32),

    #[error("Overflow: {context}")]
    Overflow { context: String },
}

/// Errors from deriving or parsing a country market key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountryKeyError {
    #[error("Country label must not be empty")]
    InvalidLabel,

    #[error("Invalid country key '{input}': {reason}")]
    InvalidHex { input: String, reason: String },
}

/// Errors from candle aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CandleError {
    #[error("Candle interval must be positive")]
    InvalidInterval,

    #[error("Price point at {time} arrived after {latest}")]
    OutOfOrder { time: u64, latest: u64 },
}

/// Errors from planning a chunked history fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Chunk size must be positive")]
    InvalidChunkSize,
}

/// Errors from fixed-point normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    #[error("Overflow: {context}")]
    Overflow { context: String },

    #[error("Unsupported decimal exponent {0} (max 28)")]
    InvalidDecimals(u32),

    #[error("Fractional base units not allowed: {value}")]
    FractionalAmount { value: String },

    #[error("Invalid decimal '{input}': {reason}")]
    InvalidDecimal { input: String, reason: String },
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Oracle price decimals must be set explicitly")]
    MissingPriceDecimals,

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
