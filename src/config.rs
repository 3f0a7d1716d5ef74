//! Analytics configuration: decimals, chart resolution, backfill sizing.
//!
//! Built with [`AnalyticsConfig::builder`] or loaded from JSON. The oracle
//! price exponent has no default: feeds in the wild disagree (8 vs 18), so it
//! must be stated by whoever knows which feed is in use.

use crate::backfill::ChunkPlan;
use crate::constants::{
    DEFAULT_CHUNK_SIZE_BLOCKS, DEFAULT_COLLATERAL_DECIMALS, DEFAULT_HISTORY_WINDOW_BLOCKS,
    DEFAULT_MAINTENANCE_THRESHOLD,
};
use crate::error::{ConfigError, PaginationError, SdkError};
use crate::shared::scaling::MAX_DECIMALS;
use crate::shared::Resolution;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters shared by the analytics components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Decimal exponent of oracle price integers.
    pub price_decimals: u32,
    /// Decimal exponent of collateral, size and entry price integers.
    #[serde(default = "default_collateral_decimals")]
    pub collateral_decimals: u32,
    #[serde(default)]
    pub candle_resolution: Resolution,
    #[serde(default = "default_history_window")]
    pub history_window_blocks: u64,
    #[serde(default = "default_chunk_size")]
    pub chunk_size_blocks: u64,
    #[serde(default = "default_maintenance_threshold")]
    pub maintenance_threshold: Decimal,
}

fn default_collateral_decimals() -> u32 {
    DEFAULT_COLLATERAL_DECIMALS
}

fn default_history_window() -> u64 {
    DEFAULT_HISTORY_WINDOW_BLOCKS
}

fn default_chunk_size() -> u64 {
    DEFAULT_CHUNK_SIZE_BLOCKS
}

fn default_maintenance_threshold() -> Decimal {
    DEFAULT_MAINTENANCE_THRESHOLD
}

impl AnalyticsConfig {
    pub fn builder() -> AnalyticsConfigBuilder {
        AnalyticsConfigBuilder::default()
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        let config: AnalyticsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.price_decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidValue {
                field: "price_decimals",
                reason: format!("{} exceeds {}", self.price_decimals, MAX_DECIMALS),
            });
        }
        if self.collateral_decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidValue {
                field: "collateral_decimals",
                reason: format!("{} exceeds {}", self.collateral_decimals, MAX_DECIMALS),
            });
        }
        if self.chunk_size_blocks == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chunk_size_blocks",
                reason: "must be positive".to_string(),
            });
        }
        if self.maintenance_threshold < Decimal::ZERO || self.maintenance_threshold > Decimal::ONE
        {
            return Err(ConfigError::InvalidValue {
                field: "maintenance_threshold",
                reason: format!("{} not within [0, 1]", self.maintenance_threshold),
            });
        }
        Ok(())
    }

    /// Chunk plan for the configured backfill window ending at `latest_block`.
    pub fn chunk_plan(&self, latest_block: u64) -> Result<ChunkPlan, PaginationError> {
        ChunkPlan::new(latest_block, self.history_window_blocks, self.chunk_size_blocks)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct AnalyticsConfigBuilder {
    price_decimals: Option<u32>,
    collateral_decimals: u32,
    candle_resolution: Resolution,
    history_window_blocks: u64,
    chunk_size_blocks: u64,
    maintenance_threshold: Decimal,
}

impl Default for AnalyticsConfigBuilder {
    fn default() -> Self {
        Self {
            price_decimals: None,
            collateral_decimals: DEFAULT_COLLATERAL_DECIMALS,
            candle_resolution: Resolution::default(),
            history_window_blocks: DEFAULT_HISTORY_WINDOW_BLOCKS,
            chunk_size_blocks: DEFAULT_CHUNK_SIZE_BLOCKS,
            maintenance_threshold: DEFAULT_MAINTENANCE_THRESHOLD,
        }
    }
}

impl AnalyticsConfigBuilder {
    pub fn price_decimals(mut self, decimals: u32) -> Self {
        self.price_decimals = Some(decimals);
        self
    }

    pub fn collateral_decimals(mut self, decimals: u32) -> Self {
        self.collateral_decimals = decimals;
        self
    }

    pub fn candle_resolution(mut self, resolution: Resolution) -> Self {
        self.candle_resolution = resolution;
        self
    }

    pub fn history_window_blocks(mut self, blocks: u64) -> Self {
        self.history_window_blocks = blocks;
        self
    }

    pub fn chunk_size_blocks(mut self, blocks: u64) -> Self {
        self.chunk_size_blocks = blocks;
        self
    }

    pub fn maintenance_threshold(mut self, threshold: Decimal) -> Self {
        self.maintenance_threshold = threshold;
        self
    }

    pub fn build(self) -> Result<AnalyticsConfig, ConfigError> {
        let config = AnalyticsConfig {
            price_decimals: self.price_decimals.ok_or(ConfigError::MissingPriceDecimals)?,
            collateral_decimals: self.collateral_decimals,
            candle_resolution: self.candle_resolution,
            history_window_blocks: self.history_window_blocks,
            chunk_size_blocks: self.chunk_size_blocks,
            maintenance_threshold: self.maintenance_threshold,
        };
        config.validate()?;
        Ok(config)
    }
}
