//! # Country Index SDK
//!
//! Analytics core for the country-index perpetuals dApp: oracle price candles,
//! chunked history backfill, position metrics, and market key derivation.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Shared**: Newtypes, fixed-point scaling, display formatting
//! 2. **Domain**: Price history, positions, markets (types, wire shapes, conversions, state)
//! 3. **Backfill**: Block-range chunking over an injected log source
//! 4. **Config**: `AnalyticsConfig` builder with deployment defaults
//!
//! Wallet sessions, signing and RPC transport belong to the application; the
//! SDK only consumes what the chain client hands it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use country_index_sdk::prelude::*;
//!
//! let config = AnalyticsConfig::builder().price_decimals(8).build()?;
//!
//! let plan = config.chunk_plan(latest_block)?;
//! let points = backfill_prices(&chain_client, plan, config.price_decimals).await?;
//! let candles = bucketize_resolution(&points, config.candle_resolution)?;
//!
//! let key = CountryKey::encode("Indonesia")?;
//! let m = metrics(&position, mark_price, config.maintenance_threshold)?;
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes and utilities used across all domains.
pub mod shared;

/// Deployment defaults.
pub mod constants;

/// Unified SDK error types.
pub mod error;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

// ── Layer 3: Backfill ────────────────────────────────────────────────────────

/// Chunked historical log fetching.
pub mod backfill;

// ── Layer 4: Config ──────────────────────────────────────────────────────────

/// `AnalyticsConfig` and its builder.
pub mod config;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Resolution, Side};

    // Domain types: price history
    pub use crate::domain::price_history::state::OpenPolicy;
    pub use crate::domain::price_history::{
        bucketize, bucketize_resolution, sort_by_time, Candle, CandleSeries, PriceHistoryState,
        PricePoint,
    };

    // Domain types: position
    pub use crate::domain::position::{
        estimated_liquidation_price, metrics, partial_close, price_change_pct, return_on_equity,
        unrealized_pnl, PartialClose, PortfolioSummary, Position, PositionDecimals,
        PositionMetrics, ReportedPnl,
    };

    // Domain types: market
    pub use crate::domain::market::{Country, CountryKey, CountryRegistry};

    // Backfill
    pub use crate::backfill::{
        backfill_prices, fetch_from_source, fetch_window, BackfillError, BlockRange, ChunkPlan,
        LogSource,
    };

    // Config
    pub use crate::config::{AnalyticsConfig, AnalyticsConfigBuilder};

    // Errors
    pub use crate::error::{
        CandleError, ConfigError, CountryKeyError, PaginationError, PositionMathError,
        ScalingError, SdkError,
    };
}
