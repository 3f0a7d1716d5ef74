//! Default parameters for the country-index deployment on Mantle.

use rust_decimal::Decimal;

/// Blocks produced in ~24h on Mantle (2s block time).
pub const BLOCKS_PER_DAY: u64 = 43_200;

/// Largest block span requested per `eth_getLogs` call. The public RPC caps
/// ranges at 10 000 blocks.
pub const DEFAULT_CHUNK_SIZE_BLOCKS: u64 = 9_000;

/// Default history backfill window.
pub const DEFAULT_HISTORY_WINDOW_BLOCKS: u64 = BLOCKS_PER_DAY;

/// Decimals of the collateral token and of position amounts.
pub const DEFAULT_COLLATERAL_DECIMALS: u32 = 18;

/// Maintenance threshold used for liquidation estimates (0.85).
pub const DEFAULT_MAINTENANCE_THRESHOLD: Decimal = Decimal::from_parts(85, 0, 0, false, 2);

/// Basis points in 100%.
pub const BPS_DENOMINATOR: u32 = 10_000;
