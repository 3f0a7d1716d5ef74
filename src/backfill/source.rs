//! Chain-client seam for history backfill.

use std::future::Future;

use thiserror::Error;

use super::{fetch_window, ChunkPlan};
use crate::domain::price_history::convert::decode_logs;
use crate::domain::price_history::wire::PriceUpdatedLog;
use crate::domain::price_history::PricePoint;
use crate::error::ScalingError;

/// Capability to query a price feed's update logs over a block range.
///
/// Implemented by the application's chain client. Transport timeouts and
/// range limits are the implementor's concern.
pub trait LogSource {
    type Error;

    /// Logs emitted in the inclusive block range `[from_block, to_block]`,
    /// in block order.
    fn price_logs(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> impl Future<Output = Result<Vec<PriceUpdatedLog>, Self::Error>>;
}

/// Failure of [`backfill_prices`].
#[derive(Error, Debug)]
pub enum BackfillError<E> {
    /// The log source failed; carries its error untouched.
    #[error("Upstream fetch failed: {0}")]
    Upstream(E),

    #[error("Failed to decode price log: {0}")]
    Decode(#[from] ScalingError),
}

/// Raw logs for every chunk of `plan`, in request order.
///
/// The source's error is returned as-is.
pub async fn fetch_from_source<S: LogSource>(
    source: &S,
    plan: ChunkPlan,
) -> Result<Vec<PriceUpdatedLog>, S::Error> {
    fetch_window(plan, move |from, to| source.price_logs(from, to)).await
}

/// Fetch every chunk of `plan` from `source` and decode the logs into price
/// points using the feed's decimal exponent.
///
/// Points come back in log order; they are not sorted here.
pub async fn backfill_prices<S: LogSource>(
    source: &S,
    plan: ChunkPlan,
    price_decimals: u32,
) -> Result<Vec<PricePoint>, BackfillError<S::Error>> {
    let logs = fetch_from_source(source, plan)
        .await
        .map_err(BackfillError::Upstream)?;

    tracing::debug!("Decoding {} price log(s)", logs.len());

    Ok(decode_logs(&logs, price_decimals)?)
}
