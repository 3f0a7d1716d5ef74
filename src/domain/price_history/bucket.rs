//! Batch OHLC bucketing of price points.

use super::{Candle, PricePoint};
use crate::error::CandleError;
use crate::shared::Resolution;

/// Start of the bucket containing `time`.
pub fn bucket_start(time: u64, interval: u64) -> u64 {
    (time / interval) * interval
}

/// Aggregate time-ordered points into one candle per populated bucket.
///
/// `points` must be in non-decreasing time order; the first point that goes
/// back in time fails with [`CandleError::OutOfOrder`] instead of being
/// sorted in silently. Empty buckets are not filled.
pub fn bucketize(points: &[PricePoint], interval: u64) -> Result<Vec<Candle>, CandleError> {
    if interval == 0 {
        return Err(CandleError::InvalidInterval);
    }

    let mut candles: Vec<Candle> = Vec::new();
    let mut latest_time: Option<u64> = None;

    for point in points {
        if let Some(latest) = latest_time {
            if point.time < latest {
                return Err(CandleError::OutOfOrder {
                    time: point.time,
                    latest,
                });
            }
        }
        latest_time = Some(point.time);

        let bucket = bucket_start(point.time, interval);
        match candles.last_mut() {
            Some(last) if last.time == bucket => last.absorb(point.value),
            _ => candles.push(Candle::flat(bucket, point.value)),
        }
    }

    Ok(candles)
}

/// [`bucketize`] with the interval of a chart resolution.
pub fn bucketize_resolution(
    points: &[PricePoint],
    resolution: Resolution,
) -> Result<Vec<Candle>, CandleError> {
    bucketize(points, resolution.seconds())
}
