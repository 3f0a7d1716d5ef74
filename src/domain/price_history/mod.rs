//! Price history domain: oracle price points and OHLC candles.

pub mod bucket;
pub mod convert;
pub mod state;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use bucket::{bucket_start, bucketize, bucketize_resolution};
pub use state::{CandleSeries, PriceHistoryState};

/// A single normalized oracle observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in seconds.
    pub time: u64,
    pub value: Decimal,
}

impl PricePoint {
    pub fn new(time: u64, value: Decimal) -> Self {
        Self { time, value }
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.time)
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }
}

/// Sort points by time, keeping arrival order for equal timestamps.
///
/// Bucketing never sorts on its own; callers holding unordered data call this
/// first.
pub fn sort_by_time(points: &mut [PricePoint]) {
    points.sort_by_key(|p| p.time);
}

/// One OHLC bucket.
///
/// `open` is set by the first contribution and never changes; `close` tracks
/// the latest one; `high`/`low` are running extrema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Bucket start, unix seconds.
    pub time: u64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl Candle {
    /// A flat candle from a single observation.
    pub fn flat(time: u64, value: Decimal) -> Self {
        Self {
            time,
            open: value,
            high: value,
            low: value,
            close: value,
        }
    }

    /// Fold another in-bucket observation into this candle.
    pub fn absorb(&mut self, value: Decimal) {
        self.high = self.high.max(value);
        self.low = self.low.min(value);
        self.close = value;
    }

    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_keeps_open() {
        let mut c = Candle::flat(0, Decimal::from(100));
        c.absorb(Decimal::from(110));
        c.absorb(Decimal::from(90));
        assert_eq!(c.open, Decimal::from(100));
        assert_eq!(c.high, Decimal::from(110));
        assert_eq!(c.low, Decimal::from(90));
        assert_eq!(c.close, Decimal::from(90));
        assert!(!c.is_bullish());
    }

    #[test]
    fn test_sort_by_time_is_stable() {
        let mut pts = vec![
            PricePoint::new(60, Decimal::from(3)),
            PricePoint::new(0, Decimal::from(1)),
            PricePoint::new(60, Decimal::from(4)),
        ];
        sort_by_time(&mut pts);
        let values: Vec<_> = pts.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![Decimal::from(1), Decimal::from(3), Decimal::from(4)]);
    }

    #[test]
    fn test_datetime() {
        let p = PricePoint::new(1_767_170_000, Decimal::ONE);
        assert_eq!(p.datetime().unwrap().timestamp(), 1_767_170_000);
    }
}
