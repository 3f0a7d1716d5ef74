//! Price history state containers: app-owned, SDK-provided update logic.

use super::bucket::{bucket_start, bucketize};
use super::{Candle, PricePoint};
use crate::domain::market::CountryKey;
use crate::error::CandleError;
use crate::shared::Resolution;
use std::collections::{HashMap, VecDeque};

/// How a live series seeds `open` when a point starts a new bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenPolicy {
    /// `open` is the previous candle's close, so consecutive candles join up
    /// on the chart even when the feed updates rarely. `high`/`low` span both
    /// the previous close and the new value.
    #[default]
    PreviousClose,
    /// `open` is the first observation in the bucket.
    FirstObservation,
}

/// Live candle series for one market at one resolution.
///
/// Seeded from a backfill with [`apply_snapshot`](Self::apply_snapshot), then
/// fed polled oracle readings with [`apply`](Self::apply). Points older than
/// the latest accepted one are rejected rather than reopening a closed bucket.
#[derive(Debug, Clone)]
pub struct CandleSeries {
    resolution: Resolution,
    open_policy: OpenPolicy,
    max_candles: Option<usize>,
    candles: VecDeque<Candle>,
    last_time: Option<u64>,
}

impl CandleSeries {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            open_policy: OpenPolicy::default(),
            max_candles: None,
            candles: VecDeque::new(),
            last_time: None,
        }
    }

    pub fn with_open_policy(mut self, policy: OpenPolicy) -> Self {
        self.open_policy = policy;
        self
    }

    /// Keep at most `max` candles, evicting the oldest.
    pub fn with_max_candles(mut self, max: usize) -> Self {
        self.max_candles = Some(max);
        self.evict();
        self
    }

    /// Replace all candles with a bucketized backfill.
    pub fn apply_snapshot(&mut self, points: &[PricePoint]) -> Result<(), CandleError> {
        let candles = bucketize(points, self.resolution.seconds())?;
        self.candles = candles.into();
        self.last_time = points.last().map(|p| p.time);
        self.evict();
        Ok(())
    }

    /// Apply one live observation and return the candle it landed in.
    pub fn apply(&mut self, point: PricePoint) -> Result<Candle, CandleError> {
        if let Some(latest) = self.last_time {
            if point.time < latest {
                tracing::debug!(
                    "Rejecting late price point at {} (latest {})",
                    point.time,
                    latest
                );
                return Err(CandleError::OutOfOrder {
                    time: point.time,
                    latest,
                });
            }
        }

        let bucket = bucket_start(point.time, self.resolution.seconds());
        let updated = match self.candles.back_mut() {
            Some(last) if last.time == bucket => {
                last.absorb(point.value);
                *last
            }
            last => {
                let open = match (self.open_policy, last) {
                    (OpenPolicy::PreviousClose, Some(prev)) => prev.close,
                    _ => point.value,
                };
                let mut next = Candle::flat(bucket, open);
                next.absorb(point.value);
                self.candles.push_back(next);
                next
            }
        };

        self.last_time = Some(point.time);
        self.evict();
        Ok(updated)
    }

    fn evict(&mut self) {
        if let Some(max) = self.max_candles {
            while self.candles.len() > max {
                self.candles.pop_front();
            }
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn candles(&self) -> &VecDeque<Candle> {
        &self.candles
    }

    pub fn latest(&self) -> Option<&Candle> {
        self.candles.back()
    }

    pub fn clear(&mut self) {
        self.candles.clear();
        self.last_time = None;
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}

/// Candle series for many markets and resolutions.
///
/// The app owns instances of this type. The SDK provides update methods.
#[derive(Debug, Clone, Default)]
pub struct PriceHistoryState {
    data: HashMap<(CountryKey, Resolution), CandleSeries>,
}

impl PriceHistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the series for this key with a backfill.
    pub fn apply_snapshot(
        &mut self,
        country: CountryKey,
        resolution: Resolution,
        points: &[PricePoint],
    ) -> Result<(), CandleError> {
        let mut series = CandleSeries::new(resolution);
        series.apply_snapshot(points)?;
        self.data.insert((country, resolution), series);
        Ok(())
    }

    /// Apply a live point, creating the series on first use.
    pub fn apply_update(
        &mut self,
        country: CountryKey,
        resolution: Resolution,
        point: PricePoint,
    ) -> Result<Candle, CandleError> {
        self.data
            .entry((country, resolution))
            .or_insert_with(|| CandleSeries::new(resolution))
            .apply(point)
    }

    pub fn get(&self, country: &CountryKey, resolution: &Resolution) -> Option<&CandleSeries> {
        self.data.get(&(*country, *resolution))
    }

    /// Drop every resolution held for one market (e.g. when the chart
    /// switches symbol).
    pub fn reset(&mut self, country: &CountryKey) {
        self.data.retain(|(key, _), _| key != country);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
