//! Chunked history backfill.
//!
//! RPC providers cap the block span of a single log query, so a historical
//! window is split into consecutive inclusive ranges and fetched one after
//! another. Ranges never share a boundary block.
//!
//! ```rust,ignore
//! let plan = ChunkPlan::new(latest_block, 43_200, 9_000)?;
//! let logs = fetch_window(plan, |from, to| rpc.get_logs(feed, from, to)).await?;
//! ```

pub mod source;

use std::future::Future;

use crate::error::PaginationError;

pub use source::{backfill_prices, fetch_from_source, BackfillError, LogSource};

/// Inclusive block range `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockRange {
    pub from: u64,
    pub to: u64,
}

/// Iterator over the sub-ranges covering a backfill window.
///
/// Starts at `max(0, latest - window)`, yields `[from, min(from + chunk, latest)]`
/// and advances `from` past the previous `to` until it reaches `latest`.
/// Yields at most `ceil(window / chunk)` ranges.
///
/// Iteration stops as soon as `from >= latest`, so when the previous range
/// ends at `latest - 1` the block `latest` itself is not requested
/// (`latest = 20, window = 20, chunk = 9` yields `[0, 9]` and `[10, 19]`).
/// Callers that need the head block should pass `latest + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    latest: u64,
    next_from: u64,
    chunk_size: u64,
}

impl ChunkPlan {
    pub fn new(latest: u64, window_size: u64, chunk_size: u64) -> Result<Self, PaginationError> {
        if chunk_size == 0 {
            return Err(PaginationError::InvalidChunkSize);
        }
        Ok(Self {
            latest,
            next_from: latest.saturating_sub(window_size),
            chunk_size,
        })
    }

    /// Last block of the window.
    pub fn latest(&self) -> u64 {
        self.latest
    }
}

impl Iterator for ChunkPlan {
    type Item = BlockRange;

    fn next(&mut self) -> Option<BlockRange> {
        if self.next_from >= self.latest {
            return None;
        }
        let from = self.next_from;
        let to = from.saturating_add(self.chunk_size).min(self.latest);
        self.next_from = to + 1;
        Some(BlockRange { from, to })
    }
}

/// Fetch every range of `plan` in order and concatenate the results.
///
/// Requests are issued sequentially. The first error from `fetch_chunk` is
/// returned as-is and the partial accumulator is dropped: a short history
/// would misrepresent the chart. No retries; the caller decides whether to
/// retry the whole window.
pub async fn fetch_window<T, E, F, Fut>(plan: ChunkPlan, mut fetch_chunk: F) -> Result<Vec<T>, E>
where
    F: FnMut(u64, u64) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let mut all = Vec::new();
    for BlockRange { from, to } in plan {
        tracing::debug!("Fetching history chunk [{}, {}]", from, to);
        let chunk = fetch_chunk(from, to).await?;
        all.extend(chunk);
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_24h_window() {
        let ranges: Vec<_> = ChunkPlan::new(100_000, 43_200, 9_000).unwrap().collect();
        assert_eq!(ranges.len(), 5);
        assert_eq!(ranges[0], BlockRange { from: 56_800, to: 65_800 });
        assert_eq!(ranges[1], BlockRange { from: 65_801, to: 74_801 });
        assert_eq!(ranges[4], BlockRange { from: 92_804, to: 100_000 });
    }

    #[test]
    fn test_plan_ranges_never_share_boundaries() {
        let ranges: Vec<_> = ChunkPlan::new(100_000, 43_200, 9_000).unwrap().collect();
        for pair in ranges.windows(2) {
            assert!(pair[0].to < pair[1].from);
            assert_eq!(pair[0].to + 1, pair[1].from);
        }
    }

    #[test]
    fn test_plan_window_larger_than_chain() {
        let ranges: Vec<_> = ChunkPlan::new(5_000, 43_200, 9_000).unwrap().collect();
        assert_eq!(ranges, vec![BlockRange { from: 0, to: 5_000 }]);
    }

    #[test]
    fn test_plan_empty_window() {
        assert_eq!(ChunkPlan::new(100, 0, 10).unwrap().count(), 0);
        assert_eq!(ChunkPlan::new(0, 100, 10).unwrap().count(), 0);
    }

    #[test]
    fn test_plan_skips_latest_when_previous_range_ends_just_before() {
        let ranges: Vec<_> = ChunkPlan::new(20, 20, 9).unwrap().collect();
        assert_eq!(
            ranges,
            vec![BlockRange { from: 0, to: 9 }, BlockRange { from: 10, to: 19 }]
        );
        let with_head: Vec<_> = ChunkPlan::new(21, 21, 9).unwrap().collect();
        assert_eq!(with_head.last(), Some(&BlockRange { from: 20, to: 21 }));
    }

    #[test]
    fn test_plan_rejects_zero_chunk() {
        assert_eq!(
            ChunkPlan::new(100, 50, 0),
            Err(PaginationError::InvalidChunkSize)
        );
    }

    #[test]
    fn test_fetch_window_concatenates_in_order() {
        let mut calls = Vec::new();
        let plan = ChunkPlan::new(30, 30, 10).unwrap();
        let result: Result<Vec<u64>, String> = tokio_test::block_on(fetch_window(plan, |from, to| {
            calls.push((from, to));
            async move { Ok(vec![from, to]) }
        }));
        assert_eq!(result.unwrap(), vec![0, 10, 11, 21, 22, 30]);
        assert_eq!(calls, vec![(0, 10), (11, 21), (22, 30)]);
    }

    #[test]
    fn test_fetch_window_aborts_on_first_failure() {
        let mut calls = 0;
        let plan = ChunkPlan::new(30, 30, 10).unwrap();
        let result: Result<Vec<u64>, String> = tokio_test::block_on(fetch_window(plan, |from, _| {
            calls += 1;
            async move {
                if from == 11 {
                    Err("range too large".to_string())
                } else {
                    Ok(vec![from])
                }
            }
        }));
        assert_eq!(result, Err("range too large".to_string()));
        assert_eq!(calls, 2);
    }
}
