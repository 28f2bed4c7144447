use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{AggregationConfig, DepthConfig};
use super::segments::build_segments;
use super::window::bucket_count;
use crate::math::{amounts_at, sqrt_price_x96_to_sqrt_price, tick_to_price, usd, MAX_TICK, MIN_TICK};
use crate::model::{DepthSnapshot, LiquidityBucket, PoolContribution, PoolDepthRow, TickRange};

/// Aggregated depth for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthProfile {
    pub range: TickRange,
    pub bucket_size: i32,
    pub current_tick: i32,
    /// Tick-descending.
    pub buckets: Vec<LiquidityBucket>,
}

/// Build the bucketed profile for a whole snapshot.
pub fn build_profile(snapshot: &DepthSnapshot, depth: &DepthConfig) -> DepthProfile {
    let config = AggregationConfig::for_pools(&snapshot.pools, depth, &snapshot.base, &snapshot.quote);
    let buckets = aggregate(&snapshot.pools, &config);
    DepthProfile {
        range: config.tick_range,
        bucket_size: config.bucket_size,
        current_tick: config.current_tick,
        buckets,
    }
}

/// Per-pool running totals for one bucket.
#[derive(Default, Clone)]
struct Accum {
    liquidity: u128,
    base: f64,
    quote: f64,
}

/// Distribute every pool's segments over a fixed grid of buckets.
///
/// Each segment is clipped to the window and then to every bucket it
/// overlaps; token amounts are computed on the clipped sub-range, because
/// the base/quote split depends on where the active tick sits relative to
/// that sub-range. The result covers the whole window (empty buckets
/// included) and is ordered by tick, descending.
pub fn aggregate(pools: &[PoolDepthRow], config: &AggregationConfig) -> Vec<LiquidityBucket> {
    let size = config.bucket_size.max(1);
    let start = config.tick_range.min;
    let count = bucket_count(config.tick_range, size);

    let edge = |k: usize| {
        (start as i64 + k as i64 * size as i64).clamp(i32::MIN as i64, i32::MAX as i64) as i32
    };

    let mut buckets: Vec<LiquidityBucket> = (0..count)
        .map(|k| {
            let lower = edge(k);
            let upper = edge(k + 1);
            let center = (lower as i64 + upper as i64).div_euclid(2) as i32;
            let price = tick_to_price(center, config.base_decimals, config.quote_decimals);
            let is_current = config.current_tick >= lower && config.current_tick < upper;
            LiquidityBucket::empty(lower, upper, price, is_current)
        })
        .collect();

    // A one-sided valuation would misstate every bucket, so USD needs both feeds.
    let prices = match (config.base_price_usd_e12, config.quote_price_usd_e12) {
        (Some(b), Some(q)) => Some((b, q)),
        _ => None,
    };

    let sqrt_price = config.sqrt_price_x96.and_then(sqrt_price_x96_to_sqrt_price);

    let window_lo = start.max(MIN_TICK);
    let window_hi = edge(count).min(MAX_TICK);

    for pool in pools {
        let mut accum = vec![Accum::default(); count];

        for segment in build_segments(pool) {
            let Some((lo, hi)) = segment.clip(window_lo, window_hi) else {
                continue;
            };
            let first = ((lo as i64 - start as i64) / size as i64) as usize;
            let last = ((hi as i64 - 1 - start as i64) / size as i64) as usize;

            for k in first..=last.min(count - 1) {
                let bucket = &buckets[k];
                let Some((sub_lo, sub_hi)) = segment.clip(lo.max(bucket.tick_lower), hi.min(bucket.tick_upper))
                else {
                    continue;
                };
                let a = amounts_at(sub_lo, sub_hi, config.current_tick, sqrt_price, segment.liquidity);
                let acc = &mut accum[k];
                acc.liquidity = acc.liquidity.saturating_add(segment.liquidity);
                acc.base += a.base;
                acc.quote += a.quote;
            }
        }

        for (bucket, acc) in buckets.iter_mut().zip(accum) {
            if acc.liquidity == 0 {
                continue;
            }
            let usd_value = prices
                .map(|(b, q)| {
                    usd(acc.base, config.base_decimals, Some(b))
                        + usd(acc.quote, config.quote_decimals, Some(q))
                })
                .unwrap_or(0.0);

            bucket.total_liquidity = bucket.total_liquidity.saturating_add(acc.liquidity);
            bucket.amount_base_locked += acc.base;
            bucket.amount_quote_locked += acc.quote;
            bucket.usd_value_locked += usd_value;
            bucket.pool_contributions.push(PoolContribution {
                fee_pips: pool.fee_pips,
                liquidity: acc.liquidity,
                amount_base: acc.base,
                amount_quote: acc.quote,
                usd_value,
            });
        }
    }

    buckets.reverse();

    debug!(
        pools = pools.len(),
        buckets = buckets.len(),
        bucket_size = size,
        range_min = config.tick_range.min,
        range_max = config.tick_range.max,
        "aggregated liquidity buckets"
    );
    buckets
}
