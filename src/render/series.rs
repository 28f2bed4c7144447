use serde::{Deserialize, Serialize};

use crate::math::{sqrt_price_x96_to_tick_f64, usd};
use crate::model::{LiquidityBucket, PoolDepthRow, TokenMeta};

/// Which token of the pair a bar (or bar section) represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSide {
    Base,
    Quote,
}

/// One row of the custom bar series. `time` is the slot index the host
/// chart lays out horizontally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityBarData {
    pub time: u32,
    pub tick: i32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Bar height in liquidity units.
    pub liquidity: f64,
    pub amount_base: f64,
    pub amount_quote: f64,
    /// Share of the bucket's value held in the base token, `0.0..=1.0`.
    pub base_ratio: f64,
    pub is_current_tick: bool,
}

impl LiquidityBarData {
    pub fn has_both_tokens(&self) -> bool {
        self.amount_base > 0.0 && self.amount_quote > 0.0
    }
}

/// Base token share of a bucket's value.
///
/// Uses USD when both prices are known, otherwise values the base amount in
/// quote units at the bucket's price.
pub fn base_ratio(bucket: &LiquidityBucket, base: &TokenMeta, quote: &TokenMeta) -> f64 {
    let b = bucket.amount_base_locked;
    let q = bucket.amount_quote_locked;
    if b <= 0.0 && q <= 0.0 {
        return 0.0;
    }

    let (base_value, quote_value) = match (base.price_usd_e12, quote.price_usd_e12) {
        (Some(_), Some(_)) => (
            usd(b, base.decimals, base.price_usd_e12),
            usd(q, quote.decimals, quote.price_usd_e12),
        ),
        _ => (
            b / 10f64.powi(base.decimals as i32) * bucket.price,
            q / 10f64.powi(quote.decimals as i32),
        ),
    };

    let total = base_value + quote_value;
    if !(total.is_finite() && total > 0.0) {
        return if b > 0.0 { 1.0 } else { 0.0 };
    }
    (base_value / total).clamp(0.0, 1.0)
}

/// Map tick-descending buckets onto series rows, slot index = position.
pub fn bars_from_buckets(
    buckets: &[LiquidityBucket],
    base: &TokenMeta,
    quote: &TokenMeta,
) -> Vec<LiquidityBarData> {
    buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| LiquidityBarData {
            time: i as u32,
            tick: bucket.tick,
            tick_lower: bucket.tick_lower,
            tick_upper: bucket.tick_upper,
            liquidity: bucket.total_liquidity as f64,
            amount_base: bucket.amount_base_locked,
            amount_quote: bucket.amount_quote_locked,
            base_ratio: base_ratio(bucket, base, quote),
            is_current_tick: bucket.is_current_tick,
        })
        .collect()
}

/// How far the live price has moved across the current bucket, from its
/// lower tick (`0.0`) to its upper tick (`1.0`).
///
/// Needs the pool's `sqrt_price_x96`; returns `None` without it or when no
/// bucket is current.
pub fn current_tick_progress(pool: &PoolDepthRow, buckets: &[LiquidityBucket]) -> Option<f64> {
    let exact = sqrt_price_x96_to_tick_f64(pool.sqrt_price_x96?)?;
    let bucket = buckets.iter().find(|b| b.is_current_tick)?;
    let width = (bucket.tick_upper - bucket.tick_lower) as f64;
    if width <= 0.0 {
        return None;
    }
    Some(((exact - bucket.tick_lower as f64) / width).clamp(0.0, 1.0))
}
