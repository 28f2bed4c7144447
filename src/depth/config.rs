use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::window::{align_range, bucket_size, tick_window};
use crate::model::{num, PoolDepthRow, TickRange, TokenMeta};

pub const DEFAULT_HALF_WIDTH_TICKS: i32 = 2_000;
pub const DEFAULT_TARGET_BUCKET_COUNT: u32 = 40;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("half_width_ticks must be positive, got {0}")]
    HalfWidth(i32),

    #[error("target_bucket_count must be at least 1")]
    BucketCount,
}

/// Display window settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthConfig {
    /// Ticks shown on each side of the current tick.
    #[serde(default = "default_half_width")]
    pub half_width_ticks: i32,
    /// Desired number of buckets across the window (before spacing rounding).
    #[serde(default = "default_bucket_count")]
    pub target_bucket_count: u32,
}

fn default_half_width() -> i32 {
    DEFAULT_HALF_WIDTH_TICKS
}

fn default_bucket_count() -> u32 {
    DEFAULT_TARGET_BUCKET_COUNT
}

impl Default for DepthConfig {
    fn default() -> Self {
        DepthConfig {
            half_width_ticks: DEFAULT_HALF_WIDTH_TICKS,
            target_bucket_count: DEFAULT_TARGET_BUCKET_COUNT,
        }
    }
}

impl DepthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.half_width_ticks <= 0 {
            return Err(ConfigError::HalfWidth(self.half_width_ticks));
        }
        if self.target_bucket_count == 0 {
            return Err(ConfigError::BucketCount);
        }
        Ok(())
    }
}

/// Everything the aggregator needs besides the pools themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Bucket-aligned window.
    pub tick_range: TickRange,
    pub bucket_size: i32,
    pub current_tick: i32,
    /// Exact Q64.96 price of the first pool, when known. Places the token
    /// split inside the current bucket at the live price rather than at the
    /// current tick's lower edge.
    #[serde(default, with = "num::opt_u128_str")]
    pub sqrt_price_x96: Option<u128>,
    pub base_decimals: u8,
    pub quote_decimals: u8,
    pub base_price_usd_e12: Option<u128>,
    pub quote_price_usd_e12: Option<u128>,
}

impl AggregationConfig {
    /// Derive window and bucket width for `pools`.
    ///
    /// The current tick comes from the first pool (all fee tiers of one pair
    /// trade at the same price); bucket width honours the coarsest spacing.
    pub fn for_pools(
        pools: &[PoolDepthRow],
        depth: &DepthConfig,
        base: &TokenMeta,
        quote: &TokenMeta,
    ) -> Self {
        if pools.is_empty() {
            warn!("no pools in snapshot, centering an empty grid on tick 0");
        }
        let current_tick = pools.first().map(|p| p.current_tick).unwrap_or(0);
        let coarsest_spacing = pools.iter().map(|p| p.tick_spacing).max().unwrap_or(1);

        let window = tick_window(current_tick, depth.half_width_ticks);
        let size = bucket_size(window, depth.target_bucket_count, coarsest_spacing);

        AggregationConfig {
            tick_range: align_range(window, size),
            bucket_size: size,
            current_tick,
            sqrt_price_x96: pools.first().and_then(|p| p.sqrt_price_x96),
            base_decimals: base.decimals,
            quote_decimals: quote.decimals,
            base_price_usd_e12: base.price_usd_e12,
            quote_price_usd_e12: quote.price_usd_e12,
        }
    }
}
