use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::num;

/// A tick where at least one position boundary sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InitializedTick {
    pub tick: i32,
    /// Signed liquidity delta applied when the price crosses this tick upward.
    #[serde(with = "num::i128_str")]
    #[schemars(with = "String")]
    pub liquidity_net: i128,
}

/// Snapshot of one fee-tier pool, as delivered by the market-state layer.
///
/// `initialized_ticks` is sparse and may arrive in any order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PoolDepthRow {
    pub current_tick: i32,
    /// Liquidity active at `current_tick`.
    #[serde(with = "num::u128_str")]
    #[schemars(with = "String")]
    pub liquidity: u128,
    /// Fee in hundredths of a basis point (3000 = 0.30%).
    pub fee_pips: u32,
    pub tick_spacing: u32,
    #[serde(default)]
    pub initialized_ticks: Vec<InitializedTick>,
    /// Q64.96 square-root price. Only used to place the live price inside
    /// the current tick's bar.
    #[serde(
        default,
        with = "num::opt_u128_str",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub sqrt_price_x96: Option<u128>,
}

impl PoolDepthRow {
    pub fn new(current_tick: i32, liquidity: u128, fee_pips: u32, tick_spacing: u32) -> Self {
        PoolDepthRow {
            current_tick,
            liquidity,
            fee_pips,
            tick_spacing,
            initialized_ticks: Vec::new(),
            sqrt_price_x96: None,
        }
    }

    pub fn with_tick(mut self, tick: i32, liquidity_net: i128) -> Self {
        self.initialized_ticks.push(InitializedTick {
            tick,
            liquidity_net,
        });
        self
    }

    /// Fee tier as a percentage (3000 pips → 0.3).
    pub fn fee_percent(&self) -> f64 {
        self.fee_pips as f64 / 10_000.0
    }
}
