use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::pool::PoolDepthRow;
use super::token::TokenMeta;

/// Input document: one market (token pair) with a snapshot per fee tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DepthSnapshot {
    /// Token whose price is quoted (token0).
    pub base: TokenMeta,
    /// Token the price is quoted in (token1).
    pub quote: TokenMeta,
    pub pools: Vec<PoolDepthRow>,
}

impl DepthSnapshot {
    /// Pair label such as `ICP/USDC`.
    pub fn pair(&self) -> String {
        format!("{}/{}", self.base.symbol, self.quote.symbol)
    }
}
