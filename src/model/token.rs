use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::num;

/// Token metadata needed to value depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TokenMeta {
    pub symbol: String,
    pub decimals: u8,
    /// USD per whole token, fixed point with 12 decimals. `None` when the
    /// price feed has no quote for this token.
    #[serde(default, with = "num::opt_u128_str")]
    #[schemars(with = "Option<String>")]
    pub price_usd_e12: Option<u128>,
}

impl TokenMeta {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        TokenMeta {
            symbol: symbol.into(),
            decimals,
            price_usd_e12: None,
        }
    }

    pub fn with_price_e12(mut self, price: u128) -> Self {
        self.price_usd_e12 = Some(price);
        self
    }
}
