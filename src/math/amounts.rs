use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tick_math::{tick_to_sqrt_price, TickMathError};

/// Decimal places of fixed-point USD price feeds.
pub const PRICE_DECIMALS: u32 = 12;

/// Token amounts locked in a tick range, in native integer units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenAmounts {
    pub base: f64,
    pub quote: f64,
}

impl TokenAmounts {
    pub const ZERO: TokenAmounts = TokenAmounts { base: 0.0, quote: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.base <= 0.0 && self.quote <= 0.0
    }
}

/// Token amounts held by `liquidity` over `[tick_lower, tick_upper)` while
/// the pool trades at `active_tick`.
///
/// - Active tick below the range: only base token.
/// - Active tick at or above the upper bound: only quote token.
/// - Inside: base above the active price, quote below it.
///
/// The in-range split is taken at the active tick's own sqrt price; use
/// [`try_amounts_at`] when the pool's exact price is known.
pub fn try_amounts(
    tick_lower: i32,
    tick_upper: i32,
    active_tick: i32,
    liquidity: u128,
) -> Result<TokenAmounts, TickMathError> {
    try_amounts_at(tick_lower, tick_upper, active_tick, None, liquidity)
}

/// [`try_amounts`] with the in-range split taken at `sqrt_price` (raw, not
/// Q64.96) instead of the active tick's price. The side of the range is
/// still decided by `active_tick`; the price is clamped into the range.
pub fn try_amounts_at(
    tick_lower: i32,
    tick_upper: i32,
    active_tick: i32,
    sqrt_price: Option<f64>,
    liquidity: u128,
) -> Result<TokenAmounts, TickMathError> {
    if tick_lower >= tick_upper {
        return Err(TickMathError::InvalidRange {
            lower: tick_lower,
            upper: tick_upper,
        });
    }
    let sp_lo = tick_to_sqrt_price(tick_lower)?;
    let sp_hi = tick_to_sqrt_price(tick_upper)?;
    let l = liquidity as f64;

    let amounts = if active_tick < tick_lower {
        TokenAmounts {
            base: l * (sp_hi - sp_lo) / (sp_hi * sp_lo),
            quote: 0.0,
        }
    } else if active_tick >= tick_upper {
        TokenAmounts {
            base: 0.0,
            quote: l * (sp_hi - sp_lo),
        }
    } else {
        let sp_cur = match sqrt_price {
            Some(p) if p.is_finite() && p > 0.0 => p.clamp(sp_lo, sp_hi),
            _ => tick_to_sqrt_price(active_tick)?,
        };
        TokenAmounts {
            base: l * (sp_hi - sp_cur) / (sp_cur * sp_hi),
            quote: l * (sp_cur - sp_lo),
        }
    };

    Ok(TokenAmounts {
        base: amounts.base.max(0.0),
        quote: amounts.quote.max(0.0),
    })
}

/// Infallible wrapper over [`try_amounts`]: zero liquidity or any math
/// failure yields zero amounts.
pub fn amounts(tick_lower: i32, tick_upper: i32, active_tick: i32, liquidity: u128) -> TokenAmounts {
    amounts_at(tick_lower, tick_upper, active_tick, None, liquidity)
}

/// Infallible wrapper over [`try_amounts_at`].
pub fn amounts_at(
    tick_lower: i32,
    tick_upper: i32,
    active_tick: i32,
    sqrt_price: Option<f64>,
    liquidity: u128,
) -> TokenAmounts {
    if liquidity == 0 {
        return TokenAmounts::ZERO;
    }
    match try_amounts_at(tick_lower, tick_upper, active_tick, sqrt_price, liquidity) {
        Ok(a) if a.base.is_finite() && a.quote.is_finite() => a,
        Ok(a) => {
            debug!(tick_lower, tick_upper, ?a, "non-finite token amounts, using zero");
            TokenAmounts::ZERO
        }
        Err(e) => {
            debug!(tick_lower, tick_upper, active_tick, "amount math failed: {e}");
            TokenAmounts::ZERO
        }
    }
}

/// USD value of `amount` native units of a token with `decimals` decimals,
/// priced by a 12-decimal fixed-point feed.
pub fn usd(amount: f64, decimals: u8, price_e12: Option<u128>) -> f64 {
    let Some(price) = price_e12 else {
        return 0.0;
    };
    if amount.is_nan() || amount <= 0.0 {
        return 0.0;
    }
    let whole = amount / 10f64.powi(decimals as i32);
    let price = price as f64 / 10f64.powi(PRICE_DECIMALS as i32);
    whole * price
}
