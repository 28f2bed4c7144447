use thiserror::Error;

// ── Uniswap V3 style tick math (floating point) ──────────────────────

/// Lowest tick representable by the AMM.
pub const MIN_TICK: i32 = -887_272;
/// Highest tick representable by the AMM.
pub const MAX_TICK: i32 = 887_272;

/// Price ratio between two adjacent ticks.
const TICK_BASE: f64 = 1.0001;

/// 2^96, the scale of a Q64.96 square-root price.
const Q96: f64 = 79_228_162_514_264_337_593_543_950_336.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TickMathError {
    #[error("tick {tick} outside [{MIN_TICK}, {MAX_TICK}]")]
    TickOutOfBounds { tick: i32 },

    #[error("invalid tick range [{lower}, {upper})")]
    InvalidRange { lower: i32, upper: i32 },

    #[error("price {price} cannot be converted to a tick")]
    InvalidPrice { price: f64 },
}

fn check_tick(tick: i32) -> Result<(), TickMathError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(TickMathError::TickOutOfBounds { tick });
    }
    Ok(())
}

/// Clamp a tick into the global tick bounds.
pub fn clamp_tick(tick: i32) -> i32 {
    tick.clamp(MIN_TICK, MAX_TICK)
}

/// Convert a tick to its square-root price in raw (token-unit) terms.
///
/// Formula: `sqrt_price = 1.0001^(tick / 2)`
pub fn tick_to_sqrt_price(tick: i32) -> Result<f64, TickMathError> {
    check_tick(tick)?;
    Ok(TICK_BASE.powf(tick as f64 / 2.0))
}

/// Price of one whole base token expressed in whole quote tokens.
pub fn tick_to_price(tick: i32, base_decimals: u8, quote_decimals: u8) -> f64 {
    let raw = TICK_BASE.powf(clamp_tick(tick) as f64);
    raw * 10f64.powi(base_decimals as i32 - quote_decimals as i32)
}

/// Inverse of [`tick_to_price`], rounded down to the tick at or below `price`.
pub fn price_to_tick(price: f64, base_decimals: u8, quote_decimals: u8) -> Result<i32, TickMathError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(TickMathError::InvalidPrice { price });
    }
    let raw = price / 10f64.powi(base_decimals as i32 - quote_decimals as i32);
    let tick = (raw.ln() / TICK_BASE.ln()).floor();
    if tick < MIN_TICK as f64 || tick > MAX_TICK as f64 {
        return Err(TickMathError::InvalidPrice { price });
    }
    Ok(tick as i32)
}

/// Raw square-root price of a Q64.96 value. `None` for zero.
pub fn sqrt_price_x96_to_sqrt_price(sqrt_price_x96: u128) -> Option<f64> {
    (sqrt_price_x96 > 0).then(|| sqrt_price_x96 as f64 / Q96)
}

/// Fractional tick of a Q64.96 square-root price.
///
/// Returns `None` for a zero price.
pub fn sqrt_price_x96_to_tick_f64(sqrt_price_x96: u128) -> Option<f64> {
    let sqrt_price = sqrt_price_x96_to_sqrt_price(sqrt_price_x96)?;
    let tick = 2.0 * sqrt_price.ln() / TICK_BASE.ln();
    tick.is_finite().then_some(tick)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_zero_is_unit_price() {
        assert_eq!(tick_to_sqrt_price(0).unwrap(), 1.0);
        assert!((tick_to_price(0, 18, 18) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_bounds_tick_errors() {
        assert_eq!(
            tick_to_sqrt_price(MAX_TICK + 1),
            Err(TickMathError::TickOutOfBounds { tick: MAX_TICK + 1 })
        );
        assert!(tick_to_sqrt_price(MIN_TICK).is_ok());
    }

    #[test]
    fn test_decimal_adjusted_price() {
        // 1 base (18 dp) at tick 0 is worth 10^12 quote (6 dp) units per whole token.
        let p = tick_to_price(0, 18, 6);
        assert!((p - 1e12).abs() / 1e12 < 1e-12);
    }

    #[test]
    fn test_price_to_tick_roundtrip() {
        for tick in [-20_000, -601, 0, 1, 59, 46_054] {
            let price = tick_to_price(tick, 8, 6);
            // Nudge up slightly so floor() lands on `tick` despite float error.
            let back = price_to_tick(price * (1.0 + 1e-9), 8, 6).unwrap();
            assert_eq!(back, tick);
        }
        assert!(price_to_tick(0.0, 6, 6).is_err());
        assert!(price_to_tick(f64::NAN, 6, 6).is_err());
    }

    #[test]
    fn test_sqrt_price_x96_to_tick() {
        // sqrtPriceX96 = 2^96 is price 1.0, tick 0.
        let tick = sqrt_price_x96_to_tick_f64(1u128 << 96).unwrap();
        assert!(tick.abs() < 1e-9);
        assert_eq!(sqrt_price_x96_to_tick_f64(0), None);
    }
}
