pub mod amounts;
pub mod tick_math;

pub use amounts::{amounts, amounts_at, try_amounts, try_amounts_at, usd, TokenAmounts, PRICE_DECIMALS};
pub use tick_math::{
    clamp_tick, price_to_tick, sqrt_price_x96_to_sqrt_price, sqrt_price_x96_to_tick_f64, tick_to_price, tick_to_sqrt_price,
    TickMathError, MAX_TICK, MIN_TICK,
};
