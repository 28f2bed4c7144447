use std::collections::HashMap;

use crate::math::{MAX_TICK, MIN_TICK};
use crate::model::PoolDepthRow;

use super::ValidationError;

/// No initialized tick other than 0 can sit on a multiple of a wider spacing.
const MAX_TICK_SPACING: u32 = MAX_TICK as u32;

fn in_bounds(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Per-pool structural checks plus agreement on the current tick.
pub fn check_pools(pools: &[PoolDepthRow]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(first) = pools.first() else {
        errors.push(ValidationError::NoPools);
        return errors;
    };

    for (index, pool) in pools.iter().enumerate() {
        if pool.tick_spacing == 0 {
            errors.push(ValidationError::ZeroTickSpacing {
                index,
                fee_pips: pool.fee_pips,
            });
        } else if pool.tick_spacing > MAX_TICK_SPACING {
            errors.push(ValidationError::TickSpacingTooLarge {
                index,
                fee_pips: pool.fee_pips,
                spacing: pool.tick_spacing,
            });
        }
        if !in_bounds(pool.current_tick) {
            errors.push(ValidationError::CurrentTickOutOfBounds {
                index,
                tick: pool.current_tick,
            });
        }
        if pool.current_tick != first.current_tick {
            errors.push(ValidationError::CurrentTickMismatch {
                index,
                tick: pool.current_tick,
                expected: first.current_tick,
            });
        }

        for t in &pool.initialized_ticks {
            if !in_bounds(t.tick) {
                errors.push(ValidationError::TickOutOfBounds { index, tick: t.tick });
            } else if (1..=MAX_TICK_SPACING).contains(&pool.tick_spacing)
                && t.tick % pool.tick_spacing as i32 != 0
            {
                errors.push(ValidationError::TickNotAligned {
                    index,
                    tick: t.tick,
                    spacing: pool.tick_spacing,
                });
            }
        }
    }

    errors
}

/// Contributions are labelled by fee tier, so two pools on one tier are
/// indistinguishable in the breakdown.
pub fn check_fee_tiers(pools: &[PoolDepthRow]) -> Vec<ValidationError> {
    let mut seen: HashMap<u32, usize> = HashMap::new();
    let mut errors = Vec::new();

    for (index, pool) in pools.iter().enumerate() {
        if let Some(&first) = seen.get(&pool.fee_pips) {
            errors.push(ValidationError::DuplicateFeeTier {
                first,
                second: index,
                fee_pips: pool.fee_pips,
            });
        } else {
            seen.insert(pool.fee_pips, index);
        }
    }

    errors
}
