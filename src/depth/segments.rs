use tracing::debug;

use crate::model::{InitializedTick, LiquiditySegment, PoolDepthRow};

/// Sort ticks ascending, merging duplicates by summing their deltas.
fn sorted_ticks(ticks: &[InitializedTick]) -> Vec<InitializedTick> {
    let mut sorted = ticks.to_vec();
    sorted.sort_by_key(|t| t.tick);
    let mut merged: Vec<InitializedTick> = Vec::with_capacity(sorted.len());
    for t in sorted {
        match merged.last_mut() {
            Some(last) if last.tick == t.tick => {
                last.liquidity_net = last.liquidity_net.saturating_add(t.liquidity_net);
            }
            _ => merged.push(t),
        }
    }
    merged
}

fn push_positive(out: &mut Vec<LiquiditySegment>, tick_lower: i32, tick_upper: i32, liquidity: i128) {
    if liquidity > 0 {
        out.push(LiquiditySegment {
            tick_lower,
            tick_upper,
            liquidity: liquidity as u128,
        });
    }
}

/// Reconstruct the constant-liquidity segments between adjacent initialized
/// ticks of one pool, ascending by tick.
///
/// The segment holding `current_tick` takes the pool's live `liquidity`;
/// segments below are recovered by walking down and un-applying each
/// crossed tick's `liquidity_net`, segments above by walking up and
/// applying it. Segments with non-positive liquidity are dropped.
pub fn build_segments(pool: &PoolDepthRow) -> Vec<LiquiditySegment> {
    let ticks = sorted_ticks(&pool.initialized_ticks);
    let n = ticks.len();
    if n < 2 {
        return Vec::new();
    }

    let live = i128::try_from(pool.liquidity).unwrap_or(i128::MAX);
    let anchor = ticks.partition_point(|t| t.tick <= pool.current_tick);

    let mut below = Vec::new();
    let mut liquidity = live;
    for i in (1..anchor).rev() {
        liquidity = liquidity.saturating_sub(ticks[i].liquidity_net);
        push_positive(&mut below, ticks[i - 1].tick, ticks[i].tick, liquidity);
    }
    below.reverse();

    let mut segments = below;
    if anchor > 0 && anchor < n {
        push_positive(&mut segments, ticks[anchor - 1].tick, ticks[anchor].tick, live);
    }

    let mut liquidity = live;
    for i in anchor..n.saturating_sub(1) {
        liquidity = liquidity.saturating_add(ticks[i].liquidity_net);
        push_positive(&mut segments, ticks[i].tick, ticks[i + 1].tick, liquidity);
    }

    debug!(
        fee_pips = pool.fee_pips,
        ticks = n,
        segments = segments.len(),
        "built liquidity segments"
    );
    segments
}
